// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use core::fmt;

use serde_json::Value;

use super::version::OasVersion;
use super::OasError;

/// Selects a response schema inside an OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSelector {
    /// A reusable response under `components/responses`. OAS 3.0 only;
    /// OAS 2.0 has no named responses.
    ByName(String),
    /// The response declared inline for a route, method and status code.
    ByRoute {
        path: String,
        method: String,
        status: u16,
    },
}

impl ResponseSelector {
    pub fn by_name<S: Into<String>>(name: S) -> Self {
        ResponseSelector::ByName(name.into())
    }

    pub fn by_route<P, M>(path: P, method: M, status: u16) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        ResponseSelector::ByRoute { path: path.into(), method: method.into(), status }
    }
}

/// An ordered sequence of keys routing from the document root (`#`) to a
/// schema node, e.g. `["#", "components", "schemas", "Pet"]`.
///
/// Each segment is one atomic key. A segment such as `/pets/{petId}` stays
/// a single key: the type defines no splitting operation, [resolve_in]
/// looks keys up whole, and [as_uri_fragment] escapes embedded `/` so the
/// engine's pointer resolution cannot break a key apart either.
///
/// [resolve_in]: Fragment::resolve_in
/// [as_uri_fragment]: Fragment::as_uri_fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(Vec<String>);

impl Fragment {
    /// Creates a [Fragment] from raw segments. The leading `#` root
    /// segment may be included or left out.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Fragment(segments.into_iter().map(Into::into).collect())
    }

    /// Routes to the named schema definition for `version`.
    ///
    /// ```
    /// # use oas_tools::validator::{Fragment, OasVersion};
    /// let fragment = Fragment::schema_for(OasVersion::Oas2, "Pet");
    /// assert_eq!(fragment.segments(), ["#", "definitions", "Pet"]);
    /// ```
    pub fn schema_for(version: OasVersion, name: &str) -> Fragment {
        match version {
            OasVersion::Oas2 => Fragment::new(["#", "definitions", name]),
            OasVersion::Oas3 => Fragment::new(["#", "components", "schemas", name]),
        }
    }

    /// Routes to the response schema selected by `selector`.
    ///
    /// The two versions keep responses in incompatible places: OAS 2.0
    /// only ever has inline per-route response schemas, while OAS 3.0 adds
    /// reusable named responses and nests inline ones under a media type.
    pub fn response_schema_for(
        version: OasVersion,
        selector: &ResponseSelector,
    ) -> Result<Fragment, OasError> {
        match (version, selector) {
            (OasVersion::Oas2, ResponseSelector::ByName(_)) => Err(OasError::InvalidArgument(
                "OAS 2.0 has no named responses, select a path, method and status code",
            )),
            (OasVersion::Oas2, ResponseSelector::ByRoute { path, method, status }) => {
                let status = status.to_string();
                Ok(Fragment::new([
                    "#",
                    "paths",
                    path.as_str(),
                    method.as_str(),
                    "responses",
                    status.as_str(),
                    "schema",
                ]))
            }
            (OasVersion::Oas3, ResponseSelector::ByName(name)) => Ok(Fragment::new([
                "#",
                "components",
                "responses",
                name.as_str(),
                "content",
                "application/json",
                "schema",
            ])),
            (OasVersion::Oas3, ResponseSelector::ByRoute { path, method, status }) => {
                let status = status.to_string();
                Ok(Fragment::new([
                    "#",
                    "paths",
                    path.as_str(),
                    method.as_str(),
                    "responses",
                    status.as_str(),
                    "content",
                    "application/json",
                    "schema",
                ]))
            }
        }
    }

    /// The literal key sequence, leading `#` included.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Walks `root` using each segment as one whole key. Numeric segments
    /// double as indices when the current node is an array. Returns [None]
    /// when any key is missing.
    pub fn resolve_in<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        let mut node = root;
        for segment in self.keys() {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(array) => array.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Encodes the route as a `#`-rooted URI fragment: `~` and `/` inside
    /// each segment become `~0` and `~1` per RFC 6901, and characters the
    /// URI grammar does not allow in a fragment are percent-encoded.
    /// `["#", "paths", "/pets/{petId}"]` becomes
    /// `#/paths/~1pets~1%7BpetId%7D`; pointer evaluation decodes both
    /// layers and looks the original segment up as one key.
    pub fn as_uri_fragment(&self) -> String {
        let mut pointer = String::from("#");
        for segment in self.keys() {
            pointer.push('/');
            pointer.push_str(&encode_segment(segment));
        }
        pointer
    }

    fn keys(&self) -> &[String] {
        match self.0.first().map(String::as_str) {
            Some("#") => &self.0[1..],
            _ => &self.0[..],
        }
    }
}

fn encode_segment(segment: &str) -> String {
    let escaped = segment.replace('~', "~0").replace('/', "~1");
    let mut encoded = String::with_capacity(escaped.len());
    for byte in escaped.bytes() {
        match byte {
            // pchar from RFC 3986: unreserved / sub-delims / ":" / "@".
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'.'
            | b'_'
            | b'~'
            | b'!'
            | b'$'
            | b'&'
            | b'\''
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b';'
            | b'='
            | b':'
            | b'@' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_uri_fragment())
    }
}

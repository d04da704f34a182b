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

//! Integration with the `jsonschema` engine: compiling a validator scoped
//! to a [Fragment] of an OpenAPI document and collecting its errors into
//! [Violation]s.

use core::fmt;

use serde_json::Value;

use super::fragment::Fragment;
use super::OasError;

/// A single validation failure reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the offending node in the instance.
    pub instance_path: String,
    /// JSON pointer into the schema that rejected it.
    pub schema_path: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// A displayable list of [Violation]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Violations(violations)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Compiles the engine validator for one document.
///
/// Without a fragment the document itself becomes the validation root.
/// With one, the compiled root is a copy of the document carrying a single
/// `$ref` to [Fragment::as_uri_fragment]: validation applies only the
/// target sub-schema, while `$ref`s inside that sub-schema keep resolving
/// against the whole document. Draft 4 is the dialect of OAS schema
/// objects, so the engine is pinned to it.
pub(crate) fn compile(
    document: &Value,
    fragment: Option<&Fragment>,
) -> Result<jsonschema::Validator, OasError> {
    let root = match fragment {
        None => document.clone(),
        Some(fragment) => {
            if fragment.resolve_in(document).is_none() {
                return Err(OasError::UnresolvableFragment(fragment.to_string()));
            }
            let mut root = document.clone();
            let Some(map) = root.as_object_mut() else {
                return Err(OasError::Compile("document root is not an object".to_owned()));
            };
            map.insert("$ref".to_owned(), Value::String(fragment.as_uri_fragment()));
            root
        }
    };

    let mut options = jsonschema::options();
    options.with_draft(jsonschema::Draft::Draft4);
    options.build(&root).map_err(|e| OasError::Compile(e.to_string()))
}

/// Runs `validator` over `data` and collects every reported failure.
pub(crate) fn collect(validator: &jsonschema::Validator, data: &Value) -> Vec<Violation> {
    validator
        .iter_errors(data)
        .map(|error| Violation {
            instance_path: error.instance_path.to_string(),
            schema_path: error.schema_path.to_string(),
            message: error.to_string(),
        })
        .collect()
}

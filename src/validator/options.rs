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

use super::fragment::{Fragment, ResponseSelector};
use super::version::OasVersion;
use super::OasError;

/// Options steering one validation call.
///
/// With neither a fragment nor a selector set, the data is validated
/// against the whole document compiled as a schema. An OpenAPI document
/// asserts nothing at its root, so that check accepts nearly everything;
/// callers almost always want [for_schema], [for_response] or an explicit
/// fragment instead.
///
/// [for_schema]: ValidateOptions::for_schema
/// [for_response]: ValidateOptions::for_response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidateOptions {
    /// Document version; [OasVersion::DEFAULT_VERSION] when unset.
    pub version: Option<OasVersion>,
    /// Low-level validation root. Wins over any selector.
    pub fragment: Option<Fragment>,
    /// Validate against the named schema definition.
    pub with_schema: Option<String>,
    /// Validate against a response schema.
    pub with_response: Option<ResponseSelector>,
}

impl ValidateOptions {
    /// Options validating against the schema definition called `name`.
    pub fn for_schema<S: Into<String>>(name: S) -> Self {
        ValidateOptions { with_schema: Some(name.into()), ..Default::default() }
    }

    /// Options validating against the response schema picked by `selector`.
    pub fn for_response(selector: ResponseSelector) -> Self {
        ValidateOptions { with_response: Some(selector), ..Default::default() }
    }

    /// Options validating against an explicit fragment.
    pub fn for_fragment(fragment: Fragment) -> Self {
        ValidateOptions { fragment: Some(fragment), ..Default::default() }
    }

    pub fn with_version(mut self, version: OasVersion) -> Self {
        self.version = Some(version);
        self
    }
}

/// Returns a copy of `options` with the `fragment` field filled in: an
/// explicit fragment wins, then a schema-name selector, then a response
/// selector; with none of the three the copy is returned unchanged.
///
/// Pure transform: the input is never touched, and applying the function
/// to its own output returns the same options again.
pub fn resolve_fragment(
    version: OasVersion,
    options: &ValidateOptions,
) -> Result<ValidateOptions, OasError> {
    let mut resolved = options.clone();
    if resolved.fragment.is_some() {
        return Ok(resolved);
    }

    if let Some(name) = &resolved.with_schema {
        resolved.fragment = Some(Fragment::schema_for(version, name));
    } else if let Some(selector) = &resolved.with_response {
        resolved.fragment = Some(Fragment::response_schema_for(version, selector)?);
    }

    Ok(resolved)
}

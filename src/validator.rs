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

//! Validator for OpenAPI documents and the data they describe.
//!
//! An OpenAPI document is validated against the bundled specification
//! schema for its version before any payload validation runs. Payloads are
//! validated against a sub-schema of the document selected through
//! [ValidateOptions]; the JSON Schema evaluation itself is delegated to the
//! `jsonschema` crate.

use serde_json::Value;
use thiserror::Error;

mod engine;
mod fragment;
mod options;
mod specification;
mod version;

pub use engine::{Violation, Violations};
pub use fragment::{Fragment, ResponseSelector};
pub use options::{resolve_fragment, ValidateOptions};
pub use version::OasVersion;

#[derive(Debug, Error)]
pub enum OasError {
    /// A version token outside the supported set.
    #[error("Unknown version <{0}>.")]
    UnknownVersion(String),
    /// A selector shape the chosen version cannot express.
    #[error("Invalid selector: {0}.")]
    InvalidArgument(&'static str),
    /// The document failed validation against its specification schema.
    #[error("Invalid schema:\n{0}")]
    InvalidSchema(Violations),
    /// The fragment does not route to a node of the document.
    #[error("Failed to resolve fragment <{0}>.")]
    UnresolvableFragment(String),
    /// The engine rejected the schema at the validation root.
    #[error("Failed to compile schema: {0}")]
    Compile(String),
}

/// Validates an OpenAPI document and the payloads it describes.
///
/// Construction checks the document against the bundled specification
/// schema for its version and compiles the fragment-scoped validator once;
/// the instance can then validate any number of payloads.
///
/// ```
/// # use serde_json::json;
/// # use oas_tools::validator::{ValidateOptions, Validator};
/// let doc = json!({
///     "openapi": "3.0.0",
///     "info": {"title": "t", "version": "1"},
///     "paths": {},
///     "components": {"schemas": {"Id": {"type": "integer"}}}
/// });
/// let validator = Validator::new(&doc, ValidateOptions::for_schema("Id")).unwrap();
/// assert!(validator.is_valid(&json!(42)));
/// assert!(!validator.is_valid(&json!("42")));
/// ```
pub struct Validator {
    original_schema: Value,
    version: OasVersion,
    options: ValidateOptions,
    scoped: jsonschema::Validator,
}

impl Validator {
    /// Creates a [Validator] over `document`.
    ///
    /// The version comes from `options` and falls back to
    /// [OasVersion::DEFAULT_VERSION]. Fails with [OasError::InvalidSchema]
    /// when the document does not conform to that version's specification
    /// schema, before any fragment resolution or engine work happens.
    pub fn new(document: &Value, options: ValidateOptions) -> Result<Self, OasError> {
        let original_schema = document.clone();
        let version = options.version.unwrap_or(OasVersion::DEFAULT_VERSION);

        let meta = specification::schema_violations(&original_schema, version);
        if !meta.is_empty() {
            return Err(OasError::InvalidSchema(Violations::from(meta)));
        }

        let options = resolve_fragment(version, &options)?;
        let scoped = engine::compile(&original_schema, options.fragment.as_ref())?;
        log::debug!(
            "compiled OAS {version} validator scoped to {}",
            options.fragment.as_ref().map_or_else(|| "the whole document".to_owned(), Fragment::to_string)
        );

        Ok(Validator { original_schema, version, options, scoped })
    }

    /// The document as handed in by the caller, untouched by the engine.
    pub fn document(&self) -> &Value {
        &self.original_schema
    }

    pub fn version(&self) -> OasVersion {
        self.version
    }

    /// The options with the `fragment` field resolved.
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// Validates `data` against the resolved sub-schema. An empty list
    /// means the data conforms.
    pub fn validate(&self, data: &Value) -> Vec<Violation> {
        engine::collect(&self.scoped, data)
    }

    pub fn is_valid(&self, data: &Value) -> bool {
        self.scoped.is_valid(data)
    }
}

/// Validates `data` against the sub-schema of `document` selected by
/// `options`, in one shot. The returned list is empty iff the data
/// conforms; document-level failures surface as errors instead.
pub fn fully_validate(
    document: &Value,
    data: &Value,
    options: ValidateOptions,
) -> Result<Vec<Violation>, OasError> {
    Ok(Validator::new(document, options)?.validate(data))
}

/// True iff `document` conforms to the bundled specification schema for
/// `version`. Nonconformance is an ordinary `false`, not an error.
pub fn valid_schema(document: &Value, version: OasVersion) -> bool {
    specification::valid_schema(document, version)
}

/// The full violation list from checking `document` against the bundled
/// specification schema for `version`.
pub fn schema_violations(document: &Value, version: OasVersion) -> Vec<Violation> {
    specification::schema_violations(document, version)
}

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

//! Bundled specification schemas for the supported OpenAPI versions.
//!
//! The documents are embedded at build time and compiled into process-wide
//! validators on first use. They are self-contained: no external `$ref`s,
//! so meta-validation never touches the network.

use std::sync::OnceLock;

use serde_json::Value;

use super::engine::{self, Violation};
use super::version::OasVersion;

const OAS2_SPECIFICATION: &str = include_str!("../../data/specifications/oas2.json");
const OAS3_SPECIFICATION: &str = include_str!("../../data/specifications/oas3.json");

fn meta_validator(version: OasVersion) -> &'static jsonschema::Validator {
    static OAS2: OnceLock<jsonschema::Validator> = OnceLock::new();
    static OAS3: OnceLock<jsonschema::Validator> = OnceLock::new();
    match version {
        OasVersion::Oas2 => OAS2.get_or_init(|| compile_specification(OAS2_SPECIFICATION)),
        OasVersion::Oas3 => OAS3.get_or_init(|| compile_specification(OAS3_SPECIFICATION)),
    }
}

fn compile_specification(raw: &str) -> jsonschema::Validator {
    let value: Value =
        serde_json::from_str(raw).expect("bundled specification schema is valid JSON");
    jsonschema::options()
        .build(&value)
        .expect("bundled specification schema compiles")
}

/// True iff `document` conforms to the specification schema for `version`.
pub(crate) fn valid_schema(document: &Value, version: OasVersion) -> bool {
    meta_validator(version).is_valid(document)
}

/// Every failure from checking `document` against the specification schema
/// for `version`.
pub(crate) fn schema_violations(document: &Value, version: OasVersion) -> Vec<Violation> {
    engine::collect(meta_validator(version), document)
}

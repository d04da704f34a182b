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

#![cfg(test)]

use std::fs::File;
use std::io::BufReader;

use oas_tools::validator::{fully_validate, OasVersion, ResponseSelector, ValidateOptions};
use serde::Deserialize;

/// When called with parameter `oas2`, creates a test method called
/// `test_petstore_oas2` that runs the case table `tests/data/suite/oas2.json`
/// against the document `tests/data/schema/petstore.oas2.json`.
macro_rules! petstore_suite {
    ($name:ident, $version:expr) => {
        paste::paste! {
            #[test]
            fn [<test_petstore_ $name>]() {
                let suite_path = format!("tests/data/suite/{}.json", stringify!($name));
                let schema_path = format!("tests/data/schema/petstore.{}.json", stringify!($name));
                for (desc, violations, valid) in suite::run(&suite_path, &schema_path, $version) {
                    println!("<{}>", desc);
                    assert_eq!(violations == 0, valid, "Failed for <{}>", desc);
                }
            }
        }
    };
}

pub(crate) use petstore_suite;

#[derive(Deserialize)]
struct Case {
    description: String,
    data: String,
    valid: bool,
    #[serde(default)]
    with_schema: Option<String>,
    #[serde(default)]
    response_name: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    status: Option<u16>,
}

impl Case {
    fn options(&self, version: OasVersion) -> ValidateOptions {
        let options = if let Some(name) = &self.with_schema {
            ValidateOptions::for_schema(name.as_str())
        } else if let Some(name) = &self.response_name {
            ValidateOptions::for_response(ResponseSelector::by_name(name.as_str()))
        } else {
            ValidateOptions::for_response(ResponseSelector::by_route(
                self.path.clone().expect("case needs a selector"),
                self.method.clone().expect("case needs a method"),
                self.status.expect("case needs a status code"),
            ))
        };
        options.with_version(version)
    }
}

/// Runs every case of the table at `suite_path` against the document at
/// `schema_path`. Returns the description, violation count and expected
/// validity per case.
pub(crate) fn run(
    suite_path: &str,
    schema_path: &str,
    version: OasVersion,
) -> Vec<(String, usize, bool)> {
    let document = load(schema_path);
    let cases: Vec<Case> =
        serde_json::from_reader(BufReader::new(File::open(suite_path).unwrap())).unwrap();

    cases
        .into_iter()
        .map(|case| {
            let data = load(&format!("tests/data/example/{}", case.data));
            let violations = fully_validate(&document, &data, case.options(version)).unwrap();
            (case.description, violations.len(), case.valid)
        })
        .collect()
}

fn load(path: &str) -> serde_json::Value {
    serde_json::from_reader(BufReader::new(File::open(path).unwrap())).unwrap()
}

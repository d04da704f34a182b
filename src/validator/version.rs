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
use std::str::FromStr;

use super::OasError;

/// An OpenAPI document version supported by this crate.
///
/// The enum is closed: once a value is an [OasVersion], every consumer can
/// match it exhaustively. Unknown version tokens are rejected at the parse
/// boundary ([OasVersion::from_str]) and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OasVersion {
    /// OpenAPI 2.0, also known as Swagger.
    Oas2,
    /// OpenAPI 3.0.
    Oas3,
}

impl OasVersion {
    /// The version assumed when a caller does not pick one.
    pub const DEFAULT_VERSION: OasVersion = OasVersion::Oas3;
    /// Every supported version.
    pub const VERSIONS: [OasVersion; 2] = [OasVersion::Oas2, OasVersion::Oas3];

    pub fn as_str(self) -> &'static str {
        match self {
            OasVersion::Oas2 => "2.0",
            OasVersion::Oas3 => "3.0",
        }
    }

    /// Whether `token` names a supported version.
    pub fn is_supported(token: &str) -> bool {
        OasVersion::VERSIONS.iter().any(|v| v.as_str() == token)
    }
}

impl FromStr for OasVersion {
    type Err = OasError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "2.0" => Ok(OasVersion::Oas2),
            "3.0" => Ok(OasVersion::Oas3),
            _ => Err(OasError::UnknownVersion(token.to_owned())),
        }
    }
}

impl fmt::Display for OasVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("2.0".parse::<OasVersion>().unwrap(), OasVersion::Oas2);
        assert_eq!("3.0".parse::<OasVersion>().unwrap(), OasVersion::Oas3);
        assert!(matches!("0.0".parse::<OasVersion>(), Err(OasError::UnknownVersion(_))));
        assert!(matches!("3.1".parse::<OasVersion>(), Err(OasError::UnknownVersion(_))));
    }

    #[test]
    fn test_versions_contain_the_default() {
        assert!(OasVersion::VERSIONS.contains(&OasVersion::DEFAULT_VERSION));
    }

    #[test]
    fn test_is_supported() {
        assert!(OasVersion::is_supported("2.0"));
        assert!(OasVersion::is_supported("3.0"));
        assert!(!OasVersion::is_supported("0.0"));
        assert!(!OasVersion::is_supported(""));
    }

    #[test]
    fn test_display_round_trips() {
        for version in OasVersion::VERSIONS {
            assert_eq!(version.to_string().parse::<OasVersion>().unwrap(), version);
        }
    }
}

//! Build mode selection.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable the CLI reads the mode from.
pub const MODE_ENV: &str = "NODE_ENV";

/// Development or production build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Resolve the mode from an optional raw value (flag or environment).
    ///
    /// An absent value means production. A present value must name one of the
    /// two modes exactly; anything else is rejected.
    pub fn from_optional(value: Option<&str>) -> Result<Self, Error> {
        value.map_or(Ok(Self::Production), str::parse::<Self>)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(Error::UnknownMode {
                value: other.to_string(),
            }),
        }
    }
}

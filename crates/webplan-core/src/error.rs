use std::path::PathBuf;
use thiserror::Error;

/// Result alias for webplan operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised at the edges of plan resolution.
///
/// Resolution itself cannot fail; these cover parsing the mode and loading the
/// project manifest.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown build mode `{value}` (expected `development` or `production`)")]
    UnknownMode { value: String },

    #[error("Failed to read manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest at {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest at {path} has no `name` field")]
    ManifestName { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable machine-readable code, used in JSON output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownMode { .. } => "UNKNOWN_MODE",
            Self::ManifestRead { .. } => "MANIFEST_READ",
            Self::ManifestParse { .. } => "MANIFEST_PARSE",
            Self::ManifestName { .. } => "MANIFEST_NAME",
            Self::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_screaming_snake_case() {
        let errors = [
            Error::UnknownMode {
                value: "staging".into(),
            },
            Error::ManifestName {
                path: PathBuf::from("package.json"),
            },
            Error::Io(std::io::Error::other("boom")),
        ];
        for err in &errors {
            assert!(err.code().chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_unknown_mode_message_names_value() {
        let err = Error::UnknownMode {
            value: "staging".into(),
        };
        assert!(err.to_string().contains("`staging`"));
    }
}

//! Error type shared by the CLI glue.
//!
//! Rendering itself never fails; everything here is raised before a format
//! mask is ever interpreted.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GurlError {
    /// Missing positional arguments or arguments clap refused.
    #[error("usage: {0}")]
    Usage(String),

    /// Format argument that does not start with `+`.
    #[error("format must start with +")]
    MissingPlusPrefix(String),

    /// The URL parser rejected the input.
    #[error("error parsing URL: {source}")]
    UrlParse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Config file exists but could not be read or decoded.
    #[error("invalid config at {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl GurlError {
    /// True for errors that should be followed by the usage text.
    pub fn wants_usage(&self) -> bool {
        matches!(self, GurlError::Usage(_) | GurlError::MissingPlusPrefix(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_parse_message_surfaces_parser_text() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = GurlError::UrlParse {
            input: "not a url".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "error parsing URL: relative URL without a base"
        );
    }

    #[test]
    fn missing_prefix_message() {
        let err = GurlError::MissingPlusPrefix("%H".to_string());
        assert_eq!(err.to_string(), "format must start with +");
        assert!(err.wants_usage());
    }

    #[test]
    fn parse_errors_do_not_want_usage() {
        let err = GurlError::UrlParse {
            input: "http://[::1".to_string(),
            source: url::ParseError::InvalidIpv6Address,
        };
        assert!(!err.wants_usage());
    }
}

// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// A stack position string that is not `top-left`, `top-right` or `top-center`.
    InvalidPosition(String),
    /// A theme mode string that is not `light`, `dark` or `system`.
    InvalidTheme(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidPosition(value) => write!(
                f,
                "Invalid position '{}' (expected top-left, top-right or top-center)",
                value
            ),
            Error::InvalidTheme(value) => write!(
                f,
                "Invalid theme '{}' (expected light, dark or system)",
                value
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_position_lists_accepted_values() {
        let message = Error::InvalidPosition("bottom".into()).to_string();
        assert!(message.contains("'bottom'"));
        assert!(message.contains("top-center"));
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        assert!(matches!(Error::from(parse_err), Error::Config(_)));
    }
}

use std::fmt;

use serde::Serialize;
use yaml_rust2::ScanError;

/// A single decode failure: the dotted path from the document root to the
/// failing node, plus what went wrong there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodeError {
    pub path: String,
    pub kind: DecodeErrorKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeErrorKind {
    MissingField,
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    UnknownEnumValue {
        enumeration: &'static str,
        value: String,
    },
    NumericFormat {
        expected: &'static str,
        raw: String,
    },
    UnknownField {
        key: String,
    },
}

impl DecodeError {
    pub(crate) fn missing_field(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: DecodeErrorKind::MissingField,
        }
    }

    pub(crate) fn type_mismatch(
        path: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self {
            path: path.into(),
            kind: DecodeErrorKind::TypeMismatch { expected, actual },
        }
    }

    pub(crate) fn unknown_enum(
        path: impl Into<String>,
        enumeration: &'static str,
        value: &str,
    ) -> Self {
        Self {
            path: path.into(),
            kind: DecodeErrorKind::UnknownEnumValue {
                enumeration,
                value: value.to_string(),
            },
        }
    }

    pub(crate) fn numeric_format(
        path: impl Into<String>,
        expected: &'static str,
        raw: &str,
    ) -> Self {
        Self {
            path: path.into(),
            kind: DecodeErrorKind::NumericFormat {
                expected,
                raw: raw.to_string(),
            },
        }
    }

    pub(crate) fn unknown_field(path: impl Into<String>, key: &str) -> Self {
        Self {
            path: path.into(),
            kind: DecodeErrorKind::UnknownField {
                key: key.to_string(),
            },
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DecodeErrorKind::MissingField => {
                write!(f, "missing required field {}", self.path)
            }
            DecodeErrorKind::TypeMismatch { expected, actual } => {
                write!(f, "expected {expected} at {}, got {actual}", self.path)
            }
            DecodeErrorKind::UnknownEnumValue { enumeration, value } => {
                write!(f, "Unknown {enumeration} [{value}] at {}", self.path)
            }
            DecodeErrorKind::NumericFormat { expected, raw } => {
                write!(f, "cannot parse {raw:?} as {expected} at {}", self.path)
            }
            DecodeErrorKind::UnknownField { key } => {
                write!(f, "unknown field {key} in {}", self.path)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Failure to produce a [`Config`](crate::Config) from a file on disk. The
/// `Decode` variant carries every structured failure from one decode pass.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Scan(ScanError),
    EmptyDocument,
    MultipleDocuments,
    Decode(Vec<DecodeError>),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "cannot read config file: {err}"),
            LoadError::Scan(err) => write!(f, "cannot parse YAML: {err}"),
            LoadError::EmptyDocument => write!(f, "YAML is empty"),
            LoadError::MultipleDocuments => {
                write!(f, "YAML contains multiple documents; expected one")
            }
            LoadError::Decode(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "{}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Scan(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ScanError> for LoadError {
    fn from(err: ScanError) -> Self {
        LoadError::Scan(err)
    }
}

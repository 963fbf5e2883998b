use std::path::Path;

pub use yaml_rust2;
use yaml_rust2::Yaml;

pub mod config;
mod errors;

pub use config::*;
pub use errors::{DecodeError, DecodeErrorKind, LoadError};

/// Decodes one YAML document into a fully-validated [`Config`].
///
/// All-or-nothing: either every section decodes and passes semantic
/// validation, or the complete list of failures comes back, each tagged with
/// the dotted path of the offending node. A partially-populated config is
/// never returned.
pub fn decode_document(doc: &Yaml) -> Result<Config, Vec<DecodeError>> {
    let config = config::decode_config(doc)?;
    config::validate_config(&config)?;
    Ok(config)
}

/// Reads a deployment descriptor from disk and decodes it.
pub fn load_config(path: &Path) -> Result<Config, LoadError> {
    let docs = config::load_yaml(path)?;
    if docs.is_empty() {
        return Err(LoadError::EmptyDocument);
    }
    if docs.len() > 1 {
        return Err(LoadError::MultipleDocuments);
    }
    decode_document(&docs[0]).map_err(LoadError::Decode)
}

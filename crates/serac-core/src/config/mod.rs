mod parse;
mod types;
mod validate;
mod vocab;
mod yaml_decode;

pub use types::*;
pub use vocab::{CollectorFormat, LoggingLevel, OutputCompression, TrackerMethod};

pub(crate) use parse::decode_config;
pub(crate) use validate::validate_config;
pub(crate) use yaml_decode::load_yaml;

#[path = "config/decode.rs"]
mod decode;
#[path = "config/validation.rs"]
mod validation;

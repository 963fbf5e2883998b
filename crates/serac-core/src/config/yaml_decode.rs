use std::path::Path;
use std::str::FromStr;

use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlLoader};

use crate::errors::{DecodeError, LoadError};

pub(crate) fn load_yaml(path: &Path) -> Result<Vec<Yaml>, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    let docs = YamlLoader::load_from_str(&contents)?;
    Ok(docs)
}

pub(crate) fn kind_name(value: &Yaml) -> &'static str {
    match value {
        Yaml::String(_) => "string",
        Yaml::Integer(_) => "integer",
        Yaml::Real(_) => "real",
        Yaml::Boolean(_) => "boolean",
        Yaml::Array(_) => "array",
        Yaml::Hash(_) => "map",
        Yaml::Null => "null",
        Yaml::Alias(_) => "alias",
        Yaml::BadValue => "bad value",
    }
}

pub(crate) fn yaml_hash<'a>(value: &'a Yaml, path: &str) -> Result<&'a Hash, DecodeError> {
    match value {
        Yaml::Hash(hash) => Ok(hash),
        other => Err(DecodeError::type_mismatch(path, "map", kind_name(other))),
    }
}

pub(crate) fn yaml_array<'a>(value: &'a Yaml, path: &str) -> Result<&'a Vec<Yaml>, DecodeError> {
    match value {
        Yaml::Array(values) => Ok(values),
        other => Err(DecodeError::type_mismatch(path, "array", kind_name(other))),
    }
}

pub(crate) fn yaml_string(value: &Yaml, path: &str) -> Result<String, DecodeError> {
    match value {
        Yaml::String(value) => Ok(value.clone()),
        other => Err(DecodeError::type_mismatch(path, "string", kind_name(other))),
    }
}

/// An integer node, or a scalar whose raw content parses as one. Raw content
/// that fails to parse is a numeric-format error; non-scalar shapes are a
/// type mismatch.
pub(crate) fn yaml_integer(value: &Yaml, path: &str) -> Result<i64, DecodeError> {
    match value {
        Yaml::Integer(raw) => Ok(*raw),
        Yaml::String(raw) | Yaml::Real(raw) => raw
            .parse::<i64>()
            .map_err(|_| DecodeError::numeric_format(path, "integer", raw)),
        other => Err(DecodeError::type_mismatch(path, "integer", kind_name(other))),
    }
}

pub(crate) fn yaml_decimal(value: &Yaml, path: &str) -> Result<f64, DecodeError> {
    match value {
        Yaml::Integer(raw) => Ok(*raw as f64),
        Yaml::Real(raw) | Yaml::String(raw) => raw
            .parse::<f64>()
            .map_err(|_| DecodeError::numeric_format(path, "decimal", raw)),
        other => Err(DecodeError::type_mismatch(path, "decimal", kind_name(other))),
    }
}

pub(crate) fn yaml_bool(value: &Yaml, path: &str) -> Result<bool, DecodeError> {
    match value {
        Yaml::Boolean(value) => Ok(*value),
        other => Err(DecodeError::type_mismatch(path, "boolean", kind_name(other))),
    }
}

/// Reads the node as a string, then applies the vocabulary's `from_str`.
/// Shared by every closed vocabulary; an unmatched string reports the
/// vocabulary name and the offending value at the node's path.
pub(crate) fn yaml_enum<T>(
    value: &Yaml,
    path: &str,
    enumeration: &'static str,
) -> Result<T, DecodeError>
where
    T: FromStr<Err = String>,
{
    let raw = yaml_string(value, path)?;
    raw.parse()
        .map_err(|_: String| DecodeError::unknown_enum(path, enumeration, &raw))
}

/// Document keys are snake_case. Model-side field names may arrive in
/// camelCase or PascalCase; the fixed conversion rule is: insert `_` before
/// an uppercase letter that follows a lowercase letter or digit, then
/// ASCII-lowercase everything. Idempotent on snake_case input.
pub(crate) fn snake_case_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(ch);
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

pub(crate) fn hash_get<'a>(hash: &'a Hash, key: &str) -> Option<&'a Yaml> {
    hash.get(&Yaml::String(snake_case_key(key)))
}

pub(crate) fn validate_known_keys(
    hash: &Hash,
    ctx: &str,
    known: &[&str],
) -> Result<(), DecodeError> {
    for key in hash.keys() {
        let Yaml::String(name) = key else {
            return Err(DecodeError::type_mismatch(ctx, "string key", kind_name(key)));
        };
        if !known.contains(&name.as_str()) {
            return Err(DecodeError::unknown_field(ctx, name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DecodeErrorKind;

    #[test]
    fn snake_case_key_converts_camel_case() {
        assert_eq!(snake_case_key("accessKeyId"), "access_key_id");
        assert_eq!(snake_case_key("continueOnUnexpectedError"), "continue_on_unexpected_error");
    }

    #[test]
    fn snake_case_key_converts_pascal_case() {
        assert_eq!(snake_case_key("BootstrapFailureTries"), "bootstrap_failure_tries");
    }

    #[test]
    fn snake_case_key_is_idempotent_on_snake_case() {
        assert_eq!(snake_case_key("ec2_subnet_id"), "ec2_subnet_id");
        assert_eq!(snake_case_key("log"), "log");
    }

    #[test]
    fn yaml_integer_rejects_non_numeric_string() {
        let err = yaml_integer(&Yaml::String("three".to_string()), "aws.emr.bootstrap_failure_tries")
            .expect_err("expected numeric format error");
        assert_eq!(err.path, "aws.emr.bootstrap_failure_tries");
        assert_eq!(
            err.kind,
            DecodeErrorKind::NumericFormat {
                expected: "integer",
                raw: "three".to_string(),
            }
        );
    }

    #[test]
    fn yaml_integer_accepts_numeric_string() {
        let value = Yaml::String("3".to_string());
        assert_eq!(yaml_integer(&value, "tries").expect("parse"), 3);
    }

    #[test]
    fn yaml_integer_rejects_array() {
        let err = yaml_integer(&Yaml::Array(Vec::new()), "tries").expect_err("expected mismatch");
        assert_eq!(
            err.kind,
            DecodeErrorKind::TypeMismatch {
                expected: "integer",
                actual: "array",
            }
        );
    }

    #[test]
    fn yaml_decimal_accepts_integer_node() {
        let bid = yaml_decimal(&Yaml::Integer(1), "bid").expect("parse");
        assert_eq!(bid, 1.0);
    }

    #[test]
    fn validate_known_keys_rejects_stray_key() {
        let mut hash = Hash::new();
        hash.insert(Yaml::String("format".to_string()), Yaml::Null);
        hash.insert(Yaml::String("fromat".to_string()), Yaml::Null);
        let err = validate_known_keys(&hash, "collectors", &["format"])
            .expect_err("expected unknown field");
        assert_eq!(err.path, "collectors");
        assert_eq!(
            err.kind,
            DecodeErrorKind::UnknownField {
                key: "fromat".to_string(),
            }
        );
    }
}

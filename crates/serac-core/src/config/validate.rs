use crate::config::{Config, StageBuckets};
use crate::errors::DecodeError;

/// Semantic checks that need a structurally valid tree: credentials and every
/// bucket path must be non-empty. Violations accumulate so one pass reports
/// them all.
pub(crate) fn validate_config(config: &Config) -> Result<(), Vec<DecodeError>> {
    let mut errors = Vec::new();

    require_non_empty(&config.aws.access_key_id, "aws.access_key_id", &mut errors);
    require_non_empty(
        &config.aws.secret_access_key,
        "aws.secret_access_key",
        &mut errors,
    );

    let buckets = &config.aws.s3.buckets;
    require_non_empty(&buckets.assets, "aws.s3.buckets.assets", &mut errors);
    if let Some(jsonpath_assets) = &buckets.jsonpath_assets {
        require_non_empty(jsonpath_assets, "aws.s3.buckets.jsonpath_assets", &mut errors);
    }
    require_non_empty(&buckets.log, "aws.s3.buckets.log", &mut errors);
    validate_stage(&buckets.enriched, "aws.s3.buckets.enriched", &mut errors);
    validate_stage(&buckets.shredded, "aws.s3.buckets.shredded", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_stage(stage: &StageBuckets, ctx: &str, errors: &mut Vec<DecodeError>) {
    require_non_empty(&stage.good, &format!("{ctx}.good"), errors);
    require_non_empty(&stage.bad, &format!("{ctx}.bad"), errors);
    require_non_empty(&stage.errors, &format!("{ctx}.errors"), errors);
    require_non_empty(&stage.archive, &format!("{ctx}.archive"), errors);
}

fn require_non_empty(value: &str, path: &str, errors: &mut Vec<DecodeError>) {
    if value.trim().is_empty() {
        errors.push(DecodeError::type_mismatch(
            path,
            "non-empty string",
            "empty string",
        ));
    }
}

use std::collections::HashMap;
use std::str::FromStr;

use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

use crate::config::yaml_decode::{
    hash_get, kind_name, validate_known_keys, yaml_array, yaml_bool, yaml_decimal, yaml_enum,
    yaml_hash, yaml_integer, yaml_string,
};
use crate::config::{
    AwsConfig, BucketLayout, CollectorFormat, CollectorsConfig, Config, DownloadConfig, EmrConfig,
    EnrichConfig, EnrichVersions, JobflowConfig, LoggingConfig, LoggingLevel, MonitoringConfig,
    OutputCompression, S3Config, SnowplowConfig, SoftwareConfig, StageBuckets, StorageConfig,
    TrackerMethod,
};
use crate::errors::DecodeError;

/// Decodes the document tree into a [`Config`], all-or-nothing. Decoding
/// inside one section is first-failure; the five top-level sections (and the
/// credentials/s3/emr subtrees of `aws`) are attempted independently so one
/// pass reports one precise error per failed subtree.
pub(crate) fn decode_config(doc: &Yaml) -> Result<Config, Vec<DecodeError>> {
    let root = yaml_hash(doc, "root").map_err(|err| vec![err])?;
    validate_known_keys(
        root,
        "root",
        &["aws", "collectors", "enrich", "storage", "monitoring"],
    )
    .map_err(|err| vec![err])?;

    let mut errors = Vec::new();
    let aws = match decode_aws(root) {
        Ok(aws) => Some(aws),
        Err(errs) => {
            errors.extend(errs);
            None
        }
    };
    let collectors = collect(decode_collectors(root), &mut errors);
    let enrich = collect(decode_enrich(root), &mut errors);
    let storage = collect(decode_storage(root), &mut errors);
    let monitoring = collect(decode_monitoring(root), &mut errors);

    match (aws, collectors, enrich, storage, monitoring) {
        (Some(aws), Some(collectors), Some(enrich), Some(storage), Some(monitoring))
            if errors.is_empty() =>
        {
            Ok(Config {
                aws,
                collectors,
                enrich,
                storage,
                monitoring,
            })
        }
        _ => Err(errors),
    }
}

fn decode_aws(root: &Hash) -> Result<AwsConfig, Vec<DecodeError>> {
    let value = hash_get(root, "aws").ok_or_else(|| vec![DecodeError::missing_field("aws")])?;
    let hash = yaml_hash(value, "aws").map_err(|err| vec![err])?;
    validate_known_keys(hash, "aws", &["access_key_id", "secret_access_key", "s3", "emr"])
        .map_err(|err| vec![err])?;

    let mut errors = Vec::new();
    let access_key_id = collect(get_string(hash, "access_key_id", "aws"), &mut errors);
    let secret_access_key = collect(get_string(hash, "secret_access_key", "aws"), &mut errors);
    let s3 = collect(decode_s3(hash), &mut errors);
    let emr = collect(decode_emr(hash), &mut errors);

    match (access_key_id, secret_access_key, s3, emr) {
        (Some(access_key_id), Some(secret_access_key), Some(s3), Some(emr))
            if errors.is_empty() =>
        {
            Ok(AwsConfig {
                access_key_id,
                secret_access_key,
                s3,
                emr,
            })
        }
        _ => Err(errors),
    }
}

fn decode_s3(aws: &Hash) -> Result<S3Config, DecodeError> {
    let hash = yaml_hash(get_value(aws, "s3", "aws")?, "aws.s3")?;
    validate_known_keys(hash, "aws.s3", &["region", "buckets"])?;
    Ok(S3Config {
        region: get_string(hash, "region", "aws.s3")?,
        buckets: decode_buckets(get_value(hash, "buckets", "aws.s3")?)?,
    })
}

fn decode_buckets(value: &Yaml) -> Result<BucketLayout, DecodeError> {
    let hash = yaml_hash(value, "aws.s3.buckets")?;
    validate_known_keys(
        hash,
        "aws.s3.buckets",
        &["assets", "jsonpath_assets", "log", "enriched", "shredded"],
    )?;
    Ok(BucketLayout {
        assets: get_string(hash, "assets", "aws.s3.buckets")?,
        jsonpath_assets: opt_string(hash, "jsonpath_assets", "aws.s3.buckets")?,
        log: get_string(hash, "log", "aws.s3.buckets")?,
        enriched: decode_stage_buckets(
            get_value(hash, "enriched", "aws.s3.buckets")?,
            "aws.s3.buckets.enriched",
        )?,
        shredded: decode_stage_buckets(
            get_value(hash, "shredded", "aws.s3.buckets")?,
            "aws.s3.buckets.shredded",
        )?,
    })
}

fn decode_stage_buckets(value: &Yaml, ctx: &str) -> Result<StageBuckets, DecodeError> {
    let hash = yaml_hash(value, ctx)?;
    validate_known_keys(hash, ctx, &["good", "bad", "errors", "archive"])?;
    Ok(StageBuckets {
        good: get_string(hash, "good", ctx)?,
        bad: get_string(hash, "bad", ctx)?,
        errors: get_string(hash, "errors", ctx)?,
        archive: get_string(hash, "archive", ctx)?,
    })
}

fn decode_emr(aws: &Hash) -> Result<EmrConfig, DecodeError> {
    let hash = yaml_hash(get_value(aws, "emr", "aws")?, "aws.emr")?;
    validate_known_keys(
        hash,
        "aws.emr",
        &[
            "ami_version",
            "region",
            "jobflow_role",
            "service_role",
            "placement",
            "ec2_subnet_id",
            "ec2_key_name",
            "bootstrap",
            "software",
            "jobflow",
            "bootstrap_failure_tries",
            "additional_info",
        ],
    )?;
    let software = match hash_get(hash, "software") {
        Some(value) => decode_software(value)?,
        None => SoftwareConfig::default(),
    };
    Ok(EmrConfig {
        ami_version: get_string(hash, "ami_version", "aws.emr")?,
        region: get_string(hash, "region", "aws.emr")?,
        jobflow_role: get_string(hash, "jobflow_role", "aws.emr")?,
        service_role: get_string(hash, "service_role", "aws.emr")?,
        placement: opt_string(hash, "placement", "aws.emr")?,
        ec2_subnet_id: opt_string(hash, "ec2_subnet_id", "aws.emr")?,
        ec2_key_name: get_string(hash, "ec2_key_name", "aws.emr")?,
        bootstrap: get_vec_string(hash, "bootstrap", "aws.emr")?,
        software,
        jobflow: decode_jobflow(get_value(hash, "jobflow", "aws.emr")?)?,
        bootstrap_failure_tries: get_integer(hash, "bootstrap_failure_tries", "aws.emr")?,
        additional_info: opt_string(hash, "additional_info", "aws.emr")?,
    })
}

fn decode_software(value: &Yaml) -> Result<SoftwareConfig, DecodeError> {
    let hash = yaml_hash(value, "aws.emr.software")?;
    validate_known_keys(hash, "aws.emr.software", &["hbase", "lingual"])?;
    Ok(SoftwareConfig {
        hbase: opt_string(hash, "hbase", "aws.emr.software")?,
        lingual: opt_string(hash, "lingual", "aws.emr.software")?,
    })
}

fn decode_jobflow(value: &Yaml) -> Result<JobflowConfig, DecodeError> {
    let ctx = "aws.emr.jobflow";
    let hash = yaml_hash(value, ctx)?;
    validate_known_keys(
        hash,
        ctx,
        &[
            "master_instance_type",
            "core_instance_count",
            "core_instance_type",
            "task_instance_count",
            "task_instance_type",
            "task_instance_bid",
        ],
    )?;
    Ok(JobflowConfig {
        master_instance_type: get_string(hash, "master_instance_type", ctx)?,
        core_instance_count: get_integer(hash, "core_instance_count", ctx)?,
        core_instance_type: get_string(hash, "core_instance_type", ctx)?,
        task_instance_count: get_integer(hash, "task_instance_count", ctx)?,
        task_instance_type: get_string(hash, "task_instance_type", ctx)?,
        task_instance_bid: get_decimal(hash, "task_instance_bid", ctx)?,
    })
}

fn decode_collectors(root: &Hash) -> Result<Option<CollectorsConfig>, DecodeError> {
    let Some(value) = hash_get(root, "collectors") else {
        return Ok(None);
    };
    // The format key is pulled out of the raw mapping before any structural
    // decode, so a missing or malformed format reports its own path.
    let hash = yaml_hash(value, "collectors")?;
    validate_known_keys(hash, "collectors", &["format"])?;
    let format_value = hash_get(hash, "format")
        .ok_or_else(|| DecodeError::missing_field("collectors.format"))?;
    let format: CollectorFormat =
        yaml_enum(format_value, "collectors.format", "CollectorFormat")?;
    Ok(Some(CollectorsConfig { format }))
}

fn decode_enrich(root: &Hash) -> Result<Option<EnrichConfig>, DecodeError> {
    let Some(value) = hash_get(root, "enrich") else {
        return Ok(None);
    };
    let hash = yaml_hash(value, "enrich")?;
    validate_known_keys(
        hash,
        "enrich",
        &["job_name", "versions", "continue_on_unexpected_error", "output_compression"],
    )?;
    Ok(Some(EnrichConfig {
        job_name: get_string(hash, "job_name", "enrich")?,
        versions: decode_enrich_versions(get_value(hash, "versions", "enrich")?)?,
        continue_on_unexpected_error: get_bool(hash, "continue_on_unexpected_error", "enrich")?,
        output_compression: get_enum::<OutputCompression>(
            hash,
            "output_compression",
            "enrich",
            "OutputCompression",
        )?,
    }))
}

fn decode_enrich_versions(value: &Yaml) -> Result<EnrichVersions, DecodeError> {
    let ctx = "enrich.versions";
    let hash = yaml_hash(value, ctx)?;
    validate_known_keys(hash, ctx, &["hadoop_enrich", "hadoop_shred", "hadoop_elasticsearch"])?;
    Ok(EnrichVersions {
        hadoop_enrich: get_string(hash, "hadoop_enrich", ctx)?,
        hadoop_shred: get_string(hash, "hadoop_shred", ctx)?,
        hadoop_elasticsearch: get_string(hash, "hadoop_elasticsearch", ctx)?,
    })
}

fn decode_storage(root: &Hash) -> Result<Option<StorageConfig>, DecodeError> {
    let Some(value) = hash_get(root, "storage") else {
        return Ok(None);
    };
    let hash = yaml_hash(value, "storage")?;
    validate_known_keys(hash, "storage", &["download"])?;
    let download = yaml_hash(get_value(hash, "download", "storage")?, "storage.download")?;
    validate_known_keys(download, "storage.download", &["folder"])?;
    Ok(Some(StorageConfig {
        download: DownloadConfig {
            folder: opt_string(download, "folder", "storage.download")?,
        },
    }))
}

fn decode_monitoring(root: &Hash) -> Result<Option<MonitoringConfig>, DecodeError> {
    let Some(value) = hash_get(root, "monitoring") else {
        return Ok(None);
    };
    let hash = yaml_hash(value, "monitoring")?;
    validate_known_keys(hash, "monitoring", &["tags", "logging", "snowplow"])?;
    Ok(Some(MonitoringConfig {
        tags: decode_tags(get_value(hash, "tags", "monitoring")?)?,
        logging: decode_logging(get_value(hash, "logging", "monitoring")?)?,
        snowplow: decode_snowplow(get_value(hash, "snowplow", "monitoring")?)?,
    }))
}

fn decode_tags(value: &Yaml) -> Result<HashMap<String, String>, DecodeError> {
    let hash = yaml_hash(value, "monitoring.tags")?;
    let mut tags = HashMap::with_capacity(hash.len());
    for (key, item) in hash {
        let Yaml::String(name) = key else {
            return Err(DecodeError::type_mismatch(
                "monitoring.tags",
                "string key",
                kind_name(key),
            ));
        };
        let path = format!("monitoring.tags.{name}");
        tags.insert(name.clone(), yaml_string(item, &path)?);
    }
    Ok(tags)
}

fn decode_logging(value: &Yaml) -> Result<LoggingConfig, DecodeError> {
    let hash = yaml_hash(value, "monitoring.logging")?;
    validate_known_keys(hash, "monitoring.logging", &["level"])?;
    Ok(LoggingConfig {
        level: get_enum::<LoggingLevel>(hash, "level", "monitoring.logging", "LoggingLevel")?,
    })
}

fn decode_snowplow(value: &Yaml) -> Result<SnowplowConfig, DecodeError> {
    let ctx = "monitoring.snowplow";
    let hash = yaml_hash(value, ctx)?;
    validate_known_keys(hash, ctx, &["method", "app_id", "collector"])?;
    Ok(SnowplowConfig {
        method: get_enum::<TrackerMethod>(hash, "method", ctx, "TrackerMethod")?,
        app_id: get_string(hash, "app_id", ctx)?,
        collector: get_string(hash, "collector", ctx)?,
    })
}

fn collect<T>(result: Result<T, DecodeError>, errors: &mut Vec<DecodeError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn get_value<'a>(hash: &'a Hash, key: &str, ctx: &str) -> Result<&'a Yaml, DecodeError> {
    hash_get(hash, key).ok_or_else(|| DecodeError::missing_field(format!("{ctx}.{key}")))
}

fn get_string(hash: &Hash, key: &str, ctx: &str) -> Result<String, DecodeError> {
    let value = get_value(hash, key, ctx)?;
    yaml_string(value, &format!("{ctx}.{key}"))
}

fn get_integer(hash: &Hash, key: &str, ctx: &str) -> Result<i64, DecodeError> {
    let value = get_value(hash, key, ctx)?;
    yaml_integer(value, &format!("{ctx}.{key}"))
}

fn get_decimal(hash: &Hash, key: &str, ctx: &str) -> Result<f64, DecodeError> {
    let value = get_value(hash, key, ctx)?;
    yaml_decimal(value, &format!("{ctx}.{key}"))
}

fn get_bool(hash: &Hash, key: &str, ctx: &str) -> Result<bool, DecodeError> {
    let value = get_value(hash, key, ctx)?;
    yaml_bool(value, &format!("{ctx}.{key}"))
}

fn get_enum<T>(
    hash: &Hash,
    key: &str,
    ctx: &str,
    enumeration: &'static str,
) -> Result<T, DecodeError>
where
    T: FromStr<Err = String>,
{
    let value = get_value(hash, key, ctx)?;
    yaml_enum(value, &format!("{ctx}.{key}"), enumeration)
}

fn get_vec_string(hash: &Hash, key: &str, ctx: &str) -> Result<Vec<String>, DecodeError> {
    let value = get_value(hash, key, ctx)?;
    let path = format!("{ctx}.{key}");
    let list = yaml_array(value, &path)?;
    let mut values = Vec::with_capacity(list.len());
    for (index, item) in list.iter().enumerate() {
        values.push(yaml_string(item, &format!("{path}[{index}]"))?);
    }
    Ok(values)
}

fn opt_string(hash: &Hash, key: &str, ctx: &str) -> Result<Option<String>, DecodeError> {
    match hash_get(hash, key) {
        None | Some(Yaml::Null) | Some(Yaml::BadValue) => Ok(None),
        Some(value) => Ok(Some(yaml_string(value, &format!("{ctx}.{key}"))?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DecodeErrorKind;
    use yaml_rust2::YamlLoader;

    fn load(contents: &str) -> Yaml {
        let mut docs = YamlLoader::load_from_str(contents).expect("scan yaml");
        docs.remove(0)
    }

    #[test]
    fn collectors_format_missing_reports_its_own_path() {
        let doc = load("collectors: {}\n");
        let root = doc.as_hash().expect("hash");
        let err = decode_collectors(root).expect_err("expected missing format");
        assert_eq!(err.path, "collectors.format");
        assert_eq!(err.kind, DecodeErrorKind::MissingField);
    }

    #[test]
    fn collectors_format_non_string_is_a_type_mismatch() {
        let doc = load("collectors:\n  format: [cloudfront]\n");
        let root = doc.as_hash().expect("hash");
        let err = decode_collectors(root).expect_err("expected mismatch");
        assert_eq!(err.path, "collectors.format");
        assert_eq!(
            err.kind,
            DecodeErrorKind::TypeMismatch {
                expected: "string",
                actual: "array",
            }
        );
    }

    #[test]
    fn absent_collectors_section_decodes_to_none() {
        let doc = load("enrich: {}\n");
        let root = doc.as_hash().expect("hash");
        assert!(decode_collectors(root).expect("decode").is_none());
    }

    #[test]
    fn tags_reject_non_string_value() {
        let doc = load("monitoring:\n  tags:\n    env: [production]\n");
        let root = doc.as_hash().expect("hash");
        let monitoring = hash_get(root, "monitoring").expect("section");
        let hash = monitoring.as_hash().expect("hash");
        let tags_value = hash_get(hash, "tags").expect("tags");
        let err = decode_tags(tags_value).expect_err("expected mismatch");
        assert_eq!(err.path, "monitoring.tags.env");
    }
}

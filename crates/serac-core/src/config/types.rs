use std::collections::HashMap;

use serde::Serialize;

use crate::config::vocab::{CollectorFormat, LoggingLevel, OutputCompression, TrackerMethod};

/// The fully-decoded deployment descriptor. Built once per run; never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub aws: AwsConfig,
    pub collectors: Option<CollectorsConfig>,
    pub enrich: Option<EnrichConfig>,
    pub storage: Option<StorageConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AwsConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub s3: S3Config,
    pub emr: EmrConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct S3Config {
    pub region: String,
    pub buckets: BucketLayout,
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketLayout {
    pub assets: String,
    pub jsonpath_assets: Option<String>,
    pub log: String,
    pub enriched: StageBuckets,
    pub shredded: StageBuckets,
}

/// One good/bad/errors/archive path quadruple per pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageBuckets {
    pub good: String,
    pub bad: String,
    pub errors: String,
    pub archive: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmrConfig {
    pub ami_version: String,
    pub region: String,
    pub jobflow_role: String,
    pub service_role: String,
    pub placement: Option<String>,
    pub ec2_subnet_id: Option<String>,
    pub ec2_key_name: String,
    pub bootstrap: Vec<String>,
    pub software: SoftwareConfig,
    pub jobflow: JobflowConfig,
    pub bootstrap_failure_tries: i64,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SoftwareConfig {
    pub hbase: Option<String>,
    pub lingual: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobflowConfig {
    pub master_instance_type: String,
    pub core_instance_count: i64,
    pub core_instance_type: String,
    pub task_instance_count: i64,
    pub task_instance_type: String,
    pub task_instance_bid: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectorsConfig {
    pub format: CollectorFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichConfig {
    pub job_name: String,
    pub versions: EnrichVersions,
    pub continue_on_unexpected_error: bool,
    pub output_compression: OutputCompression,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichVersions {
    pub hadoop_enrich: String,
    pub hadoop_shred: String,
    pub hadoop_elasticsearch: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageConfig {
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadConfig {
    pub folder: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonitoringConfig {
    pub tags: HashMap<String, String>,
    pub logging: LoggingConfig,
    pub snowplow: SnowplowConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggingConfig {
    pub level: LoggingLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnowplowConfig {
    pub method: TrackerMethod,
    pub app_id: String,
    /// host:port of the event collector.
    pub collector: String,
}

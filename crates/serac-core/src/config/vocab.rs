//! Closed vocabularies of the deployment descriptor. Each variant maps to
//! exactly one canonical wire string; decoding is an exact, case-sensitive
//! match against that string and nothing else.

use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Collector log format the pipeline ingests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorFormat {
    Cloudfront,
    ClojureTomcat,
    Thrift,
    CfAccessLog,
    UrbanAirshipConnector,
}

impl CollectorFormat {
    pub const ALL: [CollectorFormat; 5] = [
        CollectorFormat::Cloudfront,
        CollectorFormat::ClojureTomcat,
        CollectorFormat::Thrift,
        CollectorFormat::CfAccessLog,
        CollectorFormat::UrbanAirshipConnector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectorFormat::Cloudfront => "cloudfront",
            CollectorFormat::ClojureTomcat => "clj-tomcat",
            CollectorFormat::Thrift => "thrift",
            CollectorFormat::CfAccessLog => "tsv/com.amazon.aws.cloudfront/wd_access_log",
            CollectorFormat::UrbanAirshipConnector => "ndjson/urbanairship.connect/v1",
        }
    }
}

impl FromStr for CollectorFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| format!("Unknown CollectorFormat [{value}]"))
    }
}

impl Serialize for CollectorFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Compression applied to enriched output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCompression {
    None,
    Gzip,
}

impl OutputCompression {
    pub const ALL: [OutputCompression; 2] = [OutputCompression::None, OutputCompression::Gzip];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputCompression::None => "NONE",
            OutputCompression::Gzip => "GZIP",
        }
    }
}

impl FromStr for OutputCompression {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| format!("Unknown OutputCompression [{value}]"))
    }
}

impl Serialize for OutputCompression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Verbosity of the run log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingLevel {
    Debug,
    Info,
}

impl LoggingLevel {
    pub const ALL: [LoggingLevel; 2] = [LoggingLevel::Debug, LoggingLevel::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoggingLevel::Debug => "DEBUG",
            LoggingLevel::Info => "INFO",
        }
    }
}

impl FromStr for LoggingLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| format!("Unknown LoggingLevel [{value}]"))
    }
}

impl Serialize for LoggingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// HTTP method the monitoring tracker emits events with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerMethod {
    Get,
    Post,
}

impl TrackerMethod {
    pub const ALL: [TrackerMethod; 2] = [TrackerMethod::Get, TrackerMethod::Post];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerMethod::Get => "get",
            TrackerMethod::Post => "post",
        }
    }
}

impl FromStr for TrackerMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| format!("Unknown TrackerMethod [{value}]"))
    }
}

impl Serialize for TrackerMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_format_round_trips() {
        for variant in CollectorFormat::ALL {
            assert_eq!(variant.as_str().parse(), Ok(variant));
        }
    }

    #[test]
    fn output_compression_round_trips() {
        for variant in OutputCompression::ALL {
            assert_eq!(variant.as_str().parse(), Ok(variant));
        }
    }

    #[test]
    fn logging_level_round_trips() {
        for variant in LoggingLevel::ALL {
            assert_eq!(variant.as_str().parse(), Ok(variant));
        }
    }

    #[test]
    fn tracker_method_round_trips() {
        for variant in TrackerMethod::ALL {
            assert_eq!(variant.as_str().parse(), Ok(variant));
        }
    }

    #[test]
    fn unknown_collector_format_names_enum_and_value() {
        let err = "xml".parse::<CollectorFormat>().expect_err("expected failure");
        assert_eq!(err, "Unknown CollectorFormat [xml]");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!("CLOUDFRONT".parse::<CollectorFormat>().is_err());
        assert!("gzip".parse::<OutputCompression>().is_err());
        assert!("info".parse::<LoggingLevel>().is_err());
        assert!("Post".parse::<TrackerMethod>().is_err());
    }

    #[test]
    fn matching_does_not_trim() {
        assert!(" thrift".parse::<CollectorFormat>().is_err());
        assert!("thrift ".parse::<CollectorFormat>().is_err());
    }

    #[test]
    fn wire_strings_are_distinct() {
        let strings: Vec<&str> = CollectorFormat::ALL.iter().map(|v| v.as_str()).collect();
        for (index, value) in strings.iter().enumerate() {
            assert!(!strings[index + 1..].contains(value));
        }
    }
}

//! Provider input and output records.

use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentMap;

/// Values supplied by the caller that take precedence over derived ones.
///
/// An empty string means "not supplied". Overrides are used verbatim and
/// never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideArgs {
    pub branch: String,
    pub pr: String,
    pub sha: String,
    pub slug: String,
    pub tag: String,
    pub url: String,
    pub source: String,
    pub flags: String,
}

/// Everything a provider needs to resolve build metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploaderInputs {
    /// Caller-supplied overrides.
    pub args: OverrideArgs,
    /// Environment snapshot.
    pub envs: EnvironmentMap,
}

impl UploaderInputs {
    pub fn new(args: OverrideArgs, envs: EnvironmentMap) -> Self {
        Self { args, envs }
    }
}

/// Normalized build metadata produced by a provider.
///
/// Every field is always present; unknown values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceParams {
    pub branch: String,
    pub build: String,
    #[serde(rename = "buildURL")]
    pub build_url: String,
    pub commit: String,
    pub job: String,
    pub pr: String,
    pub service: String,
    pub slug: String,
}

impl ServiceParams {
    /// Field names and values in output order.
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("branch", self.branch.as_str()),
            ("build", self.build.as_str()),
            ("buildURL", self.build_url.as_str()),
            ("commit", self.commit.as_str()),
            ("job", self.job.as_str()),
            ("pr", self.pr.as_str()),
            ("service", self.service.as_str()),
            ("slug", self.slug.as_str()),
        ]
    }
}

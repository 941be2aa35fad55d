//! Local provider.
//!
//! The fallback used when no CI system is detected. Branch, commit and
//! slug come from caller overrides when supplied, otherwise from git in
//! the working copy. Everything a CI service would report (build number,
//! build URL, job) is left empty.

use crate::environment::EnvironmentMap;
use crate::error::Result;
use crate::vcs::{capture, parse_slug, GitRunner};

use super::types::{ServiceParams, UploaderInputs};
use super::Provider;

const BRANCH_ARGS: [&str; 3] = ["rev-parse", "--abbrev-ref", "HEAD"];
const COMMIT_ARGS: [&str; 2] = ["rev-parse", "HEAD"];
const REMOTE_URL_ARGS: [&str; 3] = ["config", "--get", "remote.origin.url"];

/// Whether the local provider applies.
///
/// Any `CI` variable, whatever its value, means a CI runtime is active and
/// the local provider must defer to it.
pub fn detect(envs: &EnvironmentMap) -> bool {
    !envs.contains_key("CI")
}

/// Resolve build metadata for an upload from a local checkout.
///
/// Overrides are used verbatim. Missing values are derived from git in
/// the order branch, commit, slug; the first failure aborts resolution
/// before any later command runs.
///
/// # Example
///
/// ```
/// use covmeta::environment::EnvironmentMap;
/// use covmeta::providers::{local, OverrideArgs, UploaderInputs};
/// use covmeta::vcs::StubGit;
///
/// let args = OverrideArgs {
///     branch: "main".into(),
///     sha: "testingsha".into(),
///     slug: "owner/repo".into(),
///     ..Default::default()
/// };
/// let inputs = UploaderInputs::new(args, EnvironmentMap::new());
///
/// let params = local::get_service_params(&inputs, &StubGit::new()).unwrap();
/// assert_eq!(params.commit, "testingsha");
/// assert_eq!(params.service, "");
/// ```
pub fn get_service_params<R: GitRunner + ?Sized>(
    inputs: &UploaderInputs,
    git: &R,
) -> Result<ServiceParams> {
    let args = &inputs.args;

    let branch = override_or(&args.branch, "branch", || capture(git, &BRANCH_ARGS))?;
    let commit = override_or(&args.sha, "sha", || capture(git, &COMMIT_ARGS))?;
    let slug = override_or(&args.slug, "slug", || {
        let url = capture(git, &REMOTE_URL_ARGS)?;
        Ok(parse_slug(&url)?.to_string())
    })?;

    Ok(ServiceParams {
        branch,
        build: String::new(),
        build_url: String::new(),
        commit,
        job: String::new(),
        pr: args.pr.clone(),
        service: String::new(),
        slug,
    })
}

fn override_or<F>(value: &str, name: &str, derive: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    if value.is_empty() {
        derive()
    } else {
        tracing::debug!("Using {} override: {}", name, value);
        Ok(value.to_string())
    }
}

/// The local fallback as a [`Provider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProvider;

impl Provider for LocalProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    fn detect(&self, envs: &EnvironmentMap) -> bool {
        detect(envs)
    }

    fn service_params(&self, inputs: &UploaderInputs, git: &dyn GitRunner) -> Result<ServiceParams> {
        get_service_params(inputs, git)
    }
}

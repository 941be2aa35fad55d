//! Upload metadata providers.
//!
//! A provider pairs a detector (does this environment belong to me?) with
//! a resolver (what branch, commit and slug is this build?). Providers are
//! probed in priority order and the first match resolves the metadata.
//!
//! # Architecture
//!
//! - [`local`] - Fallback provider for machines without a CI system
//! - [`types`] - Override inputs and the normalized output record

pub mod local;
pub mod types;

pub use local::LocalProvider;
pub use types::{OverrideArgs, ServiceParams, UploaderInputs};

use crate::environment::EnvironmentMap;
use crate::error::{CovmetaError, Result};
use crate::vcs::GitRunner;

/// A source of build metadata for one kind of environment.
pub trait Provider {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Whether this provider applies to the environment.
    ///
    /// Must be free of side effects; it is called speculatively while
    /// probing providers.
    fn detect(&self, envs: &EnvironmentMap) -> bool;

    /// Resolve build metadata.
    fn service_params(&self, inputs: &UploaderInputs, git: &dyn GitRunner)
        -> Result<ServiceParams>;
}

/// Providers in priority order.
///
/// The local provider always comes last since it is the fallback.
pub fn builtin_providers() -> Vec<Box<dyn Provider>> {
    vec![Box::new(LocalProvider)]
}

/// Return the first provider whose detector matches.
pub fn detect_provider<'a>(
    providers: &'a [Box<dyn Provider>],
    envs: &EnvironmentMap,
) -> Result<&'a dyn Provider> {
    for provider in providers {
        if provider.detect(envs) {
            tracing::info!("Detected provider: {}", provider.name());
            return Ok(provider.as_ref());
        }
        tracing::debug!("Provider {} not detected", provider.name());
    }
    Err(CovmetaError::NoProviderDetected)
}

/// Detect a provider and resolve build metadata with it.
pub fn resolve(
    providers: &[Box<dyn Provider>],
    inputs: &UploaderInputs,
    git: &dyn GitRunner,
) -> Result<ServiceParams> {
    let provider = detect_provider(providers, &inputs.envs)?;
    provider.service_params(inputs, git)
}

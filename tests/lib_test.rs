//! Library integration tests.

use covmeta::environment::EnvironmentMap;
use covmeta::providers::{self, local, OverrideArgs, ServiceParams, UploaderInputs};
use covmeta::vcs::{GitOutput, StubGit};
use covmeta::CovmetaError;

const BRANCH: [&str; 3] = ["rev-parse", "--abbrev-ref", "HEAD"];
const COMMIT: [&str; 2] = ["rev-parse", "HEAD"];
const REMOTE: [&str; 3] = ["config", "--get", "remote.origin.url"];

fn inputs(args: OverrideArgs) -> UploaderInputs {
    UploaderInputs::new(args, EnvironmentMap::new())
}

#[test]
fn error_types_are_public() {
    let err = CovmetaError::SlugParse {
        url: "notaurl".into(),
        reason: "unrecognized remote URL format".into(),
    };
    assert!(err.to_string().contains("notaurl"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> covmeta::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn detect_defers_to_any_ci_value() {
    for value in ["true", "false", "1", ""] {
        let envs = EnvironmentMap::new().with("CI", value);
        assert!(!local::detect(&envs), "CI={value:?} should disable local");
    }
    let envs = EnvironmentMap::new().with("HOME", "/home/dev");
    assert!(local::detect(&envs));
}

#[test]
fn overrides_produce_exact_record() {
    let args = OverrideArgs {
        branch: "main".into(),
        pr: "1".into(),
        sha: "testingsha".into(),
        slug: "owner/repo".into(),
        ..Default::default()
    };
    let git = StubGit::new();
    let params = local::get_service_params(&inputs(args), &git).unwrap();

    assert_eq!(
        params,
        ServiceParams {
            branch: "main".into(),
            commit: "testingsha".into(),
            pr: "1".into(),
            slug: "owner/repo".into(),
            ..Default::default()
        }
    );
    assert!(git.calls().is_empty());
}

#[test]
fn each_git_failure_is_reported_in_order() {
    // nothing scripted: branch fails first
    let git = StubGit::new();
    let err = local::get_service_params(&inputs(OverrideArgs::default()), &git).unwrap_err();
    assert!(err.to_string().contains("git rev-parse --abbrev-ref HEAD"));

    // branch works: commit fails next
    let git = StubGit::new().with_stdout(&BRANCH, "main");
    let err = local::get_service_params(&inputs(OverrideArgs::default()), &git).unwrap_err();
    assert!(err.to_string().contains("git rev-parse HEAD"));

    // branch and commit work: remote lookup fails
    let git = StubGit::new()
        .with_stdout(&BRANCH, "main")
        .with_stdout(&COMMIT, "testSHA");
    let err = local::get_service_params(&inputs(OverrideArgs::default()), &git).unwrap_err();
    assert!(err.to_string().contains("git config --get remote.origin.url"));
}

#[test]
fn unparsable_remote_is_a_slug_error() {
    let git = StubGit::new()
        .with_stdout(&BRANCH, "main")
        .with_stdout(&COMMIT, "testSHA")
        .with_stdout(&REMOTE, "notaurl");
    let err = local::get_service_params(&inputs(OverrideArgs::default()), &git).unwrap_err();
    assert!(matches!(err, CovmetaError::SlugParse { .. }));
}

#[test]
fn nested_namespace_remote_is_rejected() {
    let git = StubGit::new()
        .with_stdout(&BRANCH, "main")
        .with_stdout(&COMMIT, "testSHA")
        .with_stdout(&REMOTE, "https://gitlab.com/group/sub/repo.git");
    let err = local::get_service_params(&inputs(OverrideArgs::default()), &git).unwrap_err();
    assert!(matches!(err, CovmetaError::SlugParse { .. }));
}

#[test]
fn nonzero_exit_is_an_invocation_error() {
    let git = StubGit::new().with_output(
        &BRANCH,
        GitOutput::failure(Some(128), "fatal: not a git repository"),
    );
    let err = local::get_service_params(&inputs(OverrideArgs::default()), &git).unwrap_err();
    assert!(matches!(err, CovmetaError::VcsInvocation { .. }));
    assert!(err.to_string().contains("not a git repository"));
}

#[test]
fn closures_can_stand_in_for_git() {
    let git = |args: &[&str]| -> covmeta::Result<GitOutput> {
        Ok(match args {
            ["rev-parse", "--abbrev-ref", "HEAD"] => GitOutput::success("main\n"),
            ["rev-parse", "HEAD"] => GitOutput::success("testSHA\n"),
            ["config", "--get", "remote.origin.url"] => {
                GitOutput::success("http://github.com/testOrg/testRepo.git\n")
            }
            _ => GitOutput::failure(Some(1), "unexpected"),
        })
    };
    let params = local::get_service_params(&inputs(OverrideArgs::default()), &git).unwrap();
    assert_eq!(params.slug, "testOrg/testRepo");
}

#[test]
fn resolve_through_builtin_providers() {
    let git = StubGit::new()
        .with_stdout(&BRANCH, "main")
        .with_stdout(&COMMIT, "testSHA")
        .with_stdout(&REMOTE, "git@github.com:testOrg/testRepo.git");
    let providers = providers::builtin_providers();
    let request = inputs(OverrideArgs::default());

    let first = providers::resolve(&providers, &request, &git).unwrap();
    let second = providers::resolve(&providers, &request, &git).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.slug, "testOrg/testRepo");
}

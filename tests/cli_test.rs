use async_trait::async_trait;
use kube_codegen::cli::commands::common;
use kube_codegen::cli::CliApp;
use kube_codegen::{GenerationInput, GenerationPhase, GeneratorKind, GroupVersion};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Captures the hand-off instead of generating anything
#[derive(Default)]
struct RecordingPhase {
    inputs: Mutex<Vec<GenerationInput>>,
}

#[async_trait]
impl GenerationPhase for RecordingPhase {
    async fn execute(&self, input: &GenerationInput) -> anyhow::Result<()> {
        self.inputs.lock().unwrap().push(input.clone());
        Ok(())
    }
}

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = CliApp::app()
        .try_get_matches_from(std::iter::once("kube-codegen").chain(args.iter().copied()))
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    sub.clone()
}

async fn run(kind: GeneratorKind, args: &[&str]) -> anyhow::Result<Vec<GenerationInput>> {
    // an empty defaults file keeps the working directory's files out of the test
    let defaults = NamedTempFile::new().unwrap();
    let defaults_path = defaults.path().to_string_lossy().to_string();

    let mut full_args = args.to_vec();
    full_args.extend(["--config", defaults_path.as_str()]);

    let phase = RecordingPhase::default();
    common::run_generator(kind, &sub_matches(&full_args), &phase).await?;
    let inputs = phase.inputs.lock().unwrap().clone();
    Ok(inputs)
}

#[test]
fn test_raw_args_keep_tokens_verbatim() {
    let matches = sub_matches(&[
        "informer-gen",
        "--input",
        "apps/v1,batch/v1",
        "--input",
        "v1",
        "--included-types-overrides",
        "apps/v1=Deployment,StatefulSet",
        "--plural-exceptions",
        "Foo:Foos,Endpoints:Endpoints",
        "--single-directory",
    ]);
    let raw = common::raw_args(&matches);

    assert_eq!(raw.inputs, vec!["apps/v1,batch/v1", "v1"]);
    assert_eq!(
        raw.included_types_overrides,
        vec!["apps/v1=Deployment,StatefulSet"]
    );
    assert_eq!(
        raw.plural_exceptions,
        Some(vec!["Foo:Foos,Endpoints:Endpoints".to_string()])
    );
    assert_eq!(raw.single_directory, Some(true));
    assert_eq!(raw.verify_only, None);
    assert_eq!(raw.listers_package, None);
}

#[test]
fn test_lister_gen_has_no_client_package_options() {
    let result = CliApp::app().try_get_matches_from([
        "kube-codegen",
        "lister-gen",
        "--listers-package",
        "example.com/listers",
    ]);
    assert!(result.is_err());

    let raw = common::raw_args(&sub_matches(&["lister-gen", "--input", "apps/v1"]));
    assert_eq!(raw.single_directory, None);
    assert_eq!(raw.versioned_clientset_package, None);
}

#[tokio::test]
async fn test_informer_gen_hand_off() {
    let inputs = run(
        GeneratorKind::Informer,
        &[
            "informer-gen",
            "--input",
            "apps/v1",
            "--input-base",
            "example.com/apis",
            "--included-types-overrides",
            "apps/v1=Deployment,StatefulSet",
        ],
    )
    .await
    .unwrap();

    assert_eq!(inputs.len(), 1);
    let input = &inputs[0];
    let apps = GroupVersion::new("apps", "v1");

    assert_eq!(input.group_version_packages.len(), 1);
    assert_eq!(input.group_version_packages[&apps], "example.com/apis/apps/v1");
    assert_eq!(
        input.included_types_overrides[&apps],
        vec!["Deployment", "StatefulSet"]
    );
    assert_eq!(input.input_dirs, vec!["example.com/apis/apps/v1"]);
    assert_eq!(
        input.plural_exceptions.get("Endpoints").map(String::as_str),
        Some("Endpoints")
    );
}

#[tokio::test]
async fn test_input_base_after_input() {
    let inputs = run(
        GeneratorKind::Lister,
        &[
            "lister-gen",
            "--input",
            "batch/v1",
            "--input-base",
            "example.com/late",
        ],
    )
    .await
    .unwrap();

    assert_eq!(
        inputs[0].group_version_packages[&GroupVersion::new("batch", "v1")],
        "example.com/late/batch/v1"
    );
}

#[tokio::test]
async fn test_duplicate_version_aborts_before_generation() {
    let err = run(
        GeneratorKind::Lister,
        &["lister-gen", "--input", "g/v1", "--input", "g/v2"],
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("at most one version per group"));
}

#[tokio::test]
async fn test_validation_failure_names_field() {
    let err = run(
        GeneratorKind::Informer,
        &["informer-gen", "--input", "apps/v1", "--listers-package", ""],
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("listers package cannot be empty"));
}

#[tokio::test]
async fn test_empty_groups_allowed_unless_required() {
    let inputs = run(GeneratorKind::Lister, &["lister-gen"]).await.unwrap();
    assert!(inputs[0].group_version_packages.is_empty());

    let err = run(GeneratorKind::Lister, &["lister-gen", "--require-groups"])
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("no group versions"));
}

#[tokio::test]
async fn test_defaults_file_fills_unset_options() {
    let defaults = NamedTempFile::new().unwrap();
    std::fs::write(
        defaults.path(),
        "input:\n  - apps/v1\ninput-base: example.com/file\noutput-package: example.com/out\n",
    )
    .unwrap();
    let defaults_path = defaults.path().to_string_lossy().to_string();

    let matches = sub_matches(&[
        "lister-gen",
        "--config",
        defaults_path.as_str(),
        "--output-package",
        "example.com/cli-out",
    ]);
    let phase = RecordingPhase::default();
    common::run_generator(GeneratorKind::Lister, &matches, &phase)
        .await
        .unwrap();

    let inputs = phase.inputs.lock().unwrap();
    assert_eq!(inputs[0].output_package_path, "example.com/cli-out");
    assert_eq!(inputs[0].input_dirs, vec!["example.com/file/apps/v1"]);
}

#[tokio::test]
async fn test_missing_config_file_is_an_error() {
    let matches = sub_matches(&["lister-gen", "--config", "/nonexistent/kube-codegen.yaml"]);
    let phase = RecordingPhase::default();

    assert!(common::run_generator(GeneratorKind::Lister, &matches, &phase)
        .await
        .is_err());
    assert!(phase.inputs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_command_line_switch_turns_off_file_default() {
    let defaults = NamedTempFile::new().unwrap();
    std::fs::write(
        defaults.path(),
        "single-directory: true\nverify-only: true\nrequire-groups: true\n",
    )
    .unwrap();
    let defaults_path = defaults.path().to_string_lossy().to_string();

    let matches = sub_matches(&[
        "informer-gen",
        "--config",
        defaults_path.as_str(),
        "--single-directory=false",
        "--require-groups=false",
    ]);
    let raw = common::raw_args(&matches);
    assert_eq!(raw.single_directory, Some(false));
    assert_eq!(raw.require_groups, Some(false));
    assert_eq!(raw.verify_only, None);

    let phase = RecordingPhase::default();
    common::run_generator(GeneratorKind::Informer, &matches, &phase)
        .await
        .unwrap();

    let inputs = phase.inputs.lock().unwrap();
    assert!(!inputs[0].single_directory);
    assert!(inputs[0].verify_only);
}

#[test]
fn test_bare_switch_does_not_consume_next_token() {
    let raw = common::raw_args(&sub_matches(&[
        "lister-gen",
        "--verify-only",
        "--input",
        "apps/v1",
    ]));
    assert_eq!(raw.verify_only, Some(true));
    assert_eq!(raw.inputs, vec!["apps/v1"]);
}

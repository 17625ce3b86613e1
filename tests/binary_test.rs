use std::process::Command;

fn kube_codegen() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_kube-codegen"));
    command.env("RUST_LOG", "kube_codegen=info");
    command
}

#[test]
fn test_help_lists_generators() {
    let output = kube_codegen()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("informer-gen"));
    assert!(stdout.contains("lister-gen"));
    assert!(stdout.contains("info"));
}

#[test]
fn test_informer_gen_help() {
    let output = kube_codegen()
        .args(["informer-gen", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--input"));
    assert!(stdout.contains("--input-base"));
    assert!(stdout.contains("--included-types-overrides"));
    assert!(stdout.contains("--plural-exceptions"));
    assert!(stdout.contains("--versioned-clientset-package"));
    assert!(stdout.contains("--single-directory"));
}

#[test]
fn test_info_detailed() {
    let output = kube_codegen()
        .args(["info", "--detailed"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Default input base: k8s.io/kubernetes/pkg/apis"));
    assert!(stdout.contains("Endpoints:Endpoints"));
}

#[test]
fn test_lister_gen_success() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = kube_codegen()
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["lister-gen", "--input", "apps/v1,batch/v1"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("k8s.io/kubernetes/pkg/apis/apps/v1"));
}

#[test]
fn test_malformed_input_exits_non_zero() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = kube_codegen()
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["lister-gen", "--input", "apps/v1/extra"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed --input value"));
    assert!(output.stdout.is_empty());
}

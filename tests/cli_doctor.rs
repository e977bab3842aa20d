use std::process::Command;

#[test]
fn test_cli_doctor_exits_zero() {
    let bin = env!("CARGO_BIN_EXE_tfs-bridge");
    let out = Command::new(bin)
        .args(["doctor", "--tf-exe-path", "tfs-bridge-missing-tf"])
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run tfs-bridge doctor");
    assert!(
        out.status.success(),
        "tfs-bridge doctor exited non-zero: {:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("tf executable:     tfs-bridge-missing-tf"), "{err}");
    assert!(err.contains("not found"), "{err}");
}

use std::process::Command;

fn run(args: &[&str]) -> (String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pw-cli"))
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run pw-cli");
    assert!(output.status.success(), "pw-cli {:?} failed", args);
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn curve_csv_on_stdout_has_no_log_lines() {
    let (stdout, stderr) = run(&["curve", "fusion", "--points", "3"]);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("temperature_k,pressure_atm"));
    assert_eq!(lines.count(), 3);
    assert!(stderr.contains("sampling boundary curve"));
}

#[test]
fn curve_svg_on_stdout_is_only_path_data() {
    let (stdout, _) = run(&["curve", "vaporization", "--points", "4", "--svg"]);
    assert!(stdout.starts_with('M'), "stdout = {stdout:?}");
    assert_eq!(stdout.lines().count(), 1);
}

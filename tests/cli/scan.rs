use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_basic_extraction() -> Result<()> {
    let test = CliTest::with_file("a.py", "x = \"hello\"\n")?;
    test.write_file("sub/b.py", "y = f\"world {1}\"\n")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let expected = r#"{
  "a.py": [
    "hello"
  ],
  "sub/b.py": [
    "world "
  ]
}
"#;
    assert_eq!(stdout_of(&output), expected);

    Ok(())
}

#[test]
fn test_syntax_error_file_is_skipped() -> Result<()> {
    let test = CliTest::with_file("good.py", "msg = \"kept\"\n")?;
    test.write_file("bad.py", "def broken(:\n")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("good.py"));
    assert!(stdout.contains("kept"));
    assert!(!stdout.contains("bad.py"));

    Ok(())
}

#[test]
fn test_empty_directory_yields_empty_object() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "{}\n");

    Ok(())
}

#[test]
fn test_missing_root_fails_without_json() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("no_such_dir").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a directory"));

    Ok(())
}

#[test]
fn test_root_is_a_file_fails() -> Result<()> {
    let test = CliTest::with_file("single.py", "x = \"oops\"\n")?;

    let output = test.command().arg("single.py").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_zero_literal_file_omitted_by_default() -> Result<()> {
    let test = CliTest::with_file("numbers.py", "x = 1\ny = 2\n")?;
    test.write_file("strings.py", "s = \"text\"\n")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(!stdout.contains("numbers.py"));
    assert!(stdout.contains("strings.py"));

    Ok(())
}

#[test]
fn test_include_empty_keeps_zero_literal_files() -> Result<()> {
    let test = CliTest::with_file("numbers.py", "x = 1\n")?;

    let output = test.scan_command().arg("--include-empty").output()?;

    assert_eq!(output.status.code(), Some(0));
    let expected = r#"{
  "numbers.py": []
}
"#;
    assert_eq!(stdout_of(&output), expected);

    Ok(())
}

#[test]
fn test_output_file() -> Result<()> {
    let test = CliTest::with_file("a.py", "x = \"hello\"\n")?;

    let output = test
        .scan_command()
        .args(["--output", "result.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let written = test.read_file("result.json")?;
    assert!(written.contains("\"a.py\""));
    assert!(written.contains("\"hello\""));
    assert!(written.ends_with('\n'));

    Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<()> {
    let test = CliTest::with_file("z.py", "a = \"last\"\n")?;
    test.write_file("a.py", "b = \"first\"\n")?;
    test.write_file("pkg/mod.py", "c = \"nested\"\n")?;

    let first = test.scan_command().output()?;
    let second = test.scan_command().output()?;

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(stdout_of(&first), stdout_of(&second));

    // Walk order: lexicographic per directory level.
    let stdout = stdout_of(&first);
    let a = stdout.find("a.py").unwrap();
    let pkg = stdout.find("pkg/mod.py").unwrap();
    let z = stdout.find("z.py").unwrap();
    assert!(a < pkg && pkg < z);

    Ok(())
}

#[test]
fn test_verbose_warnings_go_to_stderr() -> Result<()> {
    let test = CliTest::with_file("good.py", "msg = \"kept\"\n")?;
    test.write_file("bad.py", "def broken(:\n")?;

    let output = test.scan_command().arg("--verbose").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("bad.py"));
    // Diagnostics must never leak into the JSON on stdout.
    assert!(!stdout_of(&output).contains("warning:"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Usage"));

    Ok(())
}

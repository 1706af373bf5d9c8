use anyhow::Result;
use byte_diff_expr::diff::Report;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn bdx(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bdx"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn setup() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("A"), b"abcd")?;
    fs::write(dir.path().join("B"), b"axyd")?;
    fs::write(dir.path().join("C"), b"abyz")?;
    Ok(dir)
}

#[test]
fn prints_offsets_where_expression_holds() -> Result<()> {
    let dir = setup()?;

    let output = bdx(dir.path(), &["{", "A", "^", "B", "}", "-", "{", "A", "^", "C", "}"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "         A B C\n00000001 98 120 98 \n"
    );
    Ok(())
}

#[test]
fn window_size_option_splits_output() -> Result<()> {
    let dir = setup()?;

    let output = bdx(dir.path(), &["-w", "2", "A", "^", "B"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "         A B\n00000001 98 120 \n         A B\n00000002 99 121 \n"
    );
    Ok(())
}

#[test]
fn missing_close_bracket_exits_with_status_one() -> Result<()> {
    let dir = setup()?;

    let output = bdx(dir.path(), &["{", "A", "^", "B"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn unknown_file_exits_with_status_one() -> Result<()> {
    let dir = setup()?;

    let output = bdx(dir.path(), &["A", "^", "D"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn rejects_window_size_that_is_not_a_power_of_two() -> Result<()> {
    let dir = setup()?;

    let output = bdx(dir.path(), &["-w", "3", "A", "^", "B"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn oversized_window_is_a_usage_error_not_a_crash() -> Result<()> {
    let dir = setup()?;

    let output = bdx(dir.path(), &["-w", "9223372036854775808", "A", "^", "B"]);

    assert_ne!(output.status.code(), Some(101));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn writes_report_when_requested() -> Result<()> {
    let dir = setup()?;

    let output = bdx(dir.path(), &["-r", "report.toml", "A", "^", "C"]);
    assert!(output.status.success());

    let report = Report::load(&dir.path().join("report.toml"))?;
    assert_eq!(report.expression, "A ^ C");
    assert_eq!(report.total_offsets, 2);
    assert_eq!(
        report
            .files
            .iter()
            .map(|f| f.identifier.as_str())
            .collect::<Vec<_>>(),
        vec!["A", "C"]
    );
    Ok(())
}

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("paystation"));
    cmd.arg("tests/fixtures/session.csv");

    let expected = "\
action,display,receipt,refund,collected
insert,4,,,
insert,14,,,
display,14,,,
buy,0,14,,
insert,4,,,
insert,8,,,
insert,12,,,
cancel,0,,25x1;5x1,
insert,4,,,
insert,6,,,
empty,0,,,15
display,0,,,
";
    cmd.assert().success().stdout(expected);

    Ok(())
}

#[test]
fn test_cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("paystation"));
    cmd.arg("tests/fixtures/session.csv").arg("--format").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"action":"buy","display":0,"receipt":14}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"action":"cancel","display":0,"refund":{"5":1,"25":1}}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"action":"empty","display":0,"collected":15}"#,
        ));

    Ok(())
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("paystation"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}

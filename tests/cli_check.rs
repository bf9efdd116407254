use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn command_check_ab() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("blsm")?;
    cmd.arg("check")
        .arg("tests/blosum/ab.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 2 residues, 4 pairs"));

    Ok(())
}

#[test]
fn command_check_blosum62() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("blsm")?;
    cmd.arg("check")
        .arg("tests/blosum/blosum62.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 20 residues, 400 pairs"));

    Ok(())
}

#[test]
fn command_check_bad_files() -> anyhow::Result<()> {
    for bad in [
        "tests/blosum/out_of_order.txt",
        "tests/blosum/length_mismatch.txt",
        "tests/blosum/duplicate.txt",
        "tests/blosum/no_header.txt",
    ] {
        let mut cmd = Command::cargo_bin("blsm")?;
        cmd.arg("check")
            .arg(bad)
            .assert()
            .failure()
            .stdout(predicate::str::is_empty());
    }

    Ok(())
}

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ppplink"))
}

#[test]
fn help_covers_subcommands() {
    cmd().arg("--help").assert().success();
    cmd().arg("header").arg("--help").assert().success();
    cmd().arg("protocols").arg("--help").assert().success();
}

#[test]
fn protocols_list_outputs_json() {
    let assert = cmd().arg("protocols").arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    let rows = value.as_array().expect("json array");
    assert!(rows.iter().any(|row| row["name"] == "ip4"));
    assert!(rows.iter().any(|row| row["name"] == "mpls_unicast"));
}

#[test]
fn header_build_emits_wire_bytes() {
    cmd()
        .arg("header")
        .arg("build")
        .arg("ip4")
        .assert()
        .success()
        .stdout(contains("ff030021"));

    cmd()
        .arg("header")
        .arg("build")
        .arg("0xbeef")
        .assert()
        .success()
        .stdout(contains("ff03beef"));
}

#[test]
fn header_build_rejects_out_of_range() {
    cmd()
        .arg("header")
        .arg("build")
        .arg("70000")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn header_decode_formats_text() {
    cmd()
        .arg("header")
        .arg("decode")
        .arg("ff030021")
        .assert()
        .success()
        .stdout(contains("PPP ip4"));

    cmd()
        .arg("header")
        .arg("decode")
        .arg("ff:03:00:57")
        .assert()
        .success()
        .stdout(contains("PPP ip6"));
}

#[test]
fn header_decode_short_input_reports_truncation() {
    cmd()
        .arg("header")
        .arg("decode")
        .arg("ff03")
        .assert()
        .success()
        .stdout(contains("ppp header truncated"));
}

#[test]
fn header_decode_invalid_hex_fails_with_hint() {
    cmd()
        .arg("header")
        .arg("decode")
        .arg("zz03")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn rewrite_prints_template() {
    cmd()
        .arg("rewrite")
        .arg("ip6")
        .assert()
        .success()
        .stdout(contains("ff030057"));
}

#[test]
fn rewrite_unsupported_link_type_fails() {
    cmd()
        .arg("rewrite")
        .arg("ethernet")
        .assert()
        .failure()
        .stderr(contains("no PPP encapsulation").and(contains("hint:")));
}

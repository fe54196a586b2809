#![cfg(unix)]

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn runtime_receives_preview_flag_and_jar() {
    let ctx = TestContext::new();
    ctx.install_runtime(r#"printf '%s\n' "$@" > args.txt"#);
    ctx.write_jar();

    ctx.cli().assert().success();

    assert_eq!(ctx.read("args.txt"), "--enable-preview\nsequencer.jar\n");
}

#[test]
fn runtime_output_follows_command_line() {
    let ctx = TestContext::new();
    ctx.install_runtime("echo sequencer-started");

    ctx.cli()
        .assert()
        .success()
        .stdout(format!("{}sequencer-started\n", ctx.expected_announcement()));
}

#[test]
fn failing_runtime_still_exits_zero() {
    let ctx = TestContext::new();
    ctx.install_runtime("echo boom >&2; exit 3");

    ctx.cli().assert().success().code(0).stderr(predicate::str::contains("boom"));
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn debug_logging_goes_to_stderr() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("SEQUENCER_LAUNCHER_LOG", "debug")
        .assert()
        .success()
        .stdout(ctx.expected_announcement())
        .stderr(predicate::str::contains("command interpreter exited"));
}

#[test]
fn logging_is_silent_by_default() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .success()
        .stderr(predicate::str::contains("command interpreter exited").not());
}

use crate::harness::TestContext;

#[test]
fn consecutive_runs_print_byte_identical_output() {
    let ctx = TestContext::new();

    let first = ctx.cli().assert().success().get_output().stdout.clone();
    let second = ctx.cli().assert().success().get_output().stdout.clone();

    assert_eq!(first, second);
}

use super::fixture_loader::load;
use super::fixture_runner::run_fixtures;

#[test]
fn test_fixture_suite() {
    let tests = load(include_str!("./cases.json"));
    let total = tests.len();

    println!("\nRunning {total} fixture entries...");

    let result = run_fixtures(tests);

    println!("\n{}", result.summary());
    for failure in &result.failures {
        println!("\nTest #{}: {}", failure.test_num, failure.op);
        println!("   Args: {:?}", failure.args);
        println!("   Expected: {}", failure.expected);
        println!("   Actual: {}", failure.actual);
    }

    assert_eq!(
        result.failed, 0,
        "Run with `cargo test test_fixture_suite -- --nocapture` to see failure details."
    );
    assert!(
        result.passed >= 100,
        "Expected at least 100 fixture cases, but found {}",
        result.passed
    );
}

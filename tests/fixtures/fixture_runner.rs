use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase};
/// Fixture runner
///
/// Dispatches each case to the matching `uritext` operation and compares the
/// result as JSON (`null` for `None`).
use serde_json::Value;

fn arg(args: &[Option<String>], index: usize) -> Option<&str> {
    args.get(index).and_then(|a| a.as_deref())
}

fn text(value: Option<impl Into<String>>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.into()))
}

/// Evaluate a single operation, `None` when the operation name is unknown
pub fn evaluate(op: &str, args: &[Option<String>], bounds: Option<[i64; 3]>) -> Option<Value> {
    let a0 = arg(args, 0);
    let a1 = arg(args, 1);
    let a2 = arg(args, 2);

    let actual = match op {
        "add_parameter" => Value::String(uritext::add_parameter(a0, a1, a2)),
        "append_forward_slash" => text(Some(uritext::append_forward_slash(a0).into_owned())),
        "combine" => text(uritext::combine(a0, a1)),
        "get_domain_name" => text(uritext::get_domain_name(a0)),
        "parse_int_parameter" => {
            let [min, max, default_value] = bounds?;
            Value::from(uritext::parse_int_parameter(a0, min, max, default_value))
        }
        "parse_string_parameter" => {
            Value::String(uritext::parse_string_parameter(a0, a1.unwrap_or_default()).to_string())
        }
        "remove_parameter" => text(uritext::remove_parameter(a0, a1).map(|url| url.into_owned())),
        "encode_component" => Value::String(uritext::encode_component(a0.unwrap_or_default())),
        _ => return None,
    };
    Some(actual)
}

/// Run fixture cases and collect results
pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::Operation {
            op,
            args,
            bounds,
            expected,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let actual = evaluate(&op, &args, bounds)
            .unwrap_or_else(|| Value::String(format!("<unknown operation {op}>")));

        if actual == expected {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.push(FixtureFailure {
                test_num,
                op,
                args,
                expected,
                actual,
            });
        }
    }

    result
}

use fluxus::{Arguments, Caller, Kind, Outcome};
use integration_tests::test_callers::chaining::{
    ExpectsHash, ExpectsResult, HashReturning, StringReturning,
};
use serde_json::json;

fn named(name: &str) -> Arguments {
    Arguments::new().with("name", name)
}

#[test]
fn then_with_hash_data() {
    let result = HashReturning::call(named("John Doe"))
        .and_then(Outcome::then::<ExpectsHash>)
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.payload().get("user"), Some(&json!("John Doe")));
    assert_eq!(result.payload().get("processed"), Some(&json!(true)));
}

#[test]
fn then_with_non_hash_data() {
    let result = StringReturning::call(named("Jane Doe"))
        .and_then(Outcome::then::<ExpectsResult>)
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.payload(), &"Hello, Jane Doe! (Processed)");
}

#[test]
fn then_with_additional_arguments() {
    let result = HashReturning::call(named("John Doe"))
        .unwrap()
        .then_with::<ExpectsHash>(Arguments::new().with("extra", "parameter"))
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.payload().get("user"), Some(&json!("John Doe")));
    assert_eq!(result.payload().get("extra"), Some(&json!("parameter")));
}

#[test]
fn then_with_non_hash_and_additional_arguments() {
    let result = StringReturning::call(named("Jane Doe"))
        .unwrap()
        .then_with::<ExpectsResult>(Arguments::new().with("priority", "high"))
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.payload(), &"Hello, Jane Doe! (Processed)");
}

#[test]
fn then_not_called_on_failure() {
    let failure = Outcome::failure(Kind::ERROR, "Failed operation");

    let result = failure.then::<ExpectsResult>().unwrap();

    assert!(result.is_failure());
    assert_eq!(result.payload(), &"Failed operation");
}

#[test]
fn data_is_immutable_over_the_chainable_scope() {
    let outcome = Outcome::success("calculated", json!({ "sum": 2 }));

    let result = outcome.on_success(|data| {
        let sum = data.get("sum").and_then(|v| v.as_i64()).unwrap();
        assert_eq!(sum * 2, 4);
    });

    assert_eq!(result.payload().get("sum"), Some(&json!(2)));
}

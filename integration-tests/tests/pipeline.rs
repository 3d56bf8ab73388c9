use fluxus::{Arguments, Caller, Error, Kind, Outcome};
use integration_tests::test_callers::{
    NoMethodError, capturing,
    chaining::{ExpectsResult, StringReturning},
    propagating,
};
use serde_json::json;

#[test]
fn failures_short_circuit_the_rest_of_the_pipeline() {
    let result = propagating::CheckEven::call(Arguments::new().with("number", 7))
        .and_then(Outcome::then::<StringReturning>)
        .and_then(Outcome::then::<ExpectsResult>)
        .unwrap();

    assert!(result.is_failure());
    assert_eq!(result.kind(), "odd");
    assert_eq!(result.payload(), &"7 is odd");
}

#[test]
fn success_payloads_feed_the_next_stage() {
    let extra = Arguments::new().with("ignored", json!([1, 2]));

    let result = capturing::CheckEven::call(Arguments::new().with("number", 4))
        .and_then(|outcome| outcome.then_with::<ExpectsResult>(extra))
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.payload(), &"4 is even (Processed)");
}

#[test]
fn mismatched_stages_raise_under_the_propagating_strategy() {
    // `StringReturning` needs a `name`, but the wrapped payload only has `result`.
    let error = propagating::CheckEven::call(Arguments::new().with("number", 2))
        .and_then(Outcome::then::<StringReturning>)
        .unwrap_err();

    assert!(matches!(
        error,
        Error::Raised {
            caller: "StringReturning",
            ..
        }
    ));
}

#[test]
fn captured_exceptions_stop_the_pipeline() {
    let mut reached_exception_handler = false;

    let result = capturing::CheckEven::call(Arguments::new().with("number", json!(1.5)))
        .and_then(Outcome::then::<ExpectsResult>)
        .unwrap()
        .on_exception_of::<NoMethodError, _>(|_| reached_exception_handler = true);

    assert!(reached_exception_handler);
    assert_eq!(result.kind(), &Kind::EXCEPTION);
}

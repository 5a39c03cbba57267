//! Tests for UnwrapError: the diagnostic raised by accessors called on the
//! wrong variant.

use std::error::Error;
use std::fmt;
use std::panic;

use rsrt::{Container, Erased, Err, Ok, Result, Some, UnwrapError};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotaExceeded {
    limit: u32,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "quota of {} exceeded", self.limit)
    }
}

impl Error for QuotaExceeded {}

// =============================================================================
// Erased container
// =============================================================================

#[rstest]
fn unwrap_error_keeps_erased_err() {
    let value: Result<i32, QuotaExceeded> = Err(QuotaExceeded { limit: 10 });
    let error = value.try_unwrap().unwrap_err();

    let erased = error.result().unwrap().clone().unwrap_err();
    assert_eq!(erased.rendered(), "QuotaExceeded { limit: 10 }");
    assert!(erased.type_name().ends_with("QuotaExceeded"));
}

#[rstest]
fn unwrap_err_error_keeps_erased_ok() {
    let value: Result<Vec<i32>, ()> = Ok(vec![1, 2]);
    let error = value.try_unwrap_err().unwrap_err();
    assert_eq!(
        error.container(),
        &Container::Result(Ok(Erased::of(&vec![1, 2])))
    );
}

#[rstest]
fn container_display_uses_variant_names() {
    let value: Result<i32, &str> = Err("bad");
    let error = value.try_unwrap().unwrap_err();
    assert_eq!(error.container().to_string(), "Err(\"bad\")");
}

// =============================================================================
// Messages
// =============================================================================

#[rstest]
#[case::unwrap(
    Err::<i32, &str>("oops").try_unwrap().unwrap_err(),
    "called `Result::unwrap()` on an `Err` value: \"oops\""
)]
#[case::expect(
    Err::<i32, &str>("oops").try_expect("loading").unwrap_err(),
    "loading: \"oops\""
)]
#[case::unwrap_err(
    Ok::<i32, &str>(5).try_unwrap_err().unwrap_err(),
    "called `Result::unwrap_err()` on an `Ok` value: 5"
)]
#[case::expect_err(
    Ok::<i32, &str>(5).try_expect_err("must fail").unwrap_err(),
    "must fail: 5"
)]
fn unwrap_error_messages(#[case] error: UnwrapError, #[case] expected: &str) {
    assert_eq!(error.message(), expected);
    assert_eq!(error.to_string(), expected);
}

// =============================================================================
// Cause chaining
// =============================================================================

#[rstest]
fn cause_is_chained_for_error_payloads() {
    let value: Result<i32, QuotaExceeded> = Err(QuotaExceeded { limit: 3 });
    let error = value.try_unwrap_with_cause().unwrap_err();

    let source = error.source().unwrap();
    assert_eq!(source.to_string(), "quota of 3 exceeded");
    assert_eq!(
        source.downcast_ref::<QuotaExceeded>(),
        std::option::Option::Some(&QuotaExceeded { limit: 3 })
    );
}

#[rstest]
fn cause_is_chained_for_expect() {
    let value: Result<i32, QuotaExceeded> = Err(QuotaExceeded { limit: 3 });
    let error = value.try_expect_with_cause("uploading").unwrap_err();
    assert_eq!(error.message(), "uploading: QuotaExceeded { limit: 3 }");
    assert!(error.source().is_some());
}

#[rstest]
fn plain_try_unwrap_has_no_cause() {
    let value: Result<i32, QuotaExceeded> = Err(QuotaExceeded { limit: 3 });
    let error = value.try_unwrap().unwrap_err();
    assert!(error.source().is_none());
}

#[rstest]
fn cause_variant_passes_ok_through() {
    let value: Result<i32, QuotaExceeded> = Ok(1);
    assert_eq!(value.try_unwrap_with_cause().unwrap(), 1);
}

// =============================================================================
// Panicking accessors
// =============================================================================

#[rstest]
fn panic_message_matches_unwrap_error() {
    let value: Result<i32, &str> = Err("bad");
    let expected = value.try_unwrap().unwrap_err().to_string();

    let payload = panic::catch_unwind(|| value.unwrap()).unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default();
    assert_eq!(message, expected);
}

#[rstest]
fn unwrap_error_is_a_std_error() {
    assert!(Some(1).try_unwrap().is_ok());

    let error = Err::<(), &str>("bad").try_unwrap().unwrap_err();
    let boxed: Box<dyn Error + Send + Sync> = error.into();
    assert!(boxed.to_string().contains("bad"));
}

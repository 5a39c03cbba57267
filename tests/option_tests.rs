//! Unit tests for the Option<T> type.
//!
//! Option represents a value that may be absent:
//! - `Some(T)`: Contains a value of type T
//! - `None`: No value

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rsrt::{Container, Err, None, Ok, Option, Some};
use rstest::rstest;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Basic Construction and Type Checking
// =============================================================================

#[rstest]
#[case(0)]
#[case(42)]
#[case(-7)]
fn some_is_some(#[case] value: i32) {
    let option = Some(value);
    assert!(option.is_some());
    assert!(!option.is_none());
    assert_eq!(option.unwrap(), value);
}

#[rstest]
fn none_is_none() {
    let option: Option<i32> = None;
    assert!(option.is_none());
    assert!(!option.is_some());
}

// =============================================================================
// None as a shared absent value
// =============================================================================

#[rstest]
fn none_equals_itself() {
    let first: Option<String> = None;
    let second: Option<String> = None;
    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[rstest]
fn none_equals_native_absent_marker() {
    let option: Option<i32> = None;
    assert_eq!(option, std::option::Option::None);
    assert_eq!(std::option::Option::<i32>::None, option);
}

#[rstest]
fn none_is_falsy() {
    let option: Option<i32> = None;
    assert!(!bool::from(&option));
    assert!(bool::from(&Some(0)));
}

#[rstest]
fn none_occupies_no_payload() {
    assert_eq!(
        std::mem::size_of::<Option<()>>(),
        std::mem::size_of::<std::option::Option<()>>()
    );
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[rstest]
fn some_equality_follows_value() {
    assert_eq!(Some(1), Some(1));
    assert_ne!(Some(1), Some(2));
    assert_ne!(Some(1), None);
}

#[rstest]
fn some_hash_differs_from_none() {
    assert_eq!(hash_of(&Some(5)), hash_of(&Some(5)));
    assert_ne!(hash_of(&Some(())), hash_of(&None::<()>));
}

// =============================================================================
// Value Extraction
// =============================================================================

#[rstest]
#[should_panic(expected = "called `Option::unwrap()` on a `None` value")]
fn none_unwrap_panics() {
    let option: Option<i32> = None;
    let _ = option.unwrap();
}

#[rstest]
#[should_panic(expected = "settings were never loaded")]
fn none_expect_panics_with_message() {
    let option: Option<i32> = None;
    let _ = option.expect("settings were never loaded");
}

#[rstest]
fn none_try_unwrap_returns_error() {
    let error = None::<i32>.try_unwrap().unwrap_err();
    assert_eq!(error.container(), &Container::Option(None));
    assert_eq!(error.message(), "called `Option::unwrap()` on a `None` value");
}

#[rstest]
fn none_try_expect_uses_message() {
    let error = None::<i32>.try_expect("no user").unwrap_err();
    assert_eq!(error.to_string(), "no user");
}

#[rstest]
fn none_into_std_is_absent_marker() {
    assert_eq!(None::<i32>.into_std(), std::option::Option::None);
    assert_eq!(Some(3).into_std(), std::option::Option::Some(3));
}

#[rstest]
#[case(Some(3), 3)]
#[case(None, 10)]
fn unwrap_or_returns_default_on_none(#[case] option: Option<i32>, #[case] expected: i32) {
    assert_eq!(option.unwrap_or(10), expected);
}

#[rstest]
fn unwrap_or_else_is_lazy() {
    let mut calls = 0;
    let value = Some(1).unwrap_or_else(|| {
        calls += 1;
        0
    });
    assert_eq!(value, 1);
    assert_eq!(calls, 0);

    let value = None.unwrap_or_else(|| {
        calls += 1;
        0
    });
    assert_eq!(value, 0);
    assert_eq!(calls, 1);
}

#[rstest]
fn unwrap_or_default_on_none() {
    assert_eq!(None::<String>.unwrap_or_default(), String::new());
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn and_then_skips_function_on_none() {
    let mut calls = 0;
    let result = None::<i32>.and_then(|value| {
        calls += 1;
        Some(value + 1)
    });
    assert_eq!(result, None);
    assert_eq!(calls, 0);
}

#[rstest]
fn or_else_only_runs_on_none() {
    assert_eq!(Some(1).or_else(|| Some(2)), Some(1));
    assert_eq!(None.or_else(|| Some(2)), Some(2));
}

#[rstest]
fn inspect_fires_only_on_some() {
    let mut seen = Vec::new();
    let option = None::<i32>.inspect(|value| seen.push(*value));
    assert_eq!(option, None);
    assert!(seen.is_empty());

    let option = Some(9).inspect(|value| seen.push(*value));
    assert_eq!(option, Some(9));
    assert_eq!(seen, vec![9]);
}

#[rstest]
fn ok_or_converts_to_result() {
    assert_eq!(Some(1).ok_or("missing"), Ok(1));
    assert_eq!(None::<i32>.ok_or("missing"), Err("missing"));
    assert_eq!(None::<i32>.ok_or_else(|| "lazy"), Err("lazy"));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn some_iterates_once() {
    let option = Some("only");
    assert_eq!(option.into_iter().collect::<Vec<_>>(), vec!["only"]);
}

#[rstest]
fn none_iterates_nothing() {
    let option: Option<i32> = None;
    assert_eq!(option.into_iter().count(), 0);
}

#[rstest]
fn iteration_restarts_on_each_call() {
    let option = Some(4);
    assert_eq!(option.iter().count(), 1);
    assert_eq!(option.iter().count(), 1);
    for value in &option {
        assert_eq!(*value, 4);
    }
}

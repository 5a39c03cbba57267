//! Tests for the `tracing` diagnostic hooks.
//!
//! Events are captured with a `tracing_subscriber::fmt` subscriber writing
//! into an in-memory buffer.

#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use rsrt::{Err, None, Ok, Option, Result, Some};
use rstest::rstest;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        io::Result::Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Result::Ok(())
    }
}

fn capture<R>(action: impl FnOnce() -> R) -> (R, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .finish();
    let output = tracing::subscriber::with_default(subscriber, action);
    (output, captured.contents())
}

#[rstest]
fn trace_err_emits_warning_and_returns_err() {
    let (outcome, logs) = capture(|| {
        let value: Result<u16, String> = Err("port out of range".to_string());
        value.trace_err("loading config")
    });

    assert_eq!(outcome, Err("port out of range".to_string()));
    assert!(logs.contains("WARN"));
    assert!(logs.contains("operation failed"));
    assert!(logs.contains("loading config"));
    assert!(logs.contains("port out of range"));
}

#[rstest]
fn trace_err_is_silent_on_ok() {
    let (outcome, logs) = capture(|| {
        let value: Result<u16, String> = Ok(8080);
        value.trace_err("loading config")
    });

    assert_eq!(outcome, Ok(8080));
    assert!(logs.is_empty());
}

#[rstest]
fn trace_ok_emits_debug_event() {
    let (outcome, logs) = capture(|| {
        let value: Result<u16, String> = Ok(8080);
        value.trace_ok("binding listener")
    });

    assert_eq!(outcome, Ok(8080));
    assert!(logs.contains("DEBUG"));
    assert!(logs.contains("operation succeeded"));
    assert!(logs.contains("8080"));
}

#[rstest]
#[case(None, true)]
#[case(Some(3), false)]
fn trace_none_reports_absence_only(#[case] option: Option<i32>, #[case] logged: bool) {
    let (outcome, logs) = capture(|| option.trace_none("cache lookup"));

    assert_eq!(outcome, option);
    assert_eq!(logs.contains("value absent"), logged);
}

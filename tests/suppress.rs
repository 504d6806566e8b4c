#![cfg(feature = "use_std")]

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, Once};

use pretty_assertions::assert_eq;
use scope_exit::{configure, guard, guard_on_unwind, panic_policy, Config, ConfigError, PanicPolicy};

static SETUP: Once = Once::new();
static SUPPRESSED: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn setup() {
	SETUP.call_once(|| {
		let config = Config::new(PanicPolicy::Suppress).with_handler(|panic| {
			if let Ok(mut seen) = SUPPRESSED.lock() {
				seen.push(panic.message().to_owned());
			}
			if panic.message() == "handler trips" {
				panic!("handler failed");
			}
		});
		configure(config).unwrap();
	});
}

fn suppressed(message: &str) -> bool {
	SUPPRESSED.lock().unwrap().iter().any(|m| m == message)
}

#[test]
fn panicking_action_is_suppressed() {
	setup();
	{
		let _guard = guard(|| panic!("cleanup failed"));
	}
	assert!(suppressed("cleanup failed"));
}

#[test]
fn panicking_action_during_unwind_is_suppressed() {
	setup();
	let result = catch_unwind(AssertUnwindSafe(|| {
		let _rollback = guard_on_unwind(|| panic!("rollback failed"));
		panic!("original failure");
	}));
	let payload = result.unwrap_err();
	assert_eq!(payload.downcast_ref::<&str>(), Some(&"original failure"));
	assert!(suppressed("rollback failed"));
}

#[test]
fn panicking_handler_is_contained() {
	setup();
	let result = catch_unwind(|| {
		let _guard = guard(|| panic!("handler trips"));
	});
	assert!(result.is_ok());
	assert!(suppressed("handler trips"));
}

#[test]
fn fires_once_even_when_suppressed() {
	setup();
	let runs = Cell::new(0);
	{
		let _guard = guard(|| {
			runs.set(1 + runs.get());
			panic!("counted");
		});
	}
	assert_eq!(runs.get(), 1);
}

#[test]
fn configure_twice_is_rejected() {
	setup();
	assert_eq!(panic_policy(), PanicPolicy::Suppress);
	let err = configure(Config::new(PanicPolicy::MayPanic)).unwrap_err();
	assert_eq!(err, ConfigError::AlreadyConfigured(PanicPolicy::Suppress));
	assert_eq!(err.to_string(), "panic policy is already configured as `suppress`");
}

#![cfg(feature = "use_std")]

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Once;

use scope_exit::{configure, guard, guard_on_success, panic_policy, Config, PanicPolicy};

static SETUP: Once = Once::new();

fn setup() {
	SETUP.call_once(|| configure(Config::new(PanicPolicy::MayPanic)).unwrap());
}

#[test]
fn panicking_action_propagates() {
	setup();
	let result = catch_unwind(|| {
		let _guard = guard(|| panic!("cleanup failed"));
	});
	let payload = result.unwrap_err();
	assert_eq!(payload.downcast_ref::<&str>(), Some(&"cleanup failed"));
}

#[test]
fn panicking_commit_propagates_after_body() {
	setup();
	let body_done = Cell::new(false);
	let result = catch_unwind(AssertUnwindSafe(|| {
		guard_on_success(|| panic!("commit failed")).run(|| body_done.set(true))
	}));
	assert!(result.is_err());
	assert!(body_done.get());
}

#[test]
fn policy_is_fixed() {
	setup();
	assert_eq!(panic_policy(), PanicPolicy::MayPanic);
	assert!(configure(Config::new(PanicPolicy::Suppress)).is_err());
}

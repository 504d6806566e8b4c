#![cfg(feature = "use_std")]

use std::cell::Cell;
use std::env;
use std::process::Command;

use scope_exit::{configure, guard, Config, PanicPolicy};

// Set when this binary re-runs one of its own tests as a child process.
const CHILD_ENV: &str = "SCOPE_EXIT_NO_PANIC_CHILD";

#[test]
fn panicking_action_aborts() {
	if env::var_os(CHILD_ENV).is_some() {
		configure(Config::new(PanicPolicy::NoPanic)).unwrap();
		{
			let _guard = guard(|| panic!("cleanup failed"));
		}
		// only reached if the process did not abort; exit successfully so
		// the parent notices
		return;
	}

	let output = Command::new(env::current_exe().unwrap())
		.args(["--exact", "panicking_action_aborts", "--nocapture", "--test-threads=1"])
		.env(CHILD_ENV, "1")
		.output()
		.unwrap();
	assert!(!output.status.success(), "child exited with {}", output.status);
	assert!(String::from_utf8_lossy(&output.stderr).contains("cleanup failed"));

	#[cfg(unix)]
	{
		use std::os::unix::process::ExitStatusExt;
		// SIGABRT
		assert_eq!(output.status.signal(), Some(6));
	}
}

#[test]
fn quiet_action_runs() {
	if env::var_os(CHILD_ENV).is_some() {
		configure(Config::new(PanicPolicy::NoPanic)).unwrap();
		let runs = Cell::new(0);
		{
			let _guard = guard(|| runs.set(1 + runs.get()));
		}
		assert_eq!(runs.get(), 1);
		return;
	}

	let output = Command::new(env::current_exe().unwrap())
		.args(["--exact", "quiet_action_runs", "--nocapture", "--test-threads=1"])
		.env(CHILD_ENV, "1")
		.output()
		.unwrap();
	assert!(output.status.success(), "child exited with {}", output.status);
}

#![cfg(feature = "use_std")]

use std::env;

use scope_exit::{guard, panic_policy, Config, ConfigError, PanicPolicy, POLICY_ENV};

// The configuration is fixed on first use, so this binary holds one test.
#[test]
fn policy_is_read_from_environment() {
	env::set_var(POLICY_ENV, "bogus");
	assert_eq!(
		Config::from_env().unwrap_err(),
		ConfigError::UnknownPolicy("bogus".to_owned())
	);

	env::set_var(POLICY_ENV, "Suppress");
	assert_eq!(Config::from_env().unwrap().policy(), PanicPolicy::Suppress);

	{
		let _guard = guard(|| panic!("suppressed by environment"));
	}
	assert_eq!(panic_policy(), PanicPolicy::Suppress);
}

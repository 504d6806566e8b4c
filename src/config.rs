use std::env;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use crate::policy::{ActionPanic, PanicPolicy};

/// Environment variable read when no configuration was installed before the
/// first guard fired.
pub const POLICY_ENV: &str = "SCOPE_EXIT_PANIC_POLICY";

type Handler = Box<dyn Fn(&ActionPanic) + Send + Sync>;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Errors from choosing or parsing the panic policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("panic policy is already configured as `{0}`")]
	AlreadyConfigured(PanicPolicy),

	#[error("unknown panic policy `{0}`")]
	UnknownPolicy(String),
}

/// Process-wide settings for invoking guard actions.
///
/// ```
/// use scope_exit::{configure, Config, PanicPolicy};
///
/// configure(Config::new(PanicPolicy::Suppress).with_handler(|panic| {
///     eprintln!("cleanup failed: {}", panic.message());
/// })).unwrap();
///
/// {
///     scope_exit::defer!(panic!("disk full"));
/// }
/// // still here
/// ```
#[derive(Default)]
pub struct Config {
	policy: PanicPolicy,
	handler: Option<Handler>,
}

impl Config {
	pub fn new(policy: PanicPolicy) -> Self {
		Config { policy, handler: None }
	}

	/// Route panics caught under [`PanicPolicy::Suppress`] to `handler`
	/// instead of the log. A panic in the handler is caught and logged too.
	pub fn with_handler<H>(mut self, handler: H) -> Self
		where H: Fn(&ActionPanic) + Send + Sync + 'static
	{
		self.handler = Some(Box::new(handler));
		self
	}

	/// Build a configuration from [`POLICY_ENV`]; the default if it is unset.
	pub fn from_env() -> Result<Self, ConfigError> {
		match env::var_os(POLICY_ENV) {
			None => Ok(Config::default()),
			Some(value) => Ok(Config::new(value.to_string_lossy().parse()?)),
		}
	}

	pub fn policy(&self) -> PanicPolicy {
		self.policy
	}

	pub(crate) fn report(&self, panic: ActionPanic) {
		match &self.handler {
			Some(handler) => {
				if panic::catch_unwind(AssertUnwindSafe(|| handler(&panic))).is_err() {
					log::error!("{}; the suppressed-panic handler panicked as well", panic);
				}
			}
			None => log::error!("{}; suppressed", panic),
		}
	}
}

impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct(stringify!(Config))
			.field("policy", &self.policy)
			.field("handler", &self.handler.is_some())
			.finish()
	}
}

/// Install the process-wide configuration.
///
/// Succeeds once. Fails with [`ConfigError::AlreadyConfigured`] after an
/// earlier call, or after a guard fired or [`panic_policy`] was read, since
/// either fixes the configuration.
pub fn configure(config: Config) -> Result<(), ConfigError> {
	let policy = config.policy;
	CONFIG.set(config)
		.map_err(|_| ConfigError::AlreadyConfigured(current().policy))?;
	log::debug!("scope guard panic policy set to `{}`", policy);
	Ok(())
}

/// The panic policy in effect. Reading it fixes the configuration.
pub fn panic_policy() -> PanicPolicy {
	current().policy
}

pub(crate) fn current() -> &'static Config {
	CONFIG.get_or_init(|| match Config::from_env() {
		Ok(config) => {
			log::debug!("scope guard panic policy defaults to `{}`", config.policy);
			config
		}
		Err(err) => {
			log::warn!("{} in {}; using `{}`", err, POLICY_ENV, PanicPolicy::default());
			Config::default()
		}
	})
}

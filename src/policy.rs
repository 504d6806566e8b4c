use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::process;
use std::str::FromStr;

use crate::config::{self, ConfigError};

/// What happens when a guard's action panics.
///
/// The policy is process-wide and fixed once, see [`configure`](fn.configure.html).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanicPolicy {
	/// Call the action directly and let a panic propagate.
	///
	/// A panic while the thread is already unwinding aborts the process, as
	/// any panic escaping a destructor during unwinding does.
	#[default]
	MayPanic,
	/// The action must not panic; if it does, log the panic and abort.
	NoPanic,
	/// Catch the panic and hand it to the configured handler (or log it).
	Suppress,
	/// Moving the action must not fail.
	///
	/// Moves are bitwise copies and cannot fail, so this holds for every
	/// action; invocation behaves like `MayPanic`.
	InfallibleMove,
}

impl PanicPolicy {
	fn as_str(self) -> &'static str {
		match self {
			PanicPolicy::MayPanic => "may_panic",
			PanicPolicy::NoPanic => "no_panic",
			PanicPolicy::Suppress => "suppress",
			PanicPolicy::InfallibleMove => "infallible_move",
		}
	}
}

impl fmt::Display for PanicPolicy {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PanicPolicy {
	type Err = ConfigError;

	/// Case-insensitive; `-` and `_` are interchangeable.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
			"may_panic" => Ok(PanicPolicy::MayPanic),
			"no_panic" => Ok(PanicPolicy::NoPanic),
			"suppress" => Ok(PanicPolicy::Suppress),
			"infallible_move" => Ok(PanicPolicy::InfallibleMove),
			_ => Err(ConfigError::UnknownPolicy(s.to_owned())),
		}
	}
}

/// A panic raised by a guard's action and caught under
/// [`PanicPolicy::Suppress`].
#[derive(Debug, thiserror::Error)]
#[error("scope guard action panicked: {message}")]
pub struct ActionPanic {
	message: String,
	payload: Box<dyn Any + Send>,
}

impl ActionPanic {
	pub(crate) fn new(payload: Box<dyn Any + Send>) -> Self {
		let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
			(*s).to_owned()
		} else if let Some(s) = payload.downcast_ref::<String>() {
			s.clone()
		} else {
			String::from("Box<dyn Any>")
		};
		ActionPanic { message, payload }
	}

	/// The panic message, if the payload was a string.
	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn payload(&self) -> &(dyn Any + Send) {
		&*self.payload
	}

	/// Take the payload, e.g. to resume the panic elsewhere.
	pub fn into_payload(self) -> Box<dyn Any + Send> {
		self.payload
	}
}

/// Run a guard's action under the configured panic policy.
#[inline]
pub(crate) fn invoke<F>(action: F)
	where F: FnOnce()
{
	let config = config::current();
	match config.policy() {
		PanicPolicy::MayPanic | PanicPolicy::InfallibleMove => action(),
		PanicPolicy::NoPanic => {
			if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(action)) {
				log::error!("{}; aborting under panic policy `{}`",
					ActionPanic::new(payload), PanicPolicy::NoPanic);
				process::abort();
			}
		}
		PanicPolicy::Suppress => {
			if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(action)) {
				config.report(ActionPanic::new(payload));
			}
		}
	}
}

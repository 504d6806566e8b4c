#[cfg(feature = "use_std")]
use crate::probe::UnwindDepth;

/// Controls in which cases the associated code should be run
pub trait Strategy {
	/// State captured when the guard is created and consulted when it drops.
	type Entry;

	/// Capture the entry state (in the context where the guard is created).
	fn enter() -> Self::Entry;

	/// Return `true` if the guard’s associated code should run
	/// (in the context where this method is called).
	fn should_run(entry: &Self::Entry) -> bool;
}

/// Always run on scope exit.
///
/// “Always” run: on regular exit from a scope or on unwinding from a panic.
/// Can not run on abort, process exit, and other catastrophic events where
/// destructors don’t run.
#[derive(Debug)]
pub enum Always {}

/// Run on scope exit through unwinding.
///
/// Only a panic that started after the guard was created counts: a guard
/// created inside a destructor that already runs during unwinding does not
/// fire on that destructor's regular exit.
///
/// The standard library reports whether a thread is unwinding, not how many
/// panics are nested. A panic raised *and caught* inside such a destructor is
/// therefore not seen: a guard armed there does not run while that inner
/// panic unwinds.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[derive(Debug)]
pub enum OnUnwind {}

/// Run on regular scope exit, when not unwinding.
///
/// A panic that was already unwinding when the guard was created does not
/// prevent it from running. For the same reason, a guard armed inside a
/// destructor that runs during unwinding *does* run when a panic raised and
/// caught within that destructor unwinds through its scope, see [`OnUnwind`].
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[derive(Debug)]
pub enum OnSuccess {}

impl Strategy for Always {
	type Entry = ();

	#[inline(always)]
	fn enter() {}

	#[inline(always)]
	fn should_run(_: &()) -> bool { true }
}

#[cfg(feature = "use_std")]
impl Strategy for OnUnwind {
	type Entry = UnwindDepth;

	#[inline]
	fn enter() -> UnwindDepth { UnwindDepth::current() }

	#[inline]
	fn should_run(entry: &UnwindDepth) -> bool { UnwindDepth::current() > *entry }
}

#[cfg(feature = "use_std")]
impl Strategy for OnSuccess {
	type Entry = UnwindDepth;

	#[inline]
	fn enter() -> UnwindDepth { UnwindDepth::current() }

	#[inline]
	fn should_run(entry: &UnwindDepth) -> bool { UnwindDepth::current() <= *entry }
}

use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr;

use crate::{Always, Strategy};
#[cfg(feature = "use_std")]
use crate::{OnSuccess, OnUnwind};

/// `ScopeGuard` runs a deferred action when it goes out of scope.
///
/// If you place a guard in a local variable, the action can run regardless how
/// you leave the scope: through regular return, `break`, `?` or panic (except
/// if panic or other code aborts; so as long as destructors run). It is run at
/// most once.
///
/// The `S` parameter for [`Strategy`](trait.Strategy.html) determines if the
/// action actually runs. [`dismiss`](#method.dismiss) cancels it.
///
/// The action must return `()`, so a result can not be dropped unnoticed:
///
/// ```compile_fail
/// let _guard = scope_exit::guard(|| 42);
/// ```
///
/// Guards are moved, never copied; only the last owner runs the action.
pub struct ScopeGuard<F, S = Always>
	where F: FnOnce(),
		S: Strategy,
{
	dropfn: ManuallyDrop<F>,
	active: bool,
	entry: S::Entry,
	// fn(S) -> S is used, so that the S is not taken into account for auto traits.
	strategy: PhantomData<fn(S) -> S>,
}

impl<F, S> ScopeGuard<F, S>
	where F: FnOnce(),
		S: Strategy,
{
	/// Create a `ScopeGuard` that calls `dropfn` when its destructor runs.
	///
	/// The `Strategy` decides whether the scope guard's action should run.
	///
	/// ```
	/// # #[cfg(feature = "use_std")]
	/// # fn main() {
	/// use scope_exit::{OnUnwind, ScopeGuard};
	///
	/// let _rollback = ScopeGuard::<_, OnUnwind>::with_strategy(|| {
	///     println!("rolling back");
	/// });
	/// # }
	/// # #[cfg(not(feature = "use_std"))]
	/// # fn main() {}
	/// ```
	#[inline]
	#[must_use]
	pub fn with_strategy(dropfn: F) -> ScopeGuard<F, S> {
		ScopeGuard {
			dropfn: ManuallyDrop::new(dropfn),
			active: true,
			entry: S::enter(),
			strategy: PhantomData,
		}
	}

	/// Cancel the action. Calling it again does nothing.
	///
	/// ```
	/// use std::cell::Cell;
	///
	/// let committed = Cell::new(false);
	/// {
	///     let mut rollback = scope_exit::guard(|| committed.set(false));
	///     committed.set(true);
	///     // reached the end without error - keep the changes
	///     rollback.dismiss();
	/// }
	/// assert!(committed.get());
	/// ```
	#[inline]
	pub fn dismiss(&mut self) {
		self.active = false;
	}

	/// Whether the action is still pending.
	#[inline]
	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Run `body`, then exit the guard's scope.
	///
	/// Lets the guard wrap an inline block instead of the rest of the
	/// enclosing scope. Returns what `body` returns.
	///
	/// ```
	/// let mut log = Vec::new();
	/// let n = scope_exit::guard(|| println!("done")).run(|| {
	///     log.push("body");
	///     log.len()
	/// });
	/// assert_eq!(n, 1);
	/// ```
	#[inline]
	pub fn run<R, B>(self, body: B) -> R
		where B: FnOnce() -> R
	{
		let _guard = self;
		body()
	}

	/// “Defuse” the guard and extract the action without calling it.
	///
	/// ```
	/// use scope_exit::{guard, ScopeGuard};
	///
	/// fn conditional() -> bool { true }
	///
	/// let mut v = vec![1, 2, 3];
	/// let guard = guard(|| println!("cleanup"));
	/// if conditional() {
	///     // a condition maybe makes us decide to
	///     // “defuse” the guard and get back the action
	///     let action = ScopeGuard::into_inner(guard);
	///     v.clear();
	///     action();
	/// } else {
	///     // guard still exists in this branch
	/// }
	/// ```
	#[inline]
	pub fn into_inner(guard: Self) -> F {
		// Cannot move out of `Drop`-implementing types,
		// so take the action and forget the guard.
		let mut guard = ManuallyDrop::new(guard);
		// The guard is never dropped, so `dropfn` is taken and `entry`
		// dropped exactly once.
		unsafe {
			let dropfn = ManuallyDrop::take(&mut guard.dropfn);
			// Drop the entry after `dropfn` has been taken, so that if the
			// entry's `drop` function panics, unwinding still drops `dropfn`.
			ptr::drop_in_place(&mut guard.entry);
			dropfn
		}
	}
}

/// Create a new `ScopeGuard` with deferred action `dropfn`.
#[inline]
#[must_use]
pub fn guard<F>(dropfn: F) -> ScopeGuard<F, Always>
	where F: FnOnce()
{
	ScopeGuard::with_strategy(dropfn)
}

/// Create a new `ScopeGuard` with deferred action `dropfn`, run only if the
/// scope is exited without unwinding.
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[inline]
#[must_use]
pub fn guard_on_success<F>(dropfn: F) -> ScopeGuard<F, OnSuccess>
	where F: FnOnce()
{
	ScopeGuard::with_strategy(dropfn)
}

/// Create a new `ScopeGuard` with deferred action `dropfn`, run only if the
/// scope is exited by unwinding from a panic.
///
/// Requires crate feature `use_std`.
///
/// ## Examples
///
/// For performance reasons, or to emulate “only run guard on unwind” in
/// no-std environments, we can also use the default guard and simply manually
/// dismiss it at the end of scope like the following example. (The performance
/// reason would be if the [`OnUnwind`]'s call to [std::thread::panicking()] is
/// an issue.)
///
/// ```
/// {
///     let mut guard = scope_exit::guard(|| {});
///
///     // rest of the code here
///
///     // we reached the end of scope without unwinding - dismiss it
///     guard.dismiss();
/// }
/// ```
#[cfg(feature = "use_std")]
#[inline]
#[must_use]
pub fn guard_on_unwind<F>(dropfn: F) -> ScopeGuard<F, OnUnwind>
	where F: FnOnce()
{
	ScopeGuard::with_strategy(dropfn)
}

// ScopeGuard can be Sync even if F isn't because the action is
// not accessible from references.
unsafe impl<F, S> Sync for ScopeGuard<F, S>
	where F: FnOnce(),
		S: Strategy,
		S::Entry: Sync,
{}

impl<F, S> Drop for ScopeGuard<F, S>
	where F: FnOnce(),
		S: Strategy
{
	fn drop(&mut self) {
		// This is OK because `dropfn` is a `ManuallyDrop`, which will not be
		// dropped by the compiler, and `into_inner` never lets this run.
		let dropfn = unsafe { ManuallyDrop::take(&mut self.dropfn) };
		if self.active && S::should_run(&self.entry) {
			self.active = false;
			#[cfg(feature = "use_std")]
			crate::policy::invoke(dropfn);
			#[cfg(not(feature = "use_std"))]
			dropfn();
		}
	}
}

impl<F, S> fmt::Debug for ScopeGuard<F, S>
	where F: FnOnce(),
		S: Strategy
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct(stringify!(ScopeGuard))
			.field("active", &self.active)
			.finish()
	}
}

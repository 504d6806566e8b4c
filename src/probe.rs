use std::thread;

/// Number of panics unwinding the current thread's stack.
///
/// The standard library reports whether the thread is unwinding, not how
/// many panics are nested, so the depth observed here is `0` or `1`. A panic
/// escaping a destructor that runs during unwinding aborts the process, which
/// leaves a panic caught *inside* such a destructor as the only way to nest
/// deeper; that case reads as depth `1`.
///
/// Depths are compared, not tested for zero: a guard armed while a panic is
/// already unwinding records depth `1`, and only a larger depth at drop time
/// means a panic started in the guard's own scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnwindDepth(usize);

impl UnwindDepth {
	/// Probe the current thread.
	#[inline]
	pub fn current() -> Self {
		UnwindDepth(thread::panicking() as usize)
	}

	#[inline]
	pub fn get(self) -> usize {
		self.0
	}

	#[inline]
	pub fn is_unwinding(self) -> bool {
		self.0 > 0
	}
}

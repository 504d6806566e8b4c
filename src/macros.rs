/// Macro to create a `ScopeGuard` (always run).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited.
///
/// ```
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// for name in ["A", "B"] {
///     scope_exit::defer!(log.borrow_mut().push(name));
///     if name == "A" {
///         continue;
///     }
/// }
/// assert_eq!(*log.borrow(), ["A", "B"]);
/// ```
///
/// Prefix the statements with `let name =>` to bind the guard, e.g. to
/// dismiss it later:
///
/// ```
/// use std::cell::Cell;
///
/// let undone = Cell::new(false);
/// {
///     scope_exit::defer!(let undo => undone.set(true));
///     undo.dismiss();
/// }
/// assert!(!undone.get());
/// ```
#[macro_export]
macro_rules! defer {
	(let $name:ident => $($t:tt)*) => {
		#[allow(unused_mut)]
		let mut $name = $crate::guard(|| { $($t)* });
	};
	($($t:tt)*) => {
		let _guard = $crate::guard(|| { $($t)* });
	};
}

/// Macro to create a `ScopeGuard` (run on successful scope exit).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited. `let name =>` binds the guard,
/// as with [`defer!`].
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[macro_export]
macro_rules! defer_on_success {
	(let $name:ident => $($t:tt)*) => {
		#[allow(unused_mut)]
		let mut $name = $crate::guard_on_success(|| { $($t)* });
	};
	($($t:tt)*) => {
		let _guard = $crate::guard_on_success(|| { $($t)* });
	};
}

/// Macro to create a `ScopeGuard` (run on unwinding from panic).
///
/// The macro takes statements, which are the body of a closure
/// that will run when the scope is exited. `let name =>` binds the guard,
/// as with [`defer!`].
///
/// Requires crate feature `use_std`.
#[cfg(feature = "use_std")]
#[macro_export]
macro_rules! defer_on_unwind {
	(let $name:ident => $($t:tt)*) => {
		#[allow(unused_mut)]
		let mut $name = $crate::guard_on_unwind(|| { $($t)* });
	};
	($($t:tt)*) => {
		let _guard = $crate::guard_on_unwind(|| { $($t)* });
	};
}

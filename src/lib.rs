//! A scope guard will run a given action when it goes out of scope,
//! even if the code between panics.
//! (as long as panic doesn't abort)
//!
//! # Examples
//!
//! ## Hello World
//!
//! This example creates a scope guard with an action that prints a message
//! once the enclosing scope is left.
//!
//! ```
//! fn f() {
//!     let _guard = scope_exit::guard(|| {
//!         println!("Hello Scope Exit!");
//!     });
//!     // rest of the code here.
//!
//!     // Here, at the end of `_guard`'s scope, the guard's action is called.
//! }
//! # f();
//! ```
//!
//! ## `defer!`
//!
//! Use the `defer` macro to run an operation at scope exit,
//! either regular scope exit or during unwinding from a panic.
//!
//! ```
//! use std::cell::Cell;
//!
//! // use a cell to observe drops during and after the scope guard is active
//! let drop_counter = Cell::new(0);
//! {
//!     // Create a scope guard using `defer!` for the current scope
//!     scope_exit::defer! {
//!         drop_counter.set(1 + drop_counter.get());
//!     }
//!
//!     // Do regular operations here in the meantime.
//!
//!     // Just before scope exit: it hasn't run yet.
//!     assert_eq!(drop_counter.get(), 0);
//!
//!     // The following scope end is where the defer closure is called
//! }
//! assert_eq!(drop_counter.get(), 1);
//! ```
//!
//! ## Rollback on failure
//!
//! A guard with the [`OnUnwind`] strategy only runs if a panic unwinds
//! through its scope, which makes it a natural rollback step:
//!
//! ```
//! # #[cfg(feature = "use_std")]
//! # fn main() {
//! use std::cell::RefCell;
//! use std::panic::{catch_unwind, AssertUnwindSafe};
//!
//! let stack = RefCell::new(vec![1, 2]);
//! let result = catch_unwind(AssertUnwindSafe(|| {
//!     stack.borrow_mut().push(3);
//!     scope_exit::defer_on_unwind!(stack.borrow_mut().pop(););
//!     panic!("validation failed");
//! }));
//! assert!(result.is_err());
//! assert_eq!(*stack.borrow(), [1, 2]);
//! # }
//! # #[cfg(not(feature = "use_std"))]
//! # fn main() {}
//! ```
//!
//! # Panicking actions
//!
//! What happens when an action panics is a process-wide [`PanicPolicy`],
//! chosen once with [`configure`] or through the `SCOPE_EXIT_PANIC_POLICY`
//! environment variable. The default lets the panic propagate.
//!
//! # Crate Features
//!
//! - `use_std`
//!   + Enabled by default. Enables the `OnUnwind` and `OnSuccess` strategies
//!     and the panic policy configuration.
//!   + Disable to use `no_std`; actions are then always called directly.

#![cfg_attr(not(any(test, feature = "use_std")), no_std)]

#[cfg(not(any(test, feature = "use_std")))]
extern crate core as std;

#[macro_use]
mod macros;
mod scope_guard;
mod strategy;
#[cfg(feature = "use_std")]
mod config;
#[cfg(feature = "use_std")]
mod policy;
#[cfg(feature = "use_std")]
mod probe;

pub use crate::scope_guard::{guard, ScopeGuard};
pub use crate::strategy::{Always, Strategy};
#[cfg(feature = "use_std")]
pub use crate::scope_guard::{guard_on_success, guard_on_unwind};
#[cfg(feature = "use_std")]
pub use crate::strategy::{OnSuccess, OnUnwind};
#[cfg(feature = "use_std")]
pub use crate::config::{configure, panic_policy, Config, ConfigError, POLICY_ENV};
#[cfg(feature = "use_std")]
pub use crate::policy::{ActionPanic, PanicPolicy};
#[cfg(feature = "use_std")]
pub use crate::probe::UnwindDepth;

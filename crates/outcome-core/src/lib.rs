//! Outcome Core - Explicit, composable results without raising errors
//!
//! An [`Outcome`] records how an operation ended: **Success**, **Failure** or
//! **NotFound**, optionally with a typed payload and always with a small
//! [`Metadata`] record (timestamp, warnings, free-form context). Combinators
//! compose outcomes so expected failures travel as values; only a handful of
//! boundary operations turn a failing outcome into an `Err`.
//!
//! # Architecture
//!
//! 1. **Outcome** (`outcome`): the value type, its factories and predicates
//! 2. **Combinators** (`combinators`): combine, on_success, map, tap,
//!    with_context and the boundary operations, plus their async forms
//! 3. **Metadata** (`metadata`): passive, separately mutable record owned by
//!    every outcome
//!
//! # Quick Start
//!
//! ```
//! use outcome_core::{NotFoundPolicy, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::success(port),
//!         Err(_) => Outcome::fail(format!("invalid port: {raw}")).unwrap(),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1);
//! assert_eq!(port.value(), Some(&8081));
//!
//! let bad = parse_port("eighty").on_success(|p| Outcome::success(p as u32));
//! assert_eq!(bad.error(), "invalid port: eighty");
//! assert!(bad.raise_on_failure().is_err());
//!
//! let missing: Outcome<u16> = Outcome::not_found("no port configured").unwrap();
//! assert!(missing.classify(NotFoundPolicy::TreatAsFailure).is_failure());
//! assert!(missing.classify(NotFoundPolicy::TreatAsSuccess).is_success());
//! ```
//!
//! # Thread safety
//!
//! Outcomes are plain values. [`Metadata`] writes (`with_context`,
//! `with_warning`) take `&mut self` and are not synchronized; share an
//! outcome between concurrent writers only behind a lock.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms, missing_debug_implementations, clippy::all)]

pub mod combinators;
pub mod config;
pub mod error;
pub mod metadata;
pub mod outcome;
pub mod types;

// Re-export commonly used types for convenience
pub use combinators::{on_success_async, value_or_raise_async};
pub use config::OutcomeConfig;
pub use error::{OutcomeError, Result, ResultExt};
pub use metadata::Metadata;
pub use outcome::Outcome;
pub use types::{NotFoundPolicy, Status, Timestamp, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Combinators over [`Outcome`]
//!
//! None of these raise for a domain failure. A failing outcome is carried
//! forward by re-wrapping it into the next payload type with its status and
//! error message unchanged. The propagated outcome keeps the metadata of the
//! outcome that failed rather than starting with a fresh record. Only the boundary operations
//! ([`Outcome::value_or_raise`], [`Outcome::raise_on_failure`],
//! [`Outcome::ensure_success`]) turn a failing outcome into an `Err`.
//!
//! | combinator            | NotFound classified as |
//! |-----------------------|------------------------|
//! | `combine`             | failure                |
//! | `on_success`, `map`   | failure                |
//! | `tap`, `tap_outcome`  | success                |
//! | `value_or_raise`      | failure                |
//! | `raise_on_failure`    | failure                |

pub mod future;

pub use future::{on_success_async, value_or_raise_async};

use crate::error::{OutcomeError, Result};
use crate::outcome::Outcome;
use crate::types::NotFoundPolicy;

impl<T> Outcome<T> {
    /// Continue with `next` unless `self` is failing.
    ///
    /// Short-circuits exactly when `self.is_failure_with(false)`: on a
    /// failure and on a not-found. [`combine_with`](Self::combine_with) lets a
    /// not-found through. `next` is already evaluated by the caller.
    pub fn combine<U>(self, next: Outcome<U>) -> Outcome<U> {
        self.combine_with(next, NotFoundPolicy::TreatAsFailure)
    }

    /// If `self` is failing under `policy`, return its failure re-wrapped to
    /// `next`'s payload type, metadata included; otherwise return `next`.
    pub fn combine_with<U>(self, next: Outcome<U>, policy: NotFoundPolicy) -> Outcome<U> {
        let short_circuit = self.classify(policy).is_failure();
        match self.into_parts_or_propagate() {
            Err(failed) if short_circuit => {
                tracing::debug!("combine short-circuited on {}", failed.status());
                failed
            }
            _ => next,
        }
    }

    /// Chain an operation on the payload.
    ///
    /// Failures and not-founds are propagated without calling `next`; the
    /// source metadata is moved into the propagated outcome. On success the
    /// source metadata is dropped: the result is whatever `next` returns,
    /// with its own metadata.
    pub fn on_success<U, F>(self, next: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.into_parts_or_propagate() {
            Ok((value, _)) => next(value),
            Err(failed) => {
                tracing::debug!("on_success short-circuited on {}", failed.status());
                failed
            }
        }
    }

    /// Transform the payload of a success.
    ///
    /// The source metadata (timestamp, warnings and context) is moved into
    /// the new outcome, whether it succeeds or propagates a failure; no fresh
    /// record is created. `mapper` is never called for a failing outcome.
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_parts_or_propagate() {
            Ok((value, metadata)) => Outcome::success(mapper(value)).with_metadata(metadata),
            Err(failed) => failed,
        }
    }

    /// Run `action` on the payload for its side effect and return `self`.
    ///
    /// Runs for a success and for a not-found that carries a payload.
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if self.classify(NotFoundPolicy::TreatAsSuccess).is_success() {
            if let Some(value) = self.value() {
                action(value);
            }
        }
        self
    }

    /// Run `action` on the whole outcome for its side effect and return `self`.
    ///
    /// Runs for a success and for any not-found, payload or not.
    pub fn tap_outcome<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if self.classify(NotFoundPolicy::TreatAsSuccess).is_success() {
            action(&self);
        }
        self
    }

    /// Insert or overwrite a context entry in this outcome's metadata.
    ///
    /// Returns the same outcome so calls can be chained.
    pub fn with_context(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> &mut Self {
        self.metadata_mut().insert_context(key, value);
        self
    }

    /// Append a warning to this outcome's metadata
    pub fn with_warning(&mut self, warning: impl Into<String>) -> &mut Self {
        self.metadata_mut().push_warning(warning);
        self
    }

    /// Payload of a success, or [`OutcomeError::Failed`] carrying the error
    /// message for anything else.
    pub fn value_or_raise(self) -> Result<T> {
        match self.into_parts_or_propagate::<T>() {
            Ok((value, _)) => Ok(value),
            Err(failed) => {
                tracing::debug!("Raising {} outcome at boundary", failed.status());
                Err(OutcomeError::Failed(failed.error().to_string()))
            }
        }
    }

    /// [`OutcomeError::Failed`] for a failure and for a not-found.
    ///
    /// Raises exactly when `is_failure_with(false)` holds, which includes every
    /// outcome for which `is_failure_with(true)` holds.
    pub fn raise_on_failure(&self) -> Result<()> {
        self.raise_on_failure_with(NotFoundPolicy::TreatAsFailure)
    }

    /// [`OutcomeError::Failed`] if failing under `policy`, otherwise `Ok(())`
    pub fn raise_on_failure_with(&self, policy: NotFoundPolicy) -> Result<()> {
        if self.classify(policy).is_failure() {
            tracing::debug!("Raising {} outcome at boundary", self.status());
            return Err(OutcomeError::Failed(self.error().to_string()));
        }
        Ok(())
    }
}

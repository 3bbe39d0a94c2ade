//! The `Outcome` value type
//!
//! An outcome is one of three states, fixed at construction:
//!
//! - **Success**, always carrying a payload (`()` for the untyped outcome)
//! - **Failure**, carrying a non-empty error message
//! - **NotFound**, carrying a non-empty message and optionally a payload
//!
//! Besides its state every outcome owns a [`Metadata`] record. The state never
//! changes after construction; only the metadata accepts writes.
//!
//! # Predicates and policies
//!
//! `is_success_with` and `is_failure_with` keep their historical truth table,
//! in which the `treat_not_found_as_failure` flag means something different
//! for each predicate:
//!
//! | status   | is_success_with(true) | is_success_with(false) | is_failure_with(true) | is_failure_with(false) |
//! |----------|-----------------------|------------------------|-----------------------|------------------------|
//! | Success  | true                  | true                   | false                 | false                  |
//! | Failure  | true                  | false                  | false                 | true                   |
//! | NotFound | false                 | false                  | true                  | true                   |
//!
//! The table above is for the untyped outcome, whose payload is zero-sized.
//! A typed outcome is a success under either flag only while it holds a
//! payload, so a typed `Failure` (and a payload-less `NotFound`) is never a
//! success. `is_failure_with` is the same for both.
//!
//! The two are not complements (an untyped `Failure` is a "success" under the
//! default flag). New code should use [`Outcome::classify`] with an explicit
//! [`NotFoundPolicy`], which is what every combinator in this crate does.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::config::OutcomeConfig;
use crate::error::{OutcomeError, Result};
use crate::metadata::Metadata;
use crate::types::{NotFoundPolicy, Status, Verdict};

#[derive(Debug, Clone)]
enum State<T> {
    Success(T),
    Failure(String),
    NotFound { value: Option<T>, message: String },
}

/// Result of an operation: success, failure or not-found, plus metadata.
///
/// `Outcome` without a type parameter is the untyped outcome, `Outcome<()>`.
#[derive(Debug, Clone)]
pub struct Outcome<T = ()> {
    state: State<T>,
    metadata: Metadata,
}

fn violation(message: &str) -> OutcomeError {
    tracing::warn!("Rejected outcome construction: {}", message);
    OutcomeError::InvariantViolation(message.to_string())
}

impl Outcome<()> {
    /// Untyped success
    pub fn ok() -> Self {
        Self::success(())
    }

    /// Untyped success carrying warnings
    pub fn ok_with_warnings<I, S>(warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut outcome = Self::ok();
        outcome.metadata.extend_warnings(warnings);
        outcome
    }

    /// Combine many outcomes into one untyped outcome.
    ///
    /// If any input is failing (`NotFound` counts as failing), the result is a
    /// failure whose error joins every failing input's error with a newline,
    /// in input order. Otherwise the result is a success carrying every
    /// input's warnings, in input order.
    pub fn combine_all<U, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome<U>>,
    {
        Self::combine_all_with(outcomes, &OutcomeConfig::default())
    }

    /// [`combine_all`](Self::combine_all) with the policy and separator taken
    /// from `config`
    pub fn combine_all_with<U, I>(outcomes: I, config: &OutcomeConfig) -> Self
    where
        I: IntoIterator<Item = Outcome<U>>,
    {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for outcome in outcomes {
            if outcome.classify(config.not_found).is_failure() {
                errors.push(outcome.error().to_string());
            } else {
                warnings.extend(outcome.metadata.warnings().iter().cloned());
            }
        }

        if errors.is_empty() {
            return Self::ok_with_warnings(warnings);
        }

        tracing::debug!("Combined {} failing outcome(s)", errors.len());
        Self::failure(errors.join(config.error_separator.as_str()))
    }
}

impl<T> Outcome<T> {
    fn from_state(state: State<T>) -> Self {
        Self {
            state,
            metadata: Metadata::new(),
        }
    }

    /// Failure whose message is known to be non-empty
    pub(crate) fn failure(message: String) -> Self {
        debug_assert!(!message.is_empty());
        Self::from_state(State::Failure(message))
    }

    /// Success carrying `value`
    pub fn success(value: T) -> Self {
        Self::from_state(State::Success(value))
    }

    /// Failure with `message`.
    ///
    /// Fails with [`OutcomeError::InvariantViolation`] if `message` is empty.
    pub fn fail(message: impl Into<String>) -> Result<Self> {
        let message = message.into();
        if message.is_empty() {
            return Err(violation("a failure outcome requires a non-empty error"));
        }
        Ok(Self::failure(message))
    }

    /// NotFound without a payload.
    ///
    /// Fails with [`OutcomeError::InvariantViolation`] if `message` is empty.
    pub fn not_found(message: impl Into<String>) -> Result<Self> {
        Self::build_not_found(None, message.into())
    }

    /// NotFound carrying a payload
    pub fn not_found_with(value: T, message: impl Into<String>) -> Result<Self> {
        Self::build_not_found(Some(value), message.into())
    }

    fn build_not_found(value: Option<T>, message: String) -> Result<Self> {
        if message.is_empty() {
            return Err(violation("a not-found outcome requires a non-empty error"));
        }
        Ok(Self::from_state(State::NotFound { value, message }))
    }

    /// Build an outcome from loose parts, checking every invariant.
    ///
    /// - `Success` requires an empty error and a payload
    /// - `Failure` requires a non-empty error and no payload
    /// - `NotFound` requires a non-empty error
    pub fn from_parts(status: Status, error: impl Into<String>, value: Option<T>) -> Result<Self> {
        let error = error.into();
        if status.requires_error() && error.is_empty() {
            return Err(violation(&format!("a {status} outcome requires a non-empty error")));
        }
        if !status.requires_error() && !error.is_empty() {
            return Err(violation(&format!("a {status} outcome cannot carry an error")));
        }

        let state = match (status, value) {
            (Status::Success, Some(value)) => State::Success(value),
            (Status::Success, None) => {
                return Err(violation("a success outcome requires a payload"))
            }
            (Status::Failure, None) => State::Failure(error),
            (Status::Failure, Some(_)) => {
                return Err(violation("a failure outcome cannot carry a payload"))
            }
            (Status::NotFound, value) => State::NotFound {
                value,
                message: error,
            },
        };
        Ok(Self::from_state(state))
    }

    pub fn status(&self) -> Status {
        match self.state {
            State::Success(_) => Status::Success,
            State::Failure(_) => Status::Failure,
            State::NotFound { .. } => Status::NotFound,
        }
    }

    /// Error message; empty for a success
    pub fn error(&self) -> &str {
        match &self.state {
            State::Success(_) => "",
            State::Failure(message) => message,
            State::NotFound { message, .. } => message,
        }
    }

    /// Payload, present for a success and for a not-found built with a value
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
            State::NotFound { value, .. } => value.as_ref(),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
            State::NotFound { value, .. } => value,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn warnings(&self) -> &[String] {
        self.metadata.warnings()
    }

    /// `is_success_with(true)`: anything but `NotFound` for the untyped
    /// outcome, only `Success` for a typed one
    pub fn is_success(&self) -> bool {
        self.is_success_with(true)
    }

    /// With the flag set, true unless the status is `NotFound`. With the flag
    /// cleared, true only for `Success`.
    ///
    /// A typed outcome (any payload that is not zero-sized) must also hold a
    /// payload, so `Outcome::<i32>::fail(..)` is never a success.
    pub fn is_success_with(&self, treat_not_found_as_failure: bool) -> bool {
        let status_passes = if treat_not_found_as_failure {
            self.status() != Status::NotFound
        } else {
            self.status() == Status::Success
        };
        status_passes && (std::mem::size_of::<T>() == 0 || self.value().is_some())
    }

    /// `is_failure_with(true)`: only `NotFound`
    pub fn is_failure(&self) -> bool {
        self.is_failure_with(true)
    }

    /// With the flag set, true only for `NotFound`. With the flag cleared,
    /// true for anything but `Success`.
    pub fn is_failure_with(&self, treat_not_found_as_failure: bool) -> bool {
        if treat_not_found_as_failure {
            self.status() == Status::NotFound
        } else {
            self.status() != Status::Success
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Status::NotFound
    }

    /// Success or failure under an explicit NotFound policy
    pub fn classify(&self, policy: NotFoundPolicy) -> Verdict {
        self.status().classify(policy)
    }

    /// Return `self` unless it is failing (`NotFound` included), in which case
    /// the error built by `factory` from the message is returned instead.
    pub fn ensure_success<E, F>(self, factory: F) -> std::result::Result<Self, E>
    where
        F: FnOnce(&str) -> E,
    {
        if self.classify(NotFoundPolicy::TreatAsFailure).is_failure() {
            tracing::debug!("ensure_success on {} outcome", self.status());
            return Err(factory(self.error()));
        }
        Ok(self)
    }

    /// Gather the payloads of many outcomes.
    ///
    /// Uses the same failure rule as [`Outcome::combine_all`]; on success the
    /// payloads are collected in input order and warnings are carried over.
    pub fn collect<I>(outcomes: I) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        Self::collect_with(outcomes, &OutcomeConfig::default())
    }

    /// [`collect`](Self::collect) with the policy and separator taken from
    /// `config`. Under `TreatAsSuccess`, not-found inputs without a payload
    /// contribute nothing.
    pub fn collect_with<I>(outcomes: I, config: &OutcomeConfig) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        let mut errors = Vec::new();
        let mut values = Vec::new();
        let mut warnings = Vec::new();

        for outcome in outcomes {
            if outcome.classify(config.not_found).is_failure() {
                errors.push(outcome.error().to_string());
                continue;
            }
            warnings.extend(outcome.metadata.warnings().iter().cloned());
            if let Some(value) = outcome.into_value() {
                values.push(value);
            }
        }

        if !errors.is_empty() {
            tracing::debug!("Collected {} failing outcome(s)", errors.len());
            return Outcome::failure(errors.join(config.error_separator.as_str()));
        }

        let mut collected = Outcome::success(values);
        collected.metadata.extend_warnings(warnings);
        collected
    }

    /// Split a success into payload and metadata, or re-wrap a failing
    /// outcome into another payload type.
    ///
    /// Failure stays Failure, NotFound stays NotFound (its payload is
    /// dropped). The message and the metadata move over unchanged.
    pub(crate) fn into_parts_or_propagate<U>(
        self,
    ) -> std::result::Result<(T, Metadata), Outcome<U>> {
        let state = match self.state {
            State::Success(value) => return Ok((value, self.metadata)),
            State::Failure(message) => State::Failure(message),
            State::NotFound { message, .. } => State::NotFound {
                value: None,
                message,
            },
        };
        Err(Outcome {
            state,
            metadata: self.metadata,
        })
    }

    pub(crate) fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            Status::Success => write!(f, "{}", Status::Success),
            status => write!(f, "{}: {}", status, self.error()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeView<'a, T> {
    status: Status,
    error: &'a str,
    value: Option<&'a T>,
    metadata: &'a Metadata,
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        OutcomeView {
            status: self.status(),
            error: self.error(),
            value: self.value(),
            metadata: &self.metadata,
        }
        .serialize(serializer)
    }
}

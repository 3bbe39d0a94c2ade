//! Core types for Outcome Core
//!
//! - Outcome status
//! - NotFound classification policy
//! - Timestamps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an outcome, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Failure,
    NotFound,
}

impl Status {
    /// Classify this status as a plain success or failure.
    ///
    /// `Failure` is always a failure and `Success` always a success; only
    /// `NotFound` depends on the policy.
    pub fn classify(self, policy: NotFoundPolicy) -> Verdict {
        match (self, policy) {
            (Status::Success, _) => Verdict::Success,
            (Status::Failure, _) => Verdict::Failure,
            (Status::NotFound, NotFoundPolicy::TreatAsFailure) => Verdict::Failure,
            (Status::NotFound, NotFoundPolicy::TreatAsSuccess) => Verdict::Success,
        }
    }

    /// Whether an outcome with this status must carry a non-empty error
    pub fn requires_error(self) -> bool {
        !matches!(self, Status::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Success => "success",
            Status::Failure => "failure",
            Status::NotFound => "not_found",
        };
        f.write_str(name)
    }
}

/// How a `NotFound` outcome is classified by combinators.
///
/// Not convertible from the `treat_not_found_as_failure` flag of
/// [`Outcome::is_failure_with`](crate::Outcome::is_failure_with): that
/// predicate counts `NotFound` as failing for both flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundPolicy {
    #[default]
    TreatAsFailure,
    TreatAsSuccess,
}

/// Two-way classification of an outcome under a [`NotFoundPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Success,
    Failure,
}

impl Verdict {
    pub fn is_success(self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Verdict::Failure)
    }
}

/// Timestamp type alias
pub type Timestamp = DateTime<Utc>;

/// Create a timestamp for the current moment
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_only_not_found_depends_on_policy() {
        use NotFoundPolicy::*;

        assert_eq!(Status::Success.classify(TreatAsFailure), Verdict::Success);
        assert_eq!(Status::Success.classify(TreatAsSuccess), Verdict::Success);
        assert_eq!(Status::Failure.classify(TreatAsFailure), Verdict::Failure);
        assert_eq!(Status::Failure.classify(TreatAsSuccess), Verdict::Failure);
        assert_eq!(Status::NotFound.classify(TreatAsFailure), Verdict::Failure);
        assert_eq!(Status::NotFound.classify(TreatAsSuccess), Verdict::Success);
    }

    #[test]
    fn test_default_policy_treats_not_found_as_failure() {
        assert_eq!(NotFoundPolicy::default(), NotFoundPolicy::TreatAsFailure);
    }

    #[test]
    fn test_requires_error() {
        assert!(!Status::Success.requires_error());
        assert!(Status::Failure.requires_error());
        assert!(Status::NotFound.requires_error());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Success.to_string(), "success");
        assert_eq!(Status::NotFound.to_string(), "not_found");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&Status::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
        let parsed: Status = serde_json::from_str("\"failure\"").unwrap();
        assert_eq!(parsed, Status::Failure);
    }
}

//! Success/failure contract shared by every primitive and front end.
//!
//! # Design
//! - Exactly two variants: a success always carries its payload, a failure
//!   always carries a human-readable message and nothing else.
//! - Values are built once and consumed by the caller; there are no setters.

use std::fmt::Display;

/// Result of a single operation as seen by the menu and one-shot front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The operation completed and produced `T`.
    Success(T),
    /// The operation did not complete; the message is shown to the user verbatim.
    Failure(String),
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `value`.
    pub const fn succeed(value: T) -> Self {
        Self::Success(value)
    }

    /// Failed outcome carrying `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Run `action` and capture its result; an error becomes a failure whose
    /// message is the error's `Display` text.
    pub fn capture<E: Display>(action: impl FnOnce() -> Result<T, E>) -> Self {
        Self::from(action())
    }

    /// Whether the outcome is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Payload of a successful outcome.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Message of a failed outcome.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Transform the payload of a successful outcome.
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(op(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_payload_and_no_message() {
        let outcome = Outcome::succeed(7_usize);
        assert!(outcome.is_success());
        assert_eq!(outcome.data(), Some(&7));
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn failure_carries_message_and_no_payload() {
        let outcome: Outcome<String> = Outcome::fail("Error: nope.");
        assert!(!outcome.is_success());
        assert_eq!(outcome.data(), None);
        assert_eq!(outcome.error(), Some("Error: nope."));
    }

    #[test]
    fn from_result_uses_display_of_error() {
        let err: Result<(), std::io::Error> = Err(std::io::Error::other("disk on fire"));
        let outcome = Outcome::from(err);
        assert_eq!(outcome.error(), Some("disk on fire"));

        let ok: Result<u8, std::io::Error> = Ok(3);
        assert_eq!(Outcome::from(ok), Outcome::Success(3));
    }

    #[test]
    fn map_leaves_failures_untouched() {
        let doubled = Outcome::succeed(2).map(|value| value * 2);
        assert_eq!(doubled, Outcome::Success(4));

        let failed: Outcome<i32> = Outcome::fail("broken");
        assert_eq!(failed.map(|value| value * 2), Outcome::Failure("broken".into()));
    }

    #[test]
    fn capture_runs_the_action_once() {
        let mut calls = 0;
        let outcome = Outcome::capture(|| {
            calls += 1;
            "42".parse::<u32>()
        });
        assert_eq!(outcome, Outcome::Success(42));
        assert_eq!(calls, 1);

        let outcome = Outcome::capture(|| "forty".parse::<u32>());
        assert_eq!(outcome.error(), Some("invalid digit found in string"));
    }
}

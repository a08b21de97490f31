//! Lifecycle events of an external async request.

use serde::{Deserialize, Serialize};

/// One observable step of an async request made outside the reducer.
///
/// A caller dispatches `Pending` before awaiting the request and then
/// exactly one of `Fulfilled` or `Rejected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", content = "value", rename_all = "lowercase")]
pub enum RequestEvent<T> {
    /// Request has been sent and is outstanding.
    Pending,

    /// Request completed with a payload.
    Fulfilled(T),

    /// Request failed with a human-readable message.
    Rejected { message: String },
}

impl<T> RequestEvent<T> {
    /// Shorthand for a rejection.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Stage name as used in action type strings (`pending`, `fulfilled`, `rejected`).
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled(_) => "fulfilled",
            Self::Rejected { .. } => "rejected",
        }
    }

    /// Transform the fulfilled payload, keeping the stage.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RequestEvent<U> {
        match self {
            Self::Pending => RequestEvent::Pending,
            Self::Fulfilled(value) => RequestEvent::Fulfilled(f(value)),
            Self::Rejected { message } => RequestEvent::Rejected { message },
        }
    }

    /// Whether this event ends the request.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

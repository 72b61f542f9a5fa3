//! Structured outcome of the payment workflow.

use common::OrderId;
use domain::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a payment attempt.
///
/// Callers above the workflow only ever see this type, never a raw domain
/// error. On failure the `error` field carries the human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PayOrderOutcome {
    /// The full load-pay-charge-save sequence succeeded.
    Success {
        order_id: OrderId,
        amount: Decimal,
        currency: String,
    },

    /// Some step failed; nothing was persisted.
    Failure { error: String },
}

impl PayOrderOutcome {
    /// Builds a success outcome from the charged total.
    pub fn success(order_id: OrderId, total: &Money) -> Self {
        Self::Success {
            order_id,
            amount: total.amount(),
            currency: total.currency().to_string(),
        }
    }

    /// Builds a failure outcome with the given reason.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// Returns true for a success outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the failure reason, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

impl std::fmt::Display for PayOrderOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success {
                order_id,
                amount,
                currency,
            } => write!(f, "paid {currency} {amount:.2} for order {order_id}"),
            Self::Failure { error } => write!(f, "payment failed: {error}"),
        }
    }
}

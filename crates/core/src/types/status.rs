//! Status enums for catalog and workflow entities.
//!
//! Every status field in the database is a closed PostgreSQL enum; the
//! variants here mirror those enum values exactly. Unknown strings are
//! rejected at the serde boundary, so an arbitrary status can never be
//! written through the API.

use serde::{Deserialize, Serialize};

/// Condition grade of a listed sneaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "shop.product_condition", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ProductCondition {
    New,
    Used,
    Restored,
}

impl std::fmt::Display for ProductCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Used => write!(f, "used"),
            Self::Restored => write!(f, "restored"),
        }
    }
}

impl std::str::FromStr for ProductCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "used" => Ok(Self::Used),
            "restored" => Ok(Self::Restored),
            _ => Err(format!("invalid product condition: {s}")),
        }
    }
}

/// Fulfillment status of a customer order.
///
/// Order status is admin-mutated with no transition constraints; the
/// back office moves orders freely between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "shop.order_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Workflow status of a restoration request.
///
/// Requests move through a linear quote-and-approve flow:
/// pending -> quoted -> approved -> in_progress -> completed, with
/// cancellation possible from any non-terminal state. Repeating the
/// current status is always allowed (re-issuing a quote, idempotent
/// admin clicks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "shop.restoration_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum RestorationStatus {
    #[default]
    Pending,
    Quoted,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl RestorationStatus {
    /// Whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether a transition from `self` to `next` is legal.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Self::Pending, Self::Quoted | Self::Cancelled)
                | (Self::Quoted, Self::Approved | Self::Cancelled)
                | (Self::Approved, Self::InProgress | Self::Cancelled)
                | (Self::InProgress, Self::Completed | Self::Cancelled)
        )
    }
}

impl std::fmt::Display for RestorationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Quoted => write!(f, "quoted"),
            Self::Approved => write!(f, "approved"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for RestorationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "quoted" => Ok(Self::Quoted),
            "approved" => Ok(Self::Approved),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid restoration status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_roundtrip() {
        for condition in [
            ProductCondition::New,
            ProductCondition::Used,
            ProductCondition::Restored,
        ] {
            let parsed: ProductCondition = condition.to_string().parse().unwrap();
            assert_eq!(parsed, condition);
        }
        assert!("mint".parse::<ProductCondition>().is_err());
    }

    #[test]
    fn test_order_status_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("refunded".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_restoration_serde_uses_snake_case() {
        let json = serde_json::to_string(&RestorationStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: RestorationStatus = serde_json::from_str("\"quoted\"").unwrap();
        assert_eq!(parsed, RestorationStatus::Quoted);

        assert!(serde_json::from_str::<RestorationStatus>("\"waiting\"").is_err());
    }

    #[test]
    fn test_happy_path_transitions() {
        use RestorationStatus as S;

        assert!(S::Pending.can_transition_to(S::Quoted));
        assert!(S::Quoted.can_transition_to(S::Approved));
        assert!(S::Approved.can_transition_to(S::InProgress));
        assert!(S::InProgress.can_transition_to(S::Completed));
    }

    #[test]
    fn test_cancellation_from_non_terminal_states() {
        use RestorationStatus as S;

        for status in [S::Pending, S::Quoted, S::Approved, S::InProgress] {
            assert!(status.can_transition_to(S::Cancelled));
        }
    }

    #[test]
    fn test_invalid_jumps_rejected() {
        use RestorationStatus as S;

        assert!(!S::Pending.can_transition_to(S::Completed));
        assert!(!S::Pending.can_transition_to(S::Approved));
        assert!(!S::Pending.can_transition_to(S::InProgress));
        assert!(!S::Quoted.can_transition_to(S::Completed));
        assert!(!S::Approved.can_transition_to(S::Quoted));
    }

    #[test]
    fn test_terminal_states_admit_no_transitions() {
        use RestorationStatus as S;

        for status in [S::Completed, S::Cancelled] {
            assert!(status.is_terminal());
            for next in [S::Pending, S::Quoted, S::Approved, S::InProgress] {
                assert!(!status.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_repeating_current_status_is_allowed() {
        use RestorationStatus as S;

        for status in [
            S::Pending,
            S::Quoted,
            S::Approved,
            S::InProgress,
            S::Completed,
            S::Cancelled,
        ] {
            assert!(status.can_transition_to(status));
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::format::capitalize_first;

/// Display label for an application the recruiter has not acted on yet.
pub const PENDING: &str = "Pending";

/// The two transitions a recruiter can apply to an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusChange {
    Selected,
    Rejected,
}

impl StatusChange {
    /// Token sent in the update request body.
    pub fn token(self) -> &'static str {
        match self {
            StatusChange::Selected => "selected",
            StatusChange::Rejected => "rejected",
        }
    }

    /// Label stored locally once the server confirms the change.
    pub fn label(self) -> String {
        capitalize_first(self.token())
    }

    /// Whether the action leading to this status is offered for an
    /// application currently labelled `current`.
    pub fn offered_for(self, current: &str) -> bool {
        current != self.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_capitalized_tokens() {
        assert_eq!(StatusChange::Selected.label(), "Selected");
        assert_eq!(StatusChange::Rejected.label(), "Rejected");
    }

    #[test]
    fn pending_offers_both_actions() {
        assert!(StatusChange::Selected.offered_for(PENDING));
        assert!(StatusChange::Rejected.offered_for(PENDING));
        assert!(!StatusChange::Selected.offered_for("Selected"));
        assert!(StatusChange::Rejected.offered_for("Selected"));
        assert!(!StatusChange::Rejected.offered_for("Rejected"));
    }

    #[test]
    fn serializes_as_wire_token() {
        assert_eq!(
            serde_json::to_string(&StatusChange::Rejected).unwrap(),
            r#""rejected""#
        );
    }
}

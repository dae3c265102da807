use common::views::roster::RosterState;

/// Component state of the roster screen. The list, the query, the category
/// and the fetch bookkeeping all live in the headless `RosterState`.
pub struct RosterView {
    pub roster: RosterState,
}

impl RosterView {
    pub fn new() -> Self {
        Self {
            roster: RosterState::new(),
        }
    }
}

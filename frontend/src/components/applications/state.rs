use common::views::applications::ApplicationsState;

/// Component state of the applications screen.
pub struct ApplicationsView {
    /// List, filters, selection and fetch bookkeeping.
    pub applications: ApplicationsState,
}

impl ApplicationsView {
    pub fn new() -> Self {
        Self {
            applications: ApplicationsState::new(),
        }
    }
}

use std::time::Duration;

use crate::routes::Route;

/// Delay between showing the session-expired message and leaving for login.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Side effects a state transition asks the component to perform.
///
/// The state machines stay pure; the Yew components translate these into
/// timers, toasts and navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to `route` once `after` has elapsed.
    Redirect { route: Route, after: Duration },
    /// Navigate right away.
    Navigate(Route),
    /// Show a transient, non-blocking notification.
    Notify(String),
}

impl Effect {
    pub fn login_redirect() -> Self {
        Effect::Redirect {
            route: Route::Login,
            after: LOGIN_REDIRECT_DELAY,
        }
    }
}

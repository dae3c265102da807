//! Properties accepted by `RosterView`.

use common::routes::Route;
use yew::prelude::*;

use crate::config::ApiConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct RosterProps {
    /// Where the people endpoint lives. Defaults to the build-time configuration.
    #[prop_or_default]
    pub api: ApiConfig,

    /// Router hook for profile and login navigation. Without it the screen
    /// falls back to a full page load.
    #[prop_or_default]
    pub on_navigate: Option<Callback<Route>>,
}

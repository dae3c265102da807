//! Properties accepted by `ApplicationsView`.

use common::routes::Route;
use yew::prelude::*;

use crate::config::ApiConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct ApplicationsProps {
    /// Where the applications endpoints live. Defaults to the build-time configuration.
    #[prop_or_default]
    pub api: ApiConfig,

    /// Router hook for job-detail and login navigation. Without it the screen
    /// falls back to a full page load.
    #[prop_or_default]
    pub on_navigate: Option<Callback<Route>>,

    /// Cards per row.
    #[prop_or(2)]
    pub columns: usize,
}

//! Update function for the applications screen.
//!
//! Contract
//! - State changes go through `ApplicationsState`; nothing here mutates the
//!   list directly.
//! - Effects it returns (toasts, navigation, the delayed login redirect) are
//!   run by `helpers::perform`.
//! - A status change is only written locally once `StatusUpdated` arrives
//!   with a confirmed result.

use yew::prelude::*;

use crate::helpers::perform;

use super::messages::Msg;
use super::state::ApplicationsView;
use super::spawn_status_update;

pub fn update(component: &mut ApplicationsView, ctx: &Context<ApplicationsView>, msg: Msg) -> bool {
    let on_navigate = ctx.props().on_navigate.as_ref();
    let state = &mut component.applications;

    match msg {
        Msg::Loaded { generation, result } => {
            perform(state.finish_fetch(generation, result), on_navigate);
            true
        }
        Msg::SetQuery(query) => {
            state.set_query(query);
            true
        }
        Msg::SetFacet(facet) => {
            state.set_facet(facet);
            true
        }
        Msg::ClearFilters => {
            state.clear_filters();
            true
        }
        Msg::OpenDetail(application_id) => state.open_detail(&application_id),
        Msg::CloseDetail => {
            state.close_detail();
            true
        }
        Msg::ViewJob { job_id, from_modal } => {
            perform(vec![state.view_job(&job_id, from_modal)], on_navigate);
            true
        }
        Msg::UpdateStatus(change) => {
            match state.status_update(change) {
                Some(request) => spawn_status_update(ctx, request),
                None => gloo_console::log!("status change requested with no application selected"),
            }
            false
        }
        Msg::StatusUpdated { change, result } => {
            perform(state.finish_status_update(change, result), on_navigate);
            true
        }
    }
}

//! Update function for the roster screen.
//!
//! Every message is forwarded to `RosterState`; whatever effects it returns
//! (a delayed login redirect, profile navigation) are run through
//! `helpers::perform`, and a category change kicks off a new fetch.

use yew::prelude::*;

use crate::helpers::perform;

use super::messages::Msg;
use super::spawn_fetch;
use super::state::RosterView;

pub fn update(component: &mut RosterView, ctx: &Context<RosterView>, msg: Msg) -> bool {
    let on_navigate = ctx.props().on_navigate.as_ref();

    match msg {
        Msg::Loaded { generation, result } => {
            let effects = component.roster.finish_fetch(generation, result);
            perform(effects, on_navigate);
            true
        }
        Msg::SetQuery(query) => {
            component.roster.set_query(query);
            true
        }
        Msg::ToggleMenu => {
            component.roster.toggle_menu();
            true
        }
        Msg::SelectCategory(category) => {
            if let Some(fetch) = component.roster.select_category(category) {
                spawn_fetch(ctx, fetch);
            }
            true
        }
        Msg::ViewProfile(person_id) => {
            perform(vec![component.roster.view_profile(&person_id)], on_navigate);
            false
        }
    }
}

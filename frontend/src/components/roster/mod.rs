//! Roster screen: the student list with server-side category filtering and
//! client-side text search.
//!
//! The `Component` implementation only wires Yew to `update::update` and
//! `view::view`; all state transitions live in `common::views::roster`.

use common::views::roster::RosterFetch;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api::ApiClient;
pub use messages::Msg;
pub use props::RosterProps;
pub use state::RosterView;

impl Component for RosterView {
    type Message = Msg;
    type Properties = RosterProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = RosterView::new();
        let fetch = component.roster.begin_fetch();
        spawn_fetch(ctx, fetch);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Issues the people request for `fetch` and reports back with its generation.
pub(crate) fn spawn_fetch(ctx: &Context<RosterView>, fetch: RosterFetch) {
    let link = ctx.link().clone();
    let client = ApiClient::new(ctx.props().api.clone());
    spawn_local(async move {
        let result = client.fetch_people(fetch.category.as_deref()).await;
        if let Err(err) = &result {
            gloo_console::log!(format!("people fetch #{} failed: {err:?}", fetch.generation));
        }
        link.send_message(Msg::Loaded {
            generation: fetch.generation,
            result,
        });
    });
}

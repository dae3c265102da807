//! Applications screen: every application fetched once, searched and
//! faceted locally, with a detail sheet from which a recruiter can accept or
//! reject the applicant.
//!
//! Responsibilities
//! - Issue the list fetch when the component is created.
//! - Delegate messages to `update::update` and rendering to `view::view`.
//! - Provide the async tasks that talk to the API and report back as messages.

use common::views::applications::StatusUpdate;
use yew::platform::spawn_local;
use yew::prelude::*;

mod detail;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api::ApiClient;
pub use messages::Msg;
pub use props::ApplicationsProps;
pub use state::ApplicationsView;

impl Component for ApplicationsView {
    type Message = Msg;
    type Properties = ApplicationsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = ApplicationsView::new();
        let generation = component.applications.begin_fetch();
        spawn_fetch(ctx, generation);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn spawn_fetch(ctx: &Context<ApplicationsView>, generation: u64) {
    let link = ctx.link().clone();
    let client = ApiClient::new(ctx.props().api.clone());
    spawn_local(async move {
        let result = client.fetch_applications().await;
        if let Err(err) = &result {
            gloo_console::log!(format!("applications fetch #{generation} failed: {err:?}"));
        }
        link.send_message(Msg::Loaded { generation, result });
    });
}

/// Sends the status change and reports the outcome. Nothing is retried.
fn spawn_status_update(ctx: &Context<ApplicationsView>, update: StatusUpdate) {
    let link = ctx.link().clone();
    let client = ApiClient::new(ctx.props().api.clone());
    spawn_local(async move {
        let result = client.update_status(&update).await;
        if let Err(err) = &result {
            gloo_console::log!(format!(
                "status update for {}/{} failed: {err:?}",
                update.job_id, update.person_id
            ));
        }
        link.send_message(Msg::StatusUpdated {
            change: update.change,
            result,
        });
    });
}

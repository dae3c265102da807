use crate::components::applications::ApplicationsView;
use crate::components::roster::RosterView;
use yew::{classes, html, Component, Context, Html};

/// Which screen the shell is showing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Roster,
    Applications,
}

pub enum Msg {
    SetTab(Tab),
}

/// Minimal shell hosting the two screens side by side behind a tab bar.
/// Routing proper belongs to the host application.
pub struct App {
    active_tab: Tab,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_tab: Tab::Roster,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                let changed = self.active_tab != tab;
                self.active_tab = tab;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab_class = |tab: Tab| classes!("tab-btn", (self.active_tab == tab).then_some("active"));

        html! {
            <div class="dashboard">
                <div class="tab-bar">
                    <button class={tab_class(Tab::Roster)} onclick={link.callback(|_| Msg::SetTab(Tab::Roster))}>
                        {"Students"}
                    </button>
                    <button class={tab_class(Tab::Applications)} onclick={link.callback(|_| Msg::SetTab(Tab::Applications))}>
                        {"Applications"}
                    </button>
                </div>
                {
                    match self.active_tab {
                        Tab::Roster => html! { <RosterView /> },
                        Tab::Applications => html! { <ApplicationsView /> },
                    }
                }
            </div>
        }
    }
}

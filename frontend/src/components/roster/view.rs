//! View rendering for the roster screen.
//!
//! Exactly one of loading overlay, error panel or data view is rendered,
//! chosen by `RosterState::phase`. The data view is a toolbar (search box,
//! category menu, result count) above either the table or the empty state.

use common::model::person::Person;
use common::views::roster::RosterPhase;
use num_format::{Locale, ToFormattedString};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::global_loader::GlobalLoader;

use super::messages::Msg;
use super::state::RosterView;

pub fn view(component: &RosterView, ctx: &Context<RosterView>) -> Html {
    let link = ctx.link();

    match component.roster.phase() {
        RosterPhase::Loading => html! { <GlobalLoader /> },
        RosterPhase::Failed(message) => build_error(message),
        RosterPhase::Empty => html! {
            <div class="roster">
                { build_toolbar(component, link, 0) }
                <div class="empty-state" data-testid="roster-empty">
                    <p>{"No students match your search."}</p>
                </div>
            </div>
        },
        RosterPhase::Ready(people) => html! {
            <div class="roster">
                { build_toolbar(component, link, people.len()) }
                { build_table(&people, link) }
            </div>
        },
    }
}

fn build_error(message: &str) -> Html {
    html! {
        <div class="roster-error" role="alert" style="padding:24px;color:#b71c1c;">
            <i class="material-icons">{"error_outline"}</i>
            <p>{ message.to_string() }</p>
        </div>
    }
}

/// Search box, category menu and the visible-row counter.
fn build_toolbar(component: &RosterView, link: &Scope<RosterView>, visible: usize) -> Html {
    let roster = &component.roster;
    let selected = if roster.category().is_empty() {
        "All branches".to_string()
    } else {
        roster.category().to_string()
    };

    html! {
        <div class="roster-toolbar" style="display:flex;gap:12px;align-items:center;margin-bottom:16px;">
            <input
                type="search"
                placeholder="Search by name, email or branch"
                value={roster.query().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetQuery(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <div class="filter-menu" style="position:relative;">
                <button class="icon-btn" onclick={link.callback(|_| Msg::ToggleMenu)}>
                    <i class="material-icons">{"filter_list"}</i>
                    <span class="icon-label">{ selected }</span>
                </button>
                if roster.menu_open() {
                    <ul class="filter-menu-items" style="position:absolute;z-index:10;background:#fff;list-style:none;margin:0;padding:4px 0;box-shadow:0 2px 8px rgba(0,0,0,0.2);">
                        { category_item("All branches", "", roster.category(), link) }
                        { for roster.categories().iter().map(|c| category_item(c, c, roster.category(), link)) }
                    </ul>
                }
            </div>
            <span class="result-count">
                { format!("{} students", visible.to_formatted_string(&Locale::en)) }
            </span>
        </div>
    }
}

fn category_item(label: &str, value: &str, current: &str, link: &Scope<RosterView>) -> Html {
    let value = value.to_string();
    let class = if value == current { "active" } else { "" };
    html! {
        <li class={class}>
            <button onclick={link.callback(move |_| Msg::SelectCategory(value.clone()))}>
                { label.to_string() }
            </button>
        </li>
    }
}

fn build_table(people: &[&Person], link: &Scope<RosterView>) -> Html {
    html! {
        <table class="roster-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Email"}</th>
                    <th>{"Phone"}</th>
                    <th>{"Branch"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for people.iter().map(|person| build_row(person, link)) }
            </tbody>
        </table>
    }
}

fn build_row(person: &Person, link: &Scope<RosterView>) -> Html {
    let id = person.id.clone();
    html! {
        <tr key={person.id.clone()}>
            <td>{ person.name.clone() }</td>
            <td>{ person.email.clone() }</td>
            <td>{ person.phone.clone() }</td>
            <td>{ person.branch.clone() }</td>
            <td>
                <button class="link-btn" onclick={link.callback(move |_| Msg::ViewProfile(id.clone()))}>
                    {"View profile"}
                </button>
            </td>
        </tr>
    }
}

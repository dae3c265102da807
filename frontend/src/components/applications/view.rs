//! View rendering for the applications screen.
//!
//! While the list is loading the global overlay replaces the screen. After
//! that the header (search, facet dropdown, count) always renders; below it
//! comes the card grid or the empty state, and the detail sheet when one is
//! open. A failed fetch does not block this view: it only raised a toast,
//! plus a banner when the session expired.

use common::model::application::Application;
use common::model::facet::Facet;
use common::model::status::StatusChange;
use common::views::applications::ApplicationsPhase;
use num_format::{Locale, ToFormattedString};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::card_grid::CardGrid;
use crate::components::global_loader::GlobalLoader;
use crate::components::image_loader::ImageLoader;
use crate::sheet::detail_sheet::DetailSheet;

use super::detail::build_detail;
use super::messages::Msg;
use super::state::ApplicationsView;

pub fn view(component: &ApplicationsView, ctx: &Context<ApplicationsView>) -> Html {
    let link = ctx.link();
    let state = &component.applications;

    let body = match state.phase() {
        ApplicationsPhase::Loading => return html! { <GlobalLoader /> },
        ApplicationsPhase::Empty => html! {
            <div class="empty-state" data-testid="applications-empty">
                <p>{"No applications match the current filters."}</p>
            </div>
        },
        ApplicationsPhase::Ready(applications) => html! {
            <CardGrid columns={ctx.props().columns}>
                { for applications.iter().map(|app| build_card(app, link)) }
            </CardGrid>
        },
    };

    html! {
        <div class="applications">
            if let Some(error) = state.error() {
                <div class="applications-banner" role="alert" style="padding:8px 12px;background:#fdecea;color:#b71c1c;margin-bottom:12px;">
                    { error.to_string() }
                </div>
            }
            { build_header(component, link) }
            { body }
            { build_sheet(component, link) }
        </div>
    }
}

/// Search box, facet dropdown, clear button and visible count.
fn build_header(component: &ApplicationsView, link: &Scope<ApplicationsView>) -> Html {
    let state = &component.applications;
    let facets: Vec<Facet> = state.facet_options();
    let visible = state.filtered().len();
    let selected_index = state
        .facet()
        .and_then(|current| facets.iter().position(|f| f == current));

    let on_facet = {
        let facets = facets.clone();
        link.callback(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            Msg::SetFacet(value.parse::<usize>().ok().and_then(|i| facets.get(i).cloned()))
        })
    };

    html! {
        <div class="applications-header" style="display:flex;gap:12px;align-items:center;margin-bottom:16px;">
            <input
                type="search"
                placeholder="Search by applicant, job, company or email"
                value={state.query().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetQuery(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <select onchange={on_facet}>
                <option value="" selected={selected_index.is_none()}>{"All"}</option>
                {
                    for facets.iter().enumerate().map(|(i, facet)| html! {
                        <option value={i.to_string()} selected={selected_index == Some(i)}>
                            { facet.label().to_string() }
                        </option>
                    })
                }
            </select>
            <button class="icon-btn" onclick={link.callback(|_| Msg::ClearFilters)}>
                <i class="material-icons">{"clear_all"}</i>
                <span class="icon-label">{"Clear filters"}</span>
            </button>
            <span class="result-count">
                { format!("{} applications", visible.to_formatted_string(&Locale::en)) }
            </span>
        </div>
    }
}

fn build_card(app: &Application, link: &Scope<ApplicationsView>) -> Html {
    let id = app.id.clone();
    let job_id = app.job_id.clone();

    html! {
        <div class="application-card" key={app.id.clone()} style="border:1px solid #e0e0e0;border-radius:8px;padding:16px;">
            <div style="display:flex;gap:12px;align-items:center;">
                if let Some(logo) = app.logo() {
                    <ImageLoader
                        src={AttrValue::from(logo.to_string())}
                        alt={AttrValue::from(format!("{} logo", app.company))}
                        class="company-logo"
                    />
                }
                <div>
                    <h3 style="margin:0;">{ app.person.name.clone() }</h3>
                    <div>{ format!("{} · {}", app.job_title, app.company) }</div>
                </div>
            </div>
            <div class="application-meta" style="display:flex;gap:12px;margin-top:8px;color:#616161;">
                <span class={classes!("status-chip", status_class(app.status_label()))}>
                    { app.status_label().to_string() }
                </span>
                <span>{ app.created_date().unwrap_or_default() }</span>
            </div>
            <div style="display:flex;gap:8px;margin-top:12px;">
                <button onclick={link.callback(move |_| Msg::OpenDetail(id.clone()))}>
                    {"View details"}
                </button>
                <button onclick={link.callback(move |_| Msg::ViewJob { job_id: job_id.clone(), from_modal: false })}>
                    {"View job"}
                </button>
            </div>
        </div>
    }
}

/// The detail sheet for the selected application, with its footer actions.
fn build_sheet(component: &ApplicationsView, link: &Scope<ApplicationsView>) -> Html {
    let Some(app) = component.applications.detail() else {
        return html! {};
    };
    let status = app.status_label();
    let job_id = app.job_id.clone();

    let footer = html! {
        <>
            <button onclick={link.callback(move |_| Msg::ViewJob { job_id: job_id.clone(), from_modal: true })}>
                {"View job"}
            </button>
            if StatusChange::Rejected.offered_for(status) {
                <button class="reject-btn" style="background:#d32f2f;color:#fff;"
                    onclick={link.callback(|_| Msg::UpdateStatus(StatusChange::Rejected))}>
                    {"Reject"}
                </button>
            }
            if StatusChange::Selected.offered_for(status) {
                <button class="accept-btn" style="background:#2e7d32;color:#fff;"
                    onclick={link.callback(|_| Msg::UpdateStatus(StatusChange::Selected))}>
                    {"Accept"}
                </button>
            }
        </>
    };

    html! {
        <DetailSheet
            open={true}
            title={AttrValue::from(app.person.name.clone())}
            on_close={link.callback(|_| Msg::CloseDetail)}
            footer={footer}
        >
            { build_detail(app) }
        </DetailSheet>
    }
}

pub(super) fn status_class(status: &str) -> &'static str {
    match status {
        "Selected" => "status-selected",
        "Rejected" => "status-rejected",
        _ => "status-pending",
    }
}

use common::model::application::Application;
use yew::prelude::*;

use super::view::status_class;

/// Body of the detail sheet: who applied, what they answered, when, and
/// where the application stands.
pub fn build_detail(app: &Application) -> Html {
    let person = &app.person;
    let status = app.status_label();

    html! {
        <div class="application-detail">
            <section class="detail-identity">
                <dl>
                    <dt>{"Email"}</dt><dd>{ person.email.clone() }</dd>
                    <dt>{"Phone"}</dt><dd>{ person.phone.clone() }</dd>
                    <dt>{"Branch"}</dt><dd>{ person.branch.clone() }</dd>
                    <dt>{"Position"}</dt><dd>{ format!("{} at {}", app.job_title, app.company) }</dd>
                </dl>
            </section>
            <section class="detail-answers">
                <h3>{"Form responses"}</h3>
                <dl>
                    {
                        for app.form_entries().into_iter().map(|entry| html! {
                            <>
                                <dt>{ entry.label }</dt>
                                <dd>{ entry.value }</dd>
                            </>
                        })
                    }
                </dl>
            </section>
            <section class="detail-status">
                <div>{ format!("Applied: {}", app.applied_at_text()) }</div>
                <div>
                    {"Status: "}
                    <span class={classes!("status-chip", status_class(status))}>{ status.to_string() }</span>
                </div>
            </section>
        </div>
    }
}

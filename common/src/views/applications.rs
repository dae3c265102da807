//! State machine behind the applications screen.
//!
//! Unlike the roster, everything is fetched once and filtered locally, and a
//! failed fetch only raises a notification: the (possibly empty) list stays
//! on screen. The detail sheet works on a copy of one application; a status
//! change confirmed by the server is written to both that copy and the list
//! entry in the same transition.

use std::collections::BTreeMap;

use log::debug;

use crate::effects::Effect;
use crate::error::FetchError;
use crate::model::application::Application;
use crate::model::facet::Facet;
use crate::model::status::StatusChange;
use crate::routes::Route;

pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch applications";
pub const UPDATE_FALLBACK_MESSAGE: &str = "Failed to update application status";

/// Everything needed to issue a status update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub job_id: String,
    pub person_id: String,
    pub change: StatusChange,
}

#[derive(Debug, PartialEq)]
pub enum ApplicationsPhase<'a> {
    Loading,
    Empty,
    Ready(Vec<&'a Application>),
}

#[derive(Debug, Default)]
pub struct ApplicationsState {
    applications: Vec<Application>,
    facets: Vec<Facet>,
    loading: bool,
    error: Option<String>,
    query: String,
    facet: Option<Facet>,
    selected: Option<Application>,
    modal_open: bool,
    generation: u64,
}

impl ApplicationsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the screen loading and returns the generation of the new fetch.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    pub fn finish_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<Application>, FetchError>,
    ) -> Vec<Effect> {
        if generation != self.generation {
            debug!(
                "discarding applications response #{generation}, latest is #{}",
                self.generation
            );
            return Vec::new();
        }
        self.loading = false;

        match result {
            Ok(applications) => {
                self.facets = distinct_facets(&applications);
                self.applications = applications;
                Vec::new()
            }
            Err(err) if err.is_unauthorized() => {
                let message = err.to_string();
                self.error = Some(message.clone());
                vec![Effect::Notify(message), Effect::login_redirect()]
            }
            Err(err) => vec![Effect::Notify(err.message_or(FETCH_FALLBACK_MESSAGE))],
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_facet(&mut self, facet: Option<Facet>) {
        self.facet = facet;
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.facet = None;
    }

    /// Opens the detail sheet for `application_id`. Unknown ids leave the
    /// state untouched and return `false`.
    pub fn open_detail(&mut self, application_id: &str) -> bool {
        match self.applications.iter().find(|a| a.id == application_id) {
            Some(found) => {
                self.selected = Some(found.clone());
                self.modal_open = true;
                true
            }
            None => false,
        }
    }

    /// Hides the sheet. The selection is kept so an update still in flight
    /// can land on it.
    pub fn close_detail(&mut self) {
        self.modal_open = false;
    }

    /// Leaves for the job page, closing the sheet first when asked from it.
    pub fn view_job(&mut self, job_id: &str, from_modal: bool) -> Effect {
        if from_modal {
            self.close_detail();
        }
        Effect::Navigate(Route::JobDetail(job_id.to_string()))
    }

    /// Request for moving the selected application to `change`.
    pub fn status_update(&self, change: StatusChange) -> Option<StatusUpdate> {
        self.selected.as_ref().map(|app| StatusUpdate {
            job_id: app.job_id.clone(),
            person_id: app.person.id.clone(),
            change,
        })
    }

    /// Applies the server's answer to a status update. Failures of any kind,
    /// a 401 included, only raise the server's message or the fallback.
    pub fn finish_status_update(
        &mut self,
        change: StatusChange,
        result: Result<(), FetchError>,
    ) -> Vec<Effect> {
        if let Err(err) = result {
            return vec![Effect::Notify(err.message_or(UPDATE_FALLBACK_MESSAGE))];
        }

        let label = change.label();
        if let Some(selected) = self.selected.as_mut() {
            selected.status = Some(label.clone());
            if let Some(entry) = self.applications.iter_mut().find(|a| a.id == selected.id) {
                entry.status = Some(label);
            }
            self.facets = distinct_facets(&self.applications);
        }
        Vec::new()
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn filtered(&self) -> Vec<&Application> {
        let needle = self.query.to_lowercase();
        self.applications
            .iter()
            .filter(|a| a.matches_query(&needle) && a.matches_facet(self.facet.as_ref()))
            .collect()
    }

    /// Dropdown entries: the current facets plus the active one when no
    /// application produces it anymore (e.g. after a status change), so the
    /// dropdown never hides a filter that is still applied.
    pub fn facet_options(&self) -> Vec<Facet> {
        let mut options = self.facets.clone();
        if let Some(active) = &self.facet {
            if !options.iter().any(|f| f.label() == active.label()) {
                options.push(active.clone());
                options.sort_by(|a, b| a.label().cmp(b.label()));
            }
        }
        options
    }

    pub fn phase(&self) -> ApplicationsPhase<'_> {
        if self.loading {
            return ApplicationsPhase::Loading;
        }
        let visible = self.filtered();
        if visible.is_empty() {
            ApplicationsPhase::Empty
        } else {
            ApplicationsPhase::Ready(visible)
        }
    }

    /// The application shown in the detail sheet, if the sheet is open.
    pub fn detail(&self) -> Option<&Application> {
        self.selected.as_ref().filter(|_| self.modal_open)
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn selected(&self) -> Option<&Application> {
        self.selected.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn facet(&self) -> Option<&Facet> {
        self.facet.as_ref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Distinct facet values sorted by label.
fn distinct_facets(applications: &[Application]) -> Vec<Facet> {
    applications
        .iter()
        .filter_map(Application::facet)
        .map(|facet| (facet.label().to_string(), facet))
        .collect::<BTreeMap<_, _>>()
        .into_values()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UNAUTHORIZED_MESSAGE;
    use crate::model::person::Person;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap as Map;

    fn application(id: &str, name: &str, status: Option<&str>, day: u32) -> Application {
        Application {
            id: id.into(),
            job_id: format!("job-{id}"),
            job_title: "Data Analyst".into(),
            company: "Initech".into(),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()),
            status: status.map(Into::into),
            person: Person {
                id: format!("person-{id}"),
                name: name.into(),
                email: format!("{}@uni.edu", name.to_lowercase()),
                phone: "N/A".into(),
                branch: "CS".into(),
            },
            form_response: Map::new(),
            job: None,
        }
    }

    fn loaded(applications: Vec<Application>) -> ApplicationsState {
        let mut state = ApplicationsState::new();
        let generation = state.begin_fetch();
        state.finish_fetch(generation, Ok(applications));
        state
    }

    #[test]
    fn facets_mix_statuses_and_dates() {
        let state = loaded(vec![
            application("1", "Asha", None, 15),
            application("2", "Ben", Some("Selected"), 16),
            application("3", "Cleo", None, 15),
            application("4", "Dev", Some("Rejected"), 2),
        ]);
        assert_eq!(
            state.facets(),
            [
                Facet::Date("1/15/2024".into()),
                Facet::Status("Rejected".into()),
                Facet::Status("Selected".into()),
            ]
        );
    }

    #[test]
    fn query_and_facet_combine() {
        let mut state = loaded(vec![
            application("1", "Asha", None, 15),
            application("2", "Ben", Some("Selected"), 16),
            application("3", "Cleo", Some("Selected"), 17),
        ]);
        state.set_facet(Some(Facet::Status("Selected".into())));
        assert_eq!(state.filtered().len(), 2);

        state.set_query("CLEO".into());
        let ids: Vec<_> = state.filtered().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["3"]);

        state.clear_filters();
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn query_searches_title_company_and_email() {
        let mut state = loaded(vec![application("1", "Asha", None, 15)]);
        for needle in ["analyst", "initech", "asha@uni"] {
            state.set_query(needle.into());
            assert_eq!(state.filtered().len(), 1, "{needle}");
        }
        state.set_query("CS".into());
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn fetch_failure_notifies_without_blocking() {
        let mut state = loaded(vec![application("1", "Asha", None, 15)]);
        let generation = state.begin_fetch();
        let effects = state.finish_fetch(generation, Err(FetchError::Unspecified(None)));

        assert_eq!(effects, vec![Effect::Notify(FETCH_FALLBACK_MESSAGE.into())]);
        assert_eq!(state.error(), None);
        assert!(matches!(state.phase(), ApplicationsPhase::Ready(_)));
    }

    #[test]
    fn unauthorized_fetch_notifies_and_redirects() {
        let mut state = ApplicationsState::new();
        let generation = state.begin_fetch();
        let effects = state.finish_fetch(generation, Err(FetchError::from_status(401, None)));

        assert_eq!(
            effects,
            vec![
                Effect::Notify(UNAUTHORIZED_MESSAGE.into()),
                Effect::login_redirect(),
            ]
        );
        assert!(state.error().is_some());
    }

    #[test]
    fn view_job_from_sheet_closes_it_first() {
        let mut state = loaded(vec![application("1", "Asha", None, 15)]);
        assert!(state.open_detail("1"));

        let effect = state.view_job("job-1", true);
        assert!(!state.modal_open());
        assert_eq!(effect, Effect::Navigate(Route::JobDetail("job-1".into())));
    }

    #[test]
    fn status_update_targets_selected_application() {
        let mut state = loaded(vec![application("1", "Asha", None, 15)]);
        assert_eq!(state.status_update(StatusChange::Rejected), None);

        state.open_detail("1");
        assert_eq!(
            state.status_update(StatusChange::Rejected),
            Some(StatusUpdate {
                job_id: "job-1".into(),
                person_id: "person-1".into(),
                change: StatusChange::Rejected,
            })
        );
    }

    #[test]
    fn failed_update_changes_nothing() {
        let mut state = loaded(vec![application("1", "Asha", None, 15)]);
        state.open_detail("1");

        let effects = state.finish_status_update(
            StatusChange::Selected,
            Err(FetchError::Unspecified(Some("Job is closed".into()))),
        );
        assert_eq!(effects, vec![Effect::Notify("Job is closed".into())]);
        assert_eq!(state.applications()[0].status, None);
        assert_eq!(state.detail().and_then(|a| a.status.clone()), None);
    }

    #[test]
    fn last_confirmed_update_wins() {
        let mut state = loaded(vec![application("1", "Asha", None, 15)]);
        state.open_detail("1");
        state.finish_status_update(StatusChange::Selected, Ok(()));
        state.finish_status_update(StatusChange::Rejected, Ok(()));

        assert_eq!(state.applications()[0].status_label(), "Rejected");
        assert_eq!(state.detail().map(Application::status_label), Some("Rejected"));
        assert_eq!(state.facets(), [Facet::Status("Rejected".into())]);
    }

    #[test]
    fn fetch_failures_toast_server_message_or_screen_fallback() {
        let cases = [
            (
                FetchError::from_status(500, Some("Database unavailable".into())),
                "Database unavailable",
            ),
            (FetchError::from_status(500, None), FETCH_FALLBACK_MESSAGE),
            (FetchError::Connectivity("TypeError: Failed to fetch".into()), FETCH_FALLBACK_MESSAGE),
            (FetchError::from_status(404, None), FETCH_FALLBACK_MESSAGE),
        ];
        for (err, expected) in cases {
            let mut state = ApplicationsState::new();
            let generation = state.begin_fetch();
            let effects = state.finish_fetch(generation, Err(err.clone()));
            assert_eq!(effects, vec![Effect::Notify(expected.into())], "{err:?}");
            assert_eq!(state.error(), None);
        }
    }

    #[test]
    fn update_failures_toast_server_message_or_fallback_without_redirect() {
        let cases = [
            (FetchError::from_status(401, Some("jwt expired".into())), "jwt expired"),
            (FetchError::from_status(401, None), UPDATE_FALLBACK_MESSAGE),
            (
                FetchError::from_status(500, Some("Database unavailable".into())),
                "Database unavailable",
            ),
            (FetchError::from_status(500, None), UPDATE_FALLBACK_MESSAGE),
            (FetchError::Connectivity("offline".into()), UPDATE_FALLBACK_MESSAGE),
        ];
        for (err, expected) in cases {
            let mut state = loaded(vec![application("1", "Asha", None, 15)]);
            state.open_detail("1");
            let effects = state.finish_status_update(StatusChange::Selected, Err(err.clone()));
            assert_eq!(effects, vec![Effect::Notify(expected.into())], "{err:?}");
            assert_eq!(state.applications()[0].status, None);
        }
    }

    #[test]
    fn whitespace_query_is_matched_literally() {
        let mut state = loaded(vec![
            application("1", "Asha", None, 15),
            application("2", "Ben", None, 15),
        ]);
        state.set_query("   ".into());
        assert!(state.filtered().is_empty());

        state.set_query(" ana".into());
        // "Data Analyst" contains " ana".
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn active_facet_stays_listed_after_it_disappears() {
        let mut state = loaded(vec![application("1", "Asha", None, 15)]);
        state.set_facet(Some(Facet::Date("1/15/2024".into())));
        state.open_detail("1");
        state.finish_status_update(StatusChange::Selected, Ok(()));

        assert_eq!(state.facets(), [Facet::Status("Selected".into())]);
        assert_eq!(
            state.facet_options(),
            [Facet::Date("1/15/2024".into()), Facet::Status("Selected".into())]
        );
        // Still applied: the created date matches the label.
        assert_eq!(state.filtered().len(), 1);
    }
}

//! State machine behind the roster screen.
//!
//! The category filter is applied by the server (it is part of the fetch), so
//! the only client-side narrowing is the free-text query. Every fetch is
//! stamped with a generation; a response that is not from the most recent
//! fetch is ignored, which keeps a slow earlier category from overwriting a
//! faster later one.

use std::collections::BTreeSet;

use log::debug;

use crate::effects::Effect;
use crate::error::FetchError;
use crate::model::person::Person;
use crate::routes::Route;

/// What the component should request for a fetch it just started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterFetch {
    pub generation: u64,
    pub category: Option<String>,
}

/// Which of the mutually exclusive views the roster shows.
#[derive(Debug, PartialEq)]
pub enum RosterPhase<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(Vec<&'a Person>),
}

#[derive(Debug, Default)]
pub struct RosterState {
    people: Vec<Person>,
    categories: Vec<String>,
    loading: bool,
    error: Option<String>,
    query: String,
    category: String,
    menu_open: bool,
    generation: u64,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch for the current category and marks the screen loading.
    pub fn begin_fetch(&mut self) -> RosterFetch {
        self.generation += 1;
        self.loading = true;
        RosterFetch {
            generation: self.generation,
            category: Some(self.category.clone()).filter(|c| !c.is_empty()),
        }
    }

    /// Applies the outcome of fetch `generation`.
    pub fn finish_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<Person>, FetchError>,
    ) -> Vec<Effect> {
        if generation != self.generation {
            debug!(
                "discarding roster response #{generation}, latest is #{}",
                self.generation
            );
            return Vec::new();
        }
        self.loading = false;

        match result {
            Ok(people) => {
                self.categories = distinct_categories(&people);
                self.people = people;
                Vec::new()
            }
            Err(err) => {
                self.error = Some(err.to_string());
                if err.is_unauthorized() {
                    vec![Effect::login_redirect()]
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Picks a category (empty for all). Closes the menu and returns the
    /// fetch to issue when the selection actually changed.
    pub fn select_category(&mut self, category: String) -> Option<RosterFetch> {
        self.menu_open = false;
        if category == self.category {
            return None;
        }
        self.category = category;
        Some(self.begin_fetch())
    }

    pub fn view_profile(&self, person_id: &str) -> Effect {
        Effect::Navigate(Route::Profile(person_id.to_string()))
    }

    /// Distinct categories of the loaded people, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// People whose name, email or category contains the query.
    pub fn filtered(&self) -> Vec<&Person> {
        let needle = self.query.to_lowercase();
        self.people
            .iter()
            .filter(|p| p.matches_query(&needle))
            .collect()
    }

    pub fn phase(&self) -> RosterPhase<'_> {
        if let Some(error) = &self.error {
            return RosterPhase::Failed(error);
        }
        if self.loading {
            return RosterPhase::Loading;
        }
        let visible = self.filtered();
        if visible.is_empty() {
            RosterPhase::Empty
        } else {
            RosterPhase::Ready(visible)
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn distinct_categories(people: &[Person]) -> Vec<String> {
    people
        .iter()
        .map(|p| p.branch.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CONNECTIVITY_MESSAGE, SERVER_FAULT_MESSAGE};
    use pretty_assertions::assert_eq;

    fn person(id: &str, name: &str, email: &str, branch: &str) -> Person {
        Person {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: "N/A".into(),
            branch: branch.into(),
        }
    }

    fn loaded(people: Vec<Person>) -> RosterState {
        let mut state = RosterState::new();
        let fetch = state.begin_fetch();
        state.finish_fetch(fetch.generation, Ok(people));
        state
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let state = loaded(vec![
            person("1", "A", "a", "IT"),
            person("2", "B", "b", "CS"),
            person("3", "C", "c", "IT"),
            person("4", "D", "d", "ECE"),
        ]);
        assert_eq!(state.categories(), ["CS", "ECE", "IT"]);
    }

    #[test]
    fn loading_is_exclusive_until_the_fetch_lands() {
        let mut state = RosterState::new();
        let fetch = state.begin_fetch();
        assert_eq!(fetch.category, None);
        assert_eq!(state.phase(), RosterPhase::Loading);

        state.finish_fetch(fetch.generation, Ok(vec![person("1", "A", "a", "CS")]));
        assert!(matches!(state.phase(), RosterPhase::Ready(rows) if rows.len() == 1));
    }

    #[test]
    fn server_and_transport_failures_block_the_view() {
        let mut state = RosterState::new();
        let fetch = state.begin_fetch();
        let fault = FetchError::from_status(500, Some("Database unavailable".into()));
        let effects = state.finish_fetch(fetch.generation, Err(fault));
        assert!(effects.is_empty());
        assert_eq!(state.phase(), RosterPhase::Failed(SERVER_FAULT_MESSAGE));

        let mut state = RosterState::new();
        let fetch = state.begin_fetch();
        state.finish_fetch(fetch.generation, Err(FetchError::Connectivity("offline".into())));
        assert_eq!(state.phase(), RosterPhase::Failed(CONNECTIVITY_MESSAGE));
    }

    #[test]
    fn error_does_not_clear_on_later_success() {
        let mut state = RosterState::new();
        let fetch = state.begin_fetch();
        state.finish_fetch(fetch.generation, Err(FetchError::Unspecified(Some("nope".into()))));

        let fetch = state.select_category("CS".into()).unwrap();
        state.finish_fetch(fetch.generation, Ok(vec![person("1", "A", "a", "CS")]));
        assert_eq!(state.phase(), RosterPhase::Failed("nope"));
    }

    #[test]
    fn selecting_a_category_refetches_with_it() {
        let mut state = loaded(vec![person("1", "A", "a", "CS")]);
        state.toggle_menu();
        assert!(state.menu_open());

        let fetch = state.select_category("CS".into()).expect("changed category");
        assert_eq!(fetch.category.as_deref(), Some("CS"));
        assert!(!state.menu_open());
        assert!(state.is_loading());

        assert_eq!(state.select_category("CS".into()), None);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = loaded(Vec::new());
        let first = state.select_category("CS".into()).unwrap();
        let second = state.select_category("IT".into()).unwrap();

        state.finish_fetch(second.generation, Ok(vec![person("2", "B", "b", "IT")]));
        state.finish_fetch(first.generation, Ok(vec![person("1", "A", "a", "CS")]));

        let ids: Vec<_> = state.people().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn query_ignores_case_but_not_whitespace() {
        let mut state = loaded(vec![
            person("1", "Jane Doe", "x", "CS"),
            person("2", "John Doe", "y", "EE"),
        ]);
        state.set_query("ee".into());
        let ids: Vec<_> = state.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2"]);

        state.set_query(" ee ".into());
        assert!(state.filtered().is_empty());

        state.set_query(" ".into());
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn view_profile_navigates_by_id() {
        let state = RosterState::new();
        assert_eq!(
            state.view_profile("p9"),
            Effect::Navigate(Route::Profile("p9".into()))
        );
    }
}

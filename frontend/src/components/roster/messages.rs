use common::error::FetchError;
use common::model::person::Person;

#[derive(Clone)]
pub enum Msg {
    Loaded {
        generation: u64,
        result: Result<Vec<Person>, FetchError>,
    },
    SetQuery(String),
    ToggleMenu,
    SelectCategory(String),
    ViewProfile(String),
}

use common::error::FetchError;
use common::model::application::Application;
use common::model::facet::Facet;
use common::model::status::StatusChange;

#[derive(Clone)]
pub enum Msg {
    Loaded {
        generation: u64,
        result: Result<Vec<Application>, FetchError>,
    },
    SetQuery(String),
    SetFacet(Option<Facet>),
    ClearFilters,
    OpenDetail(String),
    CloseDetail,
    ViewJob {
        job_id: String,
        from_modal: bool,
    },
    UpdateStatus(StatusChange),
    StatusUpdated {
        change: StatusChange,
        result: Result<(), FetchError>,
    },
}

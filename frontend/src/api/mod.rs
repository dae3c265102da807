//! Thin client over the placement API.
//!
//! Every call returns `Result<_, FetchError>`: transport failures become
//! `Connectivity`, non-2xx statuses are classified by `FetchError::from_status`
//! using the `message` of the error body when there is one, and bodies that
//! report `success: false` become `Unspecified` with the server's message.

use common::error::FetchError;
use common::model::application::{Application, ApplicationRecord};
use common::model::person::{Person, PersonRecord};
use common::requests::{
    decode_records, ApplicationsResponse, ErrorBody, PeopleResponse, UpdateStatusRequest,
    UpdateStatusResponse,
};
use common::views::applications::StatusUpdate;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::ApiConfig;

#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// `GET people`, narrowed server-side to `category` when given.
    pub async fn fetch_people(&self, category: Option<&str>) -> Result<Vec<Person>, FetchError> {
        let mut request = self.prepare(Request::get(&self.config.url("people")));
        if let Some(category) = category {
            request = request.query([("category", category)]);
        }
        let response = send(request).await?;
        let body: PeopleResponse = read_json(response).await?;
        Ok(decode_records::<PersonRecord, Person>(body.data))
    }

    /// `GET applications`; the full list, filtered locally.
    pub async fn fetch_applications(&self) -> Result<Vec<Application>, FetchError> {
        let response = send(self.prepare(Request::get(&self.config.url("applications")))).await?;
        let body: ApplicationsResponse = read_json(response).await?;
        if !body.success {
            return Err(FetchError::rejected(body.message));
        }
        Ok(decode_records::<ApplicationRecord, Application>(body.data))
    }

    /// `PUT applications/{jobId}/{personId}` with the new status token.
    pub async fn update_status(&self, update: &StatusUpdate) -> Result<(), FetchError> {
        let path = format!("applications/{}/{}", update.job_id, update.person_id);
        let request = self
            .prepare(Request::put(&self.config.url(&path)))
            .json(&UpdateStatusRequest { status: update.change })
            .map_err(|err| {
                gloo_console::error!(format!("could not encode status update: {err}"));
                FetchError::Unspecified(None)
            })?;

        let response = request
            .send()
            .await
            .map_err(|err| FetchError::Connectivity(err.to_string()))?;
        let body: UpdateStatusResponse = read_json(check_status(response).await?).await?;
        if body.success {
            Ok(())
        } else {
            Err(FetchError::rejected(body.message))
        }
    }

    fn prepare(&self, request: RequestBuilder) -> RequestBuilder {
        if self.config.include_credentials {
            request.credentials(RequestCredentials::Include)
        } else {
            request
        }
    }
}

async fn send(request: RequestBuilder) -> Result<Response, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|err| FetchError::Connectivity(err.to_string()))?;
    check_status(response).await
}

async fn check_status(response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    gloo_console::log!(format!("{} {} -> {status}", response.url(), response.status_text()));
    Err(FetchError::from_status(status, message))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    response.json::<T>().await.map_err(|err| {
        gloo_console::error!(format!("unexpected response from {}: {err}", response.url()));
        FetchError::Unspecified(None)
    })
}

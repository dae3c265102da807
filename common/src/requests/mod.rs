//! Request and response bodies exchanged with the placement API.
//!
//! List payloads are kept as raw `serde_json::Value` items until
//! [`decode_records`] validates them one by one, so a single malformed record
//! is dropped instead of failing the whole screen.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::status::StatusChange;

/// Body of `GET people`.
#[derive(Debug, Default, Deserialize)]
pub struct PeopleResponse {
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Body of `GET applications`.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `PUT applications/{jobId}/{personId}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpdateStatusRequest {
    pub status: StatusChange,
}

/// Response of the status update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Whatever error body the server attaches to a non-2xx response.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Decodes each raw item as `R` and converts it into the normalized `T`,
/// skipping (and logging) items that do not fit the schema.
pub fn decode_records<R, T>(items: Vec<Value>) -> Vec<T>
where
    R: DeserializeOwned,
    T: From<R>,
{
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<R>(item) {
            Ok(record) => Some(T::from(record)),
            Err(err) => {
                warn!("dropping malformed record #{index}: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::{Person, PersonRecord};
    use serde_json::json;

    #[test]
    fn drops_records_without_identifier() {
        let body: PeopleResponse = serde_json::from_value(json!({
            "data": [
                { "id": "p1", "firstName": "Jane" },
                { "firstName": "Nobody" },
                { "id": 42 },
                { "_id": "p2", "lastName": "Roe" }
            ]
        }))
        .unwrap();

        let people: Vec<Person> = decode_records::<PersonRecord, Person>(body.data);
        let ids: Vec<_> = people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn missing_success_flag_reads_as_failure() {
        let body: ApplicationsResponse =
            serde_json::from_str(r#"{"message":"maintenance"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("maintenance"));
    }

    #[test]
    fn update_request_uses_lowercase_token() {
        let body = UpdateStatusRequest { status: StatusChange::Selected };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "status": "selected" }));
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::{de_camel_case, locale_date, locale_date_time, timestamp_text, value_text};
use crate::model::facet::Facet;
use crate::model::person::{NOT_AVAILABLE, Person, PersonRecord};
use crate::model::status::PENDING;

/// Form field holding the submission time, preferred over `createdAt`.
pub const APPLIED_AT_FIELD: &str = "appliedAt";

/// Job posting embedded in an application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Company logo URL, when the posting has one.
    #[serde(default)]
    pub logo: Option<String>,
}

/// An application exactly as the applications endpoint sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub job_id: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(alias = "student")]
    pub person: PersonRecord,
    #[serde(default)]
    pub form_response: BTreeMap<String, Value>,
    #[serde(default)]
    pub job: Option<JobSummary>,
}

/// A normalized application. Only `status` changes after the fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub created_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub person: Person,
    pub form_response: BTreeMap<String, Value>,
    pub job: Option<JobSummary>,
}

/// One labelled answer shown in the detail sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEntry {
    pub label: String,
    pub value: String,
}

impl From<ApplicationRecord> for Application {
    fn from(record: ApplicationRecord) -> Self {
        let job = record.job;
        let job_title = record
            .job_title
            .or_else(|| job.as_ref().and_then(|j| j.title.clone()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let company = record
            .company
            .or_else(|| job.as_ref().and_then(|j| j.company.clone()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Application {
            id: record.id,
            job_id: record.job_id,
            job_title,
            company,
            created_at: record.created_at,
            status: record.status.filter(|s| !s.trim().is_empty()),
            person: Person::from(record.person),
            form_response: record.form_response,
            job,
        }
    }
}

impl Application {
    pub fn logo(&self) -> Option<&str> {
        self.job.as_ref().and_then(|j| j.logo.as_deref())
    }

    /// Status label for display; absent means the recruiter has not decided.
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or(PENDING)
    }

    /// Locale date of creation, used both as a facet and for matching it.
    pub fn created_date(&self) -> Option<String> {
        self.created_at.as_ref().map(locale_date)
    }

    /// The value this application contributes to the filter dropdown.
    pub fn facet(&self) -> Option<Facet> {
        match &self.status {
            Some(status) => Some(Facet::Status(status.clone())),
            None => self.created_date().map(Facet::Date),
        }
    }

    /// Whether the application passes the selected facet. Status and date
    /// are both compared against the facet label.
    pub fn matches_facet(&self, facet: Option<&Facet>) -> bool {
        let Some(facet) = facet else {
            return true;
        };
        self.status.as_deref() == Some(facet.label())
            || self.created_date().as_deref() == Some(facet.label())
    }

    /// Case-insensitive search over applicant and posting. `needle` must
    /// already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.person.name.to_lowercase().contains(needle)
            || self.job_title.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
            || self.person.email.to_lowercase().contains(needle)
    }

    /// Form answers with readable labels. The applicant's name is already the
    /// sheet's heading so it is left out here.
    pub fn form_entries(&self) -> Vec<FormEntry> {
        self.form_response
            .iter()
            .map(|(key, value)| FormEntry {
                label: de_camel_case(key),
                value: value_text(value),
            })
            .filter(|entry| entry.label != "Name")
            .collect()
    }

    /// Submission time: the form's own `appliedAt`, else creation time.
    pub fn applied_at_text(&self) -> String {
        if let Some(applied) = self.form_response.get(APPLIED_AT_FIELD) {
            let raw = value_text(applied);
            if !raw.trim().is_empty() && raw != NOT_AVAILABLE {
                return timestamp_text(&raw);
            }
        }
        self.created_at
            .as_ref()
            .map(locale_date_time)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

use serde::{Deserialize, Serialize};

/// Placeholder shown for contact or category fields the server left empty.
pub const NOT_AVAILABLE: &str = "N/A";

/// A person exactly as the people endpoint (or an embedded application
/// sub-record) sends it.
///
/// Only the identifier is mandatory; every other field is optional on the
/// wire and gets normalized by [`Person::from`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Some payloads carry a pre-joined display name instead of the split fields.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "email")]
    pub reg_email: Option<String>,
    #[serde(default, alias = "phone")]
    pub mobile: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

/// A normalized roster row. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub branch: String,
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        let joined = [record.first_name.as_deref(), record.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let name = if joined.is_empty() {
            record.name.map(|n| n.trim().to_string()).unwrap_or_default()
        } else {
            joined
        };

        Person {
            id: record.id,
            name,
            email: or_not_available(record.reg_email),
            phone: or_not_available(record.mobile),
            branch: or_not_available(record.branch),
        }
    }
}

impl Person {
    /// Case-insensitive substring match against the searchable roster
    /// fields. `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.branch.to_lowercase().contains(needle)
    }
}

fn or_not_available(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_names_and_fills_missing_fields() {
        let record: PersonRecord = serde_json::from_str(
            r#"{"id":"p1","firstName":"Jane","lastName":"Doe","regEmail":"jane@uni.edu"}"#,
        )
        .unwrap();

        assert_eq!(
            Person::from(record),
            Person {
                id: "p1".into(),
                name: "Jane Doe".into(),
                email: "jane@uni.edu".into(),
                phone: "N/A".into(),
                branch: "N/A".into(),
            }
        );
    }

    #[test]
    fn accepts_mongo_style_id_and_prejoined_name() {
        let record: PersonRecord =
            serde_json::from_str(r#"{"_id":"p2","name":"Ravi Kumar","email":"","branch":"CS"}"#)
                .unwrap();
        let person = Person::from(record);

        assert_eq!(person.id, "p2");
        assert_eq!(person.name, "Ravi Kumar");
        assert_eq!(person.email, "N/A");
        assert_eq!(person.branch, "CS");
    }

    #[test]
    fn single_name_part_has_no_stray_space() {
        let person = Person::from(PersonRecord {
            id: "p3".into(),
            first_name: Some("Mononym".into()),
            ..Default::default()
        });
        assert_eq!(person.name, "Mononym");
    }

    #[test]
    fn query_matches_name_email_and_branch_only() {
        let person = Person {
            id: "p1".into(),
            name: "Jane Doe".into(),
            email: "jd@uni.edu".into(),
            phone: "555-0100".into(),
            branch: "Mechanical".into(),
        };
        assert!(person.matches_query("jane"));
        assert!(person.matches_query("uni.edu"));
        assert!(person.matches_query("mech"));
        assert!(!person.matches_query("555"));
    }
}

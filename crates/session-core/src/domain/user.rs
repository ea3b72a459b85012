//! User domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as known to the user-management subsystem.
///
/// Credentials are verified upstream and are not part of this entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default = "Utc::now", with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now", with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: impl Into<String>, email: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            email,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_name(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }

    /// Human readable name built from whichever of first name, last name and
    /// email are present.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(f), Some(l)) => format!("{} {}", f, l),
            (Some(f), None) => f.clone(),
            (None, Some(l)) => l.clone(),
            (None, None) => self.email.clone().unwrap_or_default(),
        }
    }
}

/// Timestamps are written as `%Y-%m-%dT%H:%M:%S` (UTC, no offset), the layout
/// used by the JSON user file. RFC 3339 input is accepted too.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(naive) = NaiveDateTime::parse_from_str(&raw, FORMAT) {
            return Ok(naive.and_utc());
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_name_variants() {
        let bare = User::new("1", None);
        assert_eq!(bare.display_name(), "");

        let email_only = User::new("2", Some("bob@hbtn.io".into()));
        assert_eq!(email_only.display_name(), "bob@hbtn.io");

        let last_only = User::new("3", Some("bob@hbtn.io".into())).with_name(None, Some("Dylan".into()));
        assert_eq!(last_only.display_name(), "Dylan");

        let first_only = User::new("4", None).with_name(Some("Bob".into()), None);
        assert_eq!(first_only.display_name(), "Bob");

        let full = User::new("5", None).with_name(Some("Bob".into()), Some("Dylan".into()));
        assert_eq!(full.display_name(), "Bob Dylan");
    }

    #[test]
    fn test_timestamp_layout() {
        let mut user = User::new("42", Some("bob@hbtn.io".into()));
        user.created_at = Utc.with_ymd_and_hms(2017, 9, 25, 1, 55, 17).unwrap();
        user.updated_at = user.created_at;

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["created_at"], "2017-09-25T01:55:17");

        let parsed: User = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn test_deserialize_user_file_entry() {
        let raw = r#"{
            "id": "42",
            "email": "bob@hbtn.io",
            "_password": "ignored",
            "first_name": null,
            "last_name": "Dylan",
            "created_at": "2017-09-25T01:55:17",
            "updated_at": "2017-09-25T01:55:17+00:00"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.display_name(), "Dylan");
        assert_eq!(user.created_at, user.updated_at);
    }
}

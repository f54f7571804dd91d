use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::content::read_json_object;
use crate::error::{FolioError, Result};

pub const PROFILE_FIELDS: [&str; 10] = [
    "name", "title", "tagline", "bio", "email", "phone", "location", "linkedin", "github", "image",
];

const DEFAULT_PROFILE: [(&str, &str); 10] = [
    ("name", "Your Name"),
    ("title", "Data Analyst"),
    ("tagline", "Transforming Data into Actionable Insights"),
    (
        "bio",
        "Aspiring Data Analyst with strong analytical skills and a passion for extracting meaningful insights from complex datasets.",
    ),
    ("email", "your.email@example.com"),
    ("phone", "+1 234 567 8900"),
    ("location", "City, Country"),
    ("linkedin", "https://linkedin.com/in/yourprofile"),
    ("github", "https://github.com/yourusername"),
    ("image", "profile.jpg"),
];

/// The site owner's details. Loaded verbatim; recognised fields are read
/// through [`Profile::field`] and anything else rides along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Map<String, Value>);

impl Profile {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.field("name").unwrap_or_default()
    }
}

impl Default for Profile {
    fn default() -> Self {
        let fields = DEFAULT_PROFILE
            .iter()
            .map(|(key, value)| ((*key).to_string(), Value::String((*value).to_string())))
            .collect();
        Self(fields)
    }
}

/// Read the profile at `path`, or the built-in placeholder when it is absent.
/// A file that exists but does not parse is an error. Valid JSON that is not
/// an object renders as a profile with every field blank.
pub fn load_profile(path: &Path) -> Result<Profile> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "profile missing, using default");
        return Ok(Profile::default());
    }
    match read_json_object(path) {
        Ok(fields) => Ok(Profile::new(fields)),
        Err(FolioError::NotAnObject(path)) => {
            tracing::warn!(path = %path.display(), "profile is not a JSON object, rendering blank fields");
            Ok(Profile::new(Map::new()))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_profile_falls_back_to_default() {
        let temp = tempdir().expect("tempdir");
        let profile = load_profile(&temp.path().join("profile.json")).expect("default profile");
        assert_eq!(profile.name(), "Your Name");
        assert_eq!(profile.field("title"), Some("Data Analyst"));
        for key in PROFILE_FIELDS {
            assert!(profile.field(key).is_some(), "default is missing {key}");
        }
    }

    #[test]
    fn present_profile_round_trips_verbatim() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("profile.json");
        let body = json!({
            "name": "Ada Lovelace",
            "title": "Analyst",
            "email": "ada@example.com",
            "skills": ["Python", "SQL"]
        });
        fs::write(&path, body.to_string()).expect("write profile");

        let profile = load_profile(&path).expect("load profile");
        assert_eq!(profile.name(), "Ada Lovelace");
        assert_eq!(profile.field("tagline"), None);
        assert_eq!(serde_json::to_value(&profile).expect("encode"), body);
    }

    #[test]
    fn non_object_profile_renders_blank() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("profile.json");
        fs::write(&path, "[]").expect("write profile");

        let profile = load_profile(&path).expect("non-object profile loads");
        assert_eq!(profile.name(), "");
        assert_eq!(profile.field("email"), None);
    }

    #[test]
    fn malformed_profile_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("profile.json");
        fs::write(&path, "{\"name\": \"half").expect("write profile");

        let err = load_profile(&path).expect_err("must fail");
        assert!(matches!(err, FolioError::MalformedJson { .. }));
    }
}

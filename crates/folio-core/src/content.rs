use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::error::{FolioError, Result};

const RECORD_EXTENSION: &str = ".json";

/// What to do with a `.json` file that does not hold a JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// One bad file fails the whole directory load.
    #[default]
    Fail,
    /// Bad files are logged and left out of the result.
    Skip,
}

impl MalformedPolicy {
    #[must_use]
    pub const fn from_skip_flag(skip_malformed: bool) -> Self {
        if skip_malformed { Self::Skip } else { Self::Fail }
    }
}

/// One project or certificate. Only `date` has meaning to the loader; every
/// other field is carried through untouched for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord(Map<String, Value>);

impl ContentRecord {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Sort key. Missing or non-string dates read as the empty string.
    #[must_use]
    pub fn date(&self) -> &str {
        self.text("date").unwrap_or_default()
    }

    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Technology names from a `technologies` array or a comma separated string.
    #[must_use]
    pub fn technologies(&self) -> Vec<&str> {
        match self.0.get("technologies") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect(),
            Some(Value::String(raw)) => raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

}

/// Load every `*.json` record directly inside `dir`, newest `date` first.
///
/// A missing directory yields an empty list. The sort is stable, so records
/// sharing a date keep the order the filesystem listed them in, which differs
/// between platforms.
pub fn load_directory(dir: &Path, policy: MalformedPolicy) -> Result<Vec<ContentRecord>> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "content directory missing, treating as empty");
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable entries such as dangling symlinks. The root itself
            // failing is always fatal.
            Err(err) if policy == MalformedPolicy::Skip && err.depth() > 0 => {
                tracing::warn!(
                    path = ?err.path(),
                    error = %err,
                    "skipping unreadable content entry"
                );
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let is_record = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(RECORD_EXTENSION));
        if !is_record {
            continue;
        }

        match read_record(entry.path()) {
            Ok(record) => records.push(record),
            Err(err) if policy == MalformedPolicy::Skip && err.is_content_error() => {
                tracing::warn!(
                    path = %entry.path().display(),
                    error = %err,
                    "skipping malformed content record"
                );
            }
            Err(err) => return Err(err),
        }
    }

    sort_newest_first(&mut records);
    tracing::debug!(dir = %dir.display(), count = records.len(), "loaded content records");
    Ok(records)
}

pub(crate) fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    // Invalid UTF-8 surfaces as malformed JSON.
    let raw = fs::read(path)?;
    let value: Value = serde_json::from_slice(&raw).map_err(|source| FolioError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(FolioError::NotAnObject(path.to_path_buf())),
    }
}

fn read_record(path: &Path) -> Result<ContentRecord> {
    read_json_object(path).map(ContentRecord::new)
}

fn sort_newest_first(records: &mut [ContentRecord]) {
    records.sort_by(|a, b| b.date().cmp(a.date()));
}

/// Format an ISO `YYYY-MM-DD` or `YYYY-MM` date as `Mon YYYY`; anything else is echoed.
#[must_use]
pub fn display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

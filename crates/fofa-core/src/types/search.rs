use super::Record;
use serde::{Deserialize, Serialize};

/// Parsed reply from `/api/v1/search/all`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    /// Total number of matches reported by FOFA (across all pages)
    pub size: u64,

    /// Page echoed back by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Search mode echoed back by the service (e.g. `extended`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Query echoed back by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Records on this page, in reply order
    #[serde(default)]
    pub records: Vec<Record>,
}

impl SearchResults {
    /// Returns true if this page holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl IntoIterator for SearchResults {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

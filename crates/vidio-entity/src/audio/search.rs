//! Searchable audio fields.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::AudioFile;

/// The closed set of fields a search may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// The village the recording was made in.
    #[default]
    Village,
    /// The free-text description.
    Description,
    /// The upload timestamp, matched against its text rendering.
    UploadedAt,
}

impl SearchField {
    /// Every searchable field, in display order.
    pub const ALL: [SearchField; 3] = [Self::Village, Self::Description, Self::UploadedAt];

    /// Parse a `search_by` selector. Unknown selectors yield `None`.
    pub fn parse(selector: &str) -> Option<Self> {
        match selector {
            "village" => Some(Self::Village),
            "description" => Some(Self::Description),
            "uploaded_at" => Some(Self::UploadedAt),
            _ => None,
        }
    }

    /// The selector string for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Village => "village",
            Self::Description => "description",
            Self::UploadedAt => "uploaded_at",
        }
    }

    /// SQL expression yielding the searchable text of this field.
    pub fn sql_expr(&self) -> &'static str {
        match self {
            Self::Village => "village",
            Self::Description => "description",
            Self::UploadedAt => {
                "to_char(uploaded_at AT TIME ZONE 'UTC', 'YYYY-MM-DD HH24:MI:SS.US') || '+00:00'"
            }
        }
    }

    /// The searchable text of this field on `file`, if it has any.
    pub fn text_of<'a>(&self, file: &'a AudioFile) -> Option<Cow<'a, str>> {
        match self {
            Self::Village => file.village.as_deref().map(Cow::Borrowed),
            Self::Description => Some(Cow::Borrowed(file.description.as_str())),
            Self::UploadedAt => Some(Cow::Owned(timestamp_text(&file.uploaded_at))),
        }
    }

    /// Case-insensitive substring containment of `query` in this field.
    pub fn matches(&self, file: &AudioFile, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.text_of(file)
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text rendering of a timestamp used for `uploaded_at` searches,
/// e.g. `2023-05-02 04:33:10.123456+00:00`.
pub fn timestamp_text(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.6f+00:00").to_string()
}

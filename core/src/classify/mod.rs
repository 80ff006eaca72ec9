//! Data URI classifier.
//!
//! Maps a data URI to the top-level category of its media type. The
//! function is total: any input that is not a well-formed data URI, or whose
//! main type is outside the supported set, is labelled `Unknown`.

pub mod data_uri;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of labels the classifier can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeCategory {
    Image,
    Text,
    Application,
    /// Not a data URI, a malformed header, or a main type we don't
    /// distinguish (`audio`, `video`, `font`, ...).
    Unknown,
}

impl MimeCategory {
    pub const ALL: [MimeCategory; 4] = [
        MimeCategory::Image,
        MimeCategory::Text,
        MimeCategory::Application,
        MimeCategory::Unknown,
    ];

    /// Map a main type token to its label. Matching is exact and case-sensitive.
    pub fn from_main_type(main_type: &str) -> Self {
        match main_type {
            "image" => Self::Image,
            "text" => Self::Text,
            "application" => Self::Application,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Application => "application",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of a classification result: `{"type": "<label>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub kind: MimeCategory,
}

impl From<MimeCategory> for Classification {
    fn from(kind: MimeCategory) -> Self {
        Self { kind }
    }
}

/// Classify a data URI by the main type of its media type.
pub fn classify(uri: &str) -> MimeCategory {
    data_uri::extract_main_type(uri).map_or(MimeCategory::Unknown, MimeCategory::from_main_type)
}

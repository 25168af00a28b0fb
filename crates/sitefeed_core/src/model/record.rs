//! Feed record domain model.
//!
//! # Responsibility
//! - Define the schema-free persisted record shape shared by every document.
//! - Define the typed update/publication variants and their request models.
//! - Compute the generated `date` stamp for update records.
//!
//! # Invariants
//! - Record field order is the order fields were written, never alphabetized.
//! - Unknown fields in persisted records pass through load/save untouched.
//! - Field contents are not validated; malformed input persists as-is.

use chrono::Local;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Default `type` field value for update records.
pub const DEFAULT_UPDATE_KIND: &str = "general";
/// Default `type` field value for publication records.
pub const DEFAULT_PUBLICATION_KIND: &str = "conference";

/// Returns the current local calendar date formatted `YYYY-MM-DD`.
pub fn local_date_stamp() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Schema-free persisted record: an ordered field-name to value mapping.
///
/// Typed variants (`Update`, `Publication`) construct records through
/// serialization; persisted documents may additionally contain hand-edited
/// entries with arbitrary fields, which this shape carries through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Mapping);

impl Record {
    /// Wraps an already-ordered field mapping.
    pub fn from_fields(fields: Mapping) -> Self {
        Self(fields)
    }

    /// Converts any serializable entry into a schema-free record.
    ///
    /// # Errors
    /// - Fails when `entry` serializes to something other than a mapping.
    pub fn from_entry<T: Serialize>(entry: &T) -> Result<Self, serde_yaml::Error> {
        match serde_yaml::to_value(entry)? {
            Value::Mapping(fields) => Ok(Self(fields)),
            other => Err(serde_yaml::Error::custom(format!(
                "record must serialize to a mapping, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Returns the value stored under `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the string stored under `field`, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns the record title, the field confirmation output reports.
    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    /// Returns the underlying ordered field mapping.
    pub fn fields(&self) -> &Mapping {
        &self.0
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Names a YAML value shape for structural error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Behavior shared by typed feed records so one append routine serves every
/// record shape.
pub trait FeedEntry: Serialize {
    /// Label used in confirmation output (`update`, `publication`).
    const LABEL: &'static str;

    /// Title reported in confirmation output.
    fn title(&self) -> &str;
}

/// Request model for appending one site update.
///
/// Carries the documented entry-point defaults; override the public fields
/// directly for the non-default cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Update headline.
    pub title: String,
    /// Update body text.
    pub content: String,
    /// Update category, persisted as `type`. Defaults to `general`.
    pub kind: String,
    /// Related link. Defaults to empty.
    pub link: String,
}

impl UpdateRequest {
    /// Creates a request with the default `kind` and an empty `link`.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind: DEFAULT_UPDATE_KIND.to_string(),
            link: String::new(),
        }
    }
}

/// Persisted update record.
///
/// Field declaration order is the on-disk field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub title: String,
    pub content: String,
    /// Generated at append time: local calendar date `YYYY-MM-DD`.
    pub date: String,
    /// Serialized as `type` to match the site data schema.
    #[serde(rename = "type")]
    pub kind: String,
    pub link: String,
}

impl Update {
    /// Builds the persisted record from a request plus the generated date.
    pub fn from_request(request: &UpdateRequest, date: impl Into<String>) -> Self {
        Self {
            title: request.title.clone(),
            content: request.content.clone(),
            date: date.into(),
            kind: request.kind.clone(),
            link: request.link.clone(),
        }
    }
}

impl FeedEntry for Update {
    const LABEL: &'static str = "update";

    fn title(&self) -> &str {
        &self.title
    }
}

/// Request model for appending one publication.
///
/// The `date` is caller-supplied here, unlike updates where it is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRequest {
    /// Publication title.
    pub title: String,
    /// Author list, one display string.
    pub authors: String,
    /// Venue name (conference, journal, workshop).
    pub venue: String,
    /// Publication date string, persisted verbatim.
    pub date: String,
    /// Publication category, persisted as `type`. Defaults to `conference`.
    pub kind: String,
    /// PDF link. Defaults to empty.
    pub pdf: String,
    /// BibTeX source. Defaults to empty.
    pub bibtex: String,
}

impl PublicationRequest {
    /// Creates a request with the default `kind` and empty `pdf`/`bibtex`.
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        venue: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors: authors.into(),
            venue: venue.into(),
            date: date.into(),
            kind: DEFAULT_PUBLICATION_KIND.to_string(),
            pdf: String::new(),
            bibtex: String::new(),
        }
    }
}

/// Persisted publication record.
///
/// Field declaration order is the on-disk field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub date: String,
    /// Serialized as `type` to match the site data schema.
    #[serde(rename = "type")]
    pub kind: String,
    pub pdf: String,
    pub bibtex: String,
}

impl Publication {
    /// Builds the persisted record from a request, field for field.
    pub fn from_request(request: &PublicationRequest) -> Self {
        Self {
            title: request.title.clone(),
            authors: request.authors.clone(),
            venue: request.venue.clone(),
            date: request.date.clone(),
            kind: request.kind.clone(),
            pdf: request.pdf.clone(),
            bibtex: request.bibtex.clone(),
        }
    }
}

impl FeedEntry for Publication {
    const LABEL: &'static str = "publication";

    fn title(&self) -> &str {
        &self.title
    }
}

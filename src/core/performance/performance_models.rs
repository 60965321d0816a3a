// Performance log domain models.
//
// Pure domain types with no Discord dependencies. The Discord layer
// converts mentions and authors into these before calling the service.

use chrono::NaiveDate;

/// Column format used for `date` in storage and in replies.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One stored performance record about a single member on a single date.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceLogEntry {
    /// Assigned by the store on insert, never reused
    pub id: i64,
    /// The member the entry is about (not the author)
    pub user_id: u64,
    /// Display name captured when the entry was logged
    pub username: String,
    pub date: NaiveDate,
    pub score: Option<i64>,
    /// Count of basic errors
    pub errors: Option<i64>,
    pub note: Option<String>,
}

impl PerformanceLogEntry {
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// An entry that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerformanceLog {
    pub user_id: u64,
    pub username: String,
    pub date: NaiveDate,
    pub score: Option<i64>,
    pub errors: Option<i64>,
    pub note: Option<String>,
}

impl NewPerformanceLog {
    /// Attach the store-assigned id.
    pub fn into_entry(self, id: i64) -> PerformanceLogEntry {
        PerformanceLogEntry {
            id,
            user_id: self.user_id,
            username: self.username,
            date: self.date,
            score: self.score,
            errors: self.errors,
            note: self.note,
        }
    }
}

/// Fields extracted from the free-text arguments of a log command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    pub score: Option<i64>,
    pub errors: Option<i64>,
    /// Empty when no note marker was present
    pub note: String,
}

impl ParsedLog {
    pub fn is_empty(&self) -> bool {
        self.score.is_none() && self.errors.is_none() && self.note.is_empty()
    }
}

/// The member a log entry is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSubject {
    pub user_id: u64,
    pub username: String,
}

/// Capability handed in by the adapter for destructive operations.
///
/// The core never looks up platform permissions itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageAccess {
    Granted,
    Denied,
}

impl From<bool> for ManageAccess {
    fn from(granted: bool) -> Self {
        if granted {
            ManageAccess::Granted
        } else {
            ManageAccess::Denied
        }
    }
}

/// Result of a delete request. A missing id is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

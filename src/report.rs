//! Accumulated validation messages
//!
//! [`ErrorReport`] is the append-only list of human readable messages a
//! validator builds up along its chain. Messages are never deduplicated and
//! keep the order in which the checks ran.

use std::error::Error as StdError;
use std::fmt;

use crate::semigroup::Semigroup;
use crate::value::LIST_SEPARATOR;

/// Ordered validation messages, rendered comma separated.
///
/// # Examples
///
/// ```
/// use fieldcheck::ErrorReport;
///
/// let mut report = ErrorReport::new();
/// assert!(report.is_empty());
/// assert_eq!(report.to_string(), "");
///
/// report.push("min length: 3");
/// report.push("min length: 3");
/// assert_eq!(report.len(), 2);
/// assert_eq!(report.to_string(), "min length: 3, min length: 3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorReport {
    messages: Vec<String>,
}

impl ErrorReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// The messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over the messages.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.messages.iter()
    }

    /// Consume the report and return the raw messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join(LIST_SEPARATOR))
    }
}

impl StdError for ErrorReport {}

impl Semigroup for ErrorReport {
    #[inline]
    fn combine(self, other: Self) -> Self {
        ErrorReport {
            messages: self.messages.combine(other.messages),
        }
    }
}

impl From<Vec<String>> for ErrorReport {
    fn from(messages: Vec<String>) -> Self {
        ErrorReport { messages }
    }
}

impl<S: Into<String>> FromIterator<S> for ErrorReport {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ErrorReport {
            messages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for ErrorReport {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

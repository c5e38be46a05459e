//! The wrapped field value
//!
//! A form field arrives either as a single string or as a list of strings
//! (checkbox groups, multi-selects, repeated inputs). [`Value`] models both as
//! one sum type so every operation can `match` on the shape instead of testing
//! it at runtime.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{Kind, Value};
//!
//! let single = Value::from("hello");
//! assert_eq!(single.kind(), Kind::Text);
//!
//! let many = Value::from(vec!["a", "b"]);
//! assert_eq!(many.kind(), Kind::TextList);
//! assert_eq!(many.to_string(), "a, b");
//! ```

use std::fmt;

/// Separator used when a list value is rendered as one string.
pub const LIST_SEPARATOR: &str = ", ";

/// The shape of a [`Value`], fixed for the lifetime of a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    /// A single string.
    Text,
    /// An ordered list of strings.
    TextList,
}

impl Kind {
    /// Human readable name, as used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::TextList => "text list",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single text value or an ordered list of text values.
///
/// With the `serde` feature the value (de)serializes untagged: a JSON string
/// is `Text`, a JSON array of strings is `TextList`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A single string.
    Text(String),
    /// An ordered list of strings.
    TextList(Vec<String>),
}

impl Value {
    /// The [`Kind`] of this value.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::TextList(_) => Kind::TextList,
        }
    }

    /// Borrow the single string, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::TextList(_) => None,
        }
    }

    /// Borrow the elements, if this is a `TextList` value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Text(_) => None,
            Value::TextList(items) => Some(items),
        }
    }

    /// Iterate over every string held: the single text, or each element.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        match self {
            Value::Text(text) => std::slice::from_ref(text).iter(),
            Value::TextList(items) => items.iter(),
        }
    }

    /// Replace every string held with `f(string)`.
    ///
    /// The variant is preserved; for lists this is applied element-wise.
    pub(crate) fn map_each<F>(self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        match self {
            Value::Text(text) => Value::Text(f(&text)),
            Value::TextList(items) => {
                Value::TextList(items.iter().map(|item| f(item)).collect())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::TextList(items) => f.write_str(&items.join(LIST_SEPARATOR)),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl<S: Into<String>> From<Vec<S>> for Value {
    fn from(items: Vec<S>) -> Self {
        Value::TextList(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Value::from("x").kind(), Kind::Text);
        assert_eq!(Value::from(Vec::<String>::new()).kind(), Kind::TextList);
    }

    #[test]
    fn test_display_joins_list() {
        let value = Value::from(vec!["red", "green", "blue"]);
        assert_eq!(value.to_string(), "red, green, blue");
        assert_eq!(Value::from(Vec::<&str>::new()).to_string(), "");
    }

    #[test]
    fn test_iter_covers_both_shapes() {
        let text = Value::from("one");
        assert_eq!(text.iter().collect::<Vec<_>>(), vec!["one"]);

        let list = Value::from(vec!["a", "b"]);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_map_each_keeps_variant() {
        let list = Value::from(vec!["a", "b"]).map_each(|s| s.to_uppercase());
        assert_eq!(list, Value::TextList(vec!["A".into(), "B".into()]));

        let text = Value::from("a").map_each(|s| format!("{s}!"));
        assert_eq!(text, Value::Text("a!".into()));
    }

    #[test]
    fn test_accessors() {
        let text = Value::from("x");
        assert_eq!(text.as_text(), Some("x"));
        assert_eq!(text.as_list(), None);

        let list = Value::from(vec!["x"]);
        assert_eq!(list.as_text(), None);
        assert_eq!(list.as_list(), Some(&["x".to_string()][..]));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Text.to_string(), "text");
        assert_eq!(Kind::TextList.to_string(), "text list");
    }
}

//! The fluent validator
//!
//! A [`Validator`] wraps one form field, runs a chain of checks and
//! sanitizers over it, and collects every failure message along the way.
//! Checks never stop the chain: a short value still gets its whitespace
//! collapsed, and the caller reads all problems at the end via
//! [`Validator::errors`].
//!
//! Operations with argument constraints ([`min_length`](Validator::min_length),
//! [`max_length`](Validator::max_length)) return `Result` so misuse surfaces
//! immediately; chain them with `?`.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Validator;
//!
//! # fn main() -> Result<(), fieldcheck::ValidatorError> {
//! let username = Validator::text("  jo  ")
//!     .trim()
//!     .min_length(3)?
//!     .max_length(16)?
//!     .htmlify();
//!
//! assert_eq!(username.errors(), "min length: 3");
//! assert_eq!(username.to_text(), "jo");
//! # Ok(())
//! # }
//! ```
//!
//! ## Lists
//!
//! ```
//! use fieldcheck::Validator;
//!
//! # fn main() -> Result<(), fieldcheck::ValidatorError> {
//! let tags = Validator::list(["  rust ", "", "  ", "a"])
//!     .trim()
//!     .not_empty()
//!     .min_length(2)?;
//!
//! assert_eq!(tags.errors(), "each entry min length: 2");
//! assert_eq!(tags.unwrap_list()?, vec!["rust", "a"]);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;

use crate::error::ValidatorError;
use crate::fs::{Filesystem, HostFs};
use crate::report::ErrorReport;
use crate::sanitize;
use crate::value::{Kind, Value};

/// How string length is counted by the length checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthMode {
    /// UTF-8 bytes.
    #[default]
    Bytes,
    /// Unicode scalar values.
    Chars,
}

impl LengthMode {
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

/// Fluent validation and sanitization of a single field.
///
/// Created with [`Validator::text`] or [`Validator::list`]; the [`Kind`]
/// chosen there never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    value: Value,
    errors: ErrorReport,
    length_mode: LengthMode,
}

impl Validator {
    /// Validate a single text value.
    ///
    /// ```
    /// use fieldcheck::{Kind, Validator};
    ///
    /// let v = Validator::text("hello");
    /// assert_eq!(v.kind(), Kind::Text);
    /// assert!(v.is_valid());
    /// ```
    pub fn text(value: impl Into<String>) -> Self {
        Self::from_value(Value::Text(value.into()))
    }

    /// Validate a list of text values.
    ///
    /// ```
    /// use fieldcheck::{Kind, Validator};
    ///
    /// let v = Validator::list(vec!["a", "b"]);
    /// assert_eq!(v.kind(), Kind::TextList);
    /// assert_eq!(v.to_text(), "a, b");
    /// ```
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_value(Value::TextList(values.into_iter().map(Into::into).collect()))
    }

    /// Validate an already built [`Value`].
    pub fn from_value(value: Value) -> Self {
        Validator {
            value,
            errors: ErrorReport::new(),
            length_mode: LengthMode::default(),
        }
    }

    /// Validate a decoded JSON field.
    ///
    /// A JSON string becomes a text validator, an array of strings a list
    /// validator. Anything else is rejected with
    /// [`ValidatorError::InvalidType`].
    ///
    /// ```
    /// use fieldcheck::{Kind, Validator, ValidatorError};
    /// use serde_json::json;
    ///
    /// let v = Validator::from_json(json!(["a", "b"])).unwrap();
    /// assert_eq!(v.kind(), Kind::TextList);
    ///
    /// let err = Validator::from_json(json!(42)).unwrap_err();
    /// assert!(matches!(err, ValidatorError::InvalidType { found: "number", .. }));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidatorError> {
        use serde_json::Value as Json;

        match value {
            Json::String(text) => Ok(Self::text(text)),
            Json::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Json::String(text) => Ok(text),
                    other => Err(reject(ValidatorError::InvalidType {
                        expected: "array of strings",
                        found: json_type(&other),
                    })),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::list),
            other => Err(reject(ValidatorError::InvalidType {
                expected: "string or array of strings",
                found: json_type(&other),
            })),
        }
    }

    /// Choose how the length checks count characters. Defaults to bytes.
    ///
    /// ```
    /// use fieldcheck::{LengthMode, Validator};
    ///
    /// # fn main() -> Result<(), fieldcheck::ValidatorError> {
    /// assert_eq!(Validator::text("né").max_length(2)?.errors(), "max length: 2");
    ///
    /// let chars = Validator::text("né")
    ///     .with_length_mode(LengthMode::Chars)
    ///     .max_length(2)?;
    /// assert!(chars.is_valid());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// The kind fixed at construction.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    // ---- length checks -------------------------------------------------

    /// Record an error for the value, or each list entry, shorter than `min`.
    ///
    /// Fails with [`ValidatorError::InvalidArgument`] if `min` is negative or
    /// does not fit in `usize`.
    ///
    /// ```
    /// use fieldcheck::{Validator, ValidatorError};
    ///
    /// # fn main() -> Result<(), ValidatorError> {
    /// assert_eq!(Validator::text("ab").min_length(3)?.errors(), "min length: 3");
    /// assert_eq!(
    ///     Validator::list(["a", "b", "abc"]).min_length(2)?.errors(),
    ///     "each entry min length: 2, each entry min length: 2"
    /// );
    /// assert!(Validator::text("ab").min_length(-1).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn min_length<N>(self, min: N) -> Result<Self, ValidatorError>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let min: usize = min.try_into().map_err(|_| {
            reject(ValidatorError::invalid_argument(
                "min_length",
                min,
                "a non-negative integer that fits usize",
            ))
        })?;

        let message = match self.kind() {
            Kind::Text => format!("min length: {}", min),
            Kind::TextList => format!("each entry min length: {}", min),
        };
        Ok(self.check_lengths(|len| len < min, message))
    }

    /// Record an error for the value, or each list entry, longer than `max`.
    ///
    /// Fails with [`ValidatorError::InvalidArgument`] unless `max` is a
    /// positive integer that fits in `usize`.
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// # fn main() -> Result<(), fieldcheck::ValidatorError> {
    /// assert_eq!(Validator::text("abcd").max_length(3)?.errors(), "max length: 3");
    /// assert!(Validator::text("abc").max_length(3)?.is_valid());
    /// assert!(Validator::text("abc").max_length(0).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn max_length<N>(self, max: N) -> Result<Self, ValidatorError>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let max: usize = match max.try_into() {
            Ok(max) if max > 0 => max,
            _ => {
                return Err(reject(ValidatorError::invalid_argument(
                    "max_length",
                    max,
                    "a positive integer that fits usize",
                )))
            }
        };

        let message = match self.kind() {
            Kind::Text => format!("max length: {}", max),
            Kind::TextList => format!("each entry max length: {}", max),
        };
        Ok(self.check_lengths(|len| len > max, message))
    }

    fn check_lengths(mut self, fails: impl Fn(usize) -> bool, message: String) -> Self {
        let mode = self.length_mode;
        let failures = self
            .value
            .iter()
            .filter(|item| fails(mode.measure(item)))
            .count();

        for _ in 0..failures {
            self.record(message.clone());
        }
        self
    }

    // ---- sanitizers ----------------------------------------------------

    /// Strip surrounding whitespace.
    ///
    /// List entries that end up empty are dropped; the survivors keep their
    /// order.
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// assert_eq!(Validator::text("  a  b  ").trim().to_text(), "a  b");
    ///
    /// let list = Validator::list(["  ", "x", ""]).trim();
    /// assert_eq!(list.unwrap_list().unwrap(), vec!["x"]);
    /// ```
    pub fn trim(self) -> Self {
        self.sanitize(|value| match value {
            Value::Text(text) => Value::Text(sanitize::trim_whitespace(&text)),
            Value::TextList(items) => Value::TextList(
                items
                    .iter()
                    .map(|item| sanitize::trim_whitespace(item))
                    .filter(|item| !item.is_empty())
                    .collect(),
            ),
        })
    }

    /// Escape the value for HTML output. See [`sanitize::escape_html`].
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// assert_eq!(Validator::text("<b>").htmlify().to_text(), "&lt;b&gt;");
    /// ```
    pub fn htmlify(self) -> Self {
        self.sanitize(|value| value.map_each(sanitize::escape_html))
    }

    /// Collapse runs of whitespace into one space. Does not trim.
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// assert_eq!(Validator::text("a   b").spacify().to_text(), "a b");
    /// ```
    pub fn spacify(self) -> Self {
        self.sanitize(|value| value.map_each(sanitize::collapse_whitespace))
    }

    /// Strip leading and trailing `/`.
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// assert_eq!(Validator::text("/a/b/").trim_slashes().to_text(), "a/b");
    /// ```
    pub fn trim_slashes(self) -> Self {
        self.sanitize(|value| value.map_each(sanitize::trim_slashes))
    }

    fn sanitize(mut self, f: impl FnOnce(Value) -> Value) -> Self {
        self.value = f(self.value);
        self
    }

    // ---- presence checks -----------------------------------------------

    /// Record an error if the text is empty or the list has no entries.
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// assert_eq!(Validator::text("").not_empty().errors(), "cannot be empty");
    /// assert_eq!(
    ///     Validator::list(Vec::<String>::new()).not_empty().errors(),
    ///     "need at least one entry"
    /// );
    /// ```
    pub fn not_empty(mut self) -> Self {
        let message = match &self.value {
            Value::Text(text) if text.is_empty() => Some("cannot be empty"),
            Value::TextList(items) if items.is_empty() => Some("need at least one entry"),
            _ => None,
        };
        if let Some(message) = message {
            self.record(message.to_string());
        }
        self
    }

    /// Record an error for every value where `prepend + value + append` is not
    /// an existing regular file on the host.
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// let v = Validator::text("missing").is_file("/nonexistent/", ".txt");
    /// assert_eq!(v.errors(), "not a file: missing.txt");
    /// ```
    pub fn is_file(self, prepend: &str, append: &str) -> Self {
        self.is_file_in(&HostFs, prepend, append)
    }

    /// [`is_file`](Validator::is_file) against an explicit [`Filesystem`].
    pub fn is_file_in<F: Filesystem>(self, fs: &F, prepend: &str, append: &str) -> Self {
        self.check_paths(prepend, append, "not a file", |path| fs.is_file(path))
    }

    /// Record an error for every value where `prepend + value + append` is not
    /// an existing directory on the host.
    ///
    /// ```
    /// use fieldcheck::Validator;
    ///
    /// let v = Validator::list(["src", "nope"]).is_dir("./", "");
    /// assert_eq!(v.errors(), "not a directory: nope");
    /// ```
    pub fn is_dir(self, prepend: &str, append: &str) -> Self {
        self.is_dir_in(&HostFs, prepend, append)
    }

    /// [`is_dir`](Validator::is_dir) with nothing prepended or appended.
    pub fn is_dir_here(self) -> Self {
        self.is_dir("", "")
    }

    /// [`is_dir`](Validator::is_dir) against an explicit [`Filesystem`].
    pub fn is_dir_in<F: Filesystem>(self, fs: &F, prepend: &str, append: &str) -> Self {
        self.check_paths(prepend, append, "not a directory", |path| fs.is_dir(path))
    }

    fn check_paths(
        mut self,
        prepend: &str,
        append: &str,
        label: &str,
        exists: impl Fn(&Path) -> bool,
    ) -> Self {
        let missing: Vec<String> = self
            .value
            .iter()
            .filter(|item| {
                let path = format!("{}{}{}", prepend, item, append);
                let found = exists(Path::new(&path));
                #[cfg(feature = "tracing")]
                tracing::trace!(path = %path, found, "probed filesystem");
                !found
            })
            .map(|item| format!("{}: {}{}", label, item, append))
            .collect();

        for message in missing {
            self.record(message);
        }
        self
    }

    fn record(&mut self, message: String) {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %self.value.kind(), error = %message, "validation failed");
        self.errors.push(message);
    }

    // ---- retrieval -----------------------------------------------------

    /// All recorded errors, comma separated. Empty when valid.
    pub fn errors(&self) -> String {
        self.errors.to_string()
    }

    /// All recorded errors, in order.
    pub fn error_list(&self) -> &[String] {
        self.errors.messages()
    }

    /// The accumulated [`ErrorReport`].
    pub fn report(&self) -> &ErrorReport {
        &self.errors
    }

    /// Consume the validator, keeping only its [`ErrorReport`].
    pub fn into_report(self) -> ErrorReport {
        self.errors
    }

    /// `true` if no check has recorded an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The current value as one string; list entries are joined with `", "`.
    pub fn to_text(&self) -> String {
        self.value.to_string()
    }

    /// The current value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the validator and return the current value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Borrow the current list entries.
    ///
    /// Fails with [`ValidatorError::WrongVariant`] on a text validator.
    pub fn as_list(&self) -> Result<&[String], ValidatorError> {
        match &self.value {
            Value::TextList(items) => Ok(items),
            Value::Text(_) => Err(reject(ValidatorError::WrongVariant {
                operation: "as_list",
                expected: Kind::TextList,
                found: Kind::Text,
            })),
        }
    }

    /// Consume the validator and return the current list entries.
    ///
    /// Fails with [`ValidatorError::WrongVariant`] on a text validator.
    ///
    /// ```
    /// use fieldcheck::{Validator, ValidatorError};
    ///
    /// let err = Validator::text("x").unwrap_list().unwrap_err();
    /// assert!(matches!(err, ValidatorError::WrongVariant { .. }));
    /// ```
    pub fn unwrap_list(self) -> Result<Vec<String>, ValidatorError> {
        match self.value {
            Value::TextList(items) => Ok(items),
            Value::Text(_) => Err(reject(ValidatorError::WrongVariant {
                operation: "unwrap_list",
                expected: Kind::TextList,
                found: Kind::Text,
            })),
        }
    }

    /// `Ok(value)` if no errors were recorded, otherwise the report.
    ///
    /// ```
    /// use fieldcheck::{Validator, Value};
    ///
    /// let ok = Validator::text(" hi ").trim().not_empty().into_result();
    /// assert_eq!(ok, Ok(Value::from("hi")));
    ///
    /// let err = Validator::text("").not_empty().into_result().unwrap_err();
    /// assert_eq!(err.to_string(), "cannot be empty");
    /// ```
    pub fn into_result(self) -> Result<Value, ErrorReport> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

fn reject(err: ValidatorError) -> ValidatorError {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %err, "validator misuse");
    err
}

#[cfg(feature = "serde")]
fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value as Json;

    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

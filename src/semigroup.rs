//! Associative merging of accumulated errors
//!
//! A form is usually validated field by field, one [`Validator`](crate::Validator)
//! per input. `Semigroup` is how the per-field results are folded into one
//! report without losing order.
//!
//! For a valid instance `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{Semigroup, Validator};
//!
//! let name = Validator::text("").not_empty();
//! let tags = Validator::list(Vec::<String>::new()).not_empty();
//!
//! let report = name.into_report().combine(tags.into_report());
//! assert_eq!(report.to_string(), "cannot be empty, need at least one entry");
//! ```

/// A type with an associative binary operation.
///
/// `combine` takes both sides by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Merge `other` into `self`, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Fold an iterator of semigroup values, returning `None` for an empty one.
///
/// ```
/// use fieldcheck::semigroup::combine_all;
///
/// let merged = combine_all(vec![vec![1], vec![2, 3], vec![]]);
/// assert_eq!(merged, Some(vec![1, 2, 3]));
/// assert_eq!(combine_all(Vec::<Vec<i32>>::new()), None);
/// ```
pub fn combine_all<S, I>(items: I) -> Option<S>
where
    S: Semigroup,
    I: IntoIterator<Item = S>,
{
    items.into_iter().reduce(Semigroup::combine)
}

//! Error types for ordered set queries.
//!
//! Almost every operation on [`OrderedSet`](crate::ordered_set::OrderedSet)
//! is total. The exception is asking an empty set for its smallest or largest
//! element, which yields an [`EmptyCollectionError`] instead of panicking.

/// Represents an attempt to read an extreme element of an empty set.
///
/// # Examples
///
/// ```rust
/// use sorted_set::error::EmptyCollectionError;
///
/// let error = EmptyCollectionError { operation: "min" };
/// assert_eq!(format!("{}", error), "min: collection is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollectionError {
    /// The name of the operation that required at least one element.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptyCollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: collection is empty", self.operation)
    }
}

impl std::error::Error for EmptyCollectionError {}

/// Represents errors that can occur when working with ordered sets.
///
/// # Examples
///
/// ```rust
/// use sorted_set::error::SetError;
/// use sorted_set::ordered_set::OrderedSet;
///
/// fn spread(set: &OrderedSet<i32>) -> Result<i32, SetError> {
///     Ok(set.max()? - set.min()?)
/// }
///
/// assert_eq!(spread(&OrderedSet::from([3, 9, 4])), Ok(6));
/// assert!(spread(&OrderedSet::new()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// The set had no elements.
    EmptyCollection(EmptyCollectionError),
}

impl std::fmt::Display for SetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyCollection(error) => Some(error),
        }
    }
}

impl From<EmptyCollectionError> for SetError {
    fn from(error: EmptyCollectionError) -> Self {
        Self::EmptyCollection(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    #[case::min("min", "min: collection is empty")]
    #[case::max("max", "max: collection is empty")]
    fn test_empty_collection_error_display(#[case] operation: &'static str, #[case] expected: &str) {
        let error = EmptyCollectionError { operation };
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_set_error_display_delegates_to_inner() {
        let error = SetError::EmptyCollection(EmptyCollectionError { operation: "max" });
        assert_eq!(format!("{error}"), "max: collection is empty");
    }

    #[rstest]
    fn test_set_error_from_empty_collection_error() {
        let inner = EmptyCollectionError { operation: "min" };
        let error: SetError = inner.into();
        assert_eq!(error, SetError::EmptyCollection(inner));
    }

    #[rstest]
    fn test_set_error_source_is_inner_error() {
        let error = SetError::EmptyCollection(EmptyCollectionError { operation: "min" });
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("min: collection is empty"));
    }
}

//! Three-state result of a dashboard fetch

use crate::error::FetchError;

/// Result of one fetch, keeping "nothing there" apart from "could not ask"
///
/// Only `Failed` may trigger synthetic data; `EmptyOk` is a legitimate empty
/// state and is rendered as such.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    EmptyOk,
    Failed(FetchError),
}

impl<T> FetchOutcome<T> {
    /// A `null` body counts as an empty answer, not a failure
    pub fn from_optional(result: Result<Option<T>, FetchError>) -> Self {
        match result {
            Ok(Some(value)) => FetchOutcome::Success(value),
            Ok(None) => FetchOutcome::EmptyOk,
            Err(err) => FetchOutcome::Failed(err),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> FetchOutcome<Vec<T>> {
    /// An empty list from a successful call is `EmptyOk`
    pub fn from_list(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => FetchOutcome::EmptyOk,
            Ok(items) => FetchOutcome::Success(items),
            Err(err) => FetchOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list() {
        assert_eq!(FetchOutcome::from_list(Ok(vec![1, 2])), FetchOutcome::Success(vec![1, 2]));
        assert_eq!(FetchOutcome::<Vec<u8>>::from_list(Ok(vec![])), FetchOutcome::EmptyOk);

        let failed = FetchOutcome::<Vec<u8>>::from_list(Err(FetchError::Status(502)));
        assert!(failed.is_failed());
        assert_eq!(failed.error(), Some(&FetchError::Status(502)));
    }

    #[test]
    fn test_from_optional() {
        assert_eq!(FetchOutcome::from_optional(Ok(Some(3))).success(), Some(3));
        assert_eq!(FetchOutcome::<u8>::from_optional(Ok(None)), FetchOutcome::EmptyOk);
        assert!(FetchOutcome::<u8>::from_optional(Err(FetchError::Transport("offline".into()))).is_failed());
    }
}

use crate::item::ItemId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// A write fell outside the allowed range and was clamped.
///
/// Setters that return this error have already stored the clamped value;
/// the error only tells the caller that clamping happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value was outside `[min, max]`.
    #[error("{field} must be between {min} and {max}, got {value} (clamped)")]
    OutOfRange {
        /// Name of the field that was written.
        field: &'static str,
        /// The value the caller tried to write.
        value: i64,
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
    },
}

impl ValidationError {
    /// Check `value` against `[min, max]`, returning the clamped value and
    /// an error when clamping was needed.
    pub(crate) fn clamp(
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    ) -> (i64, Option<Self>) {
        let clamped = value.clamp(min, max);
        let error = (clamped != value).then_some(Self::OutOfRange {
            field,
            value,
            min,
            max,
        });
        (clamped, error)
    }
}

/// Errors that can occur when editing a character record.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A new collection entry had an empty name.
    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    /// The requested collection entry does not exist.
    #[error("no entry with id {0}")]
    NotFound(ItemId),

    /// A value was clamped into range.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_range_has_no_error() {
        let (v, err) = ValidationError::clamp("vigor", 4, 1, 10);
        assert_eq!(v, 4);
        assert!(err.is_none());
    }

    #[test]
    fn clamp_outside_range_reports() {
        let (v, err) = ValidationError::clamp("vigor", 14, 1, 10);
        assert_eq!(v, 10);
        assert_eq!(
            err,
            Some(ValidationError::OutOfRange {
                field: "vigor",
                value: 14,
                min: 1,
                max: 10,
            })
        );
    }

    #[test]
    fn display() {
        let err = ValidationError::OutOfRange {
            field: "exposure",
            value: 0,
            min: 5,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "exposure must be between 5 and 100, got 0 (clamped)"
        );
        assert_eq!(
            CoreError::EmptyName("weapon").to_string(),
            "weapon name must not be empty"
        );
    }
}

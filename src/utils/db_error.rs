//! Helpers for classifying database errors.

/// Name of the unique constraint guarding `clicks.click_id`.
pub const CLICK_ID_CONSTRAINT: &str = "clicks_click_id_key";

/// Returns true when the error is the store rejecting a duplicate `click_id`.
pub fn is_unique_violation_on_click_id(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(CLICK_ID_CONSTRAINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation_on_click_id(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_click_id(&sqlx::Error::PoolTimedOut));
    }
}

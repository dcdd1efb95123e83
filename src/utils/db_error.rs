//! Helpers for classifying PostgreSQL constraint failures.

/// Returns true if `e` is a unique violation raised by `constraint`.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}

/// Returns true if `e` is a foreign key violation raised by `constraint`.
pub fn is_foreign_key_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_foreign_key_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_violations() {
        let e = sqlx::Error::RowNotFound;
        assert!(!is_unique_violation_on(&e, "projects_name_key"));
        assert!(!is_foreign_key_violation_on(&e, "projects_customer_id_fkey"));
    }
}

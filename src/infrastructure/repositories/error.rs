use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const CNT_BLOG_TITLE: &str = "blogs.title";
const CNT_USER_USERNAME: &str = "users.username";
const CNT_USER_EMAIL: &str = "users.email_id";
const CNT_USER_CONTACT: &str = "users.contact_no";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    let column = [CNT_BLOG_TITLE, CNT_USER_USERNAME, CNT_USER_EMAIL, CNT_USER_CONTACT]
                        .into_iter()
                        .find(|c| message.contains(c));
                    match column {
                        Some(column) => DomainError::Conflict(format!("{column} already exists")),
                        None => DomainError::Conflict("unique constraint violated".into()),
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::not_found("reference", "referenced record not found")
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    DomainError::Validation(format!("constraint violated: {message}"))
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::not_found("id", "row not found"),
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_become_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound { .. }
        ));
    }
}

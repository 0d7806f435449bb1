/// Repository errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}

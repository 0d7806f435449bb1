#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("basket.not_found")]
    NotFound,
    #[error("basket.quantity_zero")]
    QuantityZero,
    #[error("basket.quantity_not_positive")]
    QuantityNotPositive,
    #[error("basket.invalid_range")]
    InvalidRange,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

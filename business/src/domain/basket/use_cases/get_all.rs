use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;

#[async_trait]
pub trait GetAllBasketsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BasketItem>, BasketError>;
}

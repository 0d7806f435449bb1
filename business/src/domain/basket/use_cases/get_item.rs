use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::shared::value_objects::BuyerId;

pub struct GetBasketItemParams {
    pub buyer_id: BuyerId,
    pub product_id: i32,
}

#[async_trait]
pub trait GetBasketItemUseCase: Send + Sync {
    async fn execute(&self, params: GetBasketItemParams) -> Result<Vec<BasketItem>, BasketError>;
}

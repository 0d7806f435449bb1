use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::shared::value_objects::BuyerId;

pub struct UpdateBasketItemParams {
    pub buyer_id: BuyerId,
    pub product_id: i32,
    pub quantity: i32,
}

#[async_trait]
pub trait UpdateBasketItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBasketItemParams) -> Result<BasketItem, BasketError>;
}

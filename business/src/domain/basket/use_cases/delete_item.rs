use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::shared::value_objects::BuyerId;

pub struct DeleteBasketItemParams {
    pub buyer_id: BuyerId,
    pub product_id: i32,
}

#[async_trait]
pub trait DeleteBasketItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteBasketItemParams) -> Result<BasketItem, BasketError>;
}

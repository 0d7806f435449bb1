use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::shared::value_objects::BuyerId;

pub struct AddBasketItemParams {
    pub buyer_id: BuyerId,
    pub product_id: i32,
    pub quantity: i32,
    pub name: String,
    pub cost: BigDecimal,
}

#[async_trait]
pub trait AddBasketItemUseCase: Send + Sync {
    async fn execute(&self, params: AddBasketItemParams) -> Result<BasketItem, BasketError>;
}

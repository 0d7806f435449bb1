use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::shared::value_objects::BuyerId;

pub struct GetBuyerBasketParams {
    pub buyer_id: BuyerId,
}

#[async_trait]
pub trait GetBuyerBasketUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetBuyerBasketParams,
    ) -> Result<Vec<BasketItem>, BasketError>;
}

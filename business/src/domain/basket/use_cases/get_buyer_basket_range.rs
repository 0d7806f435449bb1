use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::shared::value_objects::BuyerId;

/// Half-open page `[start, end)` over the buyer's items in listing order.
pub struct GetBuyerBasketRangeParams {
    pub buyer_id: BuyerId,
    pub start: i64,
    pub end: i64,
}

#[async_trait]
pub trait GetBuyerBasketRangeUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetBuyerBasketRangeParams,
    ) -> Result<Vec<BasketItem>, BasketError>;
}

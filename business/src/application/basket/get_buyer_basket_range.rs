use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get_buyer_basket_range::{
    GetBuyerBasketRangeParams, GetBuyerBasketRangeUseCase,
};
use crate::domain::logger::Logger;

pub struct GetBuyerBasketRangeUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBuyerBasketRangeUseCase for GetBuyerBasketRangeUseCaseImpl {
    async fn execute(
        &self,
        params: GetBuyerBasketRangeParams,
    ) -> Result<Vec<BasketItem>, BasketError> {
        if params.start >= params.end {
            return Err(BasketError::InvalidRange);
        }

        self.logger.info(&format!(
            "Listing basket for buyer {} in range {}-{}",
            params.buyer_id, params.start, params.end
        ));

        // A buyer with no items at all is a 404; a page past the end of an
        // existing basket is an empty 200.
        if !self.repository.buyer_has_items(&params.buyer_id).await? {
            return Err(BasketError::NotFound);
        }

        let items = self
            .repository
            .get_by_buyer_range(&params.buyer_id, params.start, params.end - params.start)
            .await?;

        Ok(items)
    }
}

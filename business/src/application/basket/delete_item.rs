use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::delete_item::{
    DeleteBasketItemParams, DeleteBasketItemUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteBasketItemUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteBasketItemUseCase for DeleteBasketItemUseCaseImpl {
    async fn execute(&self, params: DeleteBasketItemParams) -> Result<BasketItem, BasketError> {
        self.logger.info(&format!(
            "Deleting item ({}, {})",
            params.buyer_id, params.product_id
        ));

        match self
            .repository
            .delete_item(&params.buyer_id, params.product_id)
            .await?
        {
            Some(removed) => {
                self.logger
                    .info(&format!("Deleted basket item {}", removed.id));
                Ok(removed)
            }
            None => Err(BasketError::NotFound),
        }
    }
}

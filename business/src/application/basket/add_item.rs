use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{BasketItem, NewBasketItem};
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::add_item::{AddBasketItemParams, AddBasketItemUseCase};
use crate::domain::logger::Logger;

pub struct AddBasketItemUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddBasketItemUseCase for AddBasketItemUseCaseImpl {
    async fn execute(&self, params: AddBasketItemParams) -> Result<BasketItem, BasketError> {
        self.logger.info(&format!(
            "Adding {} of product {} to basket of buyer {}",
            params.quantity, params.product_id, params.buyer_id
        ));

        let item = NewBasketItem::new(
            params.buyer_id,
            params.product_id,
            params.name,
            params.cost,
            params.quantity,
        )?;

        // Merge path first: an atomic in-database increment, so concurrent
        // adds for the same key cannot lose quantity. Name and cost of the
        // existing row stay untouched.
        if let Some(merged) = self
            .repository
            .increment_quantity(&item.buyer_id, item.product_id, item.quantity)
            .await?
        {
            self.logger.info(&format!(
                "Merged into existing item {}, quantity now {}",
                merged.id, merged.quantity
            ));
            return Ok(merged);
        }

        let created = self.repository.insert(&item).await?;
        self.logger
            .info(&format!("Created basket item {}", created.id));
        Ok(created)
    }
}

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::BuyerId;

use super::model::{BasketItem, NewBasketItem};

/// Port for the basket line item store. Listing order is by surrogate id
/// ascending so pagination offsets stay deterministic.
#[async_trait]
pub trait BasketRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<BasketItem>, RepositoryError>;

    async fn get_by_buyer(&self, buyer_id: &BuyerId) -> Result<Vec<BasketItem>, RepositoryError>;

    async fn get_by_buyer_range(
        &self,
        buyer_id: &BuyerId,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BasketItem>, RepositoryError>;

    async fn buyer_has_items(&self, buyer_id: &BuyerId) -> Result<bool, RepositoryError>;

    /// Defensively plural: the (buyer, product) invariant guarantees at most
    /// one row, but the read path does not rely on it.
    async fn find_items(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
    ) -> Result<Vec<BasketItem>, RepositoryError>;

    async fn insert(&self, item: &NewBasketItem) -> Result<BasketItem, RepositoryError>;

    /// Atomically adds `delta` to the quantity of the matching row inside the
    /// database. Returns `None` when no row matched.
    async fn increment_quantity(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
        delta: i32,
    ) -> Result<Option<BasketItem>, RepositoryError>;

    /// Overwrites the quantity of the matching row. Returns `None` when no
    /// row matched; never creates a row.
    async fn set_quantity(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
        quantity: i32,
    ) -> Result<Option<BasketItem>, RepositoryError>;

    /// Removes the matching row and echoes it back. Returns `None` when no
    /// row matched.
    async fn delete_item(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
    ) -> Result<Option<BasketItem>, RepositoryError>;
}

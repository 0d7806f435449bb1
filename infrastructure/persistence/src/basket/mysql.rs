use async_trait::async_trait;
use sqlx::MySqlPool;

use business::domain::basket::model::{BasketItem, NewBasketItem};
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::BuyerId;

use super::entity::BasketItemEntity;

/// MySQL has no `UPDATE ... RETURNING`, so the mutating operations re-read
/// the row after the statement. The quantity increment itself is still a
/// single atomic statement.
pub struct BasketRepositoryMySql {
    pool: MySqlPool,
}

impl BasketRepositoryMySql {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_item(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
    ) -> Result<Option<BasketItemEntity>, RepositoryError> {
        sqlx::query_as::<_, BasketItemEntity>(
            "SELECT id, buyerId, productId, name, cost, quantity FROM Baskets WHERE buyerId = ? AND productId = ? ORDER BY id LIMIT 1",
        )
        .bind(buyer_id.as_str())
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryMySql {
    async fn get_all(&self) -> Result<Vec<BasketItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, BasketItemEntity>(
            "SELECT id, buyerId, productId, name, cost, quantity FROM Baskets ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_buyer(&self, buyer_id: &BuyerId) -> Result<Vec<BasketItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, BasketItemEntity>(
            "SELECT id, buyerId, productId, name, cost, quantity FROM Baskets WHERE buyerId = ? ORDER BY id",
        )
        .bind(buyer_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_buyer_range(
        &self,
        buyer_id: &BuyerId,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BasketItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, BasketItemEntity>(
            "SELECT id, buyerId, productId, name, cost, quantity FROM Baskets WHERE buyerId = ? ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(buyer_id.as_str())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn buyer_has_items(&self, buyer_id: &BuyerId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM Baskets WHERE buyerId = ?)",
        )
        .bind(buyer_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(exists)
    }

    async fn find_items(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
    ) -> Result<Vec<BasketItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, BasketItemEntity>(
            "SELECT id, buyerId, productId, name, cost, quantity FROM Baskets WHERE buyerId = ? AND productId = ? ORDER BY id",
        )
        .bind(buyer_id.as_str())
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert(&self, item: &NewBasketItem) -> Result<BasketItem, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO Baskets (buyerId, productId, name, cost, quantity) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(item.buyer_id.as_str())
        .bind(item.product_id)
        .bind(&item.name)
        .bind(&item.cost)
        .bind(item.quantity)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let entity = sqlx::query_as::<_, BasketItemEntity>(
            "SELECT id, buyerId, productId, name, cost, quantity FROM Baskets WHERE id = ?",
        )
        .bind(result.last_insert_id() as i32)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(entity.into_domain())
    }

    async fn increment_quantity(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
        delta: i32,
    ) -> Result<Option<BasketItem>, RepositoryError> {
        let result = sqlx::query(
            "UPDATE Baskets SET quantity = quantity + ? WHERE buyerId = ? AND productId = ?",
        )
        .bind(delta)
        .bind(buyer_id.as_str())
        .bind(product_id)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let entity = self.fetch_item(buyer_id, product_id).await?;
        Ok(entity.map(|e| e.into_domain()))
    }

    async fn set_quantity(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
        quantity: i32,
    ) -> Result<Option<BasketItem>, RepositoryError> {
        // rows_affected is 0 for a no-change update under MySQL, so existence
        // is decided by a lookup rather than the affected count.
        let Some(_existing) = self.fetch_item(buyer_id, product_id).await? else {
            return Ok(None);
        };

        sqlx::query("UPDATE Baskets SET quantity = ? WHERE buyerId = ? AND productId = ?")
            .bind(quantity)
            .bind(buyer_id.as_str())
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let entity = self.fetch_item(buyer_id, product_id).await?;
        Ok(entity.map(|e| e.into_domain()))
    }

    async fn delete_item(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
    ) -> Result<Option<BasketItem>, RepositoryError> {
        let Some(existing) = self.fetch_item(buyer_id, product_id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM Baskets WHERE buyerId = ? AND productId = ?")
            .bind(buyer_id.as_str())
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Some(existing.into_domain()))
    }
}

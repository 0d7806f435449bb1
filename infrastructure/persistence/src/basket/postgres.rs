use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::basket::model::{BasketItem, NewBasketItem};
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::BuyerId;

use super::entity::BasketItemEntity;

pub struct BasketRepositoryPostgres {
    pool: PgPool,
}

impl BasketRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<BasketItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, BasketItemEntity>(
            r#"SELECT id, "buyerId", "productId", name, cost, quantity FROM "Baskets" ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_buyer(&self, buyer_id: &BuyerId) -> Result<Vec<BasketItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, BasketItemEntity>(
            r#"SELECT id, "buyerId", "productId", name, cost, quantity FROM "Baskets" WHERE "buyerId" = $1 ORDER BY id"#,
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
            r#"SELECT id, "buyerId", "productId", name, cost, quantity FROM "Baskets" WHERE "buyerId" = $1 ORDER BY id OFFSET $2 LIMIT $3"#,
        )
        .bind(buyer_id.as_str())
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn buyer_has_items(&self, buyer_id: &BuyerId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM "Baskets" WHERE "buyerId" = $1)"#,
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
            r#"SELECT id, "buyerId", "productId", name, cost, quantity FROM "Baskets" WHERE "buyerId" = $1 AND "productId" = $2 ORDER BY id"#,
        )
        .bind(buyer_id.as_str())
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert(&self, item: &NewBasketItem) -> Result<BasketItem, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketItemEntity>(
            r#"INSERT INTO "Baskets" ("buyerId", "productId", name, cost, quantity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, "buyerId", "productId", name, cost, quantity"#,
        )
        .bind(item.buyer_id.as_str())
        .bind(item.product_id)
        .bind(&item.name)
        .bind(&item.cost)
        .bind(item.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain())
    }

    async fn increment_quantity(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
        delta: i32,
    ) -> Result<Option<BasketItem>, RepositoryError> {
        // Single-statement increment; concurrent adds for the same key
        // serialize on the row lock instead of racing a read-modify-write.
        let entity = sqlx::query_as::<_, BasketItemEntity>(
            r#"UPDATE "Baskets" SET quantity = quantity + $3
            WHERE "buyerId" = $1 AND "productId" = $2
            RETURNING id, "buyerId", "productId", name, cost, quantity"#,
        )
        .bind(buyer_id.as_str())
        .bind(product_id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn set_quantity(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
        quantity: i32,
    ) -> Result<Option<BasketItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketItemEntity>(
            r#"UPDATE "Baskets" SET quantity = $3
            WHERE "buyerId" = $1 AND "productId" = $2
            RETURNING id, "buyerId", "productId", name, cost, quantity"#,
        )
        .bind(buyer_id.as_str())
        .bind(product_id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn delete_item(
        &self,
        buyer_id: &BuyerId,
        product_id: i32,
    ) -> Result<Option<BasketItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketItemEntity>(
            r#"DELETE FROM "Baskets"
            WHERE "buyerId" = $1 AND "productId" = $2
            RETURNING id, "buyerId", "productId", name, cost, quantity"#,
        )
        .bind(buyer_id.as_str())
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get_all::GetAllBasketsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllBasketsUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllBasketsUseCase for GetAllBasketsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<BasketItem>, BasketError> {
        self.logger.info("Listing all basket items");

        let items = self.repository.get_all().await?;
        if items.is_empty() {
            return Err(BasketError::NotFound);
        }

        self.logger
            .info(&format!("Retrieved {} basket items", items.len()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::basket::model::NewBasketItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::BuyerId;
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub BasketRepo {}

        #[async_trait]
        impl BasketRepository for BasketRepo {
            async fn get_all(&self) -> Result<Vec<BasketItem>, RepositoryError>;
            async fn get_by_buyer(&self, buyer_id: &BuyerId) -> Result<Vec<BasketItem>, RepositoryError>;
            async fn get_by_buyer_range(&self, buyer_id: &BuyerId, offset: i64, limit: i64) -> Result<Vec<BasketItem>, RepositoryError>;
            async fn buyer_has_items(&self, buyer_id: &BuyerId) -> Result<bool, RepositoryError>;
            async fn find_items(&self, buyer_id: &BuyerId, product_id: i32) -> Result<Vec<BasketItem>, RepositoryError>;
            async fn insert(&self, item: &NewBasketItem) -> Result<BasketItem, RepositoryError>;
            async fn increment_quantity(&self, buyer_id: &BuyerId, product_id: i32, delta: i32) -> Result<Option<BasketItem>, RepositoryError>;
            async fn set_quantity(&self, buyer_id: &BuyerId, product_id: i32, quantity: i32) -> Result<Option<BasketItem>, RepositoryError>;
            async fn delete_item(&self, buyer_id: &BuyerId, product_id: i32) -> Result<Option<BasketItem>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn item(id: i32, buyer: &str, product_id: i32, quantity: i32) -> BasketItem {
        BasketItem::from_repository(
            id,
            BuyerId::new(buyer),
            product_id,
            "Premium Jelly Beans".to_string(),
            BigDecimal::from_str("0.80").unwrap(),
            quantity,
        )
    }

    #[tokio::test]
    async fn should_return_all_basket_items() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![item(1, "u1", 1, 5), item(2, "u2", 2, 1)]));

        let use_case = GetAllBasketsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_table_empty() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllBasketsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), BasketError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllBasketsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), BasketError::Repository(_)));
    }
}

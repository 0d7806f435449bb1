use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get_buyer_basket::{
    GetBuyerBasketParams, GetBuyerBasketUseCase,
};
use crate::domain::logger::Logger;

pub struct GetBuyerBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBuyerBasketUseCase for GetBuyerBasketUseCaseImpl {
    async fn execute(
        &self,
        params: GetBuyerBasketParams,
    ) -> Result<Vec<BasketItem>, BasketError> {
        self.logger
            .info(&format!("Listing basket for buyer {}", params.buyer_id));

        let items = self.repository.get_by_buyer(&params.buyer_id).await?;
        if items.is_empty() {
            return Err(BasketError::NotFound);
        }

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
    async fn should_return_items_for_buyer() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo
            .expect_get_by_buyer()
            .returning(|_| Ok(vec![item(1, "u1", 1, 5), item(2, "u1", 2, 1)]));

        let use_case = GetBuyerBasketUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBuyerBasketParams {
                buyer_id: BuyerId::new("u1"),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_buyer_has_no_items() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo.expect_get_by_buyer().returning(|_| Ok(vec![]));

        let use_case = GetBuyerBasketUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBuyerBasketParams {
                buyer_id: BuyerId::new("nobody"),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), BasketError::NotFound));
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::BasketItem;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::update_item::{
    UpdateBasketItemParams, UpdateBasketItemUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateBasketItemUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBasketItemUseCase for UpdateBasketItemUseCaseImpl {
    async fn execute(&self, params: UpdateBasketItemParams) -> Result<BasketItem, BasketError> {
        // Zero quantity is a deletion in disguise; the caller is directed to
        // the delete operation instead.
        if params.quantity == 0 {
            return Err(BasketError::QuantityZero);
        }
        if params.quantity < 0 {
            return Err(BasketError::QuantityNotPositive);
        }

        self.logger.info(&format!(
            "Updating item ({}, {}) to quantity {}",
            params.buyer_id, params.product_id, params.quantity
        ));

        match self
            .repository
            .set_quantity(&params.buyer_id, params.product_id, params.quantity)
            .await?
        {
            Some(item) => Ok(item),
            None => Err(BasketError::NotFound),
        }
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

    fn params(quantity: i32) -> UpdateBasketItemParams {
        UpdateBasketItemParams {
            buyer_id: BuyerId::new("u1"),
            product_id: 1,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_overwrite_quantity() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo
            .expect_set_quantity()
            .withf(|_, _, quantity| *quantity == 2)
            .returning(|buyer_id, product_id, quantity| {
                Ok(Some(BasketItem::from_repository(
                    1,
                    buyer_id.clone(),
                    product_id,
                    "Premium Jelly Beans".to_string(),
                    BigDecimal::from_str("0.80").unwrap(),
                    quantity,
                )))
            });

        let use_case = UpdateBasketItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(2)).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_even_when_row_exists() {
        // The repository must not be touched at all for a zero update.
        let mock_repo = MockBasketRepo::new();

        let use_case = UpdateBasketItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(0)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), BasketError::QuantityZero));
    }

    #[tokio::test]
    async fn should_reject_negative_quantity() {
        let mock_repo = MockBasketRepo::new();

        let use_case = UpdateBasketItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(-1)).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            BasketError::QuantityNotPositive
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_without_creating_row() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo.expect_set_quantity().returning(|_, _, _| Ok(None));
        mock_repo.expect_insert().never();

        let use_case = UpdateBasketItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(2)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), BasketError::NotFound));
    }
}

use std::sync::Arc;

use logger::TracingLogger;
use persistence::basket::mysql::BasketRepositoryMySql;
use persistence::basket::postgres::BasketRepositoryPostgres;
use persistence::db::DbPool;

use business::application::basket::add_item::AddBasketItemUseCaseImpl;
use business::application::basket::delete_item::DeleteBasketItemUseCaseImpl;
use business::application::basket::get_all::GetAllBasketsUseCaseImpl;
use business::application::basket::get_buyer_basket::GetBuyerBasketUseCaseImpl;
use business::application::basket::get_buyer_basket_range::GetBuyerBasketRangeUseCaseImpl;
use business::application::basket::get_item::GetBasketItemUseCaseImpl;
use business::application::basket::update_item::UpdateBasketItemUseCaseImpl;
use business::domain::basket::repository::BasketRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub basket_api: crate::api::basket::routes::BasketApi,
}

impl DependencyContainer {
    pub fn new(pool: DbPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Storage adapter for whichever engine the deployment selected
        let repository: Arc<dyn BasketRepository> = match pool {
            DbPool::Postgres(pool) => Arc::new(BasketRepositoryPostgres::new(pool)),
            DbPool::MySql(pool) => Arc::new(BasketRepositoryMySql::new(pool)),
        };

        // Basket use cases
        let get_all_use_case = Arc::new(GetAllBasketsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_buyer_use_case = Arc::new(GetBuyerBasketUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_range_use_case = Arc::new(GetBuyerBasketRangeUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_item_use_case = Arc::new(GetBasketItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddBasketItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateBasketItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteBasketItemUseCaseImpl {
            repository,
            logger,
        });

        let basket_api = crate::api::basket::routes::BasketApi::new(
            get_all_use_case,
            get_buyer_use_case,
            get_range_use_case,
            get_item_use_case,
            add_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            basket_api,
        }
    }
}

use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::basket::use_cases::add_item::{AddBasketItemParams, AddBasketItemUseCase};
use business::domain::basket::use_cases::delete_item::{
    DeleteBasketItemParams, DeleteBasketItemUseCase,
};
use business::domain::basket::use_cases::get_all::GetAllBasketsUseCase;
use business::domain::basket::use_cases::get_buyer_basket::{
    GetBuyerBasketParams, GetBuyerBasketUseCase,
};
use business::domain::basket::use_cases::get_buyer_basket_range::{
    GetBuyerBasketRangeParams, GetBuyerBasketRangeUseCase,
};
use business::domain::basket::use_cases::get_item::{GetBasketItemParams, GetBasketItemUseCase};
use business::domain::basket::use_cases::update_item::{
    UpdateBasketItemParams, UpdateBasketItemUseCase,
};
use business::domain::shared::value_objects::BuyerId;

use crate::api::basket::dto::BasketItemResponse;
use crate::api::basket::params::{
    self, GetSelector, parse_add_spec, parse_delete_spec, parse_update_spec,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ServiceBearer;
use crate::api::tags::ApiTags;

pub struct BasketApi {
    get_all_use_case: Arc<dyn GetAllBasketsUseCase>,
    get_buyer_use_case: Arc<dyn GetBuyerBasketUseCase>,
    get_range_use_case: Arc<dyn GetBuyerBasketRangeUseCase>,
    get_item_use_case: Arc<dyn GetBasketItemUseCase>,
    add_use_case: Arc<dyn AddBasketItemUseCase>,
    update_use_case: Arc<dyn UpdateBasketItemUseCase>,
    delete_use_case: Arc<dyn DeleteBasketItemUseCase>,
}

impl BasketApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_all_use_case: Arc<dyn GetAllBasketsUseCase>,
        get_buyer_use_case: Arc<dyn GetBuyerBasketUseCase>,
        get_range_use_case: Arc<dyn GetBuyerBasketRangeUseCase>,
        get_item_use_case: Arc<dyn GetBasketItemUseCase>,
        add_use_case: Arc<dyn AddBasketItemUseCase>,
        update_use_case: Arc<dyn UpdateBasketItemUseCase>,
        delete_use_case: Arc<dyn DeleteBasketItemUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_buyer_use_case,
            get_range_use_case,
            get_item_use_case,
            add_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn validation_error(message: String) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message,
    })
}

/// Basket management API
///
/// CRUD over per-buyer basket line items, preserving the legacy route
/// shapes. Every route requires a verified bearer token.
#[OpenApi]
impl BasketApi {
    /// Get all baskets
    ///
    /// Returns every basket line item in the store.
    #[oai(path = "/get/", method = "get", tag = "ApiTags::Basket")]
    async fn get_all(&self, _auth: ServiceBearer) -> GetBasketsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                GetBasketsResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => GetBasketsResponse::from_error(err),
        }
    }

    /// Get baskets by selector
    ///
    /// The selector segment carries the legacy encodings:
    /// `{userid}` for a buyer's whole basket, `{userid}&range={start}-{end}`
    /// for a page of it, and `{userid}&{productid}` for a single item.
    #[oai(path = "/get/:selector", method = "get", tag = "ApiTags::Basket")]
    async fn get_by_selector(
        &self,
        _auth: ServiceBearer,
        selector: Path<String>,
    ) -> GetBasketsResponse {
        let selector = match params::parse_get_selector(&selector.0) {
            Ok(selector) => selector,
            Err(message) => return GetBasketsResponse::BadRequest(validation_error(message)),
        };

        let result = match selector {
            GetSelector::Buyer(buyer_id) => {
                self.get_buyer_use_case
                    .execute(GetBuyerBasketParams {
                        buyer_id: BuyerId::new(buyer_id),
                    })
                    .await
            }
            GetSelector::BuyerRange {
                buyer_id,
                start,
                end,
            } => {
                self.get_range_use_case
                    .execute(GetBuyerBasketRangeParams {
                        buyer_id: BuyerId::new(buyer_id),
                        start,
                        end,
                    })
                    .await
            }
            GetSelector::BuyerProduct {
                buyer_id,
                product_id,
            } => {
                self.get_item_use_case
                    .execute(GetBasketItemParams {
                        buyer_id: BuyerId::new(buyer_id),
                        product_id,
                    })
                    .await
            }
        };

        match result {
            Ok(items) => {
                GetBasketsResponse::Ok(Json(items.into_iter().map(Into::into).collect()))
            }
            Err(err) => GetBasketsResponse::from_error(err),
        }
    }

    /// Add an item to a buyer's basket
    ///
    /// If the (buyer, product) pair already has a row, the quantity is merged
    /// into it by summation and the stored name/cost stay untouched.
    #[oai(path = "/add/:spec", method = "post", tag = "ApiTags::Basket")]
    async fn add_item(&self, _auth: ServiceBearer, spec: Path<String>) -> AddItemResponse {
        let spec = match parse_add_spec(&spec.0) {
            Ok(spec) => spec,
            Err(message) => return AddItemResponse::BadRequest(validation_error(message)),
        };

        match self
            .add_use_case
            .execute(AddBasketItemParams {
                buyer_id: BuyerId::new(spec.user_id),
                product_id: spec.product_id,
                quantity: spec.quantity,
                name: spec.name,
                cost: spec.cost,
            })
            .await
        {
            Ok(item) => AddItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item's quantity
    ///
    /// Overwrites the quantity of an existing line item. A zero quantity is
    /// rejected; use delete instead.
    #[oai(path = "/update/:spec", method = "put", tag = "ApiTags::Basket")]
    async fn update_item(&self, _auth: ServiceBearer, spec: Path<String>) -> UpdateItemResponse {
        let spec = match parse_update_spec(&spec.0) {
            Ok(spec) => spec,
            Err(message) => return UpdateItemResponse::BadRequest(validation_error(message)),
        };

        match self
            .update_use_case
            .execute(UpdateBasketItemParams {
                buyer_id: BuyerId::new(spec.user_id),
                product_id: spec.product_id,
                quantity: spec.quantity,
            })
            .await
        {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemResponse::BadRequest(json),
                    404 => UpdateItemResponse::NotFound(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a basket item
    ///
    /// Removes the line item permanently and echoes the removed row.
    #[oai(path = "/delete/:spec", method = "delete", tag = "ApiTags::Basket")]
    async fn delete_item(&self, _auth: ServiceBearer, spec: Path<String>) -> DeleteItemResponse {
        let spec = match parse_delete_spec(&spec.0) {
            Ok(spec) => spec,
            Err(message) => return DeleteItemResponse::BadRequest(validation_error(message)),
        };

        match self
            .delete_use_case
            .execute(DeleteBasketItemParams {
                buyer_id: BuyerId::new(spec.user_id),
                product_id: spec.product_id,
            })
            .await
        {
            Ok(removed) => DeleteItemResponse::Ok(Json(removed.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBasketsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BasketItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl GetBasketsResponse {
    fn from_error(err: business::domain::basket::errors::BasketError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => GetBasketsResponse::BadRequest(json),
            404 => GetBasketsResponse::NotFound(json),
            _ => GetBasketsResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 200)]
    Ok(Json<BasketItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<BasketItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 200)]
    Ok(Json<BasketItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

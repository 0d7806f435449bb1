use bigdecimal::BigDecimal;
use poem_openapi::Object;

use business::domain::basket::model::BasketItem;

/// One basket line item, serialized with the legacy camelCase field names.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BasketItemResponse {
    /// Surrogate row identifier
    pub id: i32,
    /// Owning buyer's external identity
    pub buyer_id: String,
    /// Product identifier (not validated against a catalog)
    pub product_id: i32,
    /// Product display name captured at add-time
    pub name: String,
    /// Unit price captured at add-time
    pub cost: BigDecimal,
    /// Number of units in the basket
    pub quantity: i32,
}

impl From<BasketItem> for BasketItemResponse {
    fn from(item: BasketItem) -> Self {
        Self {
            id: item.id,
            buyer_id: item.buyer_id.to_string(),
            product_id: item.product_id,
            name: item.name,
            cost: item.cost,
            quantity: item.quantity,
        }
    }
}

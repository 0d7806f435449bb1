use bigdecimal::BigDecimal;

use crate::domain::shared::value_objects::BuyerId;

use super::errors::BasketError;

/// One persisted basket line item: a quantity of one product for one buyer.
///
/// `name` and `cost` are snapshots captured at add-time and never resynced
/// against a catalog; no catalog integration exists in this service.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketItem {
    pub id: i32,
    pub buyer_id: BuyerId,
    pub product_id: i32,
    pub name: String,
    pub cost: BigDecimal,
    pub quantity: i32,
}

impl BasketItem {
    /// Constructor for rows already persisted in the repository (no validation).
    pub fn from_repository(
        id: i32,
        buyer_id: BuyerId,
        product_id: i32,
        name: String,
        cost: BigDecimal,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            buyer_id,
            product_id,
            name,
            cost,
            quantity,
        }
    }
}

/// Insert payload for a line item; the surrogate id is generated by storage.
#[derive(Debug, Clone)]
pub struct NewBasketItem {
    pub buyer_id: BuyerId,
    pub product_id: i32,
    pub name: String,
    pub cost: BigDecimal,
    pub quantity: i32,
}

impl NewBasketItem {
    pub fn new(
        buyer_id: BuyerId,
        product_id: i32,
        name: String,
        cost: BigDecimal,
        quantity: i32,
    ) -> Result<Self, BasketError> {
        if quantity <= 0 {
            return Err(BasketError::QuantityNotPositive);
        }

        Ok(Self {
            buyer_id,
            product_id,
            name,
            cost,
            quantity,
        })
    }
}

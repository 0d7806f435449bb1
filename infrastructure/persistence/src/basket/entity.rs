use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::basket::model::BasketItem;
use business::domain::shared::value_objects::BuyerId;

/// Row mapping for the legacy `Baskets` table, which kept camelCase column
/// names.
#[derive(Debug, FromRow)]
pub struct BasketItemEntity {
    pub id: i32,
    #[sqlx(rename = "buyerId")]
    pub buyer_id: String,
    #[sqlx(rename = "productId")]
    pub product_id: i32,
    pub name: String,
    pub cost: BigDecimal,
    pub quantity: i32,
}

impl BasketItemEntity {
    pub fn into_domain(self) -> BasketItem {
        BasketItem::from_repository(
            self.id,
            BuyerId::new(self.buyer_id),
            self.product_id,
            self.name,
            self.cost,
            self.quantity,
        )
    }
}

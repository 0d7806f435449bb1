//! Parsers for the legacy path-segment parameter encoding.
//!
//! The original routes packed several parameters into one path segment
//! (`{userid}&range={start}-{end}`, `userId={u}&productId={p}&...`). These
//! shapes are preserved for wire compatibility, so the segment grammar is
//! decoded here; any failure becomes a 400 before a use case runs.

use bigdecimal::BigDecimal;

#[derive(Debug, PartialEq)]
pub enum GetSelector {
    Buyer(String),
    BuyerRange {
        buyer_id: String,
        start: i64,
        end: i64,
    },
    BuyerProduct {
        buyer_id: String,
        product_id: i32,
    },
}

pub fn parse_get_selector(segment: &str) -> Result<GetSelector, String> {
    let mut parts = segment.split('&');
    let buyer_id = match parts.next() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => return Err("basket.missing_user_id".to_string()),
    };

    let Some(second) = parts.next() else {
        return Ok(GetSelector::Buyer(buyer_id));
    };
    if parts.next().is_some() {
        return Err("basket.malformed_selector".to_string());
    }

    if let Some(range) = second.strip_prefix("range=") {
        let (start, end) = range
            .split_once('-')
            .ok_or_else(|| "basket.malformed_range".to_string())?;
        let start = start
            .parse::<i64>()
            .map_err(|_| "basket.malformed_range".to_string())?;
        let end = end
            .parse::<i64>()
            .map_err(|_| "basket.malformed_range".to_string())?;
        return Ok(GetSelector::BuyerRange {
            buyer_id,
            start,
            end,
        });
    }

    let product_id = second
        .parse::<i32>()
        .map_err(|_| "basket.malformed_product_id".to_string())?;
    Ok(GetSelector::BuyerProduct {
        buyer_id,
        product_id,
    })
}

#[derive(Debug, PartialEq)]
pub struct AddSpec {
    pub user_id: String,
    pub product_id: i32,
    pub quantity: i32,
    pub name: String,
    pub cost: BigDecimal,
}

pub fn parse_add_spec(segment: &str) -> Result<AddSpec, String> {
    let values = keyed_values(
        segment,
        &["userId", "productId", "quantity", "productName", "cost"],
    )?;

    Ok(AddSpec {
        user_id: values[0].to_string(),
        product_id: parse_int(values[1], "basket.malformed_product_id")?,
        quantity: parse_int(values[2], "basket.malformed_quantity")?,
        name: values[3].to_string(),
        cost: values[4]
            .parse::<BigDecimal>()
            .map_err(|_| "basket.malformed_cost".to_string())?,
    })
}

#[derive(Debug, PartialEq)]
pub struct UpdateSpec {
    pub user_id: String,
    pub product_id: i32,
    pub quantity: i32,
}

pub fn parse_update_spec(segment: &str) -> Result<UpdateSpec, String> {
    let values = keyed_values(segment, &["userId", "productId", "quantity"])?;

    Ok(UpdateSpec {
        user_id: values[0].to_string(),
        product_id: parse_int(values[1], "basket.malformed_product_id")?,
        quantity: parse_int(values[2], "basket.malformed_quantity")?,
    })
}

#[derive(Debug, PartialEq)]
pub struct DeleteSpec {
    pub user_id: String,
    pub product_id: i32,
}

pub fn parse_delete_spec(segment: &str) -> Result<DeleteSpec, String> {
    let values = keyed_values(segment, &["userId", "productId"])?;

    Ok(DeleteSpec {
        user_id: values[0].to_string(),
        product_id: parse_int(values[1], "basket.malformed_product_id")?,
    })
}

/// Splits `key=value&key=value&...`, requiring exactly the expected keys in
/// order (the legacy route templates were positional) and non-empty values.
fn keyed_values<'a>(segment: &'a str, expected: &[&str]) -> Result<Vec<&'a str>, String> {
    let parts: Vec<&str> = segment.split('&').collect();
    if parts.len() != expected.len() {
        return Err("basket.malformed_parameters".to_string());
    }

    let mut values = Vec::with_capacity(parts.len());
    for (part, key) in parts.iter().zip(expected) {
        let Some((k, v)) = part.split_once('=') else {
            return Err("basket.malformed_parameters".to_string());
        };
        if k != *key || v.is_empty() {
            return Err(format!("basket.missing_{key}"));
        }
        values.push(v);
    }

    Ok(values)
}

fn parse_int(value: &str, error: &str) -> Result<i32, String> {
    value.parse::<i32>().map_err(|_| error.to_string())
}

//! Field extractors over the static data JSON tree.
//!
//! Each extractor is pure and reports absence as `None`; none of them ever fails loudly.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::{FetchError, json};
use crate::sale::{Jwt, SaleStaticResult};

const SALE_PATH: &[&str] = &["data", "sale"];
const JWT_PATH: &[&str] = &["data", "causality_jwt"];
const BIDDER_ID_PATH: &[&str] = &["data", "me", "paddle_number"];

/// Decodes the mapping at `data.sale` into `S`.
///
/// `None` when the mapping is absent, not an object, or rejected by `S`'s deserializer.
pub fn extract_sale<S: DeserializeOwned>(json: &Value) -> Option<S> {
    let sale = json::object_at(json, SALE_PATH)?;
    serde_json::from_value(Value::Object(sale.clone())).ok()
}

/// The causality JWT at `data.causality_jwt`.
pub fn extract_jwt(json: &Value) -> Option<Jwt> {
    json::string_at(json, JWT_PATH).map(str::to_owned)
}

/// The bidder's paddle number at `data.me.paddle_number`.
pub fn extract_bidder_id(json: &Value) -> Option<String> {
    json::string_at(json, BIDDER_ID_PATH).map(str::to_owned)
}

/// Runs all three extractors and keeps the result only if every one succeeded.
pub fn extract_static_data<S: DeserializeOwned>(json: &Value) -> Option<SaleStaticResult<S>> {
    let sale = extract_sale(json);
    let jwt = extract_jwt(json);
    let bidder_id = extract_bidder_id(json);

    #[cfg(feature = "tracing")]
    {
        if sale.is_none() || jwt.is_none() || bidder_id.is_none() {
            tracing::warn!(
                sale = sale.is_some(),
                jwt = jwt.is_some(),
                bidder_id = bidder_id.is_some(),
                "static data payload missing required fields"
            );
        }
    }

    Some(SaleStaticResult {
        sale: sale?,
        jwt: jwt?,
        bidder_id: bidder_id?,
    })
}

/// Parses a raw response body into a [`SaleStaticResult`].
///
/// Text that is not JSON is handled like a payload missing every field.
///
/// # Errors
///
/// Returns [`FetchError::MalformedPayload`] if any of the three fields cannot be extracted.
pub fn parse_static_data<S: DeserializeOwned>(body: &str) -> Result<SaleStaticResult<S>, FetchError> {
    let json: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    extract_static_data(&json).ok_or(FetchError::MalformedPayload)
}

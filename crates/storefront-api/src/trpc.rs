//! tRPC wire format
//!
//! Queries are `GET {base}/{procedure}?input=<encodeURIComponent(JSON)>`.
//! Responses wrap the payload as `{"result":{"data":{"json": <payload>}}}`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storefront_core::prelude::*;

pub const PRODUCT_LIST: &str = "product.list";
pub const PRODUCT_BY_SLUG: &str = "product.getBySlug";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode the way JavaScript's `encodeURIComponent` does
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Build the request URL for a query procedure
pub fn procedure_url<I: Serialize>(base_url: &str, procedure: &str, input: &I) -> Result<String> {
    let json = serde_json::to_string(input)?;
    Ok(format!(
        "{}/{}?input={}",
        base_url.trim_end_matches('/'),
        procedure,
        encode_uri_component(&json)
    ))
}

/// Input of `product.getBySlug`
#[derive(Debug, Serialize)]
pub struct SlugInput<'a> {
    pub slug: &'a str,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: EnvelopeResult<T>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeResult<T> {
    data: EnvelopeData<T>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData<T> {
    json: T,
}

/// Decode a response body and unwrap the `result.data.json` payload
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.result.data.json)
}

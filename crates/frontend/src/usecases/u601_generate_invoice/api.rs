//! Remote operations of the invoice generator: line count, one page of
//! line items, and the create call.

use contracts::domain::a001_order::{OrderId, OrderLineItem};
use contracts::domain::common::AggregateId;
use contracts::usecases::u601_generate_invoice::{
    CreateInvoiceRequest, CreateInvoiceResponse, LineItemCountResponse, LineItemQuery,
};
use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, RequestInit, RequestMode, Response};

use super::submit::reduce_error_messages;
use crate::shared::api_utils::api_base;

/// Total number of line items on the order. Resolves before any page is
/// fetched so the pager knows its bounds.
pub async fn count_line_items(order_id: OrderId) -> Result<i64, String> {
    let url = format!(
        "{}/api/u601/invoice-generator/count?order_id={}",
        api_base(),
        order_id.as_string()
    );

    match Request::get(&url)
        .header("Cache-Control", "no-cache")
        .header("Pragma", "no-cache")
        .send()
        .await
    {
        Ok(response) if response.ok() => match response.json::<LineItemCountResponse>().await {
            Ok(data) => Ok(data.count),
            Err(e) => Err(format!("Parse error: {}", e)),
        },
        Ok(response) => Err(format!("Server error: {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

/// One page of line items for the published query window
pub async fn fetch_line_items(query: &LineItemQuery) -> Result<Vec<OrderLineItem>, String> {
    let url = format!(
        "{}/api/u601/invoice-generator/line-items?order_id={}&page_size={}&page_offset={}&_ts={}",
        api_base(),
        query.order_id.as_string(),
        query.page_size,
        query.page_offset,
        js_sys::Date::now() as u64
    );

    match Request::get(&url)
        .header("Cache-Control", "no-cache")
        .header("Pragma", "no-cache")
        .send()
        .await
    {
        Ok(response) if response.ok() => match response.json::<Vec<OrderLineItem>>().await {
            Ok(data) => Ok(data),
            Err(e) => Err(format!("Parse error: {}", e)),
        },
        Ok(response) => Err(format!("Server error: {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

/// Creates the invoice from the filtered drafts.
///
/// A non-2xx response carries a `UseCaseError` body (single object or list);
/// it is reduced to one message for the error toast.
pub async fn create_invoice(
    request: CreateInvoiceRequest,
) -> Result<CreateInvoiceResponse, String> {
    let window = window().ok_or("No window object")?;

    let body = serde_json::to_string(&request).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = web_sys::Request::new_with_str_and_init(
        &format!("{}/api/u601/invoice-generator/create", api_base()),
        &opts,
    )
    .map_err(|e| format!("Failed to create request: {:?}", e))?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        let status = response.status();
        let body = match response.text() {
            Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(reduce_error_messages(status, &body));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    let response: CreateInvoiceResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;

    Ok(response)
}

//! Remote API Client
//!
//! Frontend bindings for the remote inventory endpoint, built on the browser
//! fetch API. Only the response status is consulted for create and delete;
//! the listing body is decoded for bulk load.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::ItemDraft;

const API_BASE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// What went wrong while talking to the remote endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// One record of the remote listing. Anything beyond id and title is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteRecord {
    pub id: i64,
    pub title: String,
}

/// Create request body. The remote schema has no price field; the numeric
/// userId slot carries it.
#[derive(Serialize)]
struct CreateItemBody<'a> {
    title: &'a str,
    category: &'a str,
    quantity: i32,
    #[serde(rename = "userId")]
    user_id: f64,
    location: &'a str,
}

// ========================
// Commands
// ========================

/// `POST <base>` with the validated payload. The response body is ignored.
pub async fn create_item(draft: &ItemDraft) -> Result<(), ApiError> {
    let body = serde_json::to_string(&CreateItemBody {
        title: &draft.title,
        category: &draft.category,
        quantity: draft.quantity,
        user_id: draft.price,
        location: &draft.location,
    })
    .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = send("POST", API_BASE_URL, Some(&body)).await?;
    ensure_ok(&response)
}

/// `DELETE <base>/<id>`. The response body is ignored.
pub async fn delete_item(id: i64) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}/{id}");
    let response = send("DELETE", &url, None).await?;
    ensure_ok(&response)
}

/// `GET <base>`, decoded as the full record listing.
pub async fn fetch_records() -> Result<Vec<RemoteRecord>, ApiError> {
    let response = send("GET", API_BASE_URL, None).await?;
    ensure_ok(&response)?;
    let body = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Fetch plumbing
// ========================

async fn send(method: &str, url: &str, json_body: Option<&str>) -> Result<Response, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = json_body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    response
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Network("fetch returned a non-Response value".into()))
}

fn ensure_ok(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

fn js_err(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

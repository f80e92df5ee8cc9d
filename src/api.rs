//! Grocery API Client
//!
//! `GroceryApi` is the seam between the controller and the network.
//! `HttpGroceryApi` talks to the REST backend with the session token
//! injected at construction.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{AddItemRequest, GroceryItem, ItemResponse, ListResponse, MessageResponse};
use crate::session::AuthToken;

const STATUS_OK: u16 = 200;

pub type ApiResult<T> = Result<T, ApiError>;

/// The four list operations the UI needs
#[async_trait(?Send)]
pub trait GroceryApi {
    /// `GET /list`
    async fn list(&self) -> ApiResult<Vec<GroceryItem>>;

    /// `POST /list` with the scanned code
    async fn add(&self, upc_code: &str) -> ApiResult<GroceryItem>;

    /// `DELETE /list/{id}`
    async fn remove(&self, id: &str) -> ApiResult<()>;

    /// `DELETE /list`
    async fn clear(&self) -> ApiResult<()>;
}

/// REST implementation over `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpGroceryApi {
    base_url: String,
    token: AuthToken,
}

impl HttpGroceryApi {
    pub fn new(base_url: impl Into<String>, token: AuthToken) -> Self {
        Self { base_url: base_url.into(), token }
    }

    fn list_url(&self) -> String {
        format!("{}/list", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        item_url(&self.base_url, id)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Content-Type", "application/json")
            .header("Authorization", self.token.as_str())
    }
}

fn item_url(base_url: &str, id: &str) -> String {
    format!("{}/list/{}", base_url, utf8_percent_encode(id, NON_ALPHANUMERIC))
}

/// Error for a non-200 response; `body` is the `{ message }` payload if it parsed.
fn status_error(status: u16, body: Option<MessageResponse>) -> ApiError {
    match body {
        Some(body) => ApiError::Rejected { status, message: body.message },
        None => ApiError::Status(status),
    }
}

fn decode_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Anything but 200 is an error.
async fn expect_ok(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status == STATUS_OK {
        return Ok(response);
    }
    let body = response.text().await.ok();
    let message = body.and_then(|text| serde_json::from_str::<MessageResponse>(&text).ok());
    Err(status_error(status, message))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = response.text().await?;
    decode_body(&text)
}

#[async_trait(?Send)]
impl GroceryApi for HttpGroceryApi {
    async fn list(&self) -> ApiResult<Vec<GroceryItem>> {
        let response = self.authorized(Request::get(&self.list_url())).send().await?;
        let body: ListResponse = read_json(expect_ok(response).await?).await?;
        Ok(body.list)
    }

    async fn add(&self, upc_code: &str) -> ApiResult<GroceryItem> {
        let request = self
            .authorized(Request::post(&self.list_url()))
            .json(&AddItemRequest { upc_code })?;
        let response = request.send().await?;
        let body: ItemResponse = read_json(expect_ok(response).await?).await?;
        Ok(body.item)
    }

    async fn remove(&self, id: &str) -> ApiResult<()> {
        let response = self.authorized(Request::delete(&self.item_url(id))).send().await?;
        expect_ok(response).await?;
        Ok(())
    }

    async fn clear(&self) -> ApiResult<()> {
        let response = self.authorized(Request::delete(&self.list_url())).send().await?;
        expect_ok(response).await?;
        Ok(())
    }
}

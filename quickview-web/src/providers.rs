//! HTTP providers backed by the static JSON endpoints
use async_trait::async_trait;
use quickview_core::{
    CatalogEntry, CatalogProvider, Product, ProductError, ProductProvider, decode_catalog,
    decode_product,
};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::dom;
use crate::paths;

/// Browser-side failures before a body reaches the decoder.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("could not read body of {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    fn network(url: &str, err: &JsValue) -> Self {
        Self::Network {
            url: url.to_string(),
            message: dom::js_error_message(err),
        }
    }

    fn body(url: &str, err: &JsValue) -> Self {
        Self::Body {
            url: url.to_string(),
            message: dom::js_error_message(err),
        }
    }
}

impl From<FetchError> for ProductError {
    fn from(err: FetchError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// GET `url`; `Ok(None)` on 404.
#[allow(clippy::future_not_send)]
async fn get_text(url: &str) -> Result<Option<String>, ProductError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| FetchError::network(url, &err))?;
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(ProductError::Status(response.status()));
    }
    let body = dom::response_text(&response)
        .await
        .map_err(|err| FetchError::body(url, &err))?;
    Ok(Some(body))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProductProvider {
    api_base: String,
}

impl HttpProductProvider {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    #[must_use]
    pub fn url_for(&self, handle: &str) -> String {
        paths::product_url(&self.api_base, handle)
    }
}

impl Default for HttpProductProvider {
    fn default() -> Self {
        Self::new(paths::api_base())
    }
}

#[async_trait(?Send)]
impl ProductProvider for HttpProductProvider {
    async fn load_product(&self, handle: &str) -> Result<Option<Product>, ProductError> {
        match get_text(&self.url_for(handle)).await? {
            Some(body) => decode_product(&body),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogProvider {
    api_base: String,
}

impl HttpCatalogProvider {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl Default for HttpCatalogProvider {
    fn default() -> Self {
        Self::new(paths::api_base())
    }
}

#[async_trait(?Send)]
impl CatalogProvider for HttpCatalogProvider {
    async fn load_catalog(&self, collection: &str) -> Result<Vec<CatalogEntry>, ProductError> {
        let url = paths::catalog_url(&self.api_base, collection);
        match get_text(&url).await? {
            Some(body) => decode_catalog(&body),
            None => Err(ProductError::NotFound(collection.to_string())),
        }
    }
}

/// Warm the HTTP cache for `handle`. The result and any error are ignored.
pub fn prefetch_product(handle: &str) {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    let url = HttpProductProvider::default().url_for(handle);
    wasm_bindgen_futures::spawn_local(async move {
        let _ = dom::fetch_response(&url).await;
    });
}

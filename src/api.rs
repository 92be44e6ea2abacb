//! HTTP client for the inventory backend.
//!
//! All calls go through one shared [`ApiClient`] holding a pooled
//! [`reqwest::Client`]. Errors are flattened into human-readable strings so
//! the UI can show them in an alert without caring about transport detail.

use serde::de::DeserializeOwned;

use crate::state::{InventoryItem, Metrics, PaginatedResponse};

/// Convenient boxed error result used across the crate.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// A state-changing call dispatched to the mutation worker.
#[derive(Clone, Debug)]
pub enum Mutation {
    /// Create a new inventory record.
    Create(InventoryItem),
    /// Replace the record with the given id.
    Update(i64, InventoryItem),
    /// Delete the record with the given id.
    Delete(i64),
    /// Mark the record out of stock (zeroes its quantity server-side).
    MarkOutOfStock(i64),
    /// Restore the record to in stock.
    MarkInStock(i64),
}

/// Completion report for a [`Mutation`].
#[derive(Clone, Debug)]
pub struct MutationOutcome {
    /// The mutation that ran.
    pub mutation: Mutation,
    /// Error message when the call failed, `None` on success.
    pub error: Option<String>,
}

/// Shared client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    products_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` (scheme and host, no trailing path).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            http: reqwest::Client::new(),
            products_url: format!("{base}/api/products"),
        }
    }

    /// Fetch one page of inventory items for `query`.
    pub async fn fetch_items(
        &self,
        query: &crate::query::Query,
    ) -> Result<PaginatedResponse> {
        let req = self.http.get(&self.products_url).query(&query.params());
        self.read_json(req).await
    }

    /// Category names known to the backend.
    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let url = format!("{}/categories", self.products_url);
        self.read_json(self.http.get(url)).await
    }

    /// Aggregate metrics over the whole inventory.
    pub async fn get_metrics(&self) -> Result<Metrics> {
        let url = format!("{}/metrics", self.products_url);
        self.read_json(self.http.get(url)).await
    }

    /// Create a new inventory record, returning it as stored.
    pub async fn create_item(&self, item: &InventoryItem) -> Result<InventoryItem> {
        let req = self.http.post(&self.products_url).json(item);
        self.read_json(req).await
    }

    /// Replace the record with id `id`, returning the updated record.
    pub async fn update_item(&self, id: i64, item: &InventoryItem) -> Result<InventoryItem> {
        let url = format!("{}/{id}", self.products_url);
        self.read_json(self.http.put(url).json(item)).await
    }

    /// Delete the record with id `id`.
    pub async fn delete_item(&self, id: i64) -> Result<()> {
        let url = format!("{}/{id}", self.products_url);
        self.expect_ok(self.http.delete(url)).await
    }

    /// Mark the record out of stock, returning the updated record.
    pub async fn mark_out_of_stock(&self, id: i64) -> Result<InventoryItem> {
        let url = format!("{}/{id}/outofstock", self.products_url);
        self.read_json(self.http.post(url)).await
    }

    /// Restore the record to in stock, returning the updated record.
    pub async fn mark_in_stock(&self, id: i64) -> Result<InventoryItem> {
        let url = format!("{}/{id}/instock", self.products_url);
        self.read_json(self.http.put(url)).await
    }

    /// Run a [`Mutation`] against the backend. The refresh that follows a
    /// success picks up the server-side record, so bodies are dropped here.
    pub async fn apply(&self, mutation: &Mutation) -> Result<()> {
        match mutation {
            Mutation::Create(item) => self.create_item(item).await.map(drop),
            Mutation::Update(id, item) => self.update_item(*id, item).await.map(drop),
            Mutation::Delete(id) => self.delete_item(*id).await,
            Mutation::MarkOutOfStock(id) => self.mark_out_of_stock(*id).await.map(drop),
            Mutation::MarkInStock(id) => self.mark_in_stock(*id).await.map(drop),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let resp = req.send().await.map_err(friendly_error)?;
        let resp = resp.error_for_status().map_err(friendly_error)?;
        Ok(resp.json::<T>().await.map_err(friendly_error)?)
    }

    async fn expect_ok(&self, req: reqwest::RequestBuilder) -> Result<()> {
        let resp = req.send().await.map_err(friendly_error)?;
        resp.error_for_status().map_err(friendly_error)?;
        Ok(())
    }
}

/// Map a transport error onto a short message suitable for an alert modal.
fn friendly_error(e: reqwest::Error) -> Box<dyn std::error::Error + Send + Sync> {
    let msg = if e.is_connect() {
        "Could not reach the inventory service. Is the backend running?".to_string()
    } else if e.is_timeout() {
        "The inventory service timed out.".to_string()
    } else if let Some(status) = e.status() {
        format!("The inventory service answered {status}.")
    } else if e.is_decode() {
        "The inventory service sent an unreadable response.".to_string()
    } else {
        format!("Request failed: {e}")
    };
    msg.into()
}

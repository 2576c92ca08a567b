//! Offset pagination across Brevo collection endpoints
//!
//! Collection endpoints answer `?limit=N&offset=M` with an object holding one
//! array field (`lists`, `folders`, `contacts`). [`Transport::fetch_all`]
//! walks the pages in order and returns a single synthetic body
//! `{"count": <total>, "<field>": [...]}`.

use crate::transport::{RequestOptions, Transport};
use brevo_core::{Error, Result, DEFAULT_PAGE_SIZE};
use brevo_models::ApiResponse;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use url::form_urlencoded;

/// Description of a paginated collection request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
  endpoint: String,
  field: String,
  page_size: u32,
  extra: Vec<(String, String)>,
}

impl PageQuery {
  /// Aggregate the array `field` of `endpoint` using the default page size
  pub fn new(endpoint: impl Into<String>, field: impl Into<String>) -> Self {
    Self {
      endpoint: endpoint.into(),
      field: field.into(),
      page_size: DEFAULT_PAGE_SIZE,
      extra: Vec::new(),
    }
  }

  /// Items requested per page
  pub fn page_size(mut self, page_size: u32) -> Self {
    self.page_size = page_size;
    self
  }

  /// Extra query parameter sent with every page, e.g. `sort=asc`
  pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.extra.push((key.into(), value.into()));
    self
  }

  /// Endpoint path without paging parameters
  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// Name of the array field gathered from each page
  pub fn field(&self) -> &str {
    &self.field
  }

  /// Endpoint path with the paging parameters for one offset
  pub fn page_endpoint(&self, offset: u64) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("limit", &self.page_size.to_string());
    query.append_pair("offset", &offset.to_string());
    for (key, value) in &self.extra {
      query.append_pair(key, value);
    }

    let separator = if self.endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", self.endpoint, separator, query.finish())
  }
}

impl Transport {
  /// Fetch every page of a collection and concatenate the named field
  ///
  /// Pages are requested sequentially from offset 0. The loop stops at the
  /// first page whose item count differs from the page size; a page larger
  /// than requested is kept whole. A collection whose size is an exact
  /// multiple of the page size costs one extra, empty page.
  /// A page answered with any status other than 200 is returned as-is and the
  /// items gathered so far are discarded.
  #[instrument(skip(self, query), fields(endpoint = %query.endpoint, field = %query.field))]
  pub async fn fetch_all<T>(&self, query: &PageQuery) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    if query.page_size == 0 {
      return Err(Error::InvalidInput("page size must be greater than zero".to_string()));
    }

    let page_size = query.page_size as usize;
    let mut offset: u64 = 0;
    let mut items: Vec<Value> = Vec::new();

    loop {
      let response = self.fetch_raw(&query.page_endpoint(offset), RequestOptions::get()).await?;

      if response.status() != 200 {
        warn!("Page at offset {} returned status {}, aborting", offset, response.status());
        return Ok(response.decode()?);
      }

      let page = take_items(response.into_data(), &query.field);
      let fetched = page.len();
      items.extend(page);
      debug!("Fetched {} items at offset {} ({} total)", fetched, offset, items.len());

      if fetched != page_size {
        break;
      }
      offset += u64::from(query.page_size);
    }

    let mut body = Map::new();
    body.insert("count".to_string(), Value::from(items.len()));
    body.insert(query.field.clone(), Value::Array(items));

    Ok(ApiResponse::success(200, Some(Value::Object(body))).decode()?)
  }
}

/// Pull the array `field` out of a page body; anything else counts as empty
fn take_items(data: Option<Value>, field: &str) -> Vec<Value> {
  match data {
    Some(Value::Object(mut map)) => match map.remove(field) {
      Some(Value::Array(items)) => items,
      _ => Vec::new(),
    },
    _ => Vec::new(),
  }
}

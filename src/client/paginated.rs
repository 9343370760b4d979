//! Pagination over list endpoints.
//!
//! List endpoints wrap their results in a [`Page`] envelope when called with
//! `paginated-view=true`. [`fetch_all`] walks every page of such an endpoint
//! and returns the concatenated results.
//!
//! The `offset` sent to the server is a page counter (0, 1, 2, ...), not a
//! record offset.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::http::RdcomClient;
use super::request::Request;
use crate::{Error, Result};

/// Default number of items per page for the typed services.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

const PAGINATED_VIEW: &str = "paginated-view";
const LIMIT: &str = "limit";
const OFFSET: &str = "offset";

/// The pagination envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of pages.
    #[serde(rename = "tot_pages", default)]
    pub total_pages: i64,
    /// Index of the first record in this page.
    #[serde(default)]
    pub current_page_first_record: i64,
    /// Index of the last record in this page.
    #[serde(default)]
    pub current_page_last_record: i64,
    /// Page size used by the server.
    #[serde(default)]
    pub limit: i64,
    /// Offset echoed back by the server.
    #[serde(default)]
    pub offset: i64,
    /// Total number of records.
    #[serde(default)]
    pub count: i64,
    /// Whether `count` is an estimate.
    #[serde(default)]
    pub count_is_estimate: bool,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// The items in this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Check whether this is the last page, given how many pages have
    /// been requested so far.
    pub fn is_last(&self, pages_requested: u32) -> bool {
        self.total_pages == 1 || i64::from(pages_requested) >= self.total_pages
    }
}

/// A list response: either a page envelope or a bare JSON array.
enum ListBody<T> {
    Paged(Page<T>),
    Bare(Vec<T>),
}

impl<T: DeserializeOwned> ListBody<T> {
    fn decode(path: &str, body: Value) -> Result<Self> {
        let decoded = if body.is_array() {
            serde_json::from_value(body).map(ListBody::Bare)
        } else {
            serde_json::from_value(body).map(ListBody::Paged)
        };
        decoded.map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Fetch every item of a list endpoint.
///
/// Without a page size exactly one request is made. With a page size, each
/// request carries `paginated-view=true`, `limit=<page size>` and
/// `offset=<page counter>`, and fetching stops once the server's page count
/// is reached. Items are returned in server order, page after page.
///
/// Any failure aborts the walk and the pages fetched so far are discarded.
pub async fn fetch_all<T: DeserializeOwned>(
    client: &RdcomClient,
    request: &Request,
) -> Result<Vec<T>> {
    if request.page_size == Some(0) {
        return Err(Error::InvalidInput("page size must be positive".to_string()));
    }

    let mut items = Vec::new();
    let mut pages_requested: u32 = 0;

    loop {
        let mut page_request = request.clone();
        if let Some(limit) = request.page_size {
            page_request = page_request
                .query_param(PAGINATED_VIEW, "true")
                .query_param(LIMIT, limit.to_string())
                .query_param(OFFSET, pages_requested.to_string());
        }
        pages_requested += 1;

        let body: Value = client.execute(&page_request).await?;

        match ListBody::<T>::decode(request.path(), body)? {
            ListBody::Bare(results) => {
                tracing::debug!(path = request.path(), results = results.len(), "unpaginated list");
                items.extend(results);
                break;
            }
            ListBody::Paged(page) => {
                let last = request.page_size.is_none() || page.is_last(pages_requested);
                tracing::debug!(
                    path = request.path(),
                    page = pages_requested - 1,
                    total_pages = page.total_pages,
                    results = page.results.len(),
                    "fetched page"
                );
                items.extend(page.results);
                if last {
                    tracing::debug!(path = request.path(), items = items.len(), "no more pages");
                    break;
                }
            }
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total_pages: i64) -> Page<u32> {
        Page {
            total_pages,
            current_page_first_record: 0,
            current_page_last_record: 0,
            limit: 10,
            offset: 0,
            count: 0,
            count_is_estimate: false,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }

    #[test]
    fn test_single_page_is_last() {
        assert!(page(1).is_last(1));
    }

    #[test]
    fn test_last_page_reached() {
        let p = page(3);
        assert!(!p.is_last(1));
        assert!(!p.is_last(2));
        assert!(p.is_last(3));
    }

    #[test]
    fn test_empty_result_set_terminates() {
        assert!(page(0).is_last(1));
    }

    #[test]
    fn test_decode_envelope() {
        let body = serde_json::json!({
            "tot_pages": 2,
            "current_page_first_record": 1,
            "current_page_last_record": 2,
            "limit": 2,
            "offset": 0,
            "count": 3,
            "count_is_estimate": false,
            "next": "https://platform.rdcom.com/api/v2/tokens/?offset=1",
            "previous": null,
            "results": [1, 2]
        });
        match ListBody::<u32>::decode("/t", body).unwrap() {
            ListBody::Paged(page) => {
                assert_eq!(page.total_pages, 2);
                assert_eq!(page.count, 3);
                assert_eq!(page.results, vec![1, 2]);
                assert!(page.next.is_some());
            }
            ListBody::Bare(_) => panic!("Expected envelope"),
        }
    }

    #[test]
    fn test_decode_bare_array() {
        let body = serde_json::json!([1, 2, 3]);
        match ListBody::<u32>::decode("/t", body).unwrap() {
            ListBody::Bare(items) => assert_eq!(items, vec![1, 2, 3]),
            ListBody::Paged(_) => panic!("Expected bare array"),
        }
    }

    #[test]
    fn test_decode_mismatch() {
        let body = serde_json::json!({ "tot_pages": 1 });
        let err = ListBody::<u32>::decode("/t", body).err().unwrap();
        assert!(matches!(err, Error::Decode { .. }));
    }
}

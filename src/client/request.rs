//! Request descriptors and path template rendering.

use std::collections::BTreeMap;

use reqwest::Method;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{Error, Result};

/// Description of a single logical API operation.
///
/// The path is a template: every `{name}` placeholder is replaced by the
/// path parameter of the same name before the request is sent. Values are
/// percent-encoded as a single path segment.
///
/// # Example
///
/// ```
/// use rdcom_rs::client::Request;
///
/// let request = Request::get("/api/v2/{account}/cds/sms/")
///     .path_param("account", "acme")
///     .query_param("lang", "en");
/// assert_eq!(request.path(), "/api/v2/{account}/cds/sms/");
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) path_params: BTreeMap<String, String>,
    pub(crate) query_params: BTreeMap<String, String>,
    pub(crate) page_size: Option<u32>,
    pub(crate) body: Option<Value>,
    pub(crate) cancel: Option<CancellationToken>,
}

impl Request {
    /// Create a request with an explicit method.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            path_params: BTreeMap::new(),
            query_params: BTreeMap::new(),
            page_size: None,
            body: None,
            cancel: None,
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set a path parameter.
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    /// Set a query parameter.
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    /// Request paginated results with the given page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Attach a JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Abort the operation when `token` is cancelled.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolve the path template against `base`.
    pub(crate) fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::InvalidInput(format!("base URL {} cannot take a path", base))
            })?;
            segments.pop_if_empty();
            for segment in self.path.trim_start_matches('/').split('/') {
                segments.push(&render_segment(segment, &self.path_params)?);
            }
        }
        Ok(url)
    }

    /// Query parameters as pairs, in a stable order.
    pub(crate) fn query_pairs(&self) -> Vec<(&str, &str)> {
        self.query_params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

fn render_segment(segment: &str, params: &BTreeMap<String, String>) -> Result<String> {
    let mut rendered = String::with_capacity(segment.len());
    let mut rest = segment;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            return Err(Error::InvalidInput(format!(
                "unterminated placeholder in path segment {:?}",
                segment
            )));
        };
        let name = &rest[open + 1..open + close];
        let value = params
            .get(name)
            .ok_or_else(|| Error::MissingPathParam(name.to_string()))?;

        rendered.push_str(&rest[..open]);
        rendered.push_str(value);
        rest = &rest[open + close + 1..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://platform.rdcom.com").unwrap()
    }

    #[test]
    fn test_plain_path_keeps_trailing_slash() {
        let url = Request::get("/api/v2/tokens/").url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://platform.rdcom.com/api/v2/tokens/");
    }

    #[test]
    fn test_path_param_substitution() {
        let url = Request::get("/api/v2/{account}/cds/sms/")
            .path_param("account", "acme")
            .url(&base())
            .unwrap();
        assert_eq!(url.as_str(), "https://platform.rdcom.com/api/v2/acme/cds/sms/");
    }

    #[test]
    fn test_path_param_is_encoded_as_one_segment() {
        let url = Request::get("/api/v2/accounts/{account}/")
            .path_param("account", "a/b c")
            .url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://platform.rdcom.com/api/v2/accounts/a%2Fb%20c/"
        );
    }

    #[test]
    fn test_placeholder_inside_segment() {
        let url = Request::get("/files/{name}.json")
            .path_param("name", "report")
            .url(&base())
            .unwrap();
        assert_eq!(url.path(), "/files/report.json");
    }

    #[test]
    fn test_base_url_with_prefix() {
        let base = Url::parse("https://gateway.example.com/rdcom/").unwrap();
        let url = Request::get("/api/v2/accounts").url(&base).unwrap();
        assert_eq!(url.path(), "/rdcom/api/v2/accounts");
    }

    #[test]
    fn test_missing_path_param() {
        let err = Request::get("/api/v2/{account}/cds/sms/")
            .url(&base())
            .unwrap_err();
        assert!(matches!(err, Error::MissingPathParam(ref name) if name == "account"));
    }

    #[test]
    fn test_unterminated_placeholder() {
        let err = Request::get("/api/v2/{account").url(&base()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_query_pairs_are_sorted() {
        let request = Request::get("/x")
            .query_param("offset", "0")
            .query_param("limit", "10");
        assert_eq!(request.query_pairs(), vec![("limit", "10"), ("offset", "0")]);
    }
}

//! Tokens service.

use tokio_util::sync::CancellationToken;

use super::resource;
use crate::client::{RdcomClient, Request, DEFAULT_PAGE_SIZE};
use crate::models::token::TokenRef;
use crate::models::{Token, TokenId};
use crate::Result;

const TOKENS_PATH: &str = "/api/v2/tokens/";

/// Service for API token management.
///
/// # Example
///
/// ```no_run
/// use rdcom_rs::TokenId;
///
/// # async fn example(client: rdcom_rs::RdcomClient) -> rdcom_rs::Result<()> {
/// let token = client.tokens().create().await?;
/// println!("New token: {}", token.token);
///
/// let deleted = client.tokens().delete(&TokenId::new(&token.token)).await?;
/// assert_eq!(deleted.token, token.token);
/// # Ok(())
/// # }
/// ```
pub struct TokensService<'a> {
    client: &'a RdcomClient,
    cancel: Option<CancellationToken>,
}

impl<'a> TokensService<'a> {
    pub(crate) fn new(client: &'a RdcomClient) -> Self {
        Self {
            client,
            cancel: None,
        }
    }

    /// Abort calls made through this service when `token` is cancelled.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// List the caller's tokens.
    pub async fn list(&self) -> Result<Vec<Token>> {
        let request = Request::get(TOKENS_PATH).page_size(DEFAULT_PAGE_SIZE);
        resource::list(self.client, self.prepare(request)).await
    }

    /// Create a new token.
    pub async fn create(&self) -> Result<Token> {
        resource::create::<_, ()>(self.client, self.prepare(Request::post(TOKENS_PATH)), None)
            .await
    }

    /// Delete a token, returning the deleted token.
    ///
    /// The identifier travels in the request body as `{"token": "<id>"}`.
    pub async fn delete(&self, id: &TokenId) -> Result<Token> {
        let body = TokenRef { token: id.as_str() };
        resource::delete(self.client, self.prepare(Request::delete(TOKENS_PATH)), &body).await
    }

    fn prepare(&self, request: Request) -> Request {
        match &self.cancel {
            Some(token) => request.cancel_on(token.clone()),
            None => request,
        }
    }
}

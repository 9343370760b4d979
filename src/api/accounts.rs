//! Accounts service.

use tokio_util::sync::CancellationToken;

use super::resource;
use crate::client::{RdcomClient, Request, DEFAULT_PAGE_SIZE};
use crate::models::{Account, AccountCode};
use crate::Result;

const ACCOUNTS_PATH: &str = "/api/v2/accounts";
const ACCOUNT_PATH: &str = "/api/v2/accounts/{account}/";

/// Service for account operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: rdcom_rs::RdcomClient) -> rdcom_rs::Result<()> {
/// let accounts = client.accounts().list().await?;
/// for account in accounts {
///     println!("Account: {} ({})", account.code, account.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService<'a> {
    client: &'a RdcomClient,
    cancel: Option<CancellationToken>,
}

impl<'a> AccountsService<'a> {
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

    /// List every account visible to the caller.
    pub async fn list(&self) -> Result<Vec<Account>> {
        let request = Request::get(ACCOUNTS_PATH).page_size(DEFAULT_PAGE_SIZE);
        resource::list(self.client, self.prepare(request)).await
    }

    /// Get a single account.
    ///
    /// # Arguments
    ///
    /// * `code` - The account code to retrieve
    pub async fn get(&self, code: &AccountCode) -> Result<Account> {
        let request = Request::get(ACCOUNT_PATH).path_param("account", code.as_str());
        resource::get(self.client, self.prepare(request)).await
    }

    fn prepare(&self, request: Request) -> Request {
        match &self.cancel {
            Some(token) => request.cancel_on(token.clone()),
            None => request,
        }
    }
}

//! SMS gateways service.

use tokio_util::sync::CancellationToken;

use super::resource;
use crate::client::{RdcomClient, Request};
use crate::models::{AccountCode, SmsGateway};
use crate::Result;

const SMS_GATEWAYS_PATH: &str = "/api/v2/{account}/cds/sms/";

/// Service for SMS gateway operations.
pub struct SmsGatewaysService<'a> {
    client: &'a RdcomClient,
    cancel: Option<CancellationToken>,
}

impl<'a> SmsGatewaysService<'a> {
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

    /// List the SMS gateways of an account. The endpoint is not paginated.
    pub async fn list(&self, account: &AccountCode) -> Result<Vec<SmsGateway>> {
        let mut request =
            Request::get(SMS_GATEWAYS_PATH).path_param("account", account.as_str());
        if let Some(token) = &self.cancel {
            request = request.cancel_on(token.clone());
        }
        resource::list(self.client, request).await
    }
}

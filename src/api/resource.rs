//! Generic operations shared by every resource service.
//!
//! Each function takes the client explicitly and is generic over the
//! payload type, so a new resource needs only a model type and a path.
//! All of them refuse to run without a configured credential, and reject a
//! request built for a different HTTP method.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::{fetch_all, RdcomClient, Request};
use crate::{Error, Result};

/// Fetch a single entity with a GET request.
pub async fn get<T: DeserializeOwned>(client: &RdcomClient, request: Request) -> Result<T> {
    check_method(&request, &Method::GET)?;
    client.config().auth().require()?;

    let entity = client.execute(&request).await?;
    tracing::debug!(path = request.path(), "get successful");
    Ok(entity)
}

/// Fetch every entity of a collection, following pagination if the
/// request has a page size.
pub async fn list<T: DeserializeOwned>(client: &RdcomClient, request: Request) -> Result<Vec<T>> {
    check_method(&request, &Method::GET)?;
    client.config().auth().require()?;

    let items = fetch_all(client, &request).await?;
    tracing::debug!(path = request.path(), items = items.len(), "list successful");
    Ok(items)
}

/// Create an entity with a POST request and an optional JSON body.
pub async fn create<T, B>(client: &RdcomClient, mut request: Request, body: Option<&B>) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    check_method(&request, &Method::POST)?;
    client.config().auth().require()?;
    request.body = body.map(serde_json::to_value).transpose()?;

    let entity = client.execute(&request).await?;
    tracing::debug!(path = request.path(), "create successful");
    Ok(entity)
}

/// Delete an entity with a DELETE request whose JSON body carries the
/// identifier.
pub async fn delete<T, I>(client: &RdcomClient, mut request: Request, identifier: &I) -> Result<T>
where
    T: DeserializeOwned,
    I: Serialize + ?Sized,
{
    check_method(&request, &Method::DELETE)?;
    client.config().auth().require()?;
    request.body = Some(serde_json::to_value(identifier)?);

    let entity = client.execute(&request).await?;
    tracing::debug!(path = request.path(), "delete successful");
    Ok(entity)
}

fn check_method(request: &Request, expected: &Method) -> Result<()> {
    if request.method() != expected {
        return Err(Error::InvalidInput(format!(
            "{} request for {} used with a {} operation",
            request.method(),
            request.path(),
            expected
        )));
    }
    Ok(())
}

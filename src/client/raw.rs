use serde::de::DeserializeOwned;
use std::{future::Future, sync::Arc};
use tokio_util::sync::CancellationToken;

use super::{ClientConfig, OpRequest};
use crate::{
    error::{Error, WebHdfsResult},
    transport::{Response, Transport},
};

/// Runs `future` to completion unless `token` fires first.
pub(crate) async fn cancellable<F: Future>(
    token: Option<&CancellationToken>,
    future: F,
) -> WebHdfsResult<F::Output> {
    match token {
        Some(token) => tokio::select! {
            biased;
            () = token.cancelled() => Err(Error::Cancelled),
            output = future => Ok(output),
        },
        None => Ok(future.await),
    }
}

/// Implements raw work with the REST interface in request-response format.
/// Every call issues exactly one request. Responses outside the 2xx range
/// are returned as [`Error::Remote`] with the body the server sent.
#[derive(Clone)]
pub struct RawClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl RawClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(
        &self,
        request: OpRequest,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<Response> {
        let request = request.into_request(&self.config);
        debug!("{} {}", request.method, request.url);

        cancellable(token, self.transport.send(request)).await?
    }

    async fn check(
        response: Response,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<Response> {
        if response.is_success() {
            return Ok(response);
        }

        let status = response.status;
        let body = cancellable(token, response.text()).await??;
        warn!("request failed with status {status}: {body}");

        Err(Error::Remote { status, body })
    }

    async fn parse<T: DeserializeOwned>(
        response: Response,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<T> {
        let bytes = cancellable(token, response.bytes()).await??;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Sends the request and returns the response once its status is known
    /// to be a success. The body is left unread.
    pub async fn execute(
        &self,
        request: OpRequest,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<Response> {
        let response = self.send(request, token).await?;
        Self::check(response, token).await
    }

    /// Sends the request and decodes the JSON body.
    pub async fn json<T: DeserializeOwned>(
        &self,
        request: OpRequest,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<T> {
        let response = self.execute(request, token).await?;
        Self::parse(response, token).await
    }

    /// Like [`json`](Self::json), but a 404 or 204 on a status query yields
    /// `None` without touching the body.
    pub async fn query<T: DeserializeOwned>(
        &self,
        request: OpRequest,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<Option<T>> {
        let operation = request.operation();
        let response = self.send(request, token).await?;

        if operation.is_status_query() && matches!(response.status, 404 | 204) {
            debug!("{operation} answered {}, no result", response.status);
            return Ok(None);
        }

        let response = Self::check(response, token).await?;
        Self::parse(response, token).await.map(Some)
    }
}

use async_trait::async_trait;

use crate::domain::ports::{HttpServiceCaller, WfsMethod};
use crate::utils::error::{Result, ServiceError};

/// Executes WFS POST methods over a shared reqwest client.
///
/// Timeout policy belongs to the injected client, not to this caller.
#[derive(Debug, Clone, Default)]
pub struct ReqwestServiceCaller {
    client: reqwest::Client,
}

impl ReqwestServiceCaller {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpServiceCaller for ReqwestServiceCaller {
    async fn response_stream(&self, method: &dyn WfsMethod) -> Result<Vec<u8>> {
        tracing::debug!("POST {} ({} byte body)", method.url(), method.body().len());

        let response = self
            .client
            .post(method.url())
            .header(reqwest::header::CONTENT_TYPE, "text/xml")
            .body(method.body().to_owned())
            .send()
            .await
            .map_err(|e| ServiceError::transport(method.url(), e))?;

        let status = response.status();
        tracing::debug!("WFS response status: {}", status);

        if !status.is_success() {
            return Err(ServiceError::new(format!(
                "WFS endpoint {} returned {}",
                method.url(),
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::transport(method.url(), e))?;

        Ok(body.to_vec())
    }
}

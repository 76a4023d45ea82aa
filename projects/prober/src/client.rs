use std::future::Future;

use reqwest::Client;

/// Issues one GET and reports the response status.
pub trait ProbeClient {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(&self, url: &str) -> impl Future<Output = Result<u16, Self::Error>> + Send;
}

/// `reqwest` backed client with transport defaults (no timeout).
#[derive(Debug, Clone, Default)]
pub struct HttpProbeClient {
    client: Client,
}

impl HttpProbeClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProbeClient for HttpProbeClient {
    type Error = reqwest::Error;

    async fn get(&self, url: &str) -> Result<u16, reqwest::Error> {
        // Resolves once the response head arrives; the body is never read.
        let response = self.client.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn reports_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let status = HttpProbeClient::new().get(&server.uri()).await.unwrap();

        assert_eq!(status, 503);
    }

    #[tokio::test]
    async fn connection_refused_is_an_error() {
        assert!(HttpProbeClient::new().get("http://127.0.0.1:1/").await.is_err());
    }
}

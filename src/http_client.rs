use reqwest::multipart::Form;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Thin wrapper over [`reqwest::Client`]. Every call is a single
/// best-effort attempt: no retries, no backoff, no client-side timeout.
/// The body is decoded as JSON regardless of the HTTP status code, since
/// the backend carries its failure report inside the body.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        self.client.get(url).send().await?.json().await
    }

    pub async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, reqwest::Error> {
        self.client.post(url).json(body).send().await?.json().await
    }

    pub async fn put_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, reqwest::Error> {
        self.client.put(url).json(body).send().await?.json().await
    }

    /// Bodyless PUT, used by endpoints that take all input from the path.
    pub async fn put_empty<T: DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        self.client.put(url).send().await?.json().await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        form: Form,
    ) -> Result<T, reqwest::Error> {
        self.client
            .post(url)
            .multipart(form)
            .send()
            .await?
            .json()
            .await
    }

    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        form: Form,
    ) -> Result<T, reqwest::Error> {
        self.client
            .put(url)
            .multipart(form)
            .send()
            .await?
            .json()
            .await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

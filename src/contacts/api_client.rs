use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use url::Url;
use log::{debug, warn};

use crate::{
    Error,
    core::{
        config::Config,
        Result,
    },
};

use super::{
    contact::{Contact, ContactInput},
    normalizer,
};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Backend operations the page controller depends on.
#[allow(async_fn_in_trait)]
pub trait ContactsApi {
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn create(&self, input: &ContactInput) -> Result<Contact>;
    async fn update(&self, id: &str, input: &ContactInput) -> Result<Contact>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn seed(&self) -> Result<()>;
}

pub struct ApiClient {
    base_url    : Url,
    api_key     : Option<String>,
    client      : Client,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            Error::Argument(format!("Invalid api base url {base_url}: {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("Invalid api base url {base_url}")));
        }

        let client = Client::builder().build().map_err(|e| {
            Error::Network(format!("Http error: creating http client error {e}"))
        })?;

        Ok(Self {
            base_url,
            api_key : api_key
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            client,
        })
    }

    pub fn from_config(cfg: &dyn Config) -> Result<Self> {
        Self::new(cfg.base_url(), cfg.api_key())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Argument(format!("Invalid api base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let req = match self.api_key.as_ref() {
            Some(key) => req.header(API_KEY_HEADER, key),
            None => req,
        };

        let rsp = req
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        let status = rsp.status();
        if !status.is_success() {
            let body = rsp.text().await.unwrap_or_default();
            let message = normalizer::error_message(&body);
            warn!("Http request failed with status {status}: {}", message.as_deref().unwrap_or("-"));
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }
        Ok(rsp)
    }

    async fn json(rsp: Response) -> Result<Value> {
        let body = rsp.text().await.map_err(|e| {
            Error::Network(format!("Http error: reading http response error {e}"))
        })?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str::<Value>(&body).map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })
    }
}

impl ContactsApi for ApiClient {
    async fn list(&self) -> Result<Vec<Contact>> {
        let url = self.endpoint(&["contacts"])?;
        debug!("GET {url}");

        let rsp = self.send(self.client.get(url)).await?;
        let contacts = normalizer::normalize_list(&Self::json(rsp).await?);
        debug!("Fetched {} contacts", contacts.len());
        Ok(contacts)
    }

    async fn create(&self, input: &ContactInput) -> Result<Contact> {
        let url = self.endpoint(&["contacts"])?;
        debug!("POST {url}");

        let rsp = self.send(self.client.post(url).json(input)).await?;
        Ok(normalizer::normalize_contact(&Self::json(rsp).await?))
    }

    async fn update(&self, id: &str, input: &ContactInput) -> Result<Contact> {
        let url = self.endpoint(&["contacts", id])?;
        debug!("PUT {url}");

        let rsp = self.send(self.client.put(url).json(input)).await?;
        Ok(normalizer::normalize_contact(&Self::json(rsp).await?))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&["contacts", id])?;
        debug!("DELETE {url}");

        self.send(self.client.delete(url)).await.map(|_| ())
    }

    async fn seed(&self) -> Result<()> {
        let url = self.endpoint(&["contacts", "seed", ""])?;
        debug!("POST {url}");

        let body = serde_json::json!({});
        self.send(self.client.post(url).json(&body)).await.map(|_| ())
    }
}

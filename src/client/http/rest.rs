//! Request plumbing shared by the REST clients.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::HttpClientConfig;
use crate::client::ManagementError;

pub(crate) struct RestClient {
    http: Client,
    config: HttpClientConfig,
}

impl RestClient {
    pub(crate) fn new(config: HttpClientConfig) -> Result<Self, ManagementError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ManagementError::ConnectionFailed(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub(crate) fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url(path));
        match &self.config.username {
            Some(username) => builder.basic_auth(username, self.config.password.as_ref()),
            None => builder,
        }
    }

    fn send(&self, builder: RequestBuilder) -> Result<Response, ManagementError> {
        let response = builder
            .send()
            .map_err(|e| ManagementError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().unwrap_or_default();
        Err(match status.as_u16() {
            404 => ManagementError::NotFound(message),
            409 => ManagementError::Conflict(message),
            code => ManagementError::Status { code, message },
        })
    }

    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ManagementError> {
        self.send(self.request(Method::GET, path))?
            .json()
            .map_err(|e| ManagementError::Decode(e.to_string()))
    }

    pub(crate) fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ManagementError> {
        self.send(self.request(Method::POST, path).json(body))?
            .json()
            .map_err(|e| ManagementError::Decode(e.to_string()))
    }

    pub(crate) fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ManagementError> {
        self.send(self.request(Method::PUT, path).json(body))?;
        Ok(())
    }

    pub(crate) fn delete(&self, path: &str) -> Result<(), ManagementError> {
        self.send(self.request(Method::DELETE, path))?;
        Ok(())
    }
}

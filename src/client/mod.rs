//! Client layer: orchestrates the gateway round trip and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    GatewayUrl, MessageText, Password, Recipients, SendOutcome, SendRequest, Username,
    ValidationError,
};
use crate::settings::GatewayConfig;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Username::FIELD.to_owned(), self.username.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`BulkSmsClient`] and [`GatewayConfig`] loading.
///
/// Gateway rejections (documented codes other than `1101`) are not errors; they come
/// back as a [`SendOutcome`] / description string.
pub enum BulkSmsError {
    /// HTTP client / transport failure (connection refused, DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-2xx response whose body carries no status token.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// 2xx response whose body does not start with an unsigned integer status token.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with a digit token missing from the status table.
    #[error("unknown status code: {code}")]
    UnknownStatusCode { code: String, body: String },

    /// Gateway settings failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Gateway settings could not be read or deserialized.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Clone)]
/// Builder for [`BulkSmsClient`].
///
/// Use this when you need to override the URL, timeout, or user-agent.
pub struct BulkSmsClientBuilder {
    url: GatewayUrl,
    credentials: Credentials,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl BulkSmsClientBuilder {
    /// Start from loaded settings, including their optional timeout/user-agent.
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            url: config.url.clone(),
            credentials: Credentials {
                username: config.username.clone(),
                password: config.password.clone(),
            },
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
        }
    }

    /// Override the gateway send URL.
    pub fn url(mut self, url: impl AsRef<str>) -> Result<Self, ValidationError> {
        self.url = GatewayUrl::parse(url)?;
        Ok(self)
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`BulkSmsClient`].
    pub fn build(self) -> Result<BulkSmsClient, BulkSmsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| BulkSmsError::Transport(Box::new(err)))?;

        Ok(BulkSmsClient {
            url: self.url,
            credentials: self.credentials,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Bulk-SMS gateway client.
///
/// Every send is exactly one form-encoded POST (`username`, `password`, `number`,
/// `message`) to the configured URL. The reply's first `|`-delimited token is decoded
/// as the status code and translated through [`crate::KnownStatusCode`].
///
/// Cloning is cheap; clones share the HTTP connection pool.
pub struct BulkSmsClient {
    url: GatewayUrl,
    credentials: Credentials,
    http: Arc<dyn HttpTransport>,
}

impl BulkSmsClient {
    /// Create a client with the HTTP client defaults (no timeout).
    ///
    /// For settings-driven timeout/user-agent, use [`BulkSmsClient::from_config`].
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            url: config.url.clone(),
            credentials: Credentials {
                username: config.username.clone(),
                password: config.password.clone(),
            },
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client honoring the settings' optional timeout and user-agent.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, BulkSmsError> {
        BulkSmsClientBuilder::new(config).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(config: &GatewayConfig) -> BulkSmsClientBuilder {
        BulkSmsClientBuilder::new(config)
    }

    /// Gateway URL this client posts to.
    pub fn url(&self) -> &GatewayUrl {
        &self.url
    }

    /// Send `text` to `numbers` and return the gateway's result description.
    ///
    /// Rejections such as `"insufficient Balance "` are returned as `Ok`; compare against
    /// `"Success"` or use [`BulkSmsClient::send_sms`] to get the numeric code.
    ///
    /// Errors: see [`BulkSmsClient::send_sms`].
    pub async fn send(
        &self,
        numbers: impl Into<Recipients>,
        text: impl Into<MessageText>,
    ) -> Result<String, BulkSmsError> {
        let outcome = self.send_sms(SendRequest::new(numbers, text)).await?;
        Ok(outcome.description.to_owned())
    }

    /// Send one message and return the decoded status.
    ///
    /// The body is decoded whatever the HTTP status, so a `400` carrying `1000|...`
    /// still yields the `1000` outcome.
    ///
    /// Errors:
    /// - [`BulkSmsError::Transport`] when the request could not complete,
    /// - [`BulkSmsError::HttpStatus`] for non-2xx responses without a status token,
    /// - [`BulkSmsError::Parse`] for 2xx responses without a status token,
    /// - [`BulkSmsError::UnknownStatusCode`] for codes missing from the status table.
    pub async fn send_sms(&self, request: SendRequest) -> Result<SendOutcome, BulkSmsError> {
        let mut params = Vec::<(String, String)>::with_capacity(4);
        self.credentials.push_form_params(&mut params);
        params.extend(crate::transport::encode_send_form(&request));

        tracing::debug!(
            url = %self.url,
            number_len = request.numbers().as_str().len(),
            "sending sms"
        );

        let response = self
            .http
            .post_form(self.url.as_str(), params)
            .await
            .map_err(BulkSmsError::Transport)?;

        let reply = match crate::transport::decode_send_response(&response.body) {
            Ok(reply) => reply,
            Err(_) if !(200..=299).contains(&response.status) => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                return Err(BulkSmsError::HttpStatus {
                    status: response.status,
                    body,
                });
            }
            Err(err) => return Err(BulkSmsError::Parse(Box::new(err))),
        };
        tracing::debug!(
            http_status = response.status,
            status_code = %reply.status_token,
            "gateway replied"
        );

        let Some(known) = reply.known_status() else {
            tracing::warn!(status_code = %reply.status_token, "unknown gateway status code");
            return Err(BulkSmsError::UnknownStatusCode {
                code: reply.status_token,
                body: response.body,
            });
        };

        let outcome = SendOutcome {
            status_code: known.into(),
            description: known.description(),
            extra_fields: reply.extra_fields,
        };
        if !outcome.is_success() {
            tracing::warn!(
                status_code = %outcome.status_code,
                description = outcome.description,
                "gateway rejected sms"
            );
        }

        Ok(outcome)
    }
}

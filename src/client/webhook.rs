//! The webhook service client and its operations.

use http::HeaderValue;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{ClientConfig, ConfigError, defaults};
use crate::model::{
    CreateEndpointResponse, Endpoint, EndpointResponse, EndpointToggleStatus, EventDelivery,
    UpsertEndpointParams, Webhook,
};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};

use super::ClientError;
use super::status::StatusPolicy;

/// Client for the webhook service's project-scoped REST API.
///
/// Holds only immutable configuration, so one instance can be shared
/// across tasks (wrap it in an `Arc` or clone it) without locking.
///
/// Each operation sends exactly one request with
/// `Authorization: Bearer <key>`. Accepted response statuses:
///
/// | Operation | Accepted |
/// |---|---|
/// | [`get_endpoint`](Self::get_endpoint), [`get_endpoint_event_deliveries`](Self::get_endpoint_event_deliveries) | exactly `200` |
/// | [`create_endpoint`](Self::create_endpoint), [`update_endpoint`](Self::update_endpoint) | `<= 400` |
/// | [`delete_endpoint`](Self::delete_endpoint), [`toggle_pause`](Self::toggle_pause) | `< 300` |
/// | [`create_event`](Self::create_event) | `< 400` |
///
/// Every request has a two second timeout except [`create_event`](Self::create_event),
/// which relies on the transport's defaults.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use convoy_client::{ClientConfig, WebhookClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::new("https://convoy.example.com", "api-key")?;
/// let client = WebhookClient::new(config);
/// let status = client.toggle_pause("project-id", "endpoint-id").await?;
/// println!("endpoint is now {status}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhookClient<H = ReqwestClient> {
    http: H,
    config: ClientConfig,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a client that talks to the service through reqwest.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: ReqwestClient::new(),
            config,
        }
    }

    /// Creates a client from a base URL, an API key and a default project.
    ///
    /// The default project is recorded but never used for a request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL or API key is invalid.
    pub fn connect(
        base_url: &str,
        api_key: &str,
        default_project: &str,
    ) -> Result<Self, ConfigError> {
        let config = ClientConfig::new(base_url, api_key)?.with_default_project(default_project);
        Ok(Self::new(config))
    }
}

impl<H> WebhookClient<H> {
    /// Creates a client with a custom HTTP client.
    #[must_use]
    pub const fn with_http_client(config: ClientConfig, http: H) -> Self {
        Self { http, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds `<base>/api/v1/projects/<project>/<segments...>`.
    ///
    /// Identifiers are percent-encoded as path segments.
    fn resource_url(&self, project_id: &str, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.config.base_url().to_string()))?
            .pop_if_empty()
            .extend(defaults::API_PREFIX)
            .push(project_id)
            .extend(segments);
        Ok(url)
    }

    /// Adds credentials and the standard timeout to `request`.
    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        request
            .with_forced_header(AUTHORIZATION, self.config.authorization().clone())
            .with_timeout(defaults::request_timeout())
    }
}

fn json_content_type() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

fn with_json_body<T: Serialize>(request: HttpRequest, body: &T) -> Result<HttpRequest, ClientError> {
    let body = serde_json::to_vec(body).map_err(ClientError::Serialize)?;
    Ok(request
        .with_body(body)
        .with_forced_header(CONTENT_TYPE, json_content_type()))
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ClientError> {
    let body = response.into_body()?;
    serde_json::from_slice(&body).map_err(ClientError::MalformedResponse)
}

impl<H: HttpClient> WebhookClient<H> {
    /// Sends `request` and checks the status against `policy`.
    async fn send(
        &self,
        operation: &'static str,
        request: HttpRequest,
        policy: StatusPolicy,
    ) -> Result<HttpResponse, ClientError> {
        tracing::debug!("{operation}: {} {}", request.method, request.url);

        let response = self.http.request(request).await?;
        check_status(operation, &response, policy)?;
        Ok(response)
    }

    /// Fetches a single endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BadStatus`] for any status other than `200`,
    /// [`ClientError::MalformedResponse`] if the body does not decode, or a
    /// transport error.
    pub async fn get_endpoint(
        &self,
        project_id: &str,
        endpoint_id: &str,
    ) -> Result<Endpoint, ClientError> {
        let url = self.resource_url(project_id, &["endpoints", endpoint_id])?;
        let request = self.authorized(HttpRequest::get(url));

        let response = self
            .send("get_endpoint", request, StatusPolicy::ExactlyOk)
            .await?;
        decode(response)
    }

    /// Registers a new endpoint under a project.
    ///
    /// A `400` reply is decoded like a success: the service reports some
    /// conflicts that way, with the reason in the body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BadStatus`] for statuses above `400`,
    /// [`ClientError::MalformedResponse`] if the body does not decode, or a
    /// transport error.
    pub async fn create_endpoint(
        &self,
        project_id: &str,
        params: &UpsertEndpointParams,
    ) -> Result<CreateEndpointResponse, ClientError> {
        let url = self.resource_url(project_id, &["endpoints"])?;
        let request = with_json_body(self.authorized(HttpRequest::post(url)), params)?;

        let response = self
            .send("create_endpoint", request, StatusPolicy::UpToBadRequest)
            .await?;
        decode(response)
    }

    /// Replaces an endpoint's settings.
    ///
    /// Accepts the same statuses as [`create_endpoint`](Self::create_endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BadStatus`] for statuses above `400`,
    /// [`ClientError::MalformedResponse`] if the body does not decode, or a
    /// transport error.
    pub async fn update_endpoint(
        &self,
        project_id: &str,
        endpoint_id: &str,
        params: &UpsertEndpointParams,
    ) -> Result<EndpointResponse, ClientError> {
        let url = self.resource_url(project_id, &["endpoints", endpoint_id])?;
        let request = with_json_body(self.authorized(HttpRequest::put(url)), params)?;

        let response = self
            .send("update_endpoint", request, StatusPolicy::UpToBadRequest)
            .await?;
        decode(response)
    }

    /// Deletes an endpoint. The service keeps it as a soft-deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BadStatus`] for statuses of `300` and above,
    /// [`ClientError::MalformedResponse`] if the body does not decode, or a
    /// transport error.
    pub async fn delete_endpoint(
        &self,
        project_id: &str,
        endpoint_id: &str,
    ) -> Result<EndpointResponse, ClientError> {
        let url = self.resource_url(project_id, &["endpoints", endpoint_id])?;
        let request = self.authorized(HttpRequest::delete(url));

        let response = self
            .send("delete_endpoint", request, StatusPolicy::BelowRedirect)
            .await?;
        decode(response)
    }

    /// Flips an endpoint between paused and active and returns the new status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BadStatus`] for statuses of `300` and above,
    /// [`ClientError::MalformedResponse`] if the body does not decode, or a
    /// transport error.
    pub async fn toggle_pause(
        &self,
        project_id: &str,
        endpoint_id: &str,
    ) -> Result<String, ClientError> {
        let url = self.resource_url(project_id, &["endpoints", endpoint_id, "pause"])?;
        let request = self.authorized(HttpRequest::put(url));

        let response = self
            .send("toggle_pause", request, StatusPolicy::BelowRedirect)
            .await?;
        let toggled: EndpointToggleStatus = decode(response)?;
        Ok(toggled.data.status)
    }

    /// Publishes an event.
    ///
    /// Only [`Webhook::data`] is sent as the body. The webhook's headers are
    /// applied first and `Authorization` and `Content-Type` are set after
    /// them, replacing any caller value. No timeout is set on this request.
    ///
    /// The response body is read once and logged whatever the status; it is
    /// never parsed, and failing to read it does not change the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UndefinedPayload`] without sending anything if
    /// `webhook` is `None`, [`ClientError::BadStatus`] for statuses of `400`
    /// and above, or a transport error.
    pub async fn create_event(
        &self,
        project_id: &str,
        webhook: Option<&Webhook>,
    ) -> Result<(), ClientError> {
        let webhook = webhook.ok_or(ClientError::UndefinedPayload)?;
        let body = serde_json::to_vec(&webhook.data).map_err(ClientError::Serialize)?;
        let url = self.resource_url(project_id, &["events"])?;

        let mut request = HttpRequest::post(url).with_body(body);
        for (name, value) in &webhook.headers {
            request.headers.append(name.clone(), value.clone());
        }
        let request = request
            .with_forced_header(AUTHORIZATION, self.config.authorization().clone())
            .with_forced_header(CONTENT_TYPE, json_content_type());

        tracing::debug!("create_event: {} {}", request.method, request.url);
        let response = self.http.request(request).await?;

        match response.body() {
            Ok(body) => tracing::info!(
                "create_event response ({}): {}",
                response.status,
                String::from_utf8_lossy(body)
            ),
            Err(e) => tracing::debug!("create_event response body ignored: {e}"),
        }

        check_status("create_event", &response, StatusPolicy::BelowClientError)
    }

    /// Lists the most recent deliveries to an endpoint, `per_page` at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BadStatus`] for any status other than `200`,
    /// [`ClientError::MalformedResponse`] if the body does not decode, or a
    /// transport error.
    pub async fn get_endpoint_event_deliveries(
        &self,
        project_id: &str,
        endpoint_id: &str,
        per_page: u64,
    ) -> Result<EventDelivery, ClientError> {
        let mut url = self.resource_url(project_id, &["eventdeliveries"])?;
        url.query_pairs_mut()
            .append_pair("endpointId", endpoint_id)
            .append_pair("perPage", &per_page.to_string());
        let request = self.authorized(HttpRequest::get(url));

        let response = self
            .send(
                "get_endpoint_event_deliveries",
                request,
                StatusPolicy::ExactlyOk,
            )
            .await?;
        decode(response)
    }
}

fn check_status(
    operation: &str,
    response: &HttpResponse,
    policy: StatusPolicy,
) -> Result<(), ClientError> {
    if policy.allows(response.status) {
        return Ok(());
    }

    tracing::warn!("{operation}: rejected response status {}", response.status);
    Err(ClientError::BadStatus {
        status: response.status,
    })
}

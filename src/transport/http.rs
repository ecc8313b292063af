//! HTTP request/response types and client trait.

use std::time::Duration;

use super::{BodyError, HttpError};

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`HttpClient`] implementation. It uses standard `http` crate types
/// for method and headers, so it can be inspected in tests before
/// anything touches the network.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// Target URL, including any query string
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
    /// Total time allowed for the exchange; `None` defers to the transport
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map, body and timeout are `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Creates a PUT request to the given URL.
    #[must_use]
    pub fn put(url: url::Url) -> Self {
        Self::new(http::Method::PUT, url)
    }

    /// Creates a DELETE request to the given URL.
    #[must_use]
    pub fn delete(url: url::Url) -> Self {
        Self::new(http::Method::DELETE, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended
    /// (HTTP headers can have multiple values).
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets a header, replacing every existing value under that name.
    #[must_use]
    pub fn with_forced_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// An HTTP response received from a server.
///
/// The body is fully buffered before the response is handed out, so the
/// underlying connection is already released. If reading the body failed
/// midway, the status and headers are still available and the failure is
/// kept in place of the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    body: Result<Vec<u8>, BodyError>,
}

impl HttpResponse {
    /// Creates a new HTTP response with a fully read body.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body: Ok(body),
        }
    }

    /// Creates a response whose body could not be read.
    #[must_use]
    pub const fn with_body_error(
        status: http::StatusCode,
        headers: http::HeaderMap,
        error: BodyError,
    ) -> Self {
        Self {
            status,
            headers,
            body: Err(error),
        }
    }

    /// Returns the buffered body, or the error hit while reading it.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError`] if the transport failed to read the body.
    pub fn body(&self) -> Result<&[u8], &BodyError> {
        self.body.as_deref()
    }

    /// Consumes the response and returns the buffered body.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError`] if the transport failed to read the body.
    pub fn into_body(self) -> Result<Vec<u8>, BodyError> {
        self.body
    }

    /// Returns the body as a UTF-8 string, if it was read and is valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_ref()
            .ok()
            .and_then(|b| std::str::from_utf8(b).ok())
    }
}

/// Trait for making HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with recording mock clients
/// - Swapping HTTP libraries without changing calling code
///
/// # Example
///
/// ```ignore
/// use convoy_client::transport::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct MockClient {
///     response: HttpResponse,
/// }
///
/// impl HttpClient for MockClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// Implementations must honor [`HttpRequest::timeout`] when it is set.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    ///
    /// A failure while reading the body is not an error here; it is
    /// reported through [`HttpResponse::body`].
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

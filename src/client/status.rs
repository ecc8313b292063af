//! Status acceptance rules per operation.

use http::StatusCode;

/// Which response statuses an operation treats as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Only `200 OK`; redirects and other 2xx codes are rejected.
    ExactlyOk,
    /// Anything up to and including `400`, which carries a structured body.
    UpToBadRequest,
    /// Anything below `300`.
    BelowRedirect,
    /// Anything below `400`.
    BelowClientError,
}

impl StatusPolicy {
    /// Returns true if `status` counts as success under this policy.
    pub fn allows(self, status: StatusCode) -> bool {
        let code = status.as_u16();
        match self {
            Self::ExactlyOk => status == StatusCode::OK,
            Self::UpToBadRequest => code <= StatusCode::BAD_REQUEST.as_u16(),
            Self::BelowRedirect => code < 300,
            Self::BelowClientError => code < 400,
        }
    }
}

/// Failure at the remote catalog boundary.
///
/// The only checked failure of the session core. Stores convert it into a
/// display message and never let it reach the presentation layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("network unreachable: {0}")]
    Unreachable(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("product not found")]
    NotFound,
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl TransportError {
    pub fn unreachable(reason: impl Into<String>) -> Self {
        TransportError::Unreachable(reason.into())
    }
    pub fn status(code: u16) -> Self {
        TransportError::Status(code)
    }
    pub fn malformed(reason: impl Into<String>) -> Self {
        TransportError::MalformedPayload(reason.into())
    }
}

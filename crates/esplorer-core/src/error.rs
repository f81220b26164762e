#[derive(Debug, thiserror::Error)]
pub enum EsploraError {
    /// The transport gave up before a response arrived (DNS, TCP, TLS, timeout).
    #[error("conn err: {0}")]
    Connection(#[source] reqwest::Error),

    /// The explorer answered with something other than 200. The body is kept
    /// verbatim; 4xx and 5xx are not told apart.
    #[error("request err: {body}")]
    Request { status: u16, body: String },

    /// A 200 response whose body did not decode into the expected shape.
    #[error("decode err: {0}")]
    Decode(String),

    #[error("invalid base url: {0}")]
    InvalidUrl(String),
}

impl EsploraError {
    /// HTTP status of a `Request` error, `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

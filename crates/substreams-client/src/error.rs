use http::uri::InvalidUri;
use thiserror::Error;
use tonic::Code;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Credential rejected by the endpoint. Fatal, never retried.
    #[error("Credentials rejected: {0}")]
    Auth(tonic::Status),

    /// Bad request parameters or package contents, detected before the
    /// stream opens.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("gRPC transport error: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("Malformed payload for type `{type_name}`: {reason}")]
    MalformedPayload { type_name: String, reason: String },

    /// Transient stream failure; retried with bounded backoff.
    #[error("Stream error: {0}")]
    Network(tonic::Status),

    #[error("Error fetching package: {0}")]
    PackageFetch(#[from] reqwest::Error),

    #[error("Error reading package: {0}")]
    PackageRead(#[from] std::io::Error),

    #[error("Protos error: {0}")]
    Protos(#[from] substreams_protos::ProtosError),

    #[error("Retries exhausted after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<ClientError>,
    },

    #[error("No decoder registered for type `{0}`")]
    UnknownType(String),

    #[error("Invalid URI: {0}")]
    UriInvalid(#[from] InvalidUri),
}

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            Code::Unauthenticated | Code::PermissionDenied => ClientError::Auth(status),
            _ => ClientError::Network(status),
        }
    }
}

impl ClientError {
    /// Whether the stream may be reopened from the last cursor after this
    /// error. Everything except transient transport failures is final.
    pub fn is_retriable(&self) -> bool {
        match self {
            ClientError::Connect(_) => true,
            ClientError::Network(status) => matches!(
                status.code(),
                Code::Unavailable
                    | Code::Unknown
                    | Code::Internal
                    | Code::Aborted
                    | Code::DeadlineExceeded
                    | Code::ResourceExhausted
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_status_is_fatal_auth() {
        let err = ClientError::from(tonic::Status::unauthenticated("bad token"));
        assert!(matches!(err, ClientError::Auth(_)));
        assert!(!err.is_retriable());
    }

    #[test]
    fn unavailable_status_is_retriable() {
        let err = ClientError::from(tonic::Status::unavailable("connection reset"));
        assert!(matches!(err, ClientError::Network(_)));
        assert!(err.is_retriable());
    }

    #[test]
    fn invalid_argument_is_not_retriable() {
        let err = ClientError::from(tonic::Status::invalid_argument("bad request"));
        assert!(!err.is_retriable());
    }
}

use substreams_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Missing required environment variable {0}")]
    EnvVarMissing(&'static str),

    #[error("Invalid value `{value}` for {var}")]
    EnvVarInvalid { var: &'static str, value: String },

    #[error("Progress reporting failed: {0}")]
    Reporting(#[from] std::io::Error),
}

// Copyright 2024-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use once_cell::sync::Lazy;
use substreams_protos::{Request, Response, StreamClient};
use tonic::{
    codec::Streaming,
    metadata::{Ascii, MetadataValue},
    service::Interceptor,
    transport::{Channel, ClientTlsConfig, Uri},
};

use crate::error::ClientError;

static TLS_CONFIG: Lazy<ClientTlsConfig> = Lazy::new(|| {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    ClientTlsConfig::new()
        .with_native_roots()
        .assume_http2(true)
});

/// Module outputs routinely exceed tonic's 4 MiB default.
const MAX_DECODE_BYTES: usize = 64 * 1024 * 1024;

/// A single remote Substreams endpoint and the credential presented to it.
///
/// Owns the connection lifecycle for one logical stream at a time; callers
/// reopen through [`SubstreamsEndpoint::open_blocks`] when resuming from a
/// cursor.
#[derive(Clone)]
pub struct SubstreamsEndpoint {
    uri: Uri,
    token: MetadataValue<Ascii>,
}

impl SubstreamsEndpoint {
    pub fn new(endpoint: &str, token: &str) -> Result<Self, ClientError> {
        let uri = endpoint.parse::<Uri>()?;
        let token = format!("Bearer {token}").parse::<MetadataValue<Ascii>>().map_err(|_| {
            ClientError::Config("API token contains characters not valid in a header".to_string())
        })?;
        Ok(Self { uri, token })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    async fn connect(&self) -> Result<Channel, ClientError> {
        let builder = Channel::builder(self.uri.clone());
        let builder = match self.uri.scheme_str() {
            Some("https") => builder.tls_config(TLS_CONFIG.clone())?,
            _ => builder,
        };
        Ok(builder.connect().await?)
    }

    /// Open the `Stream/Blocks` call for `request`.
    ///
    /// Every call opens a fresh logical stream; resumption is owned by the
    /// caller through the request's start cursor.
    pub async fn open_blocks(&self, request: Request) -> Result<Streaming<Response>, ClientError> {
        let channel = self.connect().await?;
        let interceptor = AuthInterceptor {
            token: self.token.clone(),
        };
        let mut client = StreamClient::with_interceptor(channel, interceptor)
            .max_decoding_message_size(MAX_DECODE_BYTES);
        let response = client.blocks(request).await?;
        Ok(response.into_inner())
    }
}

/// Attaches the bearer credential to every outgoing request.
#[derive(Clone)]
struct AuthInterceptor {
    token: MetadataValue<Ascii>,
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: tonic::Request<()>) -> Result<tonic::Request<()>, tonic::Status> {
        request.metadata_mut().insert("authorization", self.token.clone());
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_token_with_header_invalid_characters() {
        let result = SubstreamsEndpoint::new("https://mainnet.sol.streamingfast.io:443", "bad\ntoken");
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn rejects_malformed_uri() {
        let result = SubstreamsEndpoint::new("not a uri", "token");
        assert!(matches!(result, Err(ClientError::UriInvalid(_))));
    }

    #[test]
    fn accepts_plaintext_endpoint() {
        let endpoint = SubstreamsEndpoint::new("http://localhost:9000", "token").unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("http"));
    }
}

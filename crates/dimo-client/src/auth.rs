//! Web3 challenge/response authentication
//!
//! Obtaining an access token is a three-step exchange with the Auth service:
//!
//! 1. [`Auth::generate_challenge`] posts the client id, redirect domain and
//!    wallet address (form-encoded) and receives a `{challenge, state}` pair.
//! 2. [`Auth::sign_challenge`] signs the challenge text locally with the
//!    wallet's private key (EIP-191 personal-sign). No network call.
//! 3. [`Auth::submit_challenge`] posts `state` together with the signature
//!    and receives the access token.
//!
//! [`Auth::get_token`] runs all three in order and stops at the first failure.

use std::collections::BTreeMap;
use std::fmt;

use dimo_core::{endpoints, validate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::client::DimoClient;
use crate::error::{DimoError, Result};
use crate::request::{Headers, RequestOptions};
use crate::signing;

/// Scope requested when the caller does not override it
pub const DEFAULT_SCOPE: &str = "openid email";
/// OAuth response type requested when the caller does not override it
pub const DEFAULT_RESPONSE_TYPE: &str = "code";
/// Grant type sent with the signed challenge
pub const GRANT_TYPE: &str = "authorization_code";

/// Server-issued challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Text to sign
    pub challenge: String,
    /// Correlation value to send back with the signature
    pub state: String,
}

/// Token endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Any other fields the server returned
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Inputs of the challenge request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRequest {
    pub client_id: String,
    pub domain: String,
    /// Wallet address; defaults to `client_id`
    pub address: Option<String>,
    pub scope: String,
    pub response_type: String,
}

impl ChallengeRequest {
    pub fn new(client_id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            domain: domain.into(),
            address: None,
            scope: DEFAULT_SCOPE.to_string(),
            response_type: DEFAULT_RESPONSE_TYPE.to_string(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn response_type(mut self, response_type: impl Into<String>) -> Self {
        self.response_type = response_type.into();
        self
    }

    /// The address that will be sent
    pub fn effective_address(&self) -> &str {
        self.address.as_deref().unwrap_or(&self.client_id)
    }

    fn validate(&self) -> Result<()> {
        validate::non_empty("client_id", &self.client_id)?;
        validate::non_empty("domain", &self.domain)?;
        validate::optional_non_empty("address", self.address.as_deref())?;
        validate::non_empty("scope", &self.scope)?;
        validate::non_empty("response_type", &self.response_type)?;
        Ok(())
    }

    fn form(&self) -> Value {
        json!({
            "client_id": self.client_id,
            "domain": self.domain,
            "scope": self.scope,
            "response_type": self.response_type,
            "address": self.effective_address(),
        })
    }
}

/// Inputs of the full handshake
#[derive(Clone)]
pub struct TokenRequest {
    pub challenge: ChallengeRequest,
    pub private_key: String,
}

impl TokenRequest {
    pub fn new(
        client_id: impl Into<String>,
        domain: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            challenge: ChallengeRequest::new(client_id, domain),
            private_key: private_key.into(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.challenge = self.challenge.address(address);
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.challenge = self.challenge.scope(scope);
        self
    }

    pub fn response_type(mut self, response_type: impl Into<String>) -> Self {
        self.challenge = self.challenge.response_type(response_type);
        self
    }
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("challenge", &self.challenge)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Auth service operations
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> Auth<'a> {
    /// Step 1: request a challenge for the wallet address.
    ///
    /// `headers` must be exactly `{"Content-Type": "application/x-www-form-urlencoded"}`
    /// (see [`validate::form_headers`]); anything else is rejected before
    /// the request is sent.
    #[instrument(skip(self, headers), fields(client_id = %request.client_id))]
    pub async fn generate_challenge(
        &self,
        request: &ChallengeRequest,
        headers: &Headers,
    ) -> Result<Challenge> {
        request.validate()?;
        validate::exact_form_headers(headers)?;

        let options = RequestOptions::new()
            .headers(headers.clone())
            .body(request.form());
        let response = self
            .client
            .call(&endpoints::GENERATE_CHALLENGE, None, options)
            .await?;
        parse_response(response, "challenge")
    }

    /// Step 2: sign the challenge text locally
    pub fn sign_challenge(&self, message: &str, private_key: &str) -> Result<String> {
        validate::non_empty("message", message)?;
        signing::sign_challenge(message, private_key)
    }

    /// Step 3: exchange the signed challenge for an access token
    #[instrument(skip(self, state, signature, headers))]
    pub async fn submit_challenge(
        &self,
        client_id: &str,
        domain: &str,
        state: &str,
        signature: &str,
        headers: &Headers,
    ) -> Result<TokenResponse> {
        validate::non_empty("client_id", client_id)?;
        validate::non_empty("domain", domain)?;
        validate::non_empty("state", state)?;
        validate::non_empty("signature", signature)?;
        validate::exact_form_headers(headers)?;

        let options = RequestOptions::new().headers(headers.clone()).body(json!({
            "client_id": client_id,
            "domain": domain,
            "state": state,
            "signature": signature,
            "grant_type": GRANT_TYPE,
        }));
        let response = self
            .client
            .call(&endpoints::SUBMIT_CHALLENGE, None, options)
            .await?;
        parse_response(response, "token")
    }

    /// Run the whole handshake and return the access token response
    #[instrument(skip(self, request), fields(client_id = %request.challenge.client_id))]
    pub async fn get_token(&self, request: &TokenRequest) -> Result<TokenResponse> {
        request.challenge.validate()?;
        let signer = signing::parse_private_key(&request.private_key)?;
        let headers = validate::form_headers();

        let challenge = self.generate_challenge(&request.challenge, &headers).await?;
        debug!("Received challenge, signing locally");

        let signature = signing::sign_with(&signer, &challenge.challenge)?;
        self.submit_challenge(
            &request.challenge.client_id,
            &request.challenge.domain,
            &challenge.state,
            &signature,
            &headers,
        )
        .await
    }
}

fn parse_response<T: serde::de::DeserializeOwned>(
    response: Option<Value>,
    what: &str,
) -> Result<T> {
    let value = response.ok_or_else(|| DimoError::Parse(format!("empty {} response", what)))?;
    serde_json::from_value(value)
        .map_err(|e| DimoError::Parse(format!("invalid {} response: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn address_defaults_to_client_id() {
        let request = ChallengeRequest::new("0xClient", "https://app.example");
        assert_eq!(request.effective_address(), "0xClient");
        assert_eq!(request.form()["address"], "0xClient");
        assert_eq!(request.form()["scope"], DEFAULT_SCOPE);
        assert_eq!(request.form()["response_type"], DEFAULT_RESPONSE_TYPE);

        let request = request.address("0xWallet");
        assert_eq!(request.form()["address"], "0xWallet");
    }

    #[test]
    fn empty_fields_rejected() {
        let err = ChallengeRequest::new("", "d").validate().unwrap_err();
        assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "client_id"));
        let err = ChallengeRequest::new("c", "d").address(" ").validate().unwrap_err();
        assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "address"));
    }

    #[test]
    fn token_request_debug_hides_key() {
        let request = TokenRequest::new("c", "d", "0xsecretkey");
        let shown = format!("{:?}", request);
        assert!(!shown.contains("secretkey"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn token_response_keeps_extra_fields() {
        let response: TokenResponse = serde_json::from_value(json!({
            "access_token": "abc",
            "token_type": "Bearer",
            "refresh_token": "r"
        }))
        .unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.token_type.as_deref(), Some("Bearer"));
        assert_eq!(response.extra.get("refresh_token"), Some(&json!("r")));
    }

    #[test]
    fn parse_response_errors() {
        assert!(matches!(
            parse_response::<Challenge>(None, "challenge"),
            Err(DimoError::Parse(_))
        ));
        assert!(matches!(
            parse_response::<Challenge>(Some(json!({"state": "s"})), "challenge"),
            Err(DimoError::Parse(_))
        ));
    }
}

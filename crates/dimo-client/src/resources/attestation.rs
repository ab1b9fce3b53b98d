//! Verifiable credential issuance

use dimo_core::{endpoints, validate};
use serde_json::Value;
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Attestation service operations
#[derive(Debug, Clone, Copy)]
pub struct Attestation<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> Attestation<'a> {
    /// Issue a VIN verifiable credential for a vehicle
    #[instrument(skip(self, privilege_token))]
    pub async fn create_vin_vc(
        &self,
        privilege_token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        let options = RequestOptions::new().param("tokenId", token_id);
        self.client
            .call(&endpoints::CREATE_VIN_VC, Some(privilege_token), options)
            .await
    }

    /// Issue a proof-of-movement verifiable credential for a vehicle
    #[instrument(skip(self, privilege_token))]
    pub async fn create_pom_vc(
        &self,
        privilege_token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        let options = RequestOptions::new().param("tokenId", token_id);
        self.client
            .call(&endpoints::CREATE_POM_VC, Some(privilege_token), options)
            .await
    }
}

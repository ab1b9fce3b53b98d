//! Trip history

use dimo_core::{endpoints, validate};
use serde_json::Value;
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Trips service operations
#[derive(Debug, Clone, Copy)]
pub struct Trips<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> Trips<'a> {
    /// List a vehicle's trips, optionally a specific page
    #[instrument(skip(self, privilege_token))]
    pub async fn trips(
        &self,
        privilege_token: &str,
        token_id: &str,
        page: Option<u32>,
    ) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        let options = RequestOptions::new()
            .param("tokenId", token_id)
            .query_opt("page", page);
        self.client
            .call(&endpoints::TRIPS, Some(privilege_token), options)
            .await
    }
}

//! Privilege token exchange

use dimo_core::{endpoints, validate};
use serde_json::{json, Value};
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Token exchange service operations
#[derive(Debug, Clone, Copy)]
pub struct TokenExchange<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> TokenExchange<'a> {
    /// Exchange an access token for a privilege token scoped to one vehicle.
    ///
    /// The vehicle NFT contract address comes from the active environment.
    #[instrument(skip(self, access_token))]
    pub async fn exchange(
        &self,
        access_token: &str,
        privileges: &[u32],
        token_id: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty_list("privileges", privileges)?;
        validate::non_empty("token_id", token_id)?;
        let nft_address = self.client.environment().nft_address();
        validate::non_empty("nft_address", nft_address)?;

        let options = RequestOptions::new().body(json!({
            "nftContractAddress": nft_address,
            "privileges": privileges,
            "tokenId": token_id,
        }));
        self.client
            .call(&endpoints::TOKEN_EXCHANGE, Some(access_token), options)
            .await
    }
}

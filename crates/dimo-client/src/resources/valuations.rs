//! Vehicle valuations and offers

use dimo_core::{endpoints, validate, Endpoint};
use serde_json::Value;
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Valuations service operations
#[derive(Debug, Clone, Copy)]
pub struct Valuations<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> Valuations<'a> {
    #[instrument(skip(self, access_token))]
    pub async fn get_valuations(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.get(&endpoints::GET_VALUATIONS, access_token, user_device_id)
            .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_instant_offer(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.get(&endpoints::GET_INSTANT_OFFER, access_token, user_device_id)
            .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_offers(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.get(&endpoints::GET_OFFERS, access_token, user_device_id)
            .await
    }

    async fn get(
        &self,
        endpoint: &Endpoint,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("user_device_id", user_device_id)?;
        let options = RequestOptions::new().param("userDeviceId", user_device_id);
        self.client.call(endpoint, Some(access_token), options).await
    }
}

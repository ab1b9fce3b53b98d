//! Account event feed

use dimo_core::endpoints;
use serde_json::Value;
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Events service operations
#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> Events<'a> {
    #[instrument(skip(self, access_token))]
    pub async fn get_events(&self, access_token: &str) -> Result<Option<Value>> {
        self.client
            .call(&endpoints::GET_EVENTS, Some(access_token), RequestOptions::new())
            .await
    }
}

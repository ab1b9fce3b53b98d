//! Device definition catalogue (public, no auth)

use dimo_core::{endpoints, validate};
use serde_json::Value;
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Device definitions service operations
#[derive(Debug, Clone, Copy)]
pub struct DeviceDefinitions<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> DeviceDefinitions<'a> {
    /// Look up a definition by make, model and year
    #[instrument(skip(self))]
    pub async fn get_by_mmy(&self, make: &str, model: &str, year: u16) -> Result<Option<Value>> {
        validate::non_empty("make", make)?;
        validate::non_empty("model", model)?;
        let options = RequestOptions::new()
            .query("make", make)
            .query("model", model)
            .query("year", year);
        self.client
            .call(&endpoints::DEVICE_DEFINITIONS, None, options)
            .await
    }

    /// Fetch a single definition
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Value>> {
        validate::non_empty("id", id)?;
        let options = RequestOptions::new().param("id", id);
        self.client
            .call(&endpoints::DEVICE_DEFINITIONS, None, options)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_device_makes(&self) -> Result<Option<Value>> {
        self.client
            .call(&endpoints::LIST_DEVICE_MAKES, None, RequestOptions::new())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_device_type_by_id(&self, id: &str) -> Result<Option<Value>> {
        validate::non_empty("id", id)?;
        let options = RequestOptions::new().param("id", id);
        self.client
            .call(&endpoints::GET_DEVICE_TYPE_BY_ID, None, options)
            .await
    }
}

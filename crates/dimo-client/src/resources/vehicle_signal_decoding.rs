//! Aftermarket device configuration: PIDs, DBC files, settings and jobs

use dimo_core::{endpoints, validate, Endpoint};
use serde_json::Value;
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Vehicle signal decoding service operations
#[derive(Debug, Clone, Copy)]
pub struct VehicleSignalDecoding<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> VehicleSignalDecoding<'a> {
    // =========================================================================
    // Config URLs and templates
    // =========================================================================

    /// Config URLs for a VIN, optionally for a specific CAN protocol
    #[instrument(skip(self))]
    pub async fn list_config_urls_by_vin(
        &self,
        vin: &str,
        protocol: Option<&str>,
    ) -> Result<Option<Value>> {
        validate::non_empty("vin", vin)?;
        validate::optional_non_empty("protocol", protocol)?;
        let options = RequestOptions::new()
            .param("vin", vin)
            .query_opt("protocol", protocol);
        self.client
            .call(&endpoints::LIST_CONFIG_URLS_BY_VIN, None, options)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_config_urls_by_address(&self, address: &str) -> Result<Option<Value>> {
        self.by_address(&endpoints::LIST_CONFIG_URLS_BY_ADDRESS, address)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_pid_configs(&self, template_name: &str) -> Result<Option<Value>> {
        self.by_template(&endpoints::GET_PID_CONFIGS, template_name)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_device_settings(&self, template_name: &str) -> Result<Option<Value>> {
        self.by_template(&endpoints::GET_DEVICE_SETTINGS, template_name)
            .await
    }

    /// DBC file contents, returned as a JSON string
    #[instrument(skip(self))]
    pub async fn get_dbc_text(&self, template_name: &str) -> Result<Option<Value>> {
        self.by_template(&endpoints::GET_DBC_TEXT, template_name)
            .await
    }

    // =========================================================================
    // Device status and jobs
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn get_device_status_by_address(&self, address: &str) -> Result<Option<Value>> {
        self.by_address(&endpoints::GET_DEVICE_STATUS_BY_ADDRESS, address)
            .await
    }

    #[instrument(skip(self, privilege_token, config))]
    pub async fn set_device_status_by_address(
        &self,
        privilege_token: &str,
        address: &str,
        config: &Value,
    ) -> Result<Option<Value>> {
        validate::non_empty("address", address)?;
        validate::json_object("config", config)?;
        let options = RequestOptions::new()
            .param("address", address)
            .body(config.clone());
        self.client
            .call(
                &endpoints::SET_DEVICE_STATUS_BY_ADDRESS,
                Some(privilege_token),
                options,
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_jobs_by_address(&self, address: &str) -> Result<Option<Value>> {
        self.by_address(&endpoints::GET_JOBS_BY_ADDRESS, address)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_pending_jobs_by_address(&self, address: &str) -> Result<Option<Value>> {
        self.by_address(&endpoints::GET_PENDING_JOBS_BY_ADDRESS, address)
            .await
    }

    #[instrument(skip(self, privilege_token))]
    pub async fn set_job_status_by_address(
        &self,
        privilege_token: &str,
        address: &str,
        job_id: &str,
        status: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("address", address)?;
        validate::non_empty("job_id", job_id)?;
        validate::non_empty("status", status)?;
        let options = RequestOptions::new()
            .param("address", address)
            .param("jobId", job_id)
            .param("status", status);
        self.client
            .call(
                &endpoints::SET_JOB_STATUS_BY_ADDRESS,
                Some(privilege_token),
                options,
            )
            .await
    }

    async fn by_address(&self, endpoint: &Endpoint, address: &str) -> Result<Option<Value>> {
        validate::non_empty("address", address)?;
        let options = RequestOptions::new().param("address", address);
        self.client.call(endpoint, None, options).await
    }

    async fn by_template(&self, endpoint: &Endpoint, template_name: &str) -> Result<Option<Value>> {
        validate::non_empty("template_name", template_name)?;
        let options = RequestOptions::new().param("templateName", template_name);
        self.client.call(endpoint, None, options).await
    }
}

//! Vehicle history, status and analytics

use dimo_core::{endpoints, validate, Endpoint};
use serde_json::Value;
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Device data service operations
#[derive(Debug, Clone, Copy)]
pub struct DeviceData<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> DeviceData<'a> {
    // =========================================================================
    // Vehicles by token id (privilege token)
    // =========================================================================

    /// Bucketed signal history between two dates
    #[instrument(skip(self, privilege_token))]
    pub async fn get_vehicle_history(
        &self,
        privilege_token: &str,
        token_id: &str,
        start_date: &str,
        end_date: &str,
        buckets: Option<&str>,
    ) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        validate::non_empty("start_date", start_date)?;
        validate::non_empty("end_date", end_date)?;
        validate::optional_non_empty("buckets", buckets)?;
        let options = RequestOptions::new()
            .param("tokenId", token_id)
            .query("startDate", start_date)
            .query("endDate", end_date)
            .query_opt("buckets", buckets);
        self.client
            .call(&endpoints::GET_VEHICLE_HISTORY, Some(privilege_token), options)
            .await
    }

    #[instrument(skip(self, privilege_token))]
    pub async fn get_vehicle_status(
        &self,
        privilege_token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        self.by_token_id(&endpoints::GET_VEHICLE_STATUS, privilege_token, token_id)
            .await
    }

    #[instrument(skip(self, privilege_token))]
    pub async fn get_v1_vehicle_history(
        &self,
        privilege_token: &str,
        token_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        validate::non_empty("start_date", start_date)?;
        validate::non_empty("end_date", end_date)?;
        let options = RequestOptions::new()
            .param("tokenId", token_id)
            .query("startDate", start_date)
            .query("endDate", end_date);
        self.client
            .call(&endpoints::GET_V1_VEHICLE_HISTORY, Some(privilege_token), options)
            .await
    }

    #[instrument(skip(self, privilege_token))]
    pub async fn get_v1_vehicle_status(
        &self,
        privilege_token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        self.by_token_id(&endpoints::GET_V1_VEHICLE_STATUS, privilege_token, token_id)
            .await
    }

    /// Unprocessed status payload as reported by the device
    #[instrument(skip(self, privilege_token))]
    pub async fn get_v1_vehicle_status_raw(
        &self,
        privilege_token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        self.by_token_id(&endpoints::GET_V1_VEHICLE_STATUS_RAW, privilege_token, token_id)
            .await
    }

    /// Kilometers driven per day in the given IANA time zone
    #[instrument(skip(self, privilege_token))]
    pub async fn get_daily_distance(
        &self,
        privilege_token: &str,
        token_id: &str,
        time_zone: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        validate::non_empty("time_zone", time_zone)?;
        let options = RequestOptions::new()
            .param("tokenId", token_id)
            .query("time_zone", time_zone);
        self.client
            .call(&endpoints::GET_DAILY_DISTANCE, Some(privilege_token), options)
            .await
    }

    #[instrument(skip(self, privilege_token))]
    pub async fn get_total_distance(
        &self,
        privilege_token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        self.by_token_id(&endpoints::GET_TOTAL_DISTANCE, privilege_token, token_id)
            .await
    }

    // =========================================================================
    // User devices (access token)
    // =========================================================================

    #[instrument(skip(self, access_token))]
    pub async fn get_user_device_status(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(&endpoints::GET_USER_DEVICE_STATUS, access_token, user_device_id)
            .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_user_device_history(
        &self,
        access_token: &str,
        user_device_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("user_device_id", user_device_id)?;
        validate::non_empty("start_date", start_date)?;
        validate::non_empty("end_date", end_date)?;
        let options = RequestOptions::new()
            .param("userDeviceId", user_device_id)
            .query("startDate", start_date)
            .query("endDate", end_date);
        self.client
            .call(&endpoints::GET_USER_DEVICE_HISTORY, Some(access_token), options)
            .await
    }

    /// Email the device's data export to the account owner
    #[instrument(skip(self, access_token))]
    pub async fn send_json_export_email(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(&endpoints::SEND_JSON_EXPORT_EMAIL, access_token, user_device_id)
            .await
    }

    async fn by_token_id(
        &self,
        endpoint: &Endpoint,
        token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        let options = RequestOptions::new().param("tokenId", token_id);
        self.client.call(endpoint, Some(token), options).await
    }

    async fn by_user_device(
        &self,
        endpoint: &Endpoint,
        token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("user_device_id", user_device_id)?;
        let options = RequestOptions::new().param("userDeviceId", user_device_id);
        self.client.call(endpoint, Some(token), options).await
    }
}

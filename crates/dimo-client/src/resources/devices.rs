//! Vehicle onboarding, aftermarket devices and remote commands

use dimo_core::{endpoints, validate, Endpoint};
use serde_json::{json, Value};
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// Devices service operations
#[derive(Debug, Clone, Copy)]
pub struct Devices<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> Devices<'a> {
    // =========================================================================
    // Vehicle creation
    // =========================================================================

    #[instrument(skip(self, access_token))]
    pub async fn create_vehicle(
        &self,
        access_token: &str,
        country_code: &str,
        device_definition_id: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("country_code", country_code)?;
        validate::non_empty("device_definition_id", device_definition_id)?;
        let options = RequestOptions::new().body(json!({
            "countryCode": country_code,
            "deviceDefinitionId": device_definition_id,
        }));
        self.client
            .call(&endpoints::CREATE_VEHICLE, Some(access_token), options)
            .await
    }

    /// Create a vehicle from a Smartcar authorization code
    #[instrument(skip(self, access_token, code))]
    pub async fn create_vehicle_from_smartcar(
        &self,
        access_token: &str,
        code: &str,
        country_code: &str,
        redirect_uri: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("code", code)?;
        validate::non_empty("country_code", country_code)?;
        validate::non_empty("redirect_uri", redirect_uri)?;
        let options = RequestOptions::new().body(json!({
            "code": code,
            "countryCode": country_code,
            "redirectURI": redirect_uri,
        }));
        self.client
            .call(
                &endpoints::CREATE_VEHICLE_FROM_SMARTCAR,
                Some(access_token),
                options,
            )
            .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn create_vehicle_from_vin(
        &self,
        access_token: &str,
        can_protocol: &str,
        country_code: &str,
        vin: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("can_protocol", can_protocol)?;
        validate::non_empty("country_code", country_code)?;
        validate::non_empty("vin", vin)?;
        let options = RequestOptions::new().body(json!({
            "canProtocol": can_protocol,
            "countryCode": country_code,
            "vin": vin,
        }));
        self.client
            .call(&endpoints::CREATE_VEHICLE_FROM_VIN, Some(access_token), options)
            .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn update_vehicle_vin(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(&endpoints::UPDATE_VEHICLE_VIN, access_token, user_device_id, None)
            .await
    }

    // =========================================================================
    // Claiming, minting, pairing
    // =========================================================================

    #[instrument(skip(self, access_token))]
    pub async fn get_claiming_payload(
        &self,
        access_token: &str,
        serial: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("serial", serial)?;
        let options = RequestOptions::new().param("serial", serial);
        self.client
            .call(&endpoints::GET_CLAIMING_PAYLOAD, Some(access_token), options)
            .await
    }

    #[instrument(skip(self, access_token, claim_request))]
    pub async fn sign_claiming_payload(
        &self,
        access_token: &str,
        serial: &str,
        claim_request: &Value,
    ) -> Result<Option<Value>> {
        validate::non_empty("serial", serial)?;
        validate::json_object("claim_request", claim_request)?;
        let options = RequestOptions::new()
            .param("serial", serial)
            .body(json!({ "claimRequest": claim_request }));
        self.client
            .call(&endpoints::SIGN_CLAIMING_PAYLOAD, Some(access_token), options)
            .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_minting_payload(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(&endpoints::GET_MINTING_PAYLOAD, access_token, user_device_id, None)
            .await
    }

    #[instrument(skip(self, access_token, mint_request))]
    pub async fn sign_minting_payload(
        &self,
        access_token: &str,
        user_device_id: &str,
        mint_request: &Value,
    ) -> Result<Option<Value>> {
        validate::json_object("mint_request", mint_request)?;
        let body = json!({ "mintRequest": mint_request });
        self.by_user_device(
            &endpoints::SIGN_MINTING_PAYLOAD,
            access_token,
            user_device_id,
            Some(body),
        )
        .await
    }

    /// Opt the vehicle in to data sharing
    #[instrument(skip(self, access_token))]
    pub async fn opt_in_share_data(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(&endpoints::OPT_IN_SHARE_DATA, access_token, user_device_id, None)
            .await
    }

    /// Ask the platform to pull fresh data from Smartcar
    #[instrument(skip(self, access_token))]
    pub async fn refresh_smartcar_data(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(
            &endpoints::REFRESH_SMARTCAR_DATA,
            access_token,
            user_device_id,
            None,
        )
        .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_pairing_payload(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(&endpoints::GET_PAIRING_PAYLOAD, access_token, user_device_id, None)
            .await
    }

    #[instrument(skip(self, access_token, user_signature))]
    pub async fn sign_pairing_payload(
        &self,
        access_token: &str,
        user_device_id: &str,
        user_signature: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("user_signature", user_signature)?;
        let body = json!({ "userSignature": user_signature });
        self.by_user_device(
            &endpoints::SIGN_PAIRING_PAYLOAD,
            access_token,
            user_device_id,
            Some(body),
        )
        .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_unpairing_payload(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(
            &endpoints::GET_UNPAIRING_PAYLOAD,
            access_token,
            user_device_id,
            None,
        )
        .await
    }

    #[instrument(skip(self, access_token, user_signature))]
    pub async fn sign_unpairing_payload(
        &self,
        access_token: &str,
        user_device_id: &str,
        user_signature: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("user_signature", user_signature)?;
        let body = json!({ "userSignature": user_signature });
        self.by_user_device(
            &endpoints::SIGN_UNPAIRING_PAYLOAD,
            access_token,
            user_device_id,
            Some(body),
        )
        .await
    }

    // =========================================================================
    // Vehicle commands (privilege token)
    // =========================================================================

    #[instrument(skip(self, privilege_token))]
    pub async fn lock_doors(&self, privilege_token: &str, token_id: &str) -> Result<Option<Value>> {
        self.command(&endpoints::LOCK_DOORS, privilege_token, token_id)
            .await
    }

    #[instrument(skip(self, privilege_token))]
    pub async fn unlock_doors(
        &self,
        privilege_token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        self.command(&endpoints::UNLOCK_DOORS, privilege_token, token_id)
            .await
    }

    #[instrument(skip(self, privilege_token))]
    pub async fn open_frunk(&self, privilege_token: &str, token_id: &str) -> Result<Option<Value>> {
        self.command(&endpoints::OPEN_FRUNK, privilege_token, token_id)
            .await
    }

    #[instrument(skip(self, privilege_token))]
    pub async fn open_trunk(&self, privilege_token: &str, token_id: &str) -> Result<Option<Value>> {
        self.command(&endpoints::OPEN_TRUNK, privilege_token, token_id)
            .await
    }

    // =========================================================================
    // Error codes
    // =========================================================================

    #[instrument(skip(self, access_token))]
    pub async fn list_error_codes(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(&endpoints::LIST_ERROR_CODES, access_token, user_device_id, None)
            .await
    }

    #[instrument(skip(self, access_token, query_device_error_codes))]
    pub async fn submit_error_codes(
        &self,
        access_token: &str,
        user_device_id: &str,
        query_device_error_codes: &Value,
    ) -> Result<Option<Value>> {
        validate::json_object("query_device_error_codes", query_device_error_codes)?;
        let body = json!({ "queryDeviceErrorCodes": query_device_error_codes });
        self.by_user_device(
            &endpoints::SUBMIT_ERROR_CODES,
            access_token,
            user_device_id,
            Some(body),
        )
        .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn clear_error_codes(
        &self,
        access_token: &str,
        user_device_id: &str,
    ) -> Result<Option<Value>> {
        self.by_user_device(&endpoints::CLEAR_ERROR_CODES, access_token, user_device_id, None)
            .await
    }

    // =========================================================================
    // Aftermarket devices (public)
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn get_aftermarket_device(&self, token_id: &str) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        let options = RequestOptions::new().param("tokenId", token_id);
        self.client
            .call(&endpoints::GET_AFTERMARKET_DEVICE, None, options)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_aftermarket_device_image(&self, token_id: &str) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        let options = RequestOptions::new().param("tokenId", token_id);
        self.client
            .call(&endpoints::GET_AFTERMARKET_DEVICE_IMAGE, None, options)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_aftermarket_device_metadata_by_address(
        &self,
        address: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("address", address)?;
        let options = RequestOptions::new().param("address", address);
        self.client
            .call(
                &endpoints::GET_AFTERMARKET_DEVICE_METADATA_BY_ADDRESS,
                None,
                options,
            )
            .await
    }

    async fn command(
        &self,
        endpoint: &Endpoint,
        privilege_token: &str,
        token_id: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("token_id", token_id)?;
        let options = RequestOptions::new().param("tokenId", token_id);
        self.client
            .call(endpoint, Some(privilege_token), options)
            .await
    }

    async fn by_user_device(
        &self,
        endpoint: &Endpoint,
        access_token: &str,
        user_device_id: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        validate::non_empty("user_device_id", user_device_id)?;
        let mut options = RequestOptions::new().param("userDeviceId", user_device_id);
        options.body = body;
        self.client.call(endpoint, Some(access_token), options).await
    }
}

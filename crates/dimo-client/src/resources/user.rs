//! User account

use dimo_core::{endpoints, validate};
use serde_json::{json, Value};
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;
use crate::request::RequestOptions;

/// User service operations
#[derive(Debug, Clone, Copy)]
pub struct User<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> User<'a> {
    #[instrument(skip(self, access_token))]
    pub async fn get(&self, access_token: &str) -> Result<Option<Value>> {
        self.client
            .call(&endpoints::GET_USER, Some(access_token), RequestOptions::new())
            .await
    }

    /// Replace user settings with `update_user_request`
    #[instrument(skip(self, access_token, update_user_request))]
    pub async fn update(
        &self,
        access_token: &str,
        update_user_request: &Value,
    ) -> Result<Option<Value>> {
        validate::json_object("update_user_request", update_user_request)?;
        let options = RequestOptions::new().body(update_user_request.clone());
        self.client
            .call(&endpoints::UPDATE_USER, Some(access_token), options)
            .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn delete(&self, access_token: &str) -> Result<Option<Value>> {
        self.client
            .call(&endpoints::DELETE_USER, Some(access_token), RequestOptions::new())
            .await
    }

    #[instrument(skip(self, access_token))]
    pub async fn send_confirmation_email(&self, access_token: &str) -> Result<Option<Value>> {
        self.client
            .call(
                &endpoints::SEND_CONFIRMATION_EMAIL,
                Some(access_token),
                RequestOptions::new(),
            )
            .await
    }

    #[instrument(skip(self, access_token, confirmation_code))]
    pub async fn confirm_email(
        &self,
        access_token: &str,
        confirmation_code: &str,
    ) -> Result<Option<Value>> {
        validate::non_empty("confirmation_code", confirmation_code)?;
        let options =
            RequestOptions::new().body(json!({ "confirmationCode": confirmation_code }));
        self.client
            .call(&endpoints::CONFIRM_EMAIL, Some(access_token), options)
            .await
    }
}

//! Telemetry GraphQL API (privilege token)

use dimo_core::{validate, Service};
use serde_json::{json, Value};
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;

const GET_SIGNALS_LATEST: &str = r#"
query GetSignalsLatest($tokenId: Int!) {
    signalsLatest(tokenId: $tokenId) {
        powertrainTransmissionTravelledDistance {
            timestamp
            value
        }
        exteriorAirTemperature {
            timestamp
            value
        }
        speed {
            timestamp
            value
        }
        powertrainType {
            timestamp
            value
        }
    }
}
"#;

/// Telemetry API queries
#[derive(Debug, Clone, Copy)]
pub struct Telemetry<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> Telemetry<'a> {
    /// Run an arbitrary query with a privilege token
    #[instrument(skip(self, query, token, variables))]
    pub async fn query(
        &self,
        query: &str,
        token: &str,
        variables: Option<Value>,
    ) -> Result<Value> {
        validate::non_empty("token", token)?;
        self.client
            .query(Service::Telemetry.as_str(), query, variables, Some(token))
            .await
    }

    /// Latest odometer, outside temperature, speed and powertrain type
    pub async fn get_signals_latest(&self, token: &str, token_id: u64) -> Result<Value> {
        let variables = json!({ "tokenId": token_id });
        self.query(GET_SIGNALS_LATEST, token, Some(variables))
            .await
    }
}

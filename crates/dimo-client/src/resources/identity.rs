//! Identity GraphQL API (public)

use dimo_core::{validate, Service};
use serde_json::{json, Value};
use tracing::instrument;

use crate::client::DimoClient;
use crate::error::Result;

const COUNT_DIMO_VEHICLES: &str = r#"
{
    vehicles (first:10) {
        totalCount,
    }
}
"#;

const LIST_VEHICLE_DEFINITIONS_PER_ADDRESS: &str = r#"
query ListVehicleDefinitionsPerAddress($owner: Address!, $first: Int!) {
    vehicles(filterBy: {owner: $owner}, first: $first) {
        nodes {
            aftermarketDevice {
                tokenId
                address
            }
            syntheticDevice {
                address
                tokenId
            }
            definition {
                make
                model
                year
            }
        }
    }
}
"#;

/// Identity API queries
#[derive(Debug, Clone, Copy)]
pub struct Identity<'a> {
    pub(crate) client: &'a DimoClient,
}

impl<'a> Identity<'a> {
    /// Run an arbitrary query
    #[instrument(skip(self, query, variables))]
    pub async fn query(&self, query: &str, variables: Option<Value>) -> Result<Value> {
        self.client
            .query(Service::Identity.as_str(), query, variables, None)
            .await
    }

    /// Total number of vehicles on the platform
    pub async fn count_dimo_vehicles(&self) -> Result<Value> {
        self.query(COUNT_DIMO_VEHICLES, None).await
    }

    /// Devices and definitions of the vehicles owned by `address`
    pub async fn list_vehicle_definitions_per_address(
        &self,
        address: &str,
        limit: u32,
    ) -> Result<Value> {
        validate::non_empty("address", address)?;
        let variables = json!({ "owner": address, "first": limit });
        self.query(LIST_VEHICLE_DEFINITIONS_PER_ADDRESS, Some(variables))
            .await
    }
}

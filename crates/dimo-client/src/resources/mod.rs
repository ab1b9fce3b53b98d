//! Resource method groups
//!
//! Each group borrows the [`DimoClient`](crate::DimoClient), validates its
//! arguments and issues exactly one call from the endpoint table. Groups are
//! obtained through accessors such as [`DimoClient::trips`](crate::DimoClient::trips).

mod attestation;
mod device_data;
mod device_definitions;
mod devices;
mod events;
mod identity;
mod telemetry;
mod token_exchange;
mod trips;
mod user;
mod valuations;
mod vehicle_signal_decoding;

pub use crate::auth::Auth;
pub use attestation::Attestation;
pub use device_data::DeviceData;
pub use device_definitions::DeviceDefinitions;
pub use devices::Devices;
pub use events::Events;
pub use identity::Identity;
pub use telemetry::Telemetry;
pub use token_exchange::TokenExchange;
pub use trips::Trips;
pub use user::User;
pub use valuations::Valuations;
pub use vehicle_signal_decoding::VehicleSignalDecoding;

//! The platform's REST endpoint table.
//!
//! One constant per SDK method. Resource groups in the client crate look up
//! their descriptor here and never build paths by hand.

use crate::endpoint::{AuthKind::*, Endpoint, HttpMethod::*};
use crate::environment::Service;

// =============================================================================
// Attestation
// =============================================================================

pub const CREATE_VIN_VC: Endpoint = Endpoint::new(
    "create_vin_vc",
    Post,
    Service::Attestation,
    "/v1/vc/vin/:tokenId",
    Bearer,
);
pub const CREATE_POM_VC: Endpoint = Endpoint::new(
    "create_pom_vc",
    Post,
    Service::Attestation,
    "/v1/vc/pom/:tokenId",
    Bearer,
);

// =============================================================================
// Auth
// =============================================================================

pub const GENERATE_CHALLENGE: Endpoint = Endpoint::new(
    "generate_challenge",
    Post,
    Service::Auth,
    "/auth/web3/generate_challenge",
    None,
);
pub const SUBMIT_CHALLENGE: Endpoint = Endpoint::new(
    "submit_challenge",
    Post,
    Service::Auth,
    "/auth/web3/submit_challenge",
    None,
);

// =============================================================================
// Device Data
// =============================================================================

pub const GET_VEHICLE_HISTORY: Endpoint = Endpoint::new(
    "get_vehicle_history",
    Get,
    Service::DeviceData,
    "/v2/vehicles/:tokenId/history",
    Bearer,
);
pub const GET_VEHICLE_STATUS: Endpoint = Endpoint::new(
    "get_vehicle_status",
    Get,
    Service::DeviceData,
    "/v2/vehicles/:tokenId/status",
    Bearer,
);
pub const GET_V1_VEHICLE_HISTORY: Endpoint = Endpoint::new(
    "get_v1_vehicle_history",
    Get,
    Service::DeviceData,
    "/v1/vehicle/:tokenId/history",
    Bearer,
);
pub const GET_V1_VEHICLE_STATUS: Endpoint = Endpoint::new(
    "get_v1_vehicle_status",
    Get,
    Service::DeviceData,
    "/v1/vehicle/:tokenId/status",
    Bearer,
);
pub const GET_V1_VEHICLE_STATUS_RAW: Endpoint = Endpoint::new(
    "get_v1_vehicle_status_raw",
    Get,
    Service::DeviceData,
    "/v1/vehicle/:tokenId/status-raw",
    Bearer,
);
pub const GET_USER_DEVICE_STATUS: Endpoint = Endpoint::new(
    "get_user_device_status",
    Get,
    Service::DeviceData,
    "/v1/user/device-data/:userDeviceId/status",
    Bearer,
);
pub const GET_USER_DEVICE_HISTORY: Endpoint = Endpoint::new(
    "get_user_device_history",
    Get,
    Service::DeviceData,
    "/v1/user/device-data/:userDeviceId/historical",
    Bearer,
);
pub const GET_DAILY_DISTANCE: Endpoint = Endpoint::new(
    "get_daily_distance",
    Get,
    Service::DeviceData,
    "/v2/vehicles/:tokenId/analytics/daily-distance",
    Bearer,
);
pub const GET_TOTAL_DISTANCE: Endpoint = Endpoint::new(
    "get_total_distance",
    Get,
    Service::DeviceData,
    "/v2/vehicles/:tokenId/analytics/total-distance",
    Bearer,
);
pub const SEND_JSON_EXPORT_EMAIL: Endpoint = Endpoint::new(
    "send_json_export_email",
    Post,
    Service::DeviceData,
    "/v1/user/device-data/:userDeviceId/export/json/email",
    Bearer,
);

// =============================================================================
// Device Definitions
// =============================================================================

/// `get_by_mmy` without an id, `get_by_id` with one
pub const DEVICE_DEFINITIONS: Endpoint = Endpoint::id_keyed(
    "device_definitions",
    Get,
    Service::DeviceDefinitions,
    "/device-definitions",
    "/device-definitions/:id",
    "id",
    None,
);
pub const LIST_DEVICE_MAKES: Endpoint = Endpoint::new(
    "list_device_makes",
    Get,
    Service::DeviceDefinitions,
    "/device-makes",
    None,
);
pub const GET_DEVICE_TYPE_BY_ID: Endpoint = Endpoint::new(
    "get_device_type_by_id",
    Get,
    Service::DeviceDefinitions,
    "/device-types/:id",
    None,
);

// =============================================================================
// Devices
// =============================================================================

pub const CREATE_VEHICLE: Endpoint = Endpoint::new(
    "create_vehicle",
    Post,
    Service::Devices,
    "/v1/user/devices",
    Bearer,
);
pub const CREATE_VEHICLE_FROM_SMARTCAR: Endpoint = Endpoint::new(
    "create_vehicle_from_smartcar",
    Post,
    Service::Devices,
    "/v1/user/devices/fromsmartcar",
    Bearer,
);
pub const CREATE_VEHICLE_FROM_VIN: Endpoint = Endpoint::new(
    "create_vehicle_from_vin",
    Post,
    Service::Devices,
    "/v1/user/devices/fromvin",
    Bearer,
);
pub const UPDATE_VEHICLE_VIN: Endpoint = Endpoint::new(
    "update_vehicle_vin",
    Patch,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/vin",
    Bearer,
);
pub const GET_CLAIMING_PAYLOAD: Endpoint = Endpoint::new(
    "get_claiming_payload",
    Post,
    Service::Devices,
    "/v1/aftermarket/device/by-serial/:serial/commands/claim",
    Bearer,
);
pub const SIGN_CLAIMING_PAYLOAD: Endpoint = Endpoint::new(
    "sign_claiming_payload",
    Post,
    Service::Devices,
    "/v1/aftermarket/device/by-serial/:serial/commands/claim",
    Bearer,
);
pub const GET_MINTING_PAYLOAD: Endpoint = Endpoint::new(
    "get_minting_payload",
    Post,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/commands/mint",
    Bearer,
);
pub const SIGN_MINTING_PAYLOAD: Endpoint = Endpoint::new(
    "sign_minting_payload",
    Post,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/commands/mint",
    Bearer,
);
pub const OPT_IN_SHARE_DATA: Endpoint = Endpoint::new(
    "opt_in_share_data",
    Post,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/commands/opt-in",
    Bearer,
);
pub const REFRESH_SMARTCAR_DATA: Endpoint = Endpoint::new(
    "refresh_smartcar_data",
    Post,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/commands/refresh",
    Bearer,
);
pub const GET_PAIRING_PAYLOAD: Endpoint = Endpoint::new(
    "get_pairing_payload",
    Get,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/aftermarket/commands/pair",
    Bearer,
);
pub const SIGN_PAIRING_PAYLOAD: Endpoint = Endpoint::new(
    "sign_pairing_payload",
    Post,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/aftermarket/commands/pair",
    Bearer,
);
pub const GET_UNPAIRING_PAYLOAD: Endpoint = Endpoint::new(
    "get_unpairing_payload",
    Get,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/aftermarket/commands/unpair",
    Bearer,
);
pub const SIGN_UNPAIRING_PAYLOAD: Endpoint = Endpoint::new(
    "sign_unpairing_payload",
    Post,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/aftermarket/commands/unpair",
    Bearer,
);
pub const LOCK_DOORS: Endpoint = Endpoint::new(
    "lock_doors",
    Post,
    Service::Devices,
    "/v1/vehicle/:tokenId/commands/doors/lock",
    Bearer,
);
pub const UNLOCK_DOORS: Endpoint = Endpoint::new(
    "unlock_doors",
    Post,
    Service::Devices,
    "/v1/vehicle/:tokenId/commands/doors/unlock",
    Bearer,
);
pub const OPEN_FRUNK: Endpoint = Endpoint::new(
    "open_frunk",
    Post,
    Service::Devices,
    "/v1/vehicle/:tokenId/commands/frunk/open",
    Bearer,
);
pub const OPEN_TRUNK: Endpoint = Endpoint::new(
    "open_trunk",
    Post,
    Service::Devices,
    "/v1/vehicle/:tokenId/commands/trunk/open",
    Bearer,
);
pub const LIST_ERROR_CODES: Endpoint = Endpoint::new(
    "list_error_codes",
    Get,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/error-codes",
    Bearer,
);
pub const SUBMIT_ERROR_CODES: Endpoint = Endpoint::new(
    "submit_error_codes",
    Post,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/error-codes",
    Bearer,
);
pub const CLEAR_ERROR_CODES: Endpoint = Endpoint::new(
    "clear_error_codes",
    Post,
    Service::Devices,
    "/v1/user/devices/:userDeviceId/error-codes/clear",
    Bearer,
);
pub const GET_AFTERMARKET_DEVICE: Endpoint = Endpoint::new(
    "get_aftermarket_device",
    Get,
    Service::Devices,
    "/v1/aftermarket/device/:tokenId",
    None,
);
pub const GET_AFTERMARKET_DEVICE_IMAGE: Endpoint = Endpoint::new(
    "get_aftermarket_device_image",
    Get,
    Service::Devices,
    "/v1/aftermarket/device/:tokenId/image",
    None,
);
pub const GET_AFTERMARKET_DEVICE_METADATA_BY_ADDRESS: Endpoint = Endpoint::new(
    "get_aftermarket_device_metadata_by_address",
    Get,
    Service::Devices,
    "/v1/aftermarket/device/by-address/:address",
    None,
);

// =============================================================================
// Events
// =============================================================================

pub const GET_EVENTS: Endpoint =
    Endpoint::new("get_events", Get, Service::Events, "/v1/events", Bearer);

// =============================================================================
// Token Exchange
// =============================================================================

pub const TOKEN_EXCHANGE: Endpoint = Endpoint::new(
    "exchange",
    Post,
    Service::TokenExchange,
    "/v1/tokens/exchange",
    Bearer,
);

// =============================================================================
// Trips
// =============================================================================

pub const TRIPS: Endpoint = Endpoint::new(
    "trips",
    Get,
    Service::Trips,
    "/v1/vehicle/:tokenId/trips",
    Bearer,
);

// =============================================================================
// User
// =============================================================================

pub const GET_USER: Endpoint = Endpoint::new("get_user", Get, Service::User, "/v1/user", Bearer);
pub const UPDATE_USER: Endpoint =
    Endpoint::new("update_user", Put, Service::User, "/v1/user", Bearer);
pub const DELETE_USER: Endpoint =
    Endpoint::new("delete_user", Delete, Service::User, "/v1/user", Bearer);
pub const SEND_CONFIRMATION_EMAIL: Endpoint = Endpoint::new(
    "send_confirmation_email",
    Post,
    Service::User,
    "/v1/user/send-confirmation-email",
    Bearer,
);
pub const CONFIRM_EMAIL: Endpoint = Endpoint::new(
    "confirm_email",
    Post,
    Service::User,
    "/v1/user/confirm-email",
    Bearer,
);

// =============================================================================
// Valuations
// =============================================================================

pub const GET_VALUATIONS: Endpoint = Endpoint::new(
    "get_valuations",
    Get,
    Service::Valuations,
    "/v1/user/devices/:userDeviceId/valuations",
    Bearer,
);
pub const GET_INSTANT_OFFER: Endpoint = Endpoint::new(
    "get_instant_offer",
    Get,
    Service::Valuations,
    "/v1/user/devices/:userDeviceId/instant-offer",
    Bearer,
);
pub const GET_OFFERS: Endpoint = Endpoint::new(
    "get_offers",
    Get,
    Service::Valuations,
    "/v1/user/devices/:userDeviceId/offers",
    Bearer,
);

// =============================================================================
// Vehicle Signal Decoding
// =============================================================================

pub const LIST_CONFIG_URLS_BY_VIN: Endpoint = Endpoint::new(
    "list_config_urls_by_vin",
    Get,
    Service::VehicleSignalDecoding,
    "/v1/device-config/vin/:vin/urls",
    None,
);
pub const LIST_CONFIG_URLS_BY_ADDRESS: Endpoint = Endpoint::new(
    "list_config_urls_by_address",
    Get,
    Service::VehicleSignalDecoding,
    "/v1/device-config/eth-addr/:address/urls",
    None,
);
pub const GET_PID_CONFIGS: Endpoint = Endpoint::new(
    "get_pid_configs",
    Get,
    Service::VehicleSignalDecoding,
    "/v1/device-config/pids/:templateName",
    None,
);
pub const GET_DEVICE_SETTINGS: Endpoint = Endpoint::new(
    "get_device_settings",
    Get,
    Service::VehicleSignalDecoding,
    "/v1/device-config/settings/:templateName",
    None,
);
pub const GET_DBC_TEXT: Endpoint = Endpoint::new(
    "get_dbc_text",
    Get,
    Service::VehicleSignalDecoding,
    "/v1/device-config/dbc/:templateName",
    None,
);
pub const GET_DEVICE_STATUS_BY_ADDRESS: Endpoint = Endpoint::new(
    "get_device_status_by_address",
    Get,
    Service::VehicleSignalDecoding,
    "/v1/device-config/eth-addr/:address/status",
    None,
);
pub const SET_DEVICE_STATUS_BY_ADDRESS: Endpoint = Endpoint::new(
    "set_device_status_by_address",
    Patch,
    Service::VehicleSignalDecoding,
    "/v1/device-config/eth-addr/:address/status",
    Bearer,
);
pub const GET_JOBS_BY_ADDRESS: Endpoint = Endpoint::new(
    "get_jobs_by_address",
    Get,
    Service::VehicleSignalDecoding,
    "/v1/device-config/eth-addr/:address/jobs",
    None,
);
pub const GET_PENDING_JOBS_BY_ADDRESS: Endpoint = Endpoint::new(
    "get_pending_jobs_by_address",
    Get,
    Service::VehicleSignalDecoding,
    "/v1/device-config/eth-addr/:address/jobs/pending",
    None,
);
pub const SET_JOB_STATUS_BY_ADDRESS: Endpoint = Endpoint::new(
    "set_job_status_by_address",
    Patch,
    Service::VehicleSignalDecoding,
    "/v1/device-config/eth-addr/:address/jobs/:jobId/:status",
    Bearer,
);

/// Every endpoint in the table
pub const ALL: &[&Endpoint] = &[
    &CREATE_VIN_VC,
    &CREATE_POM_VC,
    &GENERATE_CHALLENGE,
    &SUBMIT_CHALLENGE,
    &GET_VEHICLE_HISTORY,
    &GET_VEHICLE_STATUS,
    &GET_V1_VEHICLE_HISTORY,
    &GET_V1_VEHICLE_STATUS,
    &GET_V1_VEHICLE_STATUS_RAW,
    &GET_USER_DEVICE_STATUS,
    &GET_USER_DEVICE_HISTORY,
    &GET_DAILY_DISTANCE,
    &GET_TOTAL_DISTANCE,
    &SEND_JSON_EXPORT_EMAIL,
    &DEVICE_DEFINITIONS,
    &LIST_DEVICE_MAKES,
    &GET_DEVICE_TYPE_BY_ID,
    &CREATE_VEHICLE,
    &CREATE_VEHICLE_FROM_SMARTCAR,
    &CREATE_VEHICLE_FROM_VIN,
    &UPDATE_VEHICLE_VIN,
    &GET_CLAIMING_PAYLOAD,
    &SIGN_CLAIMING_PAYLOAD,
    &GET_MINTING_PAYLOAD,
    &SIGN_MINTING_PAYLOAD,
    &OPT_IN_SHARE_DATA,
    &REFRESH_SMARTCAR_DATA,
    &GET_PAIRING_PAYLOAD,
    &SIGN_PAIRING_PAYLOAD,
    &GET_UNPAIRING_PAYLOAD,
    &SIGN_UNPAIRING_PAYLOAD,
    &LOCK_DOORS,
    &UNLOCK_DOORS,
    &OPEN_FRUNK,
    &OPEN_TRUNK,
    &LIST_ERROR_CODES,
    &SUBMIT_ERROR_CODES,
    &CLEAR_ERROR_CODES,
    &GET_AFTERMARKET_DEVICE,
    &GET_AFTERMARKET_DEVICE_IMAGE,
    &GET_AFTERMARKET_DEVICE_METADATA_BY_ADDRESS,
    &GET_EVENTS,
    &TOKEN_EXCHANGE,
    &TRIPS,
    &GET_USER,
    &UPDATE_USER,
    &DELETE_USER,
    &SEND_CONFIRMATION_EMAIL,
    &CONFIRM_EMAIL,
    &GET_VALUATIONS,
    &GET_INSTANT_OFFER,
    &GET_OFFERS,
    &LIST_CONFIG_URLS_BY_VIN,
    &LIST_CONFIG_URLS_BY_ADDRESS,
    &GET_PID_CONFIGS,
    &GET_DEVICE_SETTINGS,
    &GET_DBC_TEXT,
    &GET_DEVICE_STATUS_BY_ADDRESS,
    &SET_DEVICE_STATUS_BY_ADDRESS,
    &GET_JOBS_BY_ADDRESS,
    &GET_PENDING_JOBS_BY_ADDRESS,
    &SET_JOB_STATUS_BY_ADDRESS,
];

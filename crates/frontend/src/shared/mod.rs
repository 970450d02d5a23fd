pub mod api;
pub mod api_utils;
pub mod asset_url;
pub mod config;
pub mod environment;

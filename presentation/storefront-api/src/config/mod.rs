pub mod app_config;
pub mod cors_config;
pub mod env;
pub mod geocoding_config;
pub mod payment_config;
pub mod pricing_config;
pub mod server_config;
pub mod storage_config;

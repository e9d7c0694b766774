use business::domain::cart::totals::PricingPolicy;
use poem::middleware::Cors;

use super::env::ConfigError;
use super::geocoding_config::GeocodingConfig;
use super::payment_config::PaymentConfig;
use super::pricing_config::pricing_from_env;
use super::storage_config::StorageConfig;
use super::{cors_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub pricing: PricingPolicy,
    pub geocoding: GeocodingConfig,
    pub payment: PaymentConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            storage: StorageConfig::from_env(),
            pricing: pricing_from_env()?,
            geocoding: GeocodingConfig::from_env(),
            payment: PaymentConfig::from_env()?,
        })
    }
}

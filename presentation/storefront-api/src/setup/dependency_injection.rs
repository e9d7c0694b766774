use std::sync::Arc;

use anyhow::Context;

use geocoding::client::OpenCageClient;
use geocoding::reverse_geocoder::OpenCageReverseGeocoder;
use logger::TracingLogger;
use payment::simulated_gateway::SimulatedPaymentGateway;
use persistence::address::repository::AddressRepositoryKv;
use persistence::catalog::repository::SeededCatalogRepository;
use persistence::kv::file_store::FileKeyValueStore;
use persistence::kv::memory_store::MemoryKeyValueStore;
use persistence::profile::repository::ProfileRepositoryKv;
use persistence::soil::fixture_monitor::FixtureSoilMonitor;

use business::application::address::autofill::AutofillAddressUseCaseImpl;
use business::application::address::get::GetAddressUseCaseImpl;
use business::application::address::submit::SubmitAddressUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::session::CartSession;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
use business::application::catalog::get_product::GetProductUseCaseImpl;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::checkout::quote::QuoteCheckoutUseCaseImpl;
use business::application::profile::get::GetProfileUseCaseImpl;
use business::application::profile::update::UpdateProfileUseCaseImpl;
use business::application::soil::report::GetSoilReportUseCaseImpl;
use business::domain::cart::mirror::CartMirror;
use business::domain::soil::advisor::default_crop_profiles;
use business::domain::storage::KeyValueStore;

use crate::api::address::routes::AddressApi;
use crate::api::cart::routes::CartApi;
use crate::api::catalog::routes::CatalogApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::profile::routes::ProfileApi;
use crate::api::soil::routes::SoilApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub cart_api: CartApi,
    pub checkout_api: CheckoutApi,
    pub address_api: AddressApi,
    pub profile_api: ProfileApi,
    pub soil_api: SoilApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let cart_logger = Arc::new(TracingLogger::new("cart"));
        let catalog_logger = Arc::new(TracingLogger::new("catalog"));
        let checkout_logger = Arc::new(TracingLogger::new("checkout"));
        let address_logger = Arc::new(TracingLogger::new("address"));
        let profile_logger = Arc::new(TracingLogger::new("profile"));
        let soil_logger = Arc::new(TracingLogger::new("soil"));

        // Infrastructure adapters
        let store: Arc<dyn KeyValueStore> = if config.storage.is_in_memory() {
            Arc::new(MemoryKeyValueStore::new())
        } else {
            Arc::new(
                FileKeyValueStore::open(&config.storage.data_dir).with_context(|| {
                    format!(
                        "cannot open data directory {}",
                        config.storage.data_dir.display()
                    )
                })?,
            )
        };
        let catalog_repository = Arc::new(SeededCatalogRepository::new());
        let address_repository = Arc::new(AddressRepositoryKv::new(store.clone()));
        let profile_repository = Arc::new(ProfileRepositoryKv::new(store.clone()));
        let geocoder = Arc::new(OpenCageReverseGeocoder::new(OpenCageClient::new(
            config.geocoding.api_key.clone(),
            config.geocoding.base_url.clone(),
        )));
        let payment_gateway = Arc::new(SimulatedPaymentGateway::new(
            config.payment.processing_delay,
        ));
        let soil_monitor = Arc::new(FixtureSoilMonitor::sample());

        let session = Arc::new(CartSession::hydrate(
            CartMirror::new(store, cart_logger.clone()),
            config.pricing.clone(),
            cart_logger.clone(),
        ));

        // Catalog use cases
        let browse_use_case = Arc::new(BrowseCatalogUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: catalog_logger,
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            session: session.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            session: session.clone(),
            catalog: catalog_repository,
            logger: cart_logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            session: session.clone(),
            logger: cart_logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            session: session.clone(),
            logger: cart_logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            session: session.clone(),
            logger: cart_logger,
        });

        // Checkout use cases
        let quote_use_case = Arc::new(QuoteCheckoutUseCaseImpl {
            session: session.clone(),
            logger: checkout_logger.clone(),
        });
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            session,
            payment_gateway,
            logger: checkout_logger,
        });

        // Address use cases
        let get_address_use_case = Arc::new(GetAddressUseCaseImpl {
            repository: address_repository.clone(),
        });
        let submit_address_use_case = Arc::new(SubmitAddressUseCaseImpl {
            repository: address_repository.clone(),
            logger: address_logger.clone(),
        });
        let autofill_use_case = Arc::new(AutofillAddressUseCaseImpl {
            geocoder,
            logger: address_logger,
        });

        // Profile use cases
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            repository: profile_repository.clone(),
        });
        let update_profile_use_case = Arc::new(UpdateProfileUseCaseImpl {
            repository: profile_repository,
            logger: profile_logger,
        });

        // Soil use cases
        let soil_report_use_case = Arc::new(GetSoilReportUseCaseImpl {
            address_repository,
            monitor: soil_monitor,
            crop_profiles: default_crop_profiles(),
            logger: soil_logger,
        });

        Ok(Self {
            health_api: HealthApi::new(),
            catalog_api: CatalogApi::new(browse_use_case, get_product_use_case),
            cart_api: CartApi::new(
                get_cart_use_case,
                add_item_use_case,
                update_quantity_use_case,
                remove_item_use_case,
                clear_cart_use_case,
            ),
            checkout_api: CheckoutApi::new(quote_use_case, place_order_use_case),
            address_api: AddressApi::new(
                get_address_use_case,
                submit_address_use_case,
                autofill_use_case,
            ),
            profile_api: ProfileApi::new(get_profile_use_case, update_profile_use_case),
            soil_api: SoilApi::new(soil_report_use_case),
        })
    }
}

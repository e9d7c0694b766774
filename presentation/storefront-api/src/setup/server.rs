use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Builds the route tree: the API at `/`, Swagger UI at `/docs` and the
    /// document at `/openapi.json`.
    pub fn routes(container: DependencyContainer, server_url: &str) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.catalog_api,
                container.cart_api,
                container.checkout_api,
                container.address_api,
                container.profile_api,
                container.soil_api,
            ),
            "Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);
        tracing::info!(target: "storefront", %addr, "storefront shell listening");
        println!("Server running at http://{}", addr);
        println!("Swagger UI at http://{}/docs", addr);
        println!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

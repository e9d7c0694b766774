use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use business::domain::catalog::use_cases::get_product::{GetProductParams, GetProductUseCase};
use business::domain::shared::value_objects::ProductKey;

use crate::api::catalog::dto::{CatalogPageResponse, ListingQuery, ProductResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    browse_use_case: Arc<dyn BrowseCatalogUseCase>,
    get_product_use_case: Arc<dyn GetProductUseCase>,
}

impl CatalogApi {
    pub fn new(
        browse_use_case: Arc<dyn BrowseCatalogUseCase>,
        get_product_use_case: Arc<dyn GetProductUseCase>,
    ) -> Self {
        Self {
            browse_use_case,
            get_product_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl CatalogApi {
    /// Browse products
    ///
    /// Lists the catalog filtered by category (comma-separated), inclusive
    /// price range and a case-insensitive search over title and description.
    /// `sort` is one of featured, price_asc, price_desc, name_asc, name_desc.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn browse(
        &self,
        category: Query<Option<String>>,
        min_price: Query<Option<String>>,
        max_price: Query<Option<String>>,
        search: Query<Option<String>>,
        sort: Query<Option<String>>,
    ) -> BrowseCatalogResponse {
        let query = ListingQuery {
            category: category.0,
            min_price: min_price.0,
            max_price: max_price.0,
            search: search.0,
            sort: sort.0,
        };
        let filter = match query.into_filter() {
            Ok(filter) => filter,
            Err(json) => return BrowseCatalogResponse::BadRequest(json),
        };

        match self.browse_use_case.execute(BrowseCatalogParams { filter }) {
            Ok(page) => BrowseCatalogResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => BrowseCatalogResponse::BadRequest(json),
                    _ => BrowseCatalogResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product
    #[oai(path = "/products/:key", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product(&self, key: Path<String>) -> GetProductResponse {
        let params = GetProductParams {
            key: ProductKey::new(key.0),
        };

        match self.get_product_use_case.execute(params) {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BrowseCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::{PriceBounds, ProductFilter};
use crate::domain::catalog::model::Product;

pub struct BrowseCatalogParams {
    pub filter: ProductFilter,
}

pub struct CatalogPage {
    pub products: Vec<Product>,
    /// Price span of the selected categories before the price range and search apply.
    pub price_bounds: Option<PriceBounds>,
}

pub trait BrowseCatalogUseCase: Send + Sync {
    fn execute(&self, params: BrowseCatalogParams) -> Result<CatalogPage, CatalogError>;
}

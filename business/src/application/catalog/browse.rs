use std::sync::Arc;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::filter::{PriceBounds, ProductFilter};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::browse::{
    BrowseCatalogParams, BrowseCatalogUseCase, CatalogPage,
};
use crate::domain::logger::Logger;

pub struct BrowseCatalogUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    fn execute(&self, params: BrowseCatalogParams) -> Result<CatalogPage, CatalogError> {
        let filter = params.filter;
        if let Some(range) = &filter.price_range
            && let (Some(min), Some(max)) = (&range.min, &range.max)
            && min > max
        {
            return Err(CatalogError::InvalidPriceRange);
        }

        let products = self.repository.all()?;

        let in_categories = ProductFilter {
            categories: filter.categories.clone(),
            ..Default::default()
        }
        .apply(products.clone());
        let price_bounds = PriceBounds::of(&in_categories);

        let products = filter.apply(products);
        self.logger.debug(&format!(
            "Catalog listing: {} products (sort {})",
            products.len(),
            filter.sort
        ));

        Ok(CatalogPage {
            products,
            price_bounds,
        })
    }
}

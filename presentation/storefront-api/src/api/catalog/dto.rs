use poem_openapi::{Object, payload::Json};

use business::domain::catalog::filter::{PriceBounds, PriceRange, ProductFilter, SortOrder};
use business::domain::catalog::model::{Category, Product};
use business::domain::catalog::use_cases::browse::CatalogPage;

use crate::api::error::ErrorResponse;
use crate::api::money::{format_amount, parse_amount};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product key, used by the cart endpoints
    pub key: String,
    pub title: String,
    pub description: String,
    /// Unit price in rupees, two decimals
    pub price: String,
    /// Image path served by the storefront UI
    pub image: String,
    /// fruits, vegetables or grains
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            key: product.key.to_string(),
            title: product.title,
            description: product.description,
            price: format_amount(&product.price),
            image: product.image_ref,
            category: product.category.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PriceBoundsResponse {
    pub min: String,
    pub max: String,
}

impl From<PriceBounds> for PriceBoundsResponse {
    fn from(bounds: PriceBounds) -> Self {
        Self {
            min: format_amount(&bounds.min),
            max: format_amount(&bounds.max),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CatalogPageResponse {
    pub products: Vec<ProductResponse>,
    /// Price span of the selected categories, for the price slider
    #[oai(skip_serializing_if_is_none)]
    pub price_bounds: Option<PriceBoundsResponse>,
}

impl From<CatalogPage> for CatalogPageResponse {
    fn from(page: CatalogPage) -> Self {
        Self {
            products: page.products.into_iter().map(Into::into).collect(),
            price_bounds: page.price_bounds.map(Into::into),
        }
    }
}

/// Raw query string of the listing endpoint.
#[derive(Debug, Default)]
pub struct ListingQuery {
    /// Comma-separated category names.
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ListingQuery {
    pub fn into_filter(self) -> Result<ProductFilter, Json<ErrorResponse>> {
        let categories = match self.category.as_deref() {
            None => Vec::new(),
            Some(raw) => raw
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(|name| name.parse::<Category>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| bad_query("catalog.invalid_category"))?,
        };

        let min = parse_price(self.min_price.as_deref())?;
        let max = parse_price(self.max_price.as_deref())?;
        let price_range = (min.is_some() || max.is_some()).then_some(PriceRange { min, max });

        let sort = self
            .sort
            .as_deref()
            .unwrap_or_default()
            .parse::<SortOrder>()
            .map_err(|_| bad_query("catalog.invalid_sort"))?;

        Ok(ProductFilter {
            categories,
            price_range,
            search: self.search.filter(|s| !s.trim().is_empty()),
            sort,
        })
    }
}

fn parse_price(raw: Option<&str>) -> Result<Option<bigdecimal::BigDecimal>, Json<ErrorResponse>> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_amount(raw)
            .map(Some)
            .ok_or_else(|| bad_query("catalog.invalid_price")),
    }
}

fn bad_query(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", message))
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::*;

    #[test]
    fn should_build_filter_from_query() {
        let filter = ListingQuery {
            category: Some("Vegetables,grains".to_string()),
            min_price: Some("50".to_string()),
            max_price: None,
            search: Some("  ".to_string()),
            sort: Some("price_desc".to_string()),
        }
        .into_filter()
        .unwrap();

        assert_eq!(filter.categories, vec![Category::Vegetables, Category::Grains]);
        assert_eq!(
            filter.price_range,
            Some(PriceRange {
                min: Some(BigDecimal::from(50)),
                max: None
            })
        );
        assert_eq!(filter.search, None);
        assert_eq!(filter.sort, SortOrder::PriceDesc);
    }

    #[test]
    fn should_default_to_everything_in_catalog_order() {
        let filter = ListingQuery::default().into_filter().unwrap();

        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn should_reject_unknown_category() {
        let err = ListingQuery {
            category: Some("dairy".to_string()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();

        assert_eq!(err.0.message, "catalog.invalid_category");
    }

    #[test]
    fn should_reject_non_numeric_price() {
        let err = ListingQuery {
            max_price: Some("lots".to_string()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();

        assert_eq!(err.0.message, "catalog.invalid_price");
    }

    #[test]
    fn should_render_prices_with_two_decimals() {
        let response = ProductResponse::from(Product {
            key: "Rice".into(),
            title: "Rice".to_string(),
            description: "Organic white rice".to_string(),
            price: BigDecimal::from(60),
            image_ref: "/assets/rice.webp".to_string(),
            category: Category::Grains,
        });

        assert_eq!(response.price, "60.00");
        assert_eq!(response.category, "grains");
    }
}

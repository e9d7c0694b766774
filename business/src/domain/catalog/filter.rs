use bigdecimal::BigDecimal;

use super::model::{Category, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Featured => write!(f, "featured"),
            SortOrder::PriceAsc => write!(f, "price_asc"),
            SortOrder::PriceDesc => write!(f, "price_desc"),
            SortOrder::NameAsc => write!(f, "name_asc"),
            SortOrder::NameDesc => write!(f, "name_desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" | "" => Ok(SortOrder::Featured),
            "price_asc" => Ok(SortOrder::PriceAsc),
            "price_desc" => Ok(SortOrder::PriceDesc),
            "name_asc" => Ok(SortOrder::NameAsc),
            "name_desc" => Ok(SortOrder::NameDesc),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// Inclusive price window.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRange {
    pub min: Option<BigDecimal>,
    pub max: Option<BigDecimal>,
}

impl PriceRange {
    pub fn contains(&self, price: &BigDecimal) -> bool {
        self.min.as_ref().is_none_or(|min| price >= min)
            && self.max.as_ref().is_none_or(|max| price <= max)
    }
}

/// Listing criteria for the product grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFilter {
    /// Empty means every category.
    pub categories: Vec<Category>,
    pub price_range: Option<PriceRange>,
    /// Case-insensitive match against title and description.
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category_match =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let price_match = self
            .price_range
            .as_ref()
            .is_none_or(|range| range.contains(&product.price));
        let search_match = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                product.title.to_lowercase().contains(&query)
                    || product.description.to_lowercase().contains(&query)
            }
        };

        category_match && price_match && search_match
    }

    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut listed: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        match self.sort {
            SortOrder::Featured => {}
            SortOrder::PriceAsc => listed.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceDesc => listed.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::NameAsc => listed.sort_by_cached_key(|p| p.title.to_lowercase()),
            SortOrder::NameDesc => {
                listed.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
            }
        }
        listed
    }
}

/// Cheapest and dearest price of a listing, used to seed the price slider.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBounds {
    pub min: BigDecimal,
    pub max: BigDecimal,
}

impl PriceBounds {
    pub fn of(products: &[Product]) -> Option<Self> {
        let min = products.iter().map(|p| &p.price).min()?;
        let max = products.iter().map(|p| &p.price).max()?;
        Some(Self {
            min: min.clone(),
            max: max.clone(),
        })
    }
}

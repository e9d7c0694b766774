use bigdecimal::BigDecimal;

use crate::domain::cart::model::CartProduct;
use crate::domain::shared::value_objects::ProductKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fruits,
    Vegetables,
    Grains,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Fruits, Category::Vegetables, Category::Grains];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Fruits => write!(f, "fruits"),
            Category::Vegetables => write!(f, "vegetables"),
            Category::Grains => write!(f, "grains"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fruits" => Ok(Category::Fruits),
            "vegetables" => Ok(Category::Vegetables),
            "grains" => Ok(Category::Grains),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub key: ProductKey,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub image_ref: String,
    pub category: Category,
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        CartProduct {
            product_key: product.key.clone(),
            title: product.title.clone(),
            unit_price: product.price.clone(),
            image_ref: Some(product.image_ref.clone()),
            description: Some(product.description.clone()),
        }
    }
}

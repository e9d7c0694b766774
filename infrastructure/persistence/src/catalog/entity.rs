use bigdecimal::BigDecimal;
use strum::{Display, EnumString};

use business::domain::catalog::model::{Category, Product};
use business::domain::shared::value_objects::ProductKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum CategoryEntity {
    Fruits,
    Vegetables,
    Grains,
}

impl From<CategoryEntity> for Category {
    fn from(entity: CategoryEntity) -> Self {
        match entity {
            CategoryEntity::Fruits => Category::Fruits,
            CategoryEntity::Vegetables => Category::Vegetables,
            CategoryEntity::Grains => Category::Grains,
        }
    }
}

/// One row of the seeded catalog. Prices are whole rupees.
#[derive(Debug, Clone)]
pub struct ProductEntity {
    pub title: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub image: &'static str,
    pub category: CategoryEntity,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            key: ProductKey::new(self.title),
            title: self.title.to_string(),
            description: self.description.to_string(),
            price: BigDecimal::from(self.price),
            image_ref: self.image.to_string(),
            category: self.category.into(),
        }
    }
}

pub const SEED: [ProductEntity; 6] = [
    ProductEntity {
        title: "Guava",
        description: "Enjoy the crisp texture and subtly sweet flavor of our farm-fresh guavas.",
        price: 100,
        image: "/assets/guava.webp",
        category: CategoryEntity::Fruits,
    },
    ProductEntity {
        title: "Sugarcane",
        description: "Fresh, high-quality sugarcane straight from the farm.",
        price: 200,
        image: "/assets/sugarcane.webp",
        category: CategoryEntity::Grains,
    },
    ProductEntity {
        title: "Carrot",
        description: "A crunchy, sweet root vegetable rich in vitamin A.",
        price: 100,
        image: "/assets/carrot.webp",
        category: CategoryEntity::Vegetables,
    },
    ProductEntity {
        title: "Cauliflower",
        description: "Fresh cauliflower perfect for curries and stir-fry dishes.",
        price: 80,
        image: "/assets/cauliflower.webp",
        category: CategoryEntity::Vegetables,
    },
    ProductEntity {
        title: "Rice",
        description: "Organic white rice straight from the paddy fields.",
        price: 60,
        image: "/assets/rice.webp",
        category: CategoryEntity::Grains,
    },
    ProductEntity {
        title: "Onion",
        description: "Red onions with great flavor, harvested locally.",
        price: 90,
        image: "/assets/onion.webp",
        category: CategoryEntity::Vegetables,
    },
];

use std::sync::Arc;

use super::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartProduct, CartSummary};
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub session: Arc<CartSession>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    fn execute(&self, params: AddCartItemParams) -> Result<CartSummary, CartError> {
        if params.product_key.is_blank() {
            return Err(CartError::ProductKeyEmpty);
        }
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let product = self
            .catalog
            .find(&params.product_key)?
            .ok_or(CartError::ProductNotFound)?;

        let (_, summary) = self
            .session
            .mutate(|ledger| ledger.add_item(CartProduct::from(&product), params.quantity));

        self.logger.info(&format!(
            "Added {} x {} to cart ({} units total)",
            params.quantity, product.key, summary.item_count
        ));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::application::cart::session::tests::{RecordingStore, mock_logger, session_over};
    use crate::domain::catalog::model::{Category, Product};
    use crate::domain::errors::StorageError;
    use crate::domain::shared::value_objects::ProductKey;

    mock! {
        pub CatalogRepo {}

        impl CatalogRepository for CatalogRepo {
            fn all(&self) -> Result<Vec<Product>, StorageError>;
            fn find(&self, key: &ProductKey) -> Result<Option<Product>, StorageError>;
        }
    }

    fn catalog_with_guava() -> Arc<dyn CatalogRepository> {
        let mut repo = MockCatalogRepo::new();
        repo.expect_find().returning(|key| {
            Ok((key.as_str() == "Guava").then(|| Product {
                key: key.clone(),
                title: "Guava".to_string(),
                description: "Subtly sweet guavas".to_string(),
                price: BigDecimal::from(100),
                image_ref: "guava.webp".to_string(),
                category: Category::Fruits,
            }))
        });
        Arc::new(repo)
    }

    fn use_case() -> AddCartItemUseCaseImpl {
        AddCartItemUseCaseImpl {
            session: Arc::new(session_over(Arc::new(RecordingStore::default()))),
            catalog: catalog_with_guava(),
            logger: mock_logger(),
        }
    }

    #[test]
    fn should_merge_two_default_adds_into_one_line() {
        let use_case = use_case();
        let params = || AddCartItemParams {
            product_key: ProductKey::new("Guava"),
            quantity: 1,
        };

        use_case.execute(params()).unwrap();
        let summary = use_case.execute(params()).unwrap();

        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.items[0].quantity, 2);
        assert_eq!(summary.items[0].image_ref.as_deref(), Some("guava.webp"));
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = use_case().execute(AddCartItemParams {
            product_key: ProductKey::new("Guava"),
            quantity: 0,
        });

        assert!(matches!(result, Err(CartError::InvalidQuantity)));
    }

    #[test]
    fn should_reject_unknown_product() {
        let result = use_case().execute(AddCartItemParams {
            product_key: ProductKey::new("Mango"),
            quantity: 1,
        });

        assert!(matches!(result, Err(CartError::ProductNotFound)));
    }

    #[test]
    fn should_reject_blank_key() {
        let result = use_case().execute(AddCartItemParams {
            product_key: ProductKey::new("  "),
            quantity: 1,
        });

        assert!(matches!(result, Err(CartError::ProductKeyEmpty)));
    }
}

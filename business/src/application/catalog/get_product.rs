use std::sync::Arc;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_product::{GetProductParams, GetProductUseCase};
use crate::domain::logger::Logger;

pub struct GetProductUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetProductUseCase for GetProductUseCaseImpl {
    fn execute(&self, params: GetProductParams) -> Result<Product, CatalogError> {
        self.repository.find(&params.key)?.ok_or_else(|| {
            self.logger
                .debug(&format!("Product {} not in catalog", params.key));
            CatalogError::ProductNotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::catalog::model::Category;
    use crate::domain::errors::StorageError;
    use crate::domain::shared::value_objects::ProductKey;

    mock! {
        pub CatalogRepo {}

        impl CatalogRepository for CatalogRepo {
            fn all(&self) -> Result<Vec<Product>, StorageError>;
            fn find(&self, key: &ProductKey) -> Result<Option<Product>, StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[test]
    fn should_return_product_when_found() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_find()
            .with(eq(ProductKey::new("Rice")))
            .returning(|key| {
                Ok(Some(Product {
                    key: key.clone(),
                    title: "Rice".to_string(),
                    description: "Organic white rice".to_string(),
                    price: BigDecimal::from(60),
                    image_ref: "rice.webp".to_string(),
                    category: Category::Grains,
                }))
            });

        let use_case = GetProductUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductParams {
                key: ProductKey::new("Rice"),
            })
            .unwrap();

        assert_eq!(product.price, BigDecimal::from(60));
    }

    #[test]
    fn should_fail_when_product_missing() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_find().returning(|_| Ok(None));

        let use_case = GetProductUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductParams {
            key: ProductKey::new("Mango"),
        });

        assert!(matches!(result, Err(CatalogError::ProductNotFound)));
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::products::adapters::outbound::repository::ProductRepository;
use crate::modules::products::core::product::{Product, ProductEntity};
use crate::shared::application::store_applier::EventTarget;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::health::{ComponentHealth, HealthProbe};

pub struct ProductService<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    service_address: String,
    repository: Arc<TRepository>,
}

impl<TRepository> ProductService<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(service_address: impl Into<String>, repository: Arc<TRepository>) -> Self {
        Self {
            service_address: service_address.into(),
            repository,
        }
    }

    pub async fn get_product(&self, product_id: i32) -> Result<Product, ServiceError> {
        if product_id < 1 {
            return Err(ServiceError::InvalidInput(format!(
                "Invalid productId: {product_id}"
            )));
        }
        tracing::debug!(product_id, "get product");

        let entity = self
            .repository
            .find_by_product_id(product_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("No product found for productId: {product_id}"))
            })?;

        let mut product = Product::from(entity);
        product.service_address = Some(self.service_address.clone());
        Ok(product)
    }

    pub async fn create_product(&self, product: Product) -> Result<Product, ServiceError> {
        if product.product_id < 1 {
            return Err(ServiceError::InvalidInput(format!(
                "Invalid productId: {}",
                product.product_id
            )));
        }

        let saved = self.repository.save(ProductEntity::from(product)).await?;
        tracing::debug!(product_id = saved.product_id, version = saved.version, "created product");
        Ok(Product::from(saved))
    }

    pub async fn delete_product(&self, product_id: i32) -> Result<(), ServiceError> {
        tracing::debug!(product_id, "delete product");
        Ok(self.repository.delete_by_product_id(product_id).await?)
    }
}

#[async_trait]
impl<TRepository> EventTarget<i32, Product> for ProductService<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    async fn create(&self, data: Product) -> Result<(), ServiceError> {
        self.create_product(data).await.map(|_| ())
    }

    async fn delete(&self, key: i32) -> Result<(), ServiceError> {
        self.delete_product(key).await
    }
}

#[async_trait]
impl<TRepository> HealthProbe for ProductService<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    fn name(&self) -> &str {
        "product"
    }

    async fn check(&self) -> ComponentHealth {
        match self.repository.ping().await {
            Ok(()) => ComponentHealth::up(),
            Err(error) => ComponentHealth::down(error.to_string()),
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product as exchanged with other services and carried in product events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_address: Option<String>,
}

/// Stored form. `id` and `version` are assigned by the repository on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEntity {
    pub id: Option<Uuid>,
    pub version: i32,
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
}

impl From<Product> for ProductEntity {
    fn from(product: Product) -> Self {
        Self {
            id: None,
            version: 0,
            product_id: product.product_id,
            name: product.name,
            weight: product.weight,
        }
    }
}

impl From<ProductEntity> for Product {
    fn from(entity: ProductEntity) -> Self {
        Self {
            product_id: entity.product_id,
            name: entity.name,
            weight: entity.weight,
            service_address: None,
        }
    }
}

use std::sync::Arc;

use crate::modules::product_composite::use_cases::create_product_aggregate::handler::CreateProductAggregateHandler;
use crate::modules::product_composite::use_cases::delete_product_aggregate::handler::DeleteProductAggregateHandler;
use crate::modules::product_composite::use_cases::get_product_aggregate::handler::GetProductAggregateHandler;
use crate::shared::infrastructure::health::HealthMonitor;

#[derive(Clone)]
pub struct AppState {
    pub get_handler: Arc<GetProductAggregateHandler>,
    pub create_handler: Arc<CreateProductAggregateHandler>,
    pub delete_handler: Arc<DeleteProductAggregateHandler>,
    pub health: HealthMonitor,
}

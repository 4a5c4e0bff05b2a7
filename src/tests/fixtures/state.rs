// Application state over stub readers and in-memory channels whose
// receiving ends stay with the test.

use std::sync::Arc;
use std::time::Duration;

use crate::modules::product_composite::adapters::outbound::event_publisher::EventPublisher;
use crate::modules::product_composite::use_cases::create_product_aggregate::handler::CreateProductAggregateHandler;
use crate::modules::product_composite::use_cases::delete_product_aggregate::handler::DeleteProductAggregateHandler;
use crate::modules::product_composite::use_cases::get_product_aggregate::handler::GetProductAggregateHandler;
use crate::modules::products::core::product::Product;
use crate::modules::recommendations::core::recommendation::Recommendation;
use crate::modules::reviews::core::review::Review;
use crate::shared::infrastructure::event_channel::in_memory::{
    InMemoryEventReceiver, in_memory_channel,
};
use crate::shared::infrastructure::health::HealthMonitor;
use crate::shell::state::AppState;
use crate::tests::fixtures::readers::StubReaders;

pub struct Receivers {
    pub products: InMemoryEventReceiver<i32, Product>,
    pub recommendations: InMemoryEventReceiver<i32, Recommendation>,
    pub reviews: InMemoryEventReceiver<i32, Review>,
}

pub fn make_publisher() -> (EventPublisher, Receivers) {
    let (products, products_rx) = in_memory_channel::<i32, Product>("products");
    let (recommendations, recommendations_rx) =
        in_memory_channel::<i32, Recommendation>("recommendations");
    let (reviews, reviews_rx) = in_memory_channel::<i32, Review>("reviews");
    (
        EventPublisher::new(Arc::new(products), Arc::new(recommendations), Arc::new(reviews)),
        Receivers {
            products: products_rx,
            recommendations: recommendations_rx,
            reviews: reviews_rx,
        },
    )
}

pub fn make_test_state(readers: StubReaders) -> (AppState, Receivers) {
    let (publisher, receivers) = make_publisher();
    let publisher = Arc::new(publisher);
    let readers = Arc::new(readers);
    let state = AppState {
        get_handler: Arc::new(GetProductAggregateHandler::new(
            "composite-host",
            readers.clone(),
            readers.clone(),
            readers,
            Duration::from_secs(3),
        )),
        create_handler: Arc::new(CreateProductAggregateHandler::new(publisher.clone())),
        delete_handler: Arc::new(DeleteProductAggregateHandler::new(publisher)),
        health: HealthMonitor::new(),
    };
    (state, receivers)
}

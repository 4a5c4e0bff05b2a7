// Composition root.
//
// Responsibilities
// - Instantiate the stores, their channels and appliers when this instance hosts them.
// - Pick in-process or HTTP readers and channels for the composite.
// - Wire everything into the use case handlers and the health monitor.
// - Spawn one consumer per hosted store channel.

use std::sync::Arc;

use axum::Router;
use tokio::task::JoinHandle;

use crate::modules::product_composite::adapters::outbound::core_services::{
    ProductReader, RecommendationReader, ReviewReader,
};
use crate::modules::product_composite::adapters::outbound::core_services_http::HttpCoreServices;
use crate::modules::product_composite::adapters::outbound::core_services_in_process::{
    InProcessProductReader, InProcessRecommendationReader, InProcessReviewReader,
};
use crate::modules::product_composite::adapters::outbound::event_publisher::EventPublisher;
use crate::modules::product_composite::use_cases::create_product_aggregate::handler::CreateProductAggregateHandler;
use crate::modules::product_composite::use_cases::delete_product_aggregate::handler::DeleteProductAggregateHandler;
use crate::modules::product_composite::use_cases::get_product_aggregate::handler::GetProductAggregateHandler;
use crate::modules::products::adapters::inbound::http as product_http;
use crate::modules::products::adapters::outbound::repository_in_memory::InMemoryProductRepository;
use crate::modules::products::core::product::Product;
use crate::modules::products::use_cases::product_service::ProductService;
use crate::modules::recommendations::adapters::inbound::http as recommendation_http;
use crate::modules::recommendations::adapters::outbound::repository_in_memory::InMemoryRecommendationRepository;
use crate::modules::recommendations::core::recommendation::Recommendation;
use crate::modules::recommendations::use_cases::recommendation_service::RecommendationService;
use crate::modules::reviews::adapters::inbound::http as review_http;
use crate::modules::reviews::adapters::outbound::repository_in_memory::InMemoryReviewRepository;
use crate::modules::reviews::core::review::Review;
use crate::modules::reviews::use_cases::review_service::ReviewService;
use crate::shared::application::store_applier::StoreApplier;
use crate::shared::infrastructure::event_channel::EventChannel;
use crate::shared::infrastructure::event_channel::http::{HttpEventChannel, event_router};
use crate::shared::infrastructure::event_channel::in_memory::in_memory_channel;
use crate::shared::infrastructure::health::{HealthMonitor, HttpHealthProbe};
use crate::shell::config::{AppConfig, DownstreamMode};
use crate::shell::state::AppState;
use crate::shell::workers::spawn_store_consumer;

pub const PRODUCT_CHANNEL: &str = "product";
pub const RECOMMENDATION_CHANNEL: &str = "recommendation";
pub const REVIEW_CHANNEL: &str = "review";

pub struct Application {
    pub state: AppState,
    /// Store and event routes of the stores this instance hosts.
    pub stores: Router,
    pub workers: Vec<JoinHandle<()>>,
}

/// Must run inside a Tokio runtime; hosted store consumers are spawned here.
pub fn compose(config: &AppConfig) -> Result<Application, reqwest::Error> {
    match config.downstream.mode {
        DownstreamMode::InProcess => Ok(compose_in_process(config)),
        DownstreamMode::Http => compose_http(config),
    }
}

fn compose_in_process(config: &AppConfig) -> Application {
    let service_address = config.server.service_address();

    let products = Arc::new(ProductService::new(
        service_address.clone(),
        Arc::new(InMemoryProductRepository::new()),
    ));
    let recommendations = Arc::new(RecommendationService::new(
        service_address.clone(),
        Arc::new(InMemoryRecommendationRepository::new()),
    ));
    let reviews = Arc::new(ReviewService::new(
        service_address.clone(),
        Arc::new(InMemoryReviewRepository::new()),
    ));

    let (product_channel, product_rx) = in_memory_channel::<i32, Product>(PRODUCT_CHANNEL);
    let (recommendation_channel, recommendation_rx) =
        in_memory_channel::<i32, Recommendation>(RECOMMENDATION_CHANNEL);
    let (review_channel, review_rx) = in_memory_channel::<i32, Review>(REVIEW_CHANNEL);
    let product_channel: Arc<dyn EventChannel<i32, Product>> = Arc::new(product_channel);
    let recommendation_channel: Arc<dyn EventChannel<i32, Recommendation>> =
        Arc::new(recommendation_channel);
    let review_channel: Arc<dyn EventChannel<i32, Review>> = Arc::new(review_channel);

    let workers = vec![
        spawn_store_consumer(
            product_rx,
            Arc::new(StoreApplier::<i32, Product>::new(PRODUCT_CHANNEL, products.clone())),
        ),
        spawn_store_consumer(
            recommendation_rx,
            Arc::new(StoreApplier::<i32, Recommendation>::new(
                RECOMMENDATION_CHANNEL,
                recommendations.clone(),
            )),
        ),
        spawn_store_consumer(
            review_rx,
            Arc::new(StoreApplier::<i32, Review>::new(REVIEW_CHANNEL, reviews.clone())),
        ),
    ];

    let stores = product_http::router(products.clone())
        .merge(recommendation_http::router(recommendations.clone()))
        .merge(review_http::router(reviews.clone()))
        .merge(event_router(PRODUCT_CHANNEL, product_channel.clone()))
        .merge(event_router(RECOMMENDATION_CHANNEL, recommendation_channel.clone()))
        .merge(event_router(REVIEW_CHANNEL, review_channel.clone()));

    let health = HealthMonitor::new()
        .with_probe(products.clone())
        .with_probe(recommendations.clone())
        .with_probe(reviews.clone());

    let state = wire(
        config,
        Arc::new(InProcessProductReader::new(products)),
        Arc::new(InProcessRecommendationReader::new(recommendations)),
        Arc::new(InProcessReviewReader::new(reviews)),
        EventPublisher::new(product_channel, recommendation_channel, review_channel),
        health,
    );

    Application {
        state,
        stores,
        workers,
    }
}

fn compose_http(config: &AppConfig) -> Result<Application, reqwest::Error> {
    let downstream = &config.downstream;
    let client = reqwest::Client::builder()
        .timeout(downstream.read_timeout())
        .build()?;

    let readers = Arc::new(HttpCoreServices::new(
        client.clone(),
        &downstream.product_url,
        &downstream.recommendation_url,
        &downstream.review_url,
    ));
    let publisher = EventPublisher::new(
        Arc::new(HttpEventChannel::<i32, Product>::new(
            PRODUCT_CHANNEL,
            &downstream.product_url,
            client.clone(),
        )),
        Arc::new(HttpEventChannel::<i32, Recommendation>::new(
            RECOMMENDATION_CHANNEL,
            &downstream.recommendation_url,
            client.clone(),
        )),
        Arc::new(HttpEventChannel::<i32, Review>::new(
            REVIEW_CHANNEL,
            &downstream.review_url,
            client.clone(),
        )),
    );
    let health = HealthMonitor::new()
        .with_probe(Arc::new(HttpHealthProbe::new(
            "product",
            &downstream.product_url,
            client.clone(),
        )))
        .with_probe(Arc::new(HttpHealthProbe::new(
            "recommendation",
            &downstream.recommendation_url,
            client.clone(),
        )))
        .with_probe(Arc::new(HttpHealthProbe::new(
            "review",
            &downstream.review_url,
            client,
        )));

    let state = wire(
        config,
        readers.clone(),
        readers.clone(),
        readers,
        publisher,
        health,
    );

    Ok(Application {
        state,
        stores: Router::new(),
        workers: Vec::new(),
    })
}

fn wire(
    config: &AppConfig,
    products: Arc<dyn ProductReader>,
    recommendations: Arc<dyn RecommendationReader>,
    reviews: Arc<dyn ReviewReader>,
    publisher: EventPublisher,
    health: HealthMonitor,
) -> AppState {
    let publisher = Arc::new(publisher);
    AppState {
        get_handler: Arc::new(GetProductAggregateHandler::new(
            config.server.service_address(),
            products,
            recommendations,
            reviews,
            config.downstream.read_timeout(),
        )),
        create_handler: Arc::new(CreateProductAggregateHandler::new(publisher.clone())),
        delete_handler: Arc::new(DeleteProductAggregateHandler::new(publisher)),
        health,
    }
}

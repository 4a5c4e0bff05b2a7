// Composition root and runtime edge of the product composite.

pub mod composition;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;

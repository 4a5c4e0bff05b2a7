use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::product_composite::use_cases::create_product_aggregate::inbound::graphql::CreateProductAggregateMutation;
use crate::modules::product_composite::use_cases::delete_product_aggregate::inbound::graphql::DeleteProductAggregateMutation;
pub use crate::modules::product_composite::use_cases::get_product_aggregate::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateProductAggregateMutation, DeleteProductAggregateMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

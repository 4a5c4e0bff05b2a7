use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::product_composite::adapters::inbound::graphql::{
    GqlProductAggregate, ProductAggregateInput, publish_error,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateProductAggregateMutation;

#[Object]
impl CreateProductAggregateMutation {
    async fn create_product_composite(
        &self,
        context: &Context<'_>,
        input: ProductAggregateInput,
    ) -> GqlResult<GqlProductAggregate> {
        let state = context.data_unchecked::<AppState>();
        let accepted = state
            .create_handler
            .handle(input.into())
            .await
            .map_err(publish_error)?;
        Ok(accepted.into())
    }
}

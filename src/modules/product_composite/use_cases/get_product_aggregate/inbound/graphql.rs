use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::product_composite::adapters::inbound::graphql::{
    GqlProductAggregate, downstream_error,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn product_composite(
        &self,
        context: &Context<'_>,
        product_id: i32,
    ) -> GqlResult<GqlProductAggregate> {
        let state = context.data_unchecked::<AppState>();
        let aggregate = state
            .get_handler
            .handle(product_id)
            .await
            .map_err(downstream_error)?;
        Ok(aggregate.into())
    }
}

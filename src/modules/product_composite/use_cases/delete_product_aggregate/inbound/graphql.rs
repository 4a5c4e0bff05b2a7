use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::product_composite::adapters::inbound::graphql::publish_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteProductAggregateMutation;

#[Object]
impl DeleteProductAggregateMutation {
    async fn delete_product_composite(
        &self,
        context: &Context<'_>,
        product_id: i32,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(product_id)
            .await
            .map_err(publish_error)?;
        Ok(true)
    }
}

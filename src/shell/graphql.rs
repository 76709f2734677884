use async_graphql::{EmptyMutation, EmptySubscription, Schema};

pub use crate::modules::search::use_cases::search_items::inbound::graphql::QueryRoot;
use crate::shell::state::SearchAppState;

pub type SearchSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(state: SearchAppState) -> SearchSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}

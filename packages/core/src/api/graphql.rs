use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};

use super::ApiState;

/// `POST /graphql`: execute one GraphQL operation.
pub async fn graphql_handler(State(state): State<ApiState>, req: GraphQLRequest) -> GraphQLResponse {
    state.metrics.graphql_requests_total.inc();
    state.schema.execute(req.into_inner()).await.into()
}

/// `GET /graphql`: GraphiQL IDE wired to the same endpoint.
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

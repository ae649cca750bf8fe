use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use fuel_insights::shared::core::clock::SystemClock;
use fuel_insights::shell::config::AppConfig;
use fuel_insights::shell::graphql::{AppSchema, build_schema};
use fuel_insights::shell::http::router;
use fuel_insights::shell::state::{AppState, FuelLogStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory log store for now
    let store = Arc::new(FuelLogStore::new());
    let state = AppState::new(store, Arc::new(SystemClock), config.window);
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}

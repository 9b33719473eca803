mod handlers;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::server::handlers::places;
use crate::{api::API, auth::User};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/places", post(places::create))
        .route(
            "/places/:id",
            get(places::find)
                .patch(places::update)
                .delete(places::remove),
        )
        .route("/users/:user_id/places", get(places::find_by_user))
        .layer(Extension(api))
        // stand-in for the auth middleware, which attaches the caller
        .layer(Extension(User::new_system_user()));

    let addr = env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

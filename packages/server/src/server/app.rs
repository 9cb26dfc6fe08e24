//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    add_doctor, admin_status, availability, health_handler, list_doctors, list_patient_bookings,
    list_services, list_users, promote_user, remove_doctor, root_handler, submit_booking,
    upsert_user,
};

/// Build the Axum application router
///
/// Public reads (catalog, availability, greeting, health) carry no guard;
/// everything identity- or role-gated checks its guard at the top of the
/// handler. Dependencies ride along as an `Extension`.
pub fn build_app(deps: ServerDeps) -> Router {
    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/service", get(list_services))
        .route("/available", get(availability))
        .route("/booking", post(submit_booking).get(list_patient_bookings))
        .route("/admin/:email", get(admin_status))
        .route("/user", get(list_users))
        .route("/user/:email", put(upsert_user))
        .route("/user/admin/:email", put(promote_user))
        .route("/doctor", get(list_doctors).post(add_doctor))
        .route("/doctor/:email", delete(remove_doctor))
        .layer(Extension(deps))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

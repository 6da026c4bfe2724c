pub mod routes;
pub mod store;
pub mod queries;
pub mod session;
pub mod rate_limiter;
pub mod config;
pub mod cors;
pub mod error;
pub mod utils;
pub mod catchers;
pub use shared::{models::*, error::ErrorResponse};

use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{bad_request, internal_error, not_found, too_many_requests, unauthorized, unprocessable},
    cors::CORS,
    routes::{
        all_options, create_competitor, delete_competitor, increment_vote, issue_session,
        list_competitors, AppState,
    },
};

/// API server without the static frontend, mounted under `/api`.
pub fn build_rocket(state: AppState, cors: CORS) -> Rocket<Build> {
    rocket::build()
        .attach(cors)
        .manage(state)
        .mount(
            "/api",
            routes![
                issue_session,
                list_competitors,
                create_competitor,
                increment_vote,
                delete_competitor,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                unauthorized,
                bad_request,
                unprocessable,
                too_many_requests,
                internal_error,
                not_found
            ],
        )
}

#[cfg(test)]
mod tests;

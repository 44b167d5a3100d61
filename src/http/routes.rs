use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post},
};

use crate::{
    http::handlers::{
        admin_access_handler, create_period_handler, create_profile_handler,
        delete_period_handler, delete_user_ratings_handler, feedback_access_handler,
        get_period_handler, get_profile_handler, get_profiles_handler, get_questionnaire_handler,
        get_ratings_handler, get_results_handler, get_user_ratings_handler, sign_in_handler,
        sign_up_handler, stats_handler, submit_rating_handler, update_period_handler,
        update_role_handler,
    },
    middleware::{create_auth_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();

    let auth_routes = Router::new()
        .route("/signup", post(sign_up_handler))
        .route("/signin", post(sign_in_handler))
        .route("/admin", post(admin_access_handler))
        .route("/feedback", post(feedback_access_handler))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    let admin_routes = Router::new()
        .route(
            "/period",
            get(get_period_handler)
                .post(create_period_handler)
                .patch(update_period_handler)
                .delete(delete_period_handler),
        )
        .route("/role", patch(update_role_handler))
        .route("/stats", get(stats_handler))
        .route(
            "/ratings",
            get(get_user_ratings_handler).delete(delete_user_ratings_handler),
        );

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/admin", admin_routes)
        .route(
            "/api/profiles",
            get(get_profiles_handler).post(create_profile_handler),
        )
        .route("/api/profiles/{id}", get(get_profile_handler))
        .route(
            "/api/ratings/{id}",
            get(get_ratings_handler).post(submit_rating_handler),
        )
        .route("/api/results", get(get_results_handler))
        .route("/api/questionnaire", get(get_questionnaire_handler))
        .with_state(state)
}

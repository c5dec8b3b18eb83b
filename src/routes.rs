// src/routes.rs

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, exam, knowledge, questions},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, questions, modules, knowledge, exam).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, config, blueprint).
pub fn create_router(state: AppState) -> Router {
    // Vite dev server origins of the web client
    let origins = [
        "http://localhost:5173".parse().unwrap(),
        "http://127.0.0.1:5173".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        // Protected profile route
        .merge(
            Router::new()
                .route("/me", get(auth::me))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    let question_routes = Router::new().route("/", get(questions::list_practice_questions));

    let module_routes = Router::new()
        .route("/", get(questions::list_modules))
        .route("/{id}", get(questions::get_module));

    let knowledge_routes = Router::new()
        .route("/categories", get(knowledge::list_categories))
        .route("/categories/{id}/cards", get(knowledge::list_cards))
        .route("/categories/{id}/table", get(knowledge::get_table));

    let exam_routes = Router::new().route("/generate", get(exam::generate_paper));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/questions", question_routes)
        .nest("/api/modules", module_routes)
        .nest("/api/knowledge", knowledge_routes)
        .nest("/api/exam", exam_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

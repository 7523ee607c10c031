use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::auth::TokenService;
use crate::error::{not_found, panic_response};
use crate::handlers::{protected, public};
use crate::middleware::require_auth;
use crate::state::AppState;

/// The full application: public routes, token-gated catalog routes, and the
/// error boundary around both.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .merge(public_routes())
        .merge(protected_routes(&state.tokens))
        .with_state(state);

    error_boundary(router)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", open(get(public::health)))
        .route("/signin", open(post(public::signin)))
        .route("/users", open(post(public::create_user)))
}

fn protected_routes(tokens: &TokenService) -> Router<AppState> {
    Router::new()
        .route("/categories", guarded(get(protected::list_categories), tokens))
        .route(
            "/dinos",
            guarded(get(protected::list_dinos).post(protected::create_dino), tokens),
        )
        .route(
            "/dinos/:id",
            guarded(
                get(protected::get_dino)
                    .put(protected::update_dino)
                    .delete(protected::delete_dino),
                tokens,
            ),
        )
}

/// Unsupported methods on a known path fall through to the 404 handler.
pub fn open<S>(route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.fallback(not_found)
}

/// Require a valid session token for every method `route` serves.
///
/// `route_layer` keeps the gate off the method fallback, so an unsupported
/// method is still a plain 404 rather than a 401.
pub fn guarded<S>(route: MethodRouter<S>, tokens: &TokenService) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    open(route.route_layer(from_fn_with_state(tokens.clone(), require_auth)))
}

/// Terminal error handling shared by every router this crate builds.
///
/// Unmatched paths get the 404 fallback and never reach the panic catcher.
/// Handler panics become the generic 500.
pub fn error_boundary(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

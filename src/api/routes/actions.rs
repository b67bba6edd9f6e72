//! This module defines the HTTP routes of the actions.
//!
//! * `GET /api/actions/{action}` - action descriptor
//! * `POST /api/actions/{action}` - build the action's transaction
//! * `OPTIONS /api/actions/{action}` - CORS preflight
//! * `GET /actions.json` - actions rules manifest
use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    get,
    http::Method,
    web, HttpRequest, HttpResponse,
};

use crate::{
    api::controllers::actions,
    constants::ACTIONS_PATH_PREFIX,
    models::{ActionError, ActionPostRequest, AppState, BuildQuery},
    services::SolanaProviderTrait,
};

/// Returns the descriptor of an action.
async fn get_action<P: SolanaProviderTrait + 'static>(
    action: web::Path<String>,
    req: HttpRequest,
    data: web::Data<AppState<P>>,
) -> Result<HttpResponse, ActionError> {
    let strategy = actions::parse_strategy(&action)?;
    actions::describe_action(strategy, &request_base_url(&req), &data)
}

/// Builds an action's transaction for the posted account.
async fn post_action<P: SolanaProviderTrait + 'static>(
    action: web::Path<String>,
    query: web::Query<BuildQuery>,
    body: web::Json<ActionPostRequest>,
    data: web::Data<AppState<P>>,
) -> Result<HttpResponse, ActionError> {
    let strategy = actions::parse_strategy(&action)?;
    actions::build_action(strategy, body.into_inner(), query.into_inner(), &data).await
}

async fn preflight<P: SolanaProviderTrait + 'static>(
    data: web::Data<AppState<P>>,
) -> HttpResponse {
    data.cors.preflight()
}

#[get("/actions.json")]
async fn actions_manifest() -> HttpResponse {
    actions::actions_manifest()
}

/// Scheme, host and path the request was made to.
fn request_base_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), req.path())
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ActionError::InvalidRequestBody(err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ActionError::InvalidParameters(err.to_string()).into()
}

/// Initializes the routes for the action endpoints.
pub fn init<P: SolanaProviderTrait + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .service(
        web::resource(format!("{ACTIONS_PATH_PREFIX}/{{action}}"))
            .route(web::get().to(get_action::<P>))
            .route(web::post().to(post_action::<P>))
            .route(web::method(Method::OPTIONS).to(preflight::<P>)),
    )
    .service(actions_manifest);
}

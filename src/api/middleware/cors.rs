//! CORS headers expected by action-rendering clients.
//!
//! Every response carries the same permissive header set. When a whitelisted
//! origin is configured, preflight responses name that origin explicitly and
//! grant it a wider set of methods and headers.
use actix_web::{
    http::header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        ACCESS_CONTROL_EXPOSE_HEADERS,
    },
    middleware::DefaultHeaders,
    HttpResponse,
};

use crate::constants::{
    ACTIONS_ALLOWED_HEADERS, ACTIONS_ALLOWED_METHODS, ACTIONS_ALLOWED_ORIGIN,
    ACTIONS_EXPOSED_HEADERS, ACTION_VERSION, HEADER_ACTION_VERSION, HEADER_BLOCKCHAIN_IDS,
    SOLANA_MAINNET_BLOCKCHAIN_ID, WHITELIST_ALLOWED_HEADERS, WHITELIST_ALLOWED_METHODS,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsPolicy {
    whitelisted_origin: Option<String>,
}

impl CorsPolicy {
    pub fn new(whitelisted_origin: Option<String>) -> Self {
        Self { whitelisted_origin }
    }

    /// Header set added to every response that does not already set it.
    pub fn default_headers() -> DefaultHeaders {
        DefaultHeaders::new()
            .add((ACCESS_CONTROL_ALLOW_ORIGIN, ACTIONS_ALLOWED_ORIGIN))
            .add((ACCESS_CONTROL_ALLOW_METHODS, ACTIONS_ALLOWED_METHODS))
            .add((ACCESS_CONTROL_ALLOW_HEADERS, ACTIONS_ALLOWED_HEADERS))
            .add((ACCESS_CONTROL_EXPOSE_HEADERS, ACTIONS_EXPOSED_HEADERS))
            .add((HEADER_ACTION_VERSION, ACTION_VERSION))
            .add((HEADER_BLOCKCHAIN_IDS, SOLANA_MAINNET_BLOCKCHAIN_ID))
    }

    /// Response to an `OPTIONS` preflight request.
    pub fn preflight(&self) -> HttpResponse {
        let mut response = HttpResponse::Ok();
        if let Some(origin) = &self.whitelisted_origin {
            response
                .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, origin.as_str()))
                .insert_header((ACCESS_CONTROL_ALLOW_METHODS, WHITELIST_ALLOWED_METHODS))
                .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, WHITELIST_ALLOWED_HEADERS));
        }
        response.finish()
    }
}

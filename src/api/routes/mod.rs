//! # API Routes Module
//!
//! Configures HTTP routes for the action server.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/api/actions/{action}` - Action descriptors and transaction builds
//! * `/actions.json` - Actions rules manifest

pub mod actions;
pub mod health;

use actix_web::web;

use crate::services::SolanaProviderTrait;

pub fn configure_routes<P: SolanaProviderTrait + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init).configure(actions::init::<P>);
}

//! # API Module
//!
//! Contains the HTTP API of the action server.
//!
//! ## Structure
//!
//! * `controllers` - Request handling
//! * `routes` - API endpoint definitions and routing
//! * `middleware` - CORS header handling

pub mod controllers;

pub mod middleware;

pub mod routes;

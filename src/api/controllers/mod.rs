//! # API Controllers Module
//!
//! Handles HTTP endpoints for the action server API.

pub mod actions;

pub mod cors;

pub use cors::CorsPolicy;

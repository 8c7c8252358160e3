// Middleware: CORS

pub mod cors;

pub use cors::*;

pub mod file_handlers;
pub mod health_handlers;

pub use file_handlers::*;
pub use health_handlers::*;

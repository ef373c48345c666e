pub mod handler;
pub mod types;

pub use handler::{configure_routes, EnvApiDoc};
pub use types::*;

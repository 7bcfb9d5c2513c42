//! Web layer for the charger locator.
//!
//! Provides HTTP endpoints for postal-code and proximity listings.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;

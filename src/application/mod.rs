// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the services
// - It provides the boundary between the presentation layer and the domain
// - It translates internal state into render-ready DTOs

pub mod dto;
pub mod error_handling;
pub mod state;
pub mod view_coordinator;

#[cfg(test)]
mod view_coordinator_tests;

pub use dto::RenderFrame;
pub use error_handling::{ErrorResponse, ErrorSeverity};
pub use state::AppState;
pub use view_coordinator::{ViewCoordinator, ViewMode};

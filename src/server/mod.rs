mod courses;
pub mod dto;
pub mod response;
mod reviews;
mod router;
pub mod validation;

pub use router::{AppState, create_router};

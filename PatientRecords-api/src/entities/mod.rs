// Public API entities
// Request and response bodies exchanged over HTTP.

pub mod common;
pub mod hello;
pub mod patient;

pub use common::{ErrorResponse, MessageResponse};
pub use hello::{AboutResponse, HelloResponse};
pub use patient::SortQueryParams;

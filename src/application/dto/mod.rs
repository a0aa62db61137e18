//! Data transfer objects for the application layer.

mod handler_dto;

pub use handler_dto::HandlerResponse;

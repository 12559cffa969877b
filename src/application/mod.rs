pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod view_state;

pub use error::ApplicationResult;

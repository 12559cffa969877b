mod service;
mod submit;

pub use service::ContactCommandService;

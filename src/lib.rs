pub mod api;
pub mod config;
pub mod entities;
pub mod error;
pub mod paging;
pub mod provider;

pub use error::RestError;

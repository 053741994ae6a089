pub mod adoption;
pub mod api;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod migrator;
pub mod pagination;
pub mod principal;
pub mod telemetry;

pub use sea_orm;

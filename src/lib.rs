pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod validation;

pub use db::Database;
pub use error::ContactError;

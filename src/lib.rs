pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod services;
pub mod state;

pub use dashboard::Dashboard;
pub use state::{ViewState, ViewStore};

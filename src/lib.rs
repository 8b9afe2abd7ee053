pub mod amount;
pub mod app;
pub mod commands;
pub mod config;
pub mod errors;
pub mod fill;
pub mod handlers;
pub mod journey;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod sweep;
pub mod timeline;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use journey::Journey;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
pub use sweep::spawn_auto_fill;

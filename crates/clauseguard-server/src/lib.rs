pub mod cli;
pub mod config;
pub mod render;
pub mod review;
pub mod server;
pub mod state;

pub use cli::*;
pub use config::*;
pub use server::*;
pub use state::*;

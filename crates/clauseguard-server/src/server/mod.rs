pub mod app;
pub mod error;
pub mod page;
pub mod routes;

pub use app::*;
pub use error::*;
pub use routes::*;

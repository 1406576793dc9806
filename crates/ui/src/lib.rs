#![forbid(unsafe_code)]

pub mod app;
pub mod console;
pub mod context;
pub mod error;
pub mod routes;
pub mod views;
pub mod vm;

pub use app::App;
pub use console::Console;
pub use context::AppContext;
pub use error::SessionError;
pub use routes::Route;

mod app;
pub use app::App;

mod components;

mod config;
pub use config::Config;

mod controller;
pub use controller::Controller;

mod direction;
pub use direction::Direction;

mod error;
pub use error::LoadError;

mod flipbook;
pub use flipbook::{Browser, Flipbook};

mod source;
pub use source::{Document, SourceMode};

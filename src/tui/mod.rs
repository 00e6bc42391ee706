mod app;
pub mod board;
pub mod form;
pub mod input;
pub mod screen;
pub mod text_field;

pub use app::{build_footer_text, render, App};
pub use screen::{Controller, Screen};

//! Terminal User Interface module
//!
//! The interactive wizard: a step header, one panel per step, a status bar
//! and a blocking alert, drawn with ratatui.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;

//! GTK4/Libadwaita user interface.

pub mod app;
pub mod form;
pub mod scroll;
pub mod surface;
pub mod window;

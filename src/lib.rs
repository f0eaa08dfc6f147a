//! SilverDesk Library - page services behind the GTK front-end
//!
//! This library provides:
//! - Configuration parsing (silverdesk.toml)
//! - Form validation rules
//! - Phone-number formatting
//! - Viewport math and debouncing
//! - The page context and its GTK surface, window, and widgets

pub mod config;
pub mod context;
pub mod debounce;
pub mod error;
pub mod format;
pub mod ui;
pub mod validate;
pub mod viewport;

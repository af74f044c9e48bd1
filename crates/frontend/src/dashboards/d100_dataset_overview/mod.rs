//! D100 Dataset overview: tabbed page with lazily loaded analysis results.
//!
//! - `api` - fetch client for the per-dataset resource endpoints
//! - `tab` - tab identifiers and loaded/active bookkeeping
//! - `view_binding` - the UI surface the controller drives
//! - `controller` - tab switching and load-then-render cycles
//! - `render` - payload to HTML fragments
//! - `ui` - Leptos components

pub mod api;
pub mod controller;
pub mod render;
pub mod tab;
pub mod ui;
pub mod view_binding;

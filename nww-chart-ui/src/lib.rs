//! Shared Dioxus components and D3.js bridge for the wastewater dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (at-a-glance panel, legend, containers)

pub mod components;
pub mod js_bridge;
pub mod state;

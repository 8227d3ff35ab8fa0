//! Leptos 0.7 CSR front end for the folio portfolio page
//!
//! Renders the page markup and binds the `folio-core` page controller to the
//! browser: `localStorage` for the accent preference, root custom properties
//! for styling, `requestAnimationFrame` for the aura, and
//! `IntersectionObserver` for reveal and active-section tracking.
//!
//! ## Module Structure
//! - `app`: root component and controller lifecycle
//! - `page`: controller handle shared by components
//! - `browser`: `web-sys` implementations of the controller seams
//! - `components`: header, hue picker, reveal wrapper, contact form
//! - `pages`: the portfolio page
//! - `error`: error types and console reporting

#![forbid(unsafe_code)]

pub mod app;
pub mod browser;
pub mod components;
pub mod error;
pub mod page;
pub mod pages;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

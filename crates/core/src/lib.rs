//! Page interaction controller for the folio portfolio page.
//!
//! Platform-independent: the browser binding in `folio-ui` implements the
//! storage, style and frame-scheduling seams over `web-sys`; tests and the
//! replay CLI use the in-memory doubles shipped here.
//!
//! ## Module Structure
//! - `controller`: lifecycle and event wiring
//! - `hue`, `store`, `style`: accent preference restore/apply/persist
//! - `elevation`: scroll-driven header elevation
//! - `reveal`: one-shot reveal-on-scroll
//! - `active`, `section`: active-section tracking
//! - `menu`: mobile navigation overlay
//! - `aura`, `frame`: parallax aura and frame coalescing
//! - `subscription`: scoped listener/observer lifetimes
//! - `event`: serializable page events for replay
//! - `contact`: placeholder contact form
//! - `config`, `error`, `result`: ambient plumbing

#![forbid(unsafe_code)]

pub mod active;
pub mod aura;
pub mod config;
pub mod contact;
pub mod controller;
pub mod elevation;
pub mod error;
pub mod event;
pub mod frame;
pub mod hue;
pub mod menu;
pub mod result;
pub mod reveal;
pub mod section;
pub mod store;
pub mod style;
pub mod subscription;

pub use config::ControllerConfig;
pub use controller::{MountOptions, PageController, PageSnapshot, Phase};
pub use error::Error;
pub use event::{PageEvent, PointerSample, ScrollMetrics};
pub use hue::AccentHue;
pub use result::{Result, ResultExt};
pub use reveal::BlockId;
pub use section::SectionId;

//! Reusable page components

pub mod aura;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hue_picker;
pub mod reveal;

pub use aura::AuraBackdrop;
pub use contact_form::ContactFormView;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hue_picker::HuePicker;
pub use reveal::Reveal;

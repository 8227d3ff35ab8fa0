//! `IntersectionObserver` wrappers
//!
//! The controller decides what a ratio means; this module only turns entries
//! into `(element, ratio)` pairs and owns the observer's lifetime.

use folio_core::subscription::Subscription;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::error::{Result, UiError};

/// Browsers report a threshold crossing with a ratio a hair under the
/// threshold itself.
const RATIO_SLACK: f64 = 0.005;

/// Whether the runtime exposes `IntersectionObserver` at all.
#[must_use]
pub fn observation_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Visible ratio adjusted for threshold-crossing jitter. Entries that are
/// not intersecting always read as zero.
#[must_use]
pub fn effective_ratio(is_intersecting: bool, reported: f64) -> f64 {
    if is_intersecting {
        (reported + RATIO_SLACK).min(1.0)
    } else {
        0.0
    }
}

/// A visibility change for one observed element.
pub struct Visibility<'a> {
    pub target: &'a Element,
    pub ratio: f64,
    pub observer: &'a IntersectionObserver,
}

/// Observe `elements`, calling `on_change` whenever one crosses `threshold`.
///
/// # Errors
///
/// Returns an error if the observer cannot be constructed.
pub fn observe<F>(
    label: &'static str,
    elements: &[Element],
    threshold: f64,
    mut on_change: F,
) -> Result<Subscription>
where
    F: FnMut(Visibility<'_>) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            on_change(Visibility {
                target: &target,
                ratio: effective_ratio(entry.is_intersecting(), entry.intersection_ratio()),
                observer: &observer,
            });
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| UiError::ObserverFailed(format!("{e:?}")))?;

    for element in elements {
        observer.observe(element);
    }

    Ok(Subscription::new(label, move || {
        observer.disconnect();
        drop(callback);
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_intersecting_reads_zero() {
        assert_eq!(effective_ratio(false, 0.6), 0.0);
    }

    #[test]
    fn test_crossing_jitter_reaches_threshold() {
        assert!(effective_ratio(true, 0.4999) >= 0.5);
        assert!(effective_ratio(true, 0.139) >= 0.14);
    }

    #[test]
    fn test_ratio_capped_at_one() {
        assert_eq!(effective_ratio(true, 1.0), 1.0);
    }
}

//! RequestAnimationFrame scheduler
//!
//! One shared frame callback, requested on demand by the controller. The
//! callback slot is cleared on teardown to break the closure's reference
//! back into the page.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::frame::{FrameHandle, FrameScheduler};
use folio_core::subscription::Subscription;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::error::{UiError, report};

/// Type alias for RAF closure to reduce complexity
type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// [`FrameScheduler`] over `window.requestAnimationFrame`.
pub struct RafScheduler {
    window: Option<Window>,
    callback: RafClosure,
}

impl RafScheduler {
    #[must_use]
    pub fn from_window() -> Self {
        Self {
            window: web_sys::window(),
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Install the function every requested frame invokes with its timestamp.
    pub fn set_callback<F>(&self, on_frame: F)
    where
        F: FnMut(f64) + 'static,
    {
        *self.callback.borrow_mut() =
            Some(Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>));
    }

    /// Guard that drops the frame callback when released.
    #[must_use]
    pub fn callback_guard(&self) -> Subscription {
        let callback = Rc::clone(&self.callback);
        Subscription::new("animation-frame", move || {
            callback.borrow_mut().take();
        })
    }

    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self) -> Option<FrameHandle> {
        let window = self.window.as_ref()?;
        let callback = self.callback.borrow();
        let closure = callback.as_ref()?;
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                report("schedule", &UiError::FrameRequestFailed(format!("{e:?}")));
                None
            }
        }
    }

    fn cancel(&mut self, handle: FrameHandle) {
        let Some(window) = &self.window else {
            return;
        };
        if let Err(e) = window.cancel_animation_frame(handle.0) {
            report("cancel", &UiError::FrameRequestFailed(format!("{e:?}")));
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_schedule_without_callback_is_refused() {
        let mut scheduler = RafScheduler::from_window();
        assert!(scheduler.schedule().is_none());
    }

    #[wasm_bindgen_test]
    fn test_callback_guard_clears_callback() {
        let mut scheduler = RafScheduler::from_window();
        scheduler.set_callback(|_| {});
        assert!(scheduler.has_callback());

        let handle = scheduler.schedule();
        assert!(handle.is_some());
        if let Some(handle) = handle {
            scheduler.cancel(handle);
        }

        scheduler.callback_guard().release();
        assert!(!scheduler.has_callback());
        assert!(scheduler.schedule().is_none());
    }
}

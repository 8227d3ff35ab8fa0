//! Event listeners as releasable subscriptions
//!
//! Attaching returns a [`Subscription`] that removes the listener and drops
//! its closure when released, so a disposed page leaves nothing behind on
//! `window` or `document`.

use folio_core::subscription::Subscription;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::{Result, UiError};

/// Passive listeners never call `preventDefault`, letting the browser
/// scroll without waiting on the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passive {
    Yes,
    No,
}

/// Attach `handler` for `event` on `target`.
///
/// # Errors
///
/// Returns an error if `addEventListener` throws.
pub fn listen<F>(
    target: &EventTarget,
    event: &'static str,
    passive: Passive,
    handler: F,
) -> Result<Subscription>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(passive == Passive::Yes);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| UiError::listener(event, &e))?;

    let target = target.clone();
    Ok(Subscription::new(event, move || {
        if let Err(e) =
            target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(
                &format!("folio: failed to remove {event} listener: {e:?}").into(),
            );
        }
        drop(closure);
    }))
}

//! Reveal-on-scroll wrapper
//!
//! Renders a block with the shared reveal class and a stable id. The
//! page's visibility observer finds it by class; `is-revealed` follows the
//! controller and is never removed once set.

use folio_core::BlockId;
use folio_core::reveal::{REVEAL_CLASS, REVEALED_CLASS};
use leptos::prelude::*;

use crate::page::PageContext;

#[component]
pub fn Reveal(
    ctx: PageContext,
    /// Unique block id, written to `data-reveal-id`
    #[prop(into)]
    id: String,
    children: Children,
) -> impl IntoView {
    let block = BlockId::new(id.clone());

    view! {
        <div
            class=REVEAL_CLASS
            class=(REVEALED_CLASS, move || ctx.is_revealed(&block))
            data-reveal-id=id
        >
            {children()}
        </div>
    }
}

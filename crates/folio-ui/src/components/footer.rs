use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Built with Rust, Leptos and WebAssembly."</p>
            <a href="#home">"Back to top"</a>
        </footer>
    }
}

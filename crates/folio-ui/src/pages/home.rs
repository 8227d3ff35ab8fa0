//! The single portfolio page
//!
//! Every section's element id matches its [`SectionId`], which is what
//! anchor navigation and active-section tracking key on.

use folio_core::SectionId;
use leptos::prelude::*;

use crate::components::{ContactFormView, Reveal};
use crate::page::PageContext;

#[component]
pub fn Home(ctx: PageContext) -> impl IntoView {
    view! {
        <section id=SectionId::Home.as_str() class="section hero">
            <Reveal ctx=ctx id="hero-intro">
                <p class="eyebrow">"Software engineer"</p>
                <h1>"Building fast, reliable systems for the web."</h1>
                <p class="lede">
                    "I design and ship services, tooling and interfaces with a focus on correctness and speed."
                </p>
                <div class="hero-actions">
                    <a
                        class="button"
                        href=SectionId::Projects.fragment()
                        on:click=move |_| ctx.navigate(SectionId::Projects)
                    >
                        "See projects"
                    </a>
                    <a
                        class="button button-ghost"
                        href=SectionId::Contact.fragment()
                        on:click=move |_| ctx.navigate(SectionId::Contact)
                    >
                        "Get in touch"
                    </a>
                </div>
            </Reveal>
        </section>

        <section id=SectionId::About.as_str() class="section">
            <h2>"About"</h2>
            <Reveal ctx=ctx id="about-copy">
                <p>
                    "I enjoy the seams between systems: protocols, storage engines and the tools that hold a codebase together."
                </p>
            </Reveal>
            <Reveal ctx=ctx id="about-skills">
                <ul class="tag-list">
                    <li>"Rust"</li>
                    <li>"WebAssembly"</li>
                    <li>"Distributed systems"</li>
                    <li>"Developer tooling"</li>
                </ul>
            </Reveal>
        </section>

        <section id=SectionId::Experience.as_str() class="section">
            <h2>"Experience"</h2>
            <Reveal ctx=ctx id="experience-current">
                <article class="card">
                    <h3>"Staff Engineer"</h3>
                    <p>"Platform team. Storage, build infrastructure and release tooling."</p>
                </article>
            </Reveal>
            <Reveal ctx=ctx id="experience-previous">
                <article class="card">
                    <h3>"Senior Engineer"</h3>
                    <p>"Real-time collaboration backend and client sync protocol."</p>
                </article>
            </Reveal>
        </section>

        <section id=SectionId::Projects.as_str() class="section">
            <h2>"Projects"</h2>
            <div class="card-grid">
                <Reveal ctx=ctx id="project-engine">
                    <article class="card">
                        <h3>"Embedded key-value engine"</h3>
                        <p>"Log-structured storage with crash-safe compaction."</p>
                    </article>
                </Reveal>
                <Reveal ctx=ctx id="project-cli">
                    <article class="card">
                        <h3>"Release CLI"</h3>
                        <p>"Reproducible builds and signed artifacts from one command."</p>
                    </article>
                </Reveal>
                <Reveal ctx=ctx id="project-site">
                    <article class="card">
                        <h3>"This site"</h3>
                        <p>"Leptos, compiled to WebAssembly, with no JavaScript framework."</p>
                    </article>
                </Reveal>
            </div>
        </section>

        <section id=SectionId::Contact.as_str() class="section">
            <h2>"Contact"</h2>
            <Reveal ctx=ctx id="contact-form">
                <ContactFormView />
            </Reveal>
        </section>
    }
}

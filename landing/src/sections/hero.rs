use leptos::prelude::*;
use talenthub_content::Icon as IconId;

use super::nav::scroll_to_section;
use crate::components::Icon;

/// Full-height opener: report badge, headline, copy, two scroll CTAs.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-blobs" aria-hidden="true">
                <div class="hero-blob hero-blob-left"></div>
                <div class="hero-blob hero-blob-right"></div>
            </div>

            <div class="hero-inner">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    <span class="hero-badge-text">"Final Project Report • Dec 2025"</span>
                </div>

                <h1 class="hero-title">
                    "Recruitment"
                    <br />
                    <span class="hero-title-gradient">"Reimagined"</span>
                </h1>

                <p class="hero-description">
                    "Experience the future of hiring with "
                    <strong>"TALENTHUB"</strong>
                    ". A premium, glassmorphic AI recruitment dashboard designed with a minimal dark aesthetic."
                </p>

                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| scroll_to_section("overview")>
                        "Explore System"
                        <Icon icon=IconId::ArrowRight />
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| scroll_to_section("database")>
                        <Icon icon=IconId::Database />
                        "View Schema"
                    </button>
                </div>
            </div>
        </section>
    }
}

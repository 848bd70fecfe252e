use leptos::prelude::*;
use talenthub_content::page::TECH_STACK;

use crate::components::{Icon, SectionHeader};

/// Technology tiles and the static architecture flow diagram.
#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id="architecture" class="section section-shaded">
            <SectionHeader
                number=2
                title="Technical Architecture"
                subtitle="Built on a modern stack to ensure scalability, type safety, and developer experience."
            />

            <div class="tech-grid">
                {TECH_STACK
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <div class="tech-tile">
                                <div class="tech-icon">
                                    <Icon icon=tech.icon />
                                </div>
                                <h4 class="tech-name">{tech.name}</h4>
                                <span class="tech-category">{tech.category.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="arch-diagram">
                <div class="arch-tag">"SYSTEM_ARCH.mermaid"</div>
                <div class="arch-flow">
                    <ArchNode title="Client (UI)" caption="Next.js App Router" />
                    <ArchLink label="REST / JSON" />
                    <ArchNode title="API Routes" caption="Next.js Serverless" />
                    <ArchLink label="Prisma Client" />
                    <ArchNode title="Database" caption="MySQL" />
                </div>
            </div>
        </section>
    }
}

/// One tier box of the flow diagram.
#[component]
fn ArchNode(title: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <div class="arch-node">
            <div class="arch-node-box">
                <span class="arch-node-title">{title}</span>
            </div>
            <span class="arch-node-caption">{caption}</span>
        </div>
    }
}

/// Animated connector between two tiers, with a protocol pill.
#[component]
fn ArchLink(label: &'static str) -> impl IntoView {
    view! {
        <div class="arch-link">
            <div class="arch-link-pulse"></div>
            <span class="arch-link-label">{label}</span>
        </div>
    }
}

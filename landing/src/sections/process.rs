use leptos::prelude::*;
use talenthub_content::page::PHASES;

use crate::components::SectionHeader;

/// Methodology timeline: four phase cards over a connecting rule.
#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="section section-shaded">
            <SectionHeader
                number=4
                title="Development Methodology"
                subtitle="An Agile-Iterative approach focusing on rapid prototyping and continuous refinement."
            />

            <div class="phase-track">
                <div class="phase-rule" aria-hidden="true"></div>
                <div class="phase-grid">
                    {PHASES
                        .into_iter()
                        .enumerate()
                        .map(|(idx, phase)| {
                            view! {
                                <div class="phase-card">
                                    <div class="phase-watermark" aria-hidden="true">{phase.number}</div>
                                    <div class="phase-index">{idx + 1}</div>
                                    <h3 class="phase-title">{phase.title}</h3>
                                    <p class="phase-desc">{phase.description}</p>
                                    <div class="phase-tags">
                                        {phase
                                            .items
                                            .iter()
                                            .map(|item| view! { <span class="phase-tag">{*item}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

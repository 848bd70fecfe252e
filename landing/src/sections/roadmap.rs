use leptos::prelude::*;
use talenthub_content::Icon as IconId;
use talenthub_content::page::{LIMITATIONS, ROADMAP_ITEMS};

use crate::components::{Icon, SectionHeader};

/// Roadmap rows beside the limitations panel.
#[component]
pub fn Roadmap() -> impl IntoView {
    view! {
        <section id="future" class="section">
            <div class="roadmap-columns">
                <div class="roadmap-main">
                    <SectionHeader
                        number=5
                        title="Future Roadmap"
                        subtitle="Expanding TALENTHUB from a dashboard to a complete ecosystem."
                    />
                    <div class="roadmap-list">
                        {ROADMAP_ITEMS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <div class="roadmap-row">
                                        <div class="roadmap-icon">
                                            <Icon icon=item.icon size="24" />
                                        </div>
                                        <div>
                                            <h4 class="roadmap-title">{item.title}</h4>
                                            <p class="roadmap-desc">{item.desc}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="limits-panel">
                    <div class="limits-halo" aria-hidden="true"></div>
                    <h3 class="limits-heading">
                        <Icon icon=IconId::Warning size="24" />
                        "Current Limitations & Challenges"
                    </h3>
                    <ul class="limits-list">
                        {LIMITATIONS
                            .into_iter()
                            .map(|limit| {
                                view! {
                                    <li class="limits-item">
                                        <span class="limits-bullet" aria-hidden="true"></span>
                                        <span>
                                            <strong class="limits-title">{limit.title}</strong>
                                            {limit.desc}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

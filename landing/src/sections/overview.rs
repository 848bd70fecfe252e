use leptos::prelude::*;
use talenthub_content::ChartPoint;
use talenthub_content::page::{FEATURES, PIPELINE_STATS, WEEKLY_APPLICATIONS};

use crate::components::{AreaChart, FeatureCard, SectionHeader};

/// Feature grid plus the "Real-time Analytics" panel.
#[component]
pub fn Overview() -> impl IntoView {
    let series: &'static [ChartPoint] = &WEEKLY_APPLICATIONS;

    view! {
        <section id="overview" class="section">
            <SectionHeader
                number=1
                title="System Overview"
                subtitle="A unified dashboard replacing legacy Applicant Tracking Systems with a high-performance, visual-first approach."
            />

            <div class="feature-grid">
                {FEATURES
                    .into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature /> })
                    .collect_view()}
            </div>

            <div class="analytics-panel">
                <div class="analytics-copy">
                    <h3 class="panel-title">"Real-time Analytics"</h3>
                    <p class="panel-text">
                        "The platform utilizes dynamic charting to visualize pipeline health, allowing recruiters to spot bottlenecks immediately with a clean, monochrome visualization."
                    </p>
                    <div class="stat-list">
                        {PIPELINE_STATS
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat-row">
                                        <span class="stat-label">{stat.label}</span>
                                        <span class="stat-value">{stat.value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="analytics-chart">
                    <AreaChart data=series />
                </div>
            </div>
        </section>
    }
}

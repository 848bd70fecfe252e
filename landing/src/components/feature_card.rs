use leptos::prelude::*;
use talenthub_content::Feature;

use super::Icon;

/// Overview grid card: icon tile, title, body copy.
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <Icon icon=feature.icon size="24" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-desc">{feature.desc}</p>
        </article>
    }
}

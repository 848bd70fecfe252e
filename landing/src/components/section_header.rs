use leptos::prelude::*;

/// Numbered section heading: dim ordinal, title, subtitle, decorative rule.
#[component]
pub fn SectionHeader(
    /// 1-based position in the page's section order
    number: usize,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">
                <span class="section-number">{format!("{number:02}. ")}</span>
                {title}
            </h2>
            <p class="section-subtitle">{subtitle}</p>
            <div class="section-rule"></div>
        </div>
    }
}

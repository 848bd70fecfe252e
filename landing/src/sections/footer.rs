use leptos::prelude::*;

/// Closing footer: giant watermark, logo mark, wordmark, copyright.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-watermark" aria-hidden="true">"TALENT"</div>
            <div class="footer-inner">
                <div class="footer-mark">
                    <span class="footer-mark-glyph">"T"</span>
                </div>
                <div class="footer-wordmark">"TALENTHUB"</div>
                <p class="footer-tagline">"Premium AI Recruitment Dashboard"</p>
                <p class="footer-copyright">"© 2025 Final Project Report. Built by Matheus Ambrozio."</p>
            </div>
        </footer>
    }
}

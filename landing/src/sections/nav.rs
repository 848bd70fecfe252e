use leptos::ev;
use leptos::prelude::*;
use talenthub_content::page::NAV_ITEMS;

use super::VERSION;

/// Vertical offset past which the nav switches to its condensed glass style.
const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Scrolled-state law: strictly past the threshold, no hysteresis.
fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Smooth-scroll to the element with the given id. A missing anchor is a
/// silent no-op.
pub(super) fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(el) = document.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Fixed navbar. The scrolled flag is recomputed from the current offset on
/// every scroll event, so delivery order cannot corrupt it; the listener is
/// detached on unmount.
#[component]
pub fn Nav() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        set_scrolled.set(past_threshold(offset));
    });
    on_cleanup(move || handle.remove());

    view! {
        <nav class=move || if scrolled.get() { "nav nav-scrolled" } else { "nav" }>
            <div class="nav-inner">
                <button class="nav-brand" on:click=move |_| scroll_to_top()>
                    <div class="nav-logo">
                        <span class="nav-logo-glyph">"T"</span>
                    </div>
                    <span class="nav-title">
                        "TALENT"
                        <span class="nav-title-dim">"HUB"</span>
                    </span>
                    <span class="nav-version">{VERSION}</span>
                </button>
                <div class="nav-links">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <button class="nav-link" on:click=move |_| scroll_to_section(id)>
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_or_below_threshold_is_not_scrolled() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(49.9));
        assert!(!past_threshold(SCROLL_THRESHOLD_PX));
    }

    #[test]
    fn past_threshold_is_scrolled() {
        assert!(past_threshold(50.1));
        assert!(past_threshold(5_000.0));
    }

    #[test]
    fn flag_is_a_function_of_offset_alone() {
        // same offset, same answer, regardless of call history
        for _ in 0..3 {
            assert!(!past_threshold(10.0));
            assert!(past_threshold(300.0));
        }
    }
}

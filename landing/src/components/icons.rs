//! SVG icon components.
//!
//! Single-path inline icons in the Phosphor style (Regular weight), rendered
//! from the content crate's [`IconId`] identifiers. The glyphs are decorative;
//! every icon spot on the page goes through [`Icon`].

use leptos::prelude::*;
use talenthub_content::Icon as IconId;

/// Renders the inline SVG glyph for an [`IconId`].
#[component]
pub fn Icon(
    /// Which glyph to draw
    icon: IconId,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class="icon"
            aria-hidden="true"
        >
            <path d=icon_path(icon)></path>
        </svg>
    }
}

/// Path data (`d` attribute) for each glyph.
pub(crate) fn icon_path(icon: IconId) -> &'static str {
    match icon {
        IconId::Layout => ICON_LAYOUT,
        IconId::ShieldCheck => ICON_SHIELD_CHECK,
        IconId::Cpu => ICON_CPU,
        IconId::Zap => ICON_ZAP,
        IconId::Layers => ICON_LAYERS,
        IconId::Database => ICON_DATABASE,
        IconId::Server => ICON_SERVER,
        IconId::Code => ICON_CODE,
        IconId::Users => ICON_USERS,
        IconId::UserCircle => ICON_USER_CIRCLE,
        IconId::Award => ICON_AWARD,
        IconId::Calendar => ICON_CALENDAR,
        IconId::Terminal => ICON_TERMINAL,
        IconId::Package => ICON_PACKAGE,
        IconId::ArrowRight => ICON_ARROW_RIGHT,
        IconId::CheckCircle => ICON_CHECK_CIRCLE,
        IconId::Warning => ICON_WARNING,
    }
}

/// Dashboard panels (SquaresFour)
const ICON_LAYOUT: &str = "M104,48H48A16,16,0,0,0,32,64v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V64A16,16,0,0,0,104,48Zm0,72H48V64h56Zm104-72H152a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V64A16,16,0,0,0,208,48Zm0,72H152V64h56ZM104,152H48a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V168A16,16,0,0,0,104,152Zm0,72H48V168h56Zm104-72H152a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V168A16,16,0,0,0,208,152Zm0,72H152V168h56Z";

/// Shield with a check mark
const ICON_SHIELD_CHECK: &str = "M208,40H48A16,16,0,0,0,32,56v58.77c0,89.62,75.82,119.34,91,124.39a15.53,15.53,0,0,0,10,0c15.2-5.05,91-34.77,91-124.39V56A16,16,0,0,0,208,40Zm0,74.79c0,78.42-66.35,104.62-80,109.18-13.53-4.51-80-30.69-80-109.18V56H208ZM82.34,141.66a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35a8,8,0,0,1,11.32,11.32l-56,56a8,8,0,0,1-11.32,0Z";

/// Processor chip with pins
const ICON_CPU: &str = "M112,48V24a8,8,0,0,1,16,0V48h24V24a8,8,0,0,1,16,0V48h16a16,16,0,0,1,16,16V80h24a8,8,0,0,1,0,16H200v24h24a8,8,0,0,1,0,16H200v24h24a8,8,0,0,1,0,16H200v16a16,16,0,0,1-16,16H168v24a8,8,0,0,1-16,0V208H128v24a8,8,0,0,1-16,0V208H96v24a8,8,0,0,1-16,0V208H64a16,16,0,0,1-16-16V176H24a8,8,0,0,1,0-16H48V136H24a8,8,0,0,1,0-16H48V96H24a8,8,0,0,1,0-16H48V64A16,16,0,0,1,64,48H96V24a8,8,0,0,1,16,0ZM64,192H184V64H64Zm32-96h56a8,8,0,0,1,8,8v56a8,8,0,0,1-8,8H96a8,8,0,0,1-8-8V104A8,8,0,0,1,96,96Zm8,56h40V112H104Z";

/// Lightning bolt
const ICON_ZAP: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Stacked layers
const ICON_LAYERS: &str = "M230.91,172A8,8,0,0,1,228,182.91l-96,56a8,8,0,0,1-8.06,0l-96-56A8,8,0,0,1,36,169.09l92,53.65,92-53.65A8,8,0,0,1,230.91,172ZM220,121.09l-92,53.65L36,121.09A8,8,0,0,0,28,134.91l96,56a8,8,0,0,0,8.06,0l96-56a8,8,0,1,0-8.06-13.82ZM24,80a8,8,0,0,1,4-6.91l96-56a8,8,0,0,1,8.06,0l96,56a8,8,0,0,1,0,13.82l-96,56a8,8,0,0,1-8.06,0l-96-56A8,8,0,0,1,24,80Zm23.88,0L128,126.74,208.12,80,128,33.26Z";

/// Database cylinder
const ICON_DATABASE: &str = "M128,24C74.17,24,32,48.6,32,80v96c0,31.4,42.17,56,96,56s96-24.6,96-56V80C224,48.6,181.83,24,128,24Zm80,104c0,9.62-7.88,19.43-21.61,26.92C170.93,163.35,150.19,168,128,168s-42.93-4.65-58.39-13.08C55.88,147.43,48,137.62,48,128V111.36c17.06,15,46.23,24.64,80,24.64s62.94-9.68,80-24.64Zm-21.61,74.92C170.93,211.35,150.19,216,128,216s-42.93-4.65-58.39-13.08C55.88,195.43,48,185.62,48,176V159.36c17.06,15,46.23,24.64,80,24.64s62.94-9.68,80-24.64V176C208,185.62,200.12,195.43,186.39,202.92ZM128,120c-22.19,0-42.93-4.65-58.39-13.08C55.88,99.43,48,89.62,48,80s7.88-19.43,21.61-26.92C85.07,44.65,105.81,40,128,40s42.93,4.65,58.39,13.08C200.12,60.57,208,70.38,208,80s-7.88,19.43-21.61,26.92C170.93,115.35,150.19,120,128,120Z";

/// Stacked server racks
const ICON_SERVER: &str = "M216,40H40A16,16,0,0,0,24,56v48a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A16,16,0,0,0,216,40Zm0,64H40V56H216ZM216,136H40a16,16,0,0,0-16,16v48a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V152A16,16,0,0,0,216,136Zm0,64H40V152H216ZM188,80a12,12,0,1,1-12-12A12,12,0,0,1,188,80Zm0,96a12,12,0,1,1-12-12A12,12,0,0,1,188,176Z";

/// Angle brackets with slash
const ICON_CODE: &str = "M69.12,94.15,28.5,128l40.62,33.85a8,8,0,1,1-10.24,12.29l-48-40a8,8,0,0,1,0-12.29l48-40a8,8,0,0,1,10.24,12.3Zm176,27.7-48-40a8,8,0,1,0-10.24,12.3L227.5,128l-40.62,33.85a8,8,0,1,0,10.24,12.29l48-40a8,8,0,0,0,0-12.29ZM162.73,32.48a8,8,0,0,0-10.25,4.79l-64,176a8,8,0,0,0,4.79,10.26A8.14,8.14,0,0,0,96,224a8,8,0,0,0,7.52-5.27l64-176A8,8,0,0,0,162.73,32.48Z";

/// Two user silhouettes
const ICON_USERS: &str = "M117.25,157.92a60,60,0,1,0-66.5,0A95.83,95.83,0,0,0,3.53,195.63a8,8,0,1,0,13.4,8.74,80,80,0,0,1,134.14,0,8,8,0,0,0,13.4-8.74A95.83,95.83,0,0,0,117.25,157.92ZM40,108a44,44,0,1,1,44,44A44.05,44.05,0,0,1,40,108Zm210.14,98.7a8,8,0,0,1-11.07-2.33A79.83,79.83,0,0,0,172,168a8,8,0,0,1,0-16,44,44,0,1,0-16.34-84.87,8,8,0,1,1-5.94-14.85,60,60,0,0,1,55.53,105.64,95.83,95.83,0,0,1,47.22,37.71A8,8,0,0,1,250.14,206.7Z";

/// Single user in a circle
const ICON_USER_CIRCLE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24ZM74.08,197.5a64,64,0,0,1,107.84,0,87.83,87.83,0,0,1-107.84,0ZM96,120a32,32,0,1,1,32,32A32,32,0,0,1,96,120Zm97.76,66.41a79.66,79.66,0,0,0-36.06-28.75,48,48,0,1,0-59.4,0,79.66,79.66,0,0,0-36.06,28.75,88,88,0,1,1,131.52,0Z";

/// Medal
const ICON_AWARD: &str = "M216,96A88,88,0,1,0,72,163.83V240a8,8,0,0,0,11.58,7.16L128,225l44.43,22.21A8,8,0,0,0,184,240V163.83A87.85,87.85,0,0,0,216,96ZM56,96a72,72,0,1,1,72,72A72.08,72.08,0,0,1,56,96Zm112,131.06-36.43-18.21a8,8,0,0,0-7.16,0L88,227.06V175.56a87.89,87.89,0,0,0,80,0Z";

/// Calendar page
const ICON_CALENDAR: &str = "M208,32H184V24a8,8,0,0,0-16,0v8H88V24a8,8,0,0,0-16,0v8H48A16,16,0,0,0,32,48V208a16,16,0,0,0,16,16H208a16,16,0,0,0,16-16V48A16,16,0,0,0,208,32ZM72,48v8a8,8,0,0,0,16,0V48h80v8a8,8,0,0,0,16,0V48h24V80H48V48ZM208,208H48V96H208V208Z";

/// Terminal window
const ICON_TERMINAL: &str = "M216,48H40A16,16,0,0,0,24,64V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V64A16,16,0,0,0,216,48ZM40,64H216V192H40V64Zm84,84H92a8,8,0,0,1-5.66-13.66l32-32a8,8,0,0,1,11.32,11.32L103.31,140l26.35,26.34A8,8,0,0,1,124,148Zm92,0H152a8,8,0,0,1,0-16h64a8,8,0,0,1,0,16Z";

/// Sealed package
const ICON_PACKAGE: &str = "M223.68,66.15,135.68,18a15.88,15.88,0,0,0-15.36,0l-88,48.17a16,16,0,0,0-8.32,14v95.64a16,16,0,0,0,8.32,14l88,48.17a15.88,15.88,0,0,0,15.36,0l88-48.17a16,16,0,0,0,8.32-14V80.18A16,16,0,0,0,223.68,66.15ZM128,32l80.34,44-29.77,16.3-80.35-44ZM128,120,47.66,76l33.9-18.56,80.34,44ZM40,90l80,43.78v85.79L40,175.82Zm96,129.57V133.82L168,116.3v36.2a8,8,0,0,0,16,0V107.55L216,90v85.77Z";

/// Arrow pointing right
const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

/// Check mark in a circle
const ICON_CHECK_CIRCLE: &str = "M173.66,98.34a8,8,0,0,1,0,11.32l-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35A8,8,0,0,1,173.66,98.34ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

/// Warning triangle
const ICON_WARNING: &str = "M236.8,188.09,149.35,36.22a24.76,24.76,0,0,0-42.7,0L19.2,188.09a23.51,23.51,0,0,0,0,23.72A24.35,24.35,0,0,0,40.55,224h174.9a24.35,24.35,0,0,0,21.33-12.19A23.51,23.51,0,0,0,236.8,188.09Zm-13.87,15.71a8.5,8.5,0,0,1-7.48,4.2H40.55a8.5,8.5,0,0,1-7.48-4.2,7.59,7.59,0,0,1,0-7.72L120.52,44.21a8.75,8.75,0,0,1,15,0l87.45,151.87A7.59,7.59,0,0,1,222.93,203.8ZM120,144V104a8,8,0,0,1,16,0v40a8,8,0,0,1-16,0Zm20,36a12,12,0,1,1-12-12A12,12,0,0,1,140,180Z";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_path_data() {
        let all = [
            IconId::Layout,
            IconId::ShieldCheck,
            IconId::Cpu,
            IconId::Zap,
            IconId::Layers,
            IconId::Database,
            IconId::Server,
            IconId::Code,
            IconId::Users,
            IconId::UserCircle,
            IconId::Award,
            IconId::Calendar,
            IconId::Terminal,
            IconId::Package,
            IconId::ArrowRight,
            IconId::CheckCircle,
            IconId::Warning,
        ];
        for icon in all {
            let path = icon_path(icon);
            assert!(path.starts_with('M'), "{icon:?} path does not start with a moveto");
        }
    }
}

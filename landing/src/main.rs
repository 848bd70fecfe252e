// TALENTHUB report page - Leptos 0.8 CSR edition

mod boot;
mod components;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    boot::print_console_banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Overview />
            <TechStack />
            <DatabaseSection />
            <Process />
            <Roadmap />
        </main>
        <Footer />
    }
}

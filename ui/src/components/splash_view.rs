use dioxus::prelude::*;

/// Full-screen splash shown during the startup dwell. Not routable and not
/// interactive; the app swaps it for the router when the timer elapses.
#[component]
pub fn SplashView() -> Element {
    rsx! {
        div { class: "splash-screen",
            div { class: "splash-logo",
                span { class: "splash-icon", "🍵" }
            }
            h1 { "Tourestea" }
            p { class: "splash-tagline", "Real experiences. No filters." }
            div { class: "splash-footer",
                div { class: "splash-progress" }
                span { "Brewing your feed" }
            }
        }
    }
}

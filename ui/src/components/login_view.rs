use dioxus::prelude::*;

use tourestea_common::user::User;

use super::session::use_session;

/// Mock social login: every provider button signs in the same demo
/// identity with a fresh id. The route component above reacts to the
/// session flip and redirects home.
#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();

    let login = move |_| {
        session.write().login(User::demo());
    };

    rsx! {
        div { class: "login-view",
            div { class: "login-hero",
                span { class: "login-icon", "🍵" }
                h1 { "Welcome back" }
                p { "Join the community of honest travelers." }
            }
            div { class: "login-actions",
                button { class: "login-btn login-google", onclick: login,
                    "Continue with Google"
                }
                button { class: "login-btn login-github", onclick: login,
                    "Continue with Github"
                }
                div { class: "login-divider", span { "or email" } }
                button { class: "login-btn login-email", onclick: login,
                    "Email Address"
                }
            }
            p { class: "login-terms",
                "By continuing, you agree to Tourestea's Terms of Service and Privacy Policy."
            }
        }
    }
}

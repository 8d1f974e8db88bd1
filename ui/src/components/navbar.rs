use dioxus::prelude::*;

use super::app::Route;

/// Bottom navigation bar, shown on every authenticated screen.
#[component]
pub fn Navbar() -> Element {
    let nav = use_navigator();

    rsx! {
        nav { class: "bottom-nav",
            button { class: "nav-item",
                onclick: move |_| { nav.push(Route::Home {}); },
                "Home"
            }
            button { class: "nav-item",
                onclick: move |_| { nav.push(Route::Search {}); },
                "Search"
            }
            button { class: "nav-item nav-create",
                onclick: move |_| { nav.push(Route::Create {}); },
                "+"
            }
            button { class: "nav-item",
                onclick: move |_| { nav.push(Route::Profile {}); },
                "Profile"
            }
        }
    }
}

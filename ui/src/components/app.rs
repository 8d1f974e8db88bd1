use dioxus::prelude::*;

use tourestea_common::feed::Feed;
use tourestea_common::gate::{self, Screen, SPLASH_DWELL_MS};

use super::create_post_view::CreatePostView;
use super::home_view::HomeView;
use super::login_view::LoginView;
use super::navbar::Navbar;
use super::post_detail_view::PostDetailView;
use super::profile_view::ProfileView;
use super::search_view::SearchView;
use super::session::{new_session, use_session};
use super::sleep_ms;
use super::splash_view::SplashView;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/create")]
    Create {},
    #[route("/post/:id")]
    Detail { id: String },
    #[route("/profile")]
    Profile {},
    #[route("/search")]
    Search {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Map the matched route onto the gate's screen set. `None` is a path
    /// that matched no known screen.
    fn screen(&self) -> Option<Screen> {
        match self {
            Route::Home {} => Some(Screen::Home),
            Route::Create {} => Some(Screen::CreatePost),
            Route::Detail { .. } => Some(Screen::PostDetail),
            Route::Profile {} => Some(Screen::Profile),
            Route::Search {} => Some(Screen::Search),
            Route::Login {} => Some(Screen::Login),
            Route::NotFound { .. } => None,
        }
    }
}

#[component]
pub fn App() -> Element {
    // The two root-owned stores every screen reads through context.
    use_context_provider(|| Signal::new(new_session()));
    use_context_provider(|| Signal::new(Feed::seeded()));

    // Splash dwell. The timer lives in a component-scoped task, so a
    // teardown before it fires simply drops it.
    let mut splash_done = use_signal(|| false);
    use_future(move || async move {
        sleep_ms(SPLASH_DWELL_MS).await;
        splash_done.set(true);
    });

    if !*splash_done.read() {
        return rsx! { SplashView {} };
    }

    rsx! { Router::<Route> {} }
}

/// Shell around the protected screens: applies the navigation gate and
/// renders the bottom navbar.
///
/// Reads the session signal, so every login/logout re-runs the gate in the
/// same render pass; a logout lands on the login screen with no stale-route
/// flash.
#[component]
fn AppLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let authenticated = session.read().is_authenticated();
    if gate::resolve(route.screen(), authenticated) == Screen::Login {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div { class: "app-shell",
            main { class: "app-main", Outlet::<Route> {} }
            Navbar {}
        }
    }
}

/// Route component: the home feed.
#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

/// Route component: the create-post form.
#[component]
fn Create() -> Element {
    rsx! { CreatePostView {} }
}

/// Route component: a single post by id from the URL.
#[component]
fn Detail(id: String) -> Element {
    rsx! { PostDetailView { id } }
}

/// Route component: the current user's profile.
#[component]
fn Profile() -> Element {
    rsx! { ProfileView {} }
}

/// Route component: search.
#[component]
fn Search() -> Element {
    rsx! { SearchView {} }
}

/// Login sits outside the shell (no navbar). An authenticated visit is
/// bounced to the default protected route.
#[component]
fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let authenticated = session.read().is_authenticated();
    if gate::resolve(Some(Screen::Login), authenticated) != Screen::Login {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    rsx! { LoginView {} }
}

/// Unmatched paths redirect through the gate, never an error state.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let session = use_session();
    let nav = use_navigator();

    tracing::debug!("unmatched path: /{}", segments.join("/"));
    let target = match gate::resolve(None, session.read().is_authenticated()) {
        Screen::Login => Route::Login {},
        _ => Route::Home {},
    };
    nav.replace(target);
    rsx! {}
}

/// How long the splash screen dwells before the router takes over.
pub const SPLASH_DWELL_MS: u32 = 2500;

/// The routable screens. Splash is not here: it is the pre-router dwell
/// phase and can never be navigated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    CreatePost,
    PostDetail,
    Profile,
    Search,
}

impl Screen {
    /// Everything except the login screen requires a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Login)
    }
}

/// Decide which screen actually renders for a requested route.
///
/// `None` is a route that matched no known screen; it falls through to the
/// default protected route (Home) and is then gated like any other request.
/// Callers re-run this whenever the session flips, so a logout redirects to
/// Login in the same pass with no stale-route flash.
pub fn resolve(requested: Option<Screen>, authenticated: bool) -> Screen {
    let screen = requested.unwrap_or(Screen::Home);
    match screen {
        Screen::Login if authenticated => Screen::Home,
        s if s.requires_auth() && !authenticated => Screen::Login,
        s => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes_redirect_when_unauthenticated() {
        for screen in [
            Screen::Home,
            Screen::CreatePost,
            Screen::PostDetail,
            Screen::Profile,
            Screen::Search,
        ] {
            assert_eq!(resolve(Some(screen), false), Screen::Login);
        }
    }

    #[test]
    fn test_protected_routes_pass_when_authenticated() {
        assert_eq!(resolve(Some(Screen::Profile), true), Screen::Profile);
        assert_eq!(resolve(Some(Screen::Search), true), Screen::Search);
        assert_eq!(resolve(Some(Screen::Home), true), Screen::Home);
    }

    #[test]
    fn test_login_redirects_home_when_authenticated() {
        assert_eq!(resolve(Some(Screen::Login), true), Screen::Home);
        assert_eq!(resolve(Some(Screen::Login), false), Screen::Login);
    }

    #[test]
    fn test_unknown_route_falls_through_to_home() {
        assert_eq!(resolve(None, true), Screen::Home);
        assert_eq!(resolve(None, false), Screen::Login);
    }
}

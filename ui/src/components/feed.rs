use dioxus::prelude::*;

use tourestea_common::feed::Feed;

/// Shared post collection provided as context at the app root. Screens
/// read through the query methods; only the create flow writes.
pub fn use_feed() -> Signal<Feed> {
    use_context::<Signal<Feed>>()
}

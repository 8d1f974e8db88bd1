pub mod app;
pub mod create_post_view;
pub mod feed;
pub mod gemini;
pub mod home_view;
pub mod login_view;
pub mod navbar;
pub mod post_detail_view;
pub mod profile_view;
pub mod review_card;
pub mod search_view;
pub mod session;
pub mod splash_view;

/// Suspend the current task for `ms` milliseconds. Timers only exist on the
/// web target; native builds resolve immediately.
#[cfg(target_family = "wasm")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_family = "wasm"))]
pub async fn sleep_ms(_ms: u32) {}

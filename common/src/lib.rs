pub mod feed;
pub mod gate;
pub mod insight;
pub mod post;
pub mod seed;
pub mod session;
pub mod user;

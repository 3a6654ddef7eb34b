/// Application services
pub mod auth;
pub mod jukebox;

pub use auth::AuthService;

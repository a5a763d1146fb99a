//! Pages
//!
//! One component per top-level route.

pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod update_password;

pub use auth::SignIn;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use update_password::UpdatePassword;

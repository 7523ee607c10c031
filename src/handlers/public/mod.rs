// handlers/public/mod.rs - endpoints that need no session token.
//
// Sign-in is the only way to obtain a token; user creation and the
// health probe are open as well.

pub mod health;
pub mod signin;
pub mod users;

pub use health::health;
pub use signin::signin;
pub use users::create_user;

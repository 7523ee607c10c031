// handlers/protected/mod.rs - endpoints behind the session-token gate.
//
// Every route here is mounted with `require_auth`, so handlers can take
// `Extension<AuthUser>` and rely on it being present.

pub mod categories;
pub mod dinos;

pub use categories::list_categories;
pub use dinos::{create_dino, delete_dino, get_dino, list_dinos, update_dino};

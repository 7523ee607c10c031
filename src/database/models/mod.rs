pub mod dino;
pub mod period;
pub mod user;

pub use dino::{Dino, DinoFields};
pub use period::Period;
pub use user::{Credential, User};

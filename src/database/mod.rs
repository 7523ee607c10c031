pub mod dinos;
pub mod manager;
pub mod models;
pub mod periods;
pub mod schema;
pub mod seed;
pub mod users;

pub use manager::{connect, connect_in_memory, health_check, DatabaseError};

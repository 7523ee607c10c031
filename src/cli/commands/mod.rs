pub mod database;
pub mod serve;

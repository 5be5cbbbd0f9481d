pub mod dump;
pub mod query;

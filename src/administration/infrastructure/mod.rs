pub mod connection;
pub mod persistence;

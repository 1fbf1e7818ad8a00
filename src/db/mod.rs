// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling with explicit configuration
// - Schema initialization
// - Database utilities

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, get_connection, ConnectionPool, DatabaseConfig, PooledConn,
};

pub use migrations::{initialize_database, verify_database_integrity};

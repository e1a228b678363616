//! Per-user keyspace integration tests

mod isolation_tests;
mod stats_tests;

//! Postgres integration tests
//!
//! Skipped when `DATABASE_URL` is unset.

mod flows_test;
mod migrations_test;

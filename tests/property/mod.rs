//! Property-based tests

mod object_id_proptest;

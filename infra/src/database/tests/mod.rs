//! Tests for the MongoDB layer

#[cfg(test)]
mod connection_tests;

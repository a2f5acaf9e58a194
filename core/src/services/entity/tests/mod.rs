//! Tests for the entity service

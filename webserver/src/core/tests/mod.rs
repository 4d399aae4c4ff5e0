//! Tests for the core document helpers

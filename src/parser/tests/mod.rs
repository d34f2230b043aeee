//! Tests for parser components.

//! Unit tests for the interaction module.
//!
//! Tests cover classification rules, registry semantics, router fault
//! containment and wire decoding.

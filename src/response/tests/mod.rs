//! Unit tests for the response module.

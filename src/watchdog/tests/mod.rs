//! Unit tests for the watchdog module.
//!
//! Timer behaviour is exercised on a paused tokio clock so thresholds elapse
//! instantly and deterministically.

//! In-memory response adapters for tests and local wiring.

mod recording_channel;

pub use recording_channel::{RecordingResponseChannel, SentResponse};

//! ovella-inference
//!
//! Decides between the remote inference service and the local engine, and
//! guarantees that a valid submission always yields a prediction. Remote
//! trouble of any kind — timeout, network failure, bad status, malformed
//! payload — degrades to [`ovella_engine::evaluate`] and is never surfaced
//! to the caller.

pub mod client;
pub mod error;
pub mod orchestrator;
pub mod wire;

pub use error::RemoteError;
pub use orchestrator::{InferenceConfig, Orchestrator, DEFAULT_REMOTE_TIMEOUT};

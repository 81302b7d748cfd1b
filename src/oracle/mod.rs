//! The question/answer interaction.
//!
//! [`InteractionController`] is written once against two seams: a [`Surface`]
//! that displays the exchange and a [`ResponseProvider`] that produces answers,
//! either a [`RemoteProvider`] talking to a chat endpoint or a
//! [`SimulatedProvider`] answering after a fixed delay.

mod controller;
mod error;
mod provider;
mod question;
mod remote;
mod surface;

pub use controller::{DEFAULT_TIMEOUT, InteractionController, OverlapPolicy, Submission};
pub use error::OracleUnavailable;
pub use provider::{
    DEFAULT_SIMULATED_DELAY, ResponseProvider, SIMULATED_RESPONSE, SimulatedProvider,
};
pub use question::normalize_question;
pub use remote::{DEFAULT_ENDPOINT, HealthStatus, RemoteProvider};
pub use surface::{FALLBACK_RESPONSE, PLACEHOLDER, Reply, Surface};

//! Host boundary for running searches.
//!
//! A host (a GUI, a game server, the command-line driver) describes the
//! position and limits in a [`SearchRequest`] and receives exactly one
//! [`SearchResponse`] back, either on a worker thread or inline.

mod controller;

pub use controller::{EngineController, SearchJob, SearchLimits, SearchRequest, SearchResponse};

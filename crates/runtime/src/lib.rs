//! Hosting layer for the combat engine.
//!
//! This crate wires the pure engine in `battle-core` to the outside
//! world: durable progress stores, a topic-based event bus, session
//! configuration loading, and [`MatchSession`], the orchestrator a
//! frontend drives. Consumers embed a session, subscribe to events, and
//! submit player actions; the engine itself never blocks on them.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator
//! - [`events`] provides the topic-based event bus
//! - [`repository`] provides progress store implementations
//! - [`config`] loads session configuration from disk
pub mod config;
pub mod error;
pub mod events;
pub mod repository;
pub mod session;

pub use config::{SessionConfig, load_or_default};
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, SessionEvent, Topic};
pub use repository::{FileProgressStore, InMemoryProgressStore, ProgressRecord};
pub use session::MatchSession;

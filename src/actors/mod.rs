//! Actor-based ownership of the board state
//!
//! Each actor runs as an independent async task communicating via Tokio channels.
//!
//! ## Architecture Overview
//!
//! ```text
//!   API handlers ──┐
//!                  │ RegistryCommand (mpsc) + reply (oneshot)
//!   Scheduler ─────┤
//!                  ▼
//!          ┌───────────────┐      ┌─────────────────┐
//!          │ RegistryActor │─────▶│ Store / Backend │
//!          └───────────────┘      └─────────────────┘
//! ```
//!
//! ## Actor Types
//!
//! - **RegistryActor**: Sole owner of the store; serializes every operation
//! - **RefreshScheduler**: Optional timer that asks the registry to refresh
//!
//! ## Communication Patterns
//!
//! 1. **Commands**: Each actor has an mpsc command channel
//! 2. **Request/Response**: oneshot channels for replies

pub mod messages;
pub mod refresher;
pub mod registry;

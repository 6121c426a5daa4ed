//! State machine engine
//!
//! A fixed table of states, each with a process action and optional
//! entry/exit hooks, stepped by polling.

pub mod entry;
pub mod error;
pub mod machine;

pub use entry::{Hook, Process, StateEntry};
pub use error::FsmError;
pub use machine::{StateMachine, Transition};

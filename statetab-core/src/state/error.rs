//! Errors reported by the state machine

use crate::config::StateId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors from initializing, registering or stepping a machine
///
/// None of these are fatal; the machine is always left in a usable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FsmError {
    /// Start state exceeds the table capacity; the machine starts at 0
    InvalidStartState(StateId),
    /// State exceeds the table capacity
    InvalidState(StateId),
    /// Registration without a process action
    MissingProcess(StateId),
    /// A process action requested a state outside the table
    InvalidNextState {
        /// State whose process action made the request
        from: StateId,
        /// Requested state
        to: StateId,
    },
}

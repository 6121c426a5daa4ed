//! Table-driven state machine
//!
//! The machine is polled: every call to [`StateMachine::step`] runs the
//! current state's process action once. When the action returns a
//! different state, the exit hook of the old state runs, then the entry
//! hook of the new state, and only then does the current state change.

use super::entry::{Hook, Process, StateEntry};
use super::error::FsmError;
use crate::config::{StateId, MAX_STATES, STATE_ID_RANGE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A committed state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    /// State that was left
    pub from: StateId,
    /// State that is now current
    pub to: StateId,
}

/// Fixed-capacity state machine
///
/// `N` is the number of table slots and defaults to [`MAX_STATES`]. The
/// machine owns its table; the actions it references are borrowed for
/// `'a` and must outlive it.
#[derive(Debug)]
pub struct StateMachine<'a, const N: usize = MAX_STATES> {
    table: [StateEntry<'a>; N],
    current: StateId,
}

impl<'a, const N: usize> Default for StateMachine<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> StateMachine<'a, N> {
    const CAPACITY_FITS: () = assert!(
        N >= 1 && N <= STATE_ID_RANGE,
        "state table capacity must be between 1 and the number of StateId values"
    );

    /// Create a machine with an empty table, current state 0
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_FITS;

        Self {
            table: [StateEntry::EMPTY; N],
            current: 0,
        }
    }

    /// Clear the table and set the start state
    ///
    /// The table is cleared even if `start` is out of range; in that case
    /// the machine starts at state 0 and the error is returned. No action
    /// runs until the first [`step`](Self::step).
    pub fn initialize(&mut self, start: StateId) -> Result<(), FsmError> {
        self.table = [StateEntry::EMPTY; N];

        if Self::in_range(start) {
            self.current = start;

            #[cfg(feature = "defmt")]
            defmt::debug!("fsm: initialized, start state {}", start);

            Ok(())
        } else {
            self.current = 0;

            #[cfg(feature = "defmt")]
            defmt::warn!("fsm: start state {} out of range, using 0", start);

            Err(FsmError::InvalidStartState(start))
        }
    }

    /// Bind a process action and optional hooks to a state
    ///
    /// Overwrites any previous registration of `state`. On error the
    /// table is left untouched.
    pub fn register(
        &mut self,
        state: StateId,
        process: Option<Process<'a>>,
        on_entry: Option<Hook<'a>>,
        on_exit: Option<Hook<'a>>,
    ) -> Result<(), FsmError> {
        if !Self::in_range(state) {
            #[cfg(feature = "defmt")]
            defmt::warn!("fsm: cannot register state {}, capacity {}", state, N);

            return Err(FsmError::InvalidState(state));
        }

        let Some(process) = process else {
            #[cfg(feature = "defmt")]
            defmt::warn!("fsm: cannot register state {} without process", state);

            return Err(FsmError::MissingProcess(state));
        };

        self.table[usize::from(state)] = StateEntry::new(process, on_entry, on_exit);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "fsm: registered state {} (entry: {}, exit: {})",
            state,
            on_entry.is_some(),
            on_exit.is_some()
        );

        Ok(())
    }

    /// Run one tick
    ///
    /// Returns the committed transition, or `None` if the current state is
    /// inert or its process action asked to stay. A request for a state
    /// outside the table is reported and the machine stays where it is;
    /// no hooks run in that case.
    pub fn step(&mut self) -> Result<Option<Transition>, FsmError> {
        let from = self.current;
        let current = self.table[usize::from(from)];

        let Some(process) = current.process() else {
            return Ok(None);
        };

        let to = process();
        if to == from {
            return Ok(None);
        }

        if !Self::in_range(to) {
            #[cfg(feature = "defmt")]
            defmt::warn!("fsm: state {} requested invalid state {}", from, to);

            return Err(FsmError::InvalidNextState { from, to });
        }

        if let Some(on_exit) = current.on_exit() {
            on_exit();
        }
        if let Some(on_entry) = self.table[usize::from(to)].on_entry() {
            on_entry();
        }
        self.current = to;

        #[cfg(feature = "defmt")]
        defmt::debug!("fsm: {} -> {}", from, to);

        Ok(Some(Transition { from, to }))
    }

    /// Currently active state
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Number of slots in the table
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Slot for `state`, or `None` if it is outside the table
    pub fn entry(&self, state: StateId) -> Option<&StateEntry<'a>> {
        self.table.get(usize::from(state))
    }

    /// Check if `state` has a process action bound
    pub fn is_registered(&self, state: StateId) -> bool {
        self.entry(state).is_some_and(StateEntry::is_registered)
    }

    /// The whole table, indexed by state
    pub fn table(&self) -> &[StateEntry<'a>; N] {
        &self.table
    }

    fn in_range(state: StateId) -> bool {
        usize::from(state) < N
    }
}

//! State table slots
//!
//! A slot binds a state identifier to its process action and optional
//! entry/exit hooks. Actions are borrowed, never owned, so a table never
//! allocates and can live in a `static` or on the stack.

use core::fmt;

use crate::config::StateId;

/// Per-tick action of a state; returns the requested next state
pub type Process<'a> = &'a dyn Fn() -> StateId;

/// Entry or exit hook
pub type Hook<'a> = &'a dyn Fn();

/// One slot of the state table
///
/// A slot without a process action is inert: ticking the machine while
/// it is current does nothing.
///
/// Slots are `Copy`, so a whole table can be snapshotted by value. There
/// is no `PartialEq`: zero-sized actions such as plain `fn` items have no
/// meaningful address to compare.
#[derive(Clone, Copy, Default)]
pub struct StateEntry<'a> {
    process: Option<Process<'a>>,
    on_entry: Option<Hook<'a>>,
    on_exit: Option<Hook<'a>>,
}

impl<'a> StateEntry<'a> {
    /// Slot with no actions bound
    pub const EMPTY: Self = Self {
        process: None,
        on_entry: None,
        on_exit: None,
    };

    /// Create a registered slot
    pub const fn new(
        process: Process<'a>,
        on_entry: Option<Hook<'a>>,
        on_exit: Option<Hook<'a>>,
    ) -> Self {
        Self {
            process: Some(process),
            on_entry,
            on_exit,
        }
    }

    /// Process action, if the slot is registered
    pub fn process(&self) -> Option<Process<'a>> {
        self.process
    }

    /// Hook run when the machine enters this state
    pub fn on_entry(&self) -> Option<Hook<'a>> {
        self.on_entry
    }

    /// Hook run when the machine leaves this state
    pub fn on_exit(&self) -> Option<Hook<'a>> {
        self.on_exit
    }

    /// Check if the slot has a process action
    pub fn is_registered(&self) -> bool {
        self.process.is_some()
    }
}

impl fmt::Debug for StateEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateEntry")
            .field("process", &self.process.is_some())
            .field("on_entry", &self.on_entry.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StateEntry<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "StateEntry {{ process: {}, on_entry: {}, on_exit: {} }}",
            self.process.is_some(),
            self.on_entry.is_some(),
            self.on_exit.is_some()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::ptr;

    fn stay() -> StateId {
        0
    }

    fn hook() {}

    #[test]
    fn test_empty_slot_is_inert() {
        let entry = StateEntry::EMPTY;
        assert!(!entry.is_registered());
        assert!(entry.process().is_none());
        assert!(entry.on_entry().is_none());
        assert!(entry.on_exit().is_none());
        assert!(!StateEntry::default().is_registered());
    }

    #[test]
    fn test_new_slot_is_registered() {
        let entry = StateEntry::new(&stay, Some(&hook), None);
        assert!(entry.is_registered());
        assert!(entry.on_entry().is_some());
        assert!(entry.on_exit().is_none());

        let process = entry.process().unwrap();
        assert_eq!(process(), 0);
    }

    #[test]
    fn test_accessors_return_bound_actions() {
        let calls = Cell::new(0u8);
        let process = || {
            calls.set(calls.get() + 1);
            2
        };
        let enter = || calls.set(calls.get() + 10);
        let leave = || calls.set(calls.get() + 100);

        let entry = StateEntry::new(&process, Some(&enter), Some(&leave));

        assert!(ptr::addr_eq(entry.process().unwrap(), &process));
        assert!(ptr::addr_eq(entry.on_entry().unwrap(), &enter));
        assert!(ptr::addr_eq(entry.on_exit().unwrap(), &leave));

        assert_eq!((entry.process().unwrap())(), 2);
        (entry.on_entry().unwrap())();
        (entry.on_exit().unwrap())();
        assert_eq!(calls.get(), 111);
    }

    #[test]
    fn test_copy_keeps_actions() {
        let process = || 4;
        let original = StateEntry::new(&process, None, None);
        let copy = original;
        assert!(original.is_registered());
        assert_eq!((copy.process().unwrap())(), 4);
    }
}

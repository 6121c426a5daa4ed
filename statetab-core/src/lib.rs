//! Allocation-free table-driven state machine engine
//!
//! This crate contains the engine only:
//!
//! - Build-time configuration (table capacity, state identifier width)
//! - The state table and its slots
//! - Initialization, registration and stepping
//!
//! A machine is polled from a superloop or a periodic timer. Each
//! [`StateMachine::step`] runs the current state's process action; a
//! returned state different from the current one triggers the exit hook
//! of the old state, the entry hook of the new one, and then the switch.
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use statetab_core::{StateId, StateMachine, Transition};
//!
//! const IDLE: StateId = 0;
//! const RUNNING: StateId = 1;
//!
//! let start_pressed = Cell::new(false);
//! let idle = || if start_pressed.get() { RUNNING } else { IDLE };
//! let running = || RUNNING;
//! let spin_up = || {};
//!
//! let mut fsm: StateMachine<'_, 2> = StateMachine::new();
//! fsm.initialize(IDLE).unwrap();
//! fsm.register(IDLE, Some(&idle), None, None).unwrap();
//! fsm.register(RUNNING, Some(&running), Some(&spin_up), None).unwrap();
//!
//! assert_eq!(fsm.step(), Ok(None));
//! start_pressed.set(true);
//! assert_eq!(fsm.step(), Ok(Some(Transition { from: IDLE, to: RUNNING })));
//! assert_eq!(fsm.current_state(), RUNNING);
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod state;

pub use config::{StateId, MAX_STATES};
pub use state::{FsmError, Hook, Process, StateEntry, StateMachine, Transition};

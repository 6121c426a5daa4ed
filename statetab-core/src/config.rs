//! Build-time configuration
//!
//! The table capacity and the width of a state identifier live here and
//! nowhere else. Deployments that need more states raise `MAX_STATES`;
//! past 256 states `StateId` must be widened as well.

/// Identifier of a state, used directly as an index into the state table
pub type StateId = u8;

/// Default number of slots in a state table
pub const MAX_STATES: usize = 10;

/// Number of distinct values a `StateId` can hold
pub const STATE_ID_RANGE: usize = StateId::MAX as usize + 1;

const _: () = assert!(
    MAX_STATES >= 1 && MAX_STATES <= STATE_ID_RANGE,
    "MAX_STATES must be between 1 and the number of StateId values"
);

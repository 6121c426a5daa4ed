//! Push-button / LED controller
//!
//! The LED follows the button: pressing it switches the machine to
//! `Active` (LED on), releasing it returns to `Inactive` (LED off). The
//! `Init` state runs once to put the LED into a known state.

use core::cell::{Cell, RefCell};

use embedded_hal::digital::{InputPin, OutputPin};
use statetab_core::{FsmError, StateId, StateMachine};

/// Number of states used by the panel machine
pub const PANEL_STATES: usize = 3;

/// Panel states, numbered as they appear in the state table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PanelState {
    /// Power-on: LED driven to off
    Init = 0,
    /// Button released, LED off
    Inactive = 1,
    /// Button held, LED on
    Active = 2,
}

impl PanelState {
    /// Get the state as a table index
    pub const fn id(self) -> StateId {
        self as StateId
    }

    /// Create a state from a table index
    pub fn from_id(id: StateId) -> Option<Self> {
        match id {
            0 => Some(PanelState::Init),
            1 => Some(PanelState::Inactive),
            2 => Some(PanelState::Active),
            _ => None,
        }
    }
}

/// Pin polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Button pulls the input low when pressed
    pub button_active_low: bool,
    /// LED lights when the output is low
    pub led_active_low: bool,
}

/// Button and LED pair driven by the panel state machine
///
/// Pins sit behind `RefCell` because state actions only get `&self`.
pub struct Panel<B, L> {
    button: RefCell<B>,
    led: RefCell<L>,
    config: PanelConfig,
    led_on: Cell<bool>,
}

impl<B: InputPin, L: OutputPin> Panel<B, L> {
    /// Create a new panel
    ///
    /// The LED is not touched until the machine runs `Init`.
    pub fn new(button: B, led: L, config: PanelConfig) -> Self {
        Self {
            button: RefCell::new(button),
            led: RefCell::new(led),
            config,
            led_on: Cell::new(false),
        }
    }

    /// Check if the button is held
    ///
    /// A failed read counts as released.
    pub fn is_pressed(&self) -> bool {
        let level = self.button.borrow_mut().is_high();
        match level {
            Ok(high) => high != self.config.button_active_low,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("panel: button read failed");
                false
            }
        }
    }

    /// Check if the LED was last driven on
    pub fn led_on(&self) -> bool {
        self.led_on.get()
    }

    /// Give the pins back
    pub fn release(self) -> (B, L) {
        (self.button.into_inner(), self.led.into_inner())
    }

    /// `Init` process: LED off, then wait for input
    pub fn init(&self) -> StateId {
        self.set_led(false);
        PanelState::Inactive.id()
    }

    /// `Inactive` process
    pub fn inactive(&self) -> StateId {
        if self.is_pressed() {
            PanelState::Active.id()
        } else {
            PanelState::Inactive.id()
        }
    }

    /// `Active` process
    pub fn active(&self) -> StateId {
        if self.is_pressed() {
            PanelState::Active.id()
        } else {
            PanelState::Inactive.id()
        }
    }

    /// `Inactive` entry hook
    pub fn enter_inactive(&self) {
        self.set_led(false);

        #[cfg(feature = "defmt")]
        defmt::info!("panel: enter Inactive");
    }

    /// `Active` entry hook
    pub fn enter_active(&self) {
        self.set_led(true);

        #[cfg(feature = "defmt")]
        defmt::info!("panel: enter Active");
    }

    /// `Active` exit hook
    pub fn exit_active(&self) {
        #[cfg(feature = "defmt")]
        defmt::info!("panel: exit Active");
    }

    fn set_led(&self, on: bool) {
        let mut led = self.led.borrow_mut();
        // Active-low: on drives the pin low
        let result = if on != self.config.led_active_low {
            led.set_high()
        } else {
            led.set_low()
        };

        match result {
            Ok(()) => self.led_on.set(on),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("panel: LED write failed");
            }
        }
    }
}

/// Drive the panel machine
///
/// Builds the three-state machine over `panel` and steps it. `keep_running`
/// is called before every tick with the current state and is the place to
/// wait for the next timer period; returning `false` stops the loop.
/// Returns the state the machine was in when it stopped.
pub fn run<B, L, F>(panel: &Panel<B, L>, mut keep_running: F) -> Result<PanelState, FsmError>
where
    B: InputPin,
    L: OutputPin,
    F: FnMut(PanelState) -> bool,
{
    let init = || panel.init();
    let inactive = || panel.inactive();
    let active = || panel.active();
    let enter_inactive = || panel.enter_inactive();
    let enter_active = || panel.enter_active();
    let exit_active = || panel.exit_active();

    let mut fsm: StateMachine<'_, PANEL_STATES> = StateMachine::new();
    fsm.initialize(PanelState::Init.id())?;
    fsm.register(PanelState::Init.id(), Some(&init), None, None)?;
    fsm.register(
        PanelState::Inactive.id(),
        Some(&inactive),
        Some(&enter_inactive),
        None,
    )?;
    fsm.register(
        PanelState::Active.id(),
        Some(&active),
        Some(&enter_active),
        Some(&exit_active),
    )?;

    let mut state = PanelState::Init;
    while keep_running(state) {
        fsm.step()?;
        let id = fsm.current_state();
        state = PanelState::from_id(id).ok_or(FsmError::InvalidState(id))?;
    }

    Ok(state)
}

//! Session layer: the locked/unlocked state machine
//!
//! The controller owns the current plan, the in-memory passphrase, and the
//! auto-lock countdown, and orchestrates the crypto engine and the plan
//! store for every user-facing operation.

pub mod activity;
pub mod controller;

pub use activity::{ActivityBus, ActivityRelay, InProcessActivityBus};
pub use controller::{SessionController, AUTO_LOCK_TIMEOUT};

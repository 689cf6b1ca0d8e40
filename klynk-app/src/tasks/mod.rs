//! Session tasks
//!
//! The input task feeds the session channel; the cook loop drains it
//! alongside the cooking clock.

pub mod cook;
pub mod input;
pub mod tick;

pub use cook::{render_current_state, run_session, selected_category, SessionEnd};
pub use input::spawn_input;
pub use tick::{Ticker, TICK_PERIOD};

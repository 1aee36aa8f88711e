//! Game simulation module
//!
//! Throw perturbation and the session state machine. Deterministic for a
//! given random source:
//! - Seeded RNG only, injected by the caller
//! - Single owner, no shared or static state
//! - No rendering or platform dependencies

pub mod session;
pub mod throw;

pub use session::{GamePhase, GameSession, Hit, RESTART_MESSAGE, START_MESSAGE};
pub use throw::perturb;

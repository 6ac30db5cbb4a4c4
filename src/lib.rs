//! Procedural atom models and a chemistry-driven periodic table layout.
//!
//! A selection `(Z, N, noble gas)` becomes an [`Atom`]: nucleons sampled inside
//! the nucleus and electrons orbiting on shells filled `[2, 8, 18, 32]`. The
//! periodic table grid and its info-panel facts are derived from each
//! element's period and group.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod physics;
pub mod platform;
pub mod renderer;
pub mod simulation;
pub mod ui;

pub use config::AtomConfig;
pub use error::{Error, Result};
pub use physics::elements::{ElementRecord, PeriodicTable};
pub use simulation::atom::Atom;
pub use simulation::session::{ElementSelected, Session};

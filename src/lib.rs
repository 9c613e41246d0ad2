//! Voter eligibility checks and de-duplicated registration.
//!
//! A [`Registrar`] owns the set of identifiers it has accepted and decides,
//! for each [`Candidate`] submitted to it, which [`RegisterResult`] applies.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod registry;

pub use config::RegistrarConfig;
pub use error::{Error, Result};
pub use model::{Candidate, Gender, RegisterResult};
pub use registry::Registrar;

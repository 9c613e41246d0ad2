use std::collections::HashSet;

use crate::{
    config::RegistrarConfig,
    logging::AttemptId,
    model::{Candidate, RegisterResult},
};

/// Gatekeeper and system of record for accepted voter identifiers.
///
/// Each registrar owns its own accepted set; independent registrars never
/// observe each other's registrations. The set only ever grows.
#[derive(Debug, Default)]
pub struct Registrar {
    config: RegistrarConfig,
    registered_ids: HashSet<i64>,
}

impl Registrar {
    /// Create an empty registrar with the default eligibility bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registrar with custom eligibility bounds.
    pub fn with_config(config: RegistrarConfig) -> Self {
        Self {
            config,
            registered_ids: HashSet::new(),
        }
    }

    /// Decide whether `candidate` may be registered, and register them if so.
    ///
    /// Checks run in a fixed order and the first failure decides the outcome:
    /// absence and identifier, then age range, liveness, adulthood, and finally
    /// uniqueness. The accepted set is modified only when the result is
    /// [`RegisterResult::Valid`].
    pub fn register_voter(&mut self, candidate: Option<&Candidate>) -> RegisterResult {
        let attempt = AttemptId::next();
        trace!("->reg{attempt} id={:?}", candidate.map(Candidate::id));

        let result = self.evaluate(candidate);
        match result {
            RegisterResult::Valid => info!("<-reg{attempt} {result:?}: {result}"),
            _ => debug!("<-reg{attempt} {result:?}: {result}"),
        }
        result
    }

    fn evaluate(&mut self, candidate: Option<&Candidate>) -> RegisterResult {
        let Some(candidate) = candidate else {
            return RegisterResult::Invalid;
        };

        if candidate.id() < self.config.min_id() {
            return RegisterResult::Invalid;
        }

        let age = candidate.age();
        if age <= 0 || age > self.config.max_age() {
            return RegisterResult::InvalidAge;
        }

        // Liveness is checked first so a dead minor reports as dead.
        if !candidate.is_alive() {
            return RegisterResult::Dead;
        }
        if age < self.config.adult_age() {
            return RegisterResult::Underage;
        }

        // Check and insert in one step.
        if !self.registered_ids.insert(candidate.id()) {
            return RegisterResult::Duplicated;
        }
        RegisterResult::Valid
    }

    /// Has this identifier already been accepted?
    pub fn is_registered(&self, id: i64) -> bool {
        self.registered_ids.contains(&id)
    }

    /// Number of accepted identifiers.
    pub fn len(&self) -> usize {
        self.registered_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_ids.is_empty()
    }

    /// Accepted identifiers, in no particular order.
    pub fn registered_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.registered_ids.iter().copied()
    }

    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }
}

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;

/// Logging config shipped at the repository root.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yaml";

/// Initialise `log4rs` from a YAML config file.
///
/// This may only succeed once per process, since it installs the global logger.
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    log4rs::init_file(path, Default::default())?;
    info!("Initialised logging");
    Ok(())
}

/// Sequence number of a registration attempt, shared by every registrar in
/// the process. Ties a `->reg` trace line to the `<-reg` outcome line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct AttemptId(pub usize);

static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

impl AttemptId {
    /// Number the next registration attempt.
    pub fn next() -> Self {
        Self(ATTEMPTS.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for AttemptId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;

    #[test]
    fn attempt_ids_increase() {
        let first = AttemptId::next();
        let second = AttemptId::next();
        assert!(second > first);
        assert_eq!(first.to_string(), first.0.to_string());
    }

    #[test]
    fn shipped_config_parses() {
        let config = log4rs::config::load_config_file(DEFAULT_LOG_CONFIG, Default::default())
            .expect("log4rs.yaml should be a valid log4rs config");
        assert!(config
            .loggers()
            .iter()
            .any(|logger| logger.name() == "voter_registrar"));
    }

    #[test]
    fn missing_config_file() {
        let result = init("this/file/does/not/exist.yaml");
        assert!(matches!(result, Err(Error::Logging(_))));
    }
}

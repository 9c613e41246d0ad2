mod candidate;
mod outcome;

pub use candidate::{Candidate, Gender};
pub use outcome::RegisterResult;

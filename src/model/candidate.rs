use serde::{Deserialize, Serialize};

/// Declared gender of a candidate. Never consulted by eligibility rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unidentified,
}

/// A person submitted for registration.
///
/// Nothing is checked on construction; all eligibility rules are applied by
/// [`crate::Registrar::register_voter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name.
    name: String,
    /// Civil identifier, intended to be unique per person.
    id: i64,
    /// Age in years.
    age: i32,
    gender: Gender,
    alive: bool,
}

impl Candidate {
    pub fn new(name: impl Into<String>, id: i64, age: i32, gender: Gender, alive: bool) -> Self {
        Self {
            name: name.into(),
            id,
            age,
            gender,
            alive,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Candidate {
        pub fn example() -> Self {
            Self::new("Ana", 1, 30, Gender::Female, true)
        }

        pub fn example_with(id: i64, age: i32, alive: bool) -> Self {
            Self::new("Example Voter", id, age, Gender::Unidentified, alive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_does_not_validate() {
        let candidate = Candidate::new("", -7, 500, Gender::Male, false);
        assert_eq!(candidate.name(), "");
        assert_eq!(candidate.id(), -7);
        assert_eq!(candidate.age(), 500);
        assert_eq!(candidate.gender(), Gender::Male);
        assert!(!candidate.is_alive());
    }

    #[test]
    fn deserialize_from_json() {
        let json = r#"{
            "name": "Juan",
            "id": 2,
            "age": 18,
            "gender": "Male",
            "alive": true
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate, Candidate::new("Juan", 2, 18, Gender::Male, true));

        let bad_gender = json.replace("\"Male\"", "\"Robot\"");
        assert!(serde_json::from_str::<Candidate>(&bad_gender).is_err());
    }
}

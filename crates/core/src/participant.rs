use serde::{Deserialize, Serialize};

/// Origin tag recording which upload source a record came from. Closed enum,
/// serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Male,
    Female,
}

impl Category {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// A raffle entrant: a name (the dedup key), a ticket weight (always `>= 1`),
/// and the category tag of the source it was imported from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub weight: u32,
    pub category: Category,
}

impl Participant {
    pub fn new(name: impl Into<String>, weight: u32, category: Category) -> Self {
        Self {
            name: name.into(),
            weight,
            category,
        }
    }
}

use serde::{Deserialize, Serialize};

/// One pet entry. `name` is the registry key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    pub name: String,
    pub species: String,
    pub owner: String,
}

impl PetRecord {
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            owner: owner.into(),
        }
    }
}

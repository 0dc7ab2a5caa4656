use crate::config::cli::LocalStorage;
use crate::core::{PetRecord, Storage};
use crate::utils::error::{PetError, Result};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// Ordered collection of pet records keyed by name.
///
/// Insertion order is preserved. `add` refuses a name that is already
/// present; `load` replaces the whole sequence with whatever the file holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetRegistry {
    pets: Vec<PetRecord>,
}

impl PetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        species: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<()> {
        let record = PetRecord::new(name, species, owner);

        if self.contains(&record.name) {
            tracing::debug!("Rejected duplicate pet name: {}", record.name);
            return Err(PetError::DuplicateName { name: record.name });
        }

        tracing::debug!(
            "Adding pet {} ({}) owned by {}",
            record.name,
            record.species,
            record.owner
        );
        self.pets.push(record);
        Ok(())
    }

    /// Removes every record named `name`. Missing names are ignored.
    pub fn delete(&mut self, name: &str) {
        let before = self.pets.len();
        self.pets.retain(|pet| pet.name != name);

        let removed = before - self.pets.len();
        if removed > 0 {
            tracing::debug!("Deleted {} record(s) named {}", removed, name);
        } else {
            tracing::debug!("No pet named {} to delete", name);
        }
    }

    pub fn get_owner(&self, name: &str) -> Option<&str> {
        self.pets
            .iter()
            .find(|pet| pet.name == name)
            .map(|pet| pet.owner.as_str())
    }

    pub fn get_all_species(&self) -> BTreeSet<&str> {
        self.pets.iter().map(|pet| pet.species.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pets.iter().any(|pet| pet.name == name)
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn records(&self) -> &[PetRecord] {
        &self.pets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PetRecord> {
        self.pets.iter()
    }

    /// Names that appear more than once, in order of their second occurrence.
    ///
    /// `add` never produces these, but a hand-edited file passed to `load` can.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for pet in &self.pets {
            let name = pet.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.pets)?)
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        let pets: Vec<PetRecord> = serde_json::from_slice(data)?;
        Ok(Self { pets })
    }

    pub fn save(&self, destination: impl AsRef<Path>) -> Result<()> {
        self.save_to(&LocalStorage::default(), destination.as_ref())
    }

    pub fn load(&mut self, source: impl AsRef<Path>) -> Result<()> {
        self.load_from(&LocalStorage::default(), source.as_ref())
    }

    pub fn save_to<S: Storage>(&self, storage: &S, destination: &Path) -> Result<()> {
        let data = self.to_json()?;
        storage.write_file(destination, &data)?;

        tracing::info!(
            "Saved {} pet(s) to {}",
            self.pets.len(),
            destination.display()
        );
        Ok(())
    }

    /// Replaces the in-memory records with the contents of `source`.
    ///
    /// The file is parsed completely before anything is replaced, so a read or
    /// parse failure leaves the registry as it was.
    pub fn load_from<S: Storage>(&mut self, storage: &S, source: &Path) -> Result<()> {
        let data = storage.read_file(source)?;
        let loaded = Self::from_json(&data)?;

        let duplicates = loaded.duplicate_names();
        if !duplicates.is_empty() {
            tracing::warn!(
                "Loaded data from {} contains duplicate pet names: {}",
                source.display(),
                duplicates.join(", ")
            );
        }

        tracing::info!("Loaded {} pet(s) from {}", loaded.len(), source.display());
        *self = loaded;
        Ok(())
    }
}

impl FromIterator<PetRecord> for PetRegistry {
    fn from_iter<I: IntoIterator<Item = PetRecord>>(iter: I) -> Self {
        Self {
            pets: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PetRegistry {
    type Item = &'a PetRecord;
    type IntoIter = std::slice::Iter<'a, PetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pets.iter()
    }
}

use neighborhood_pets::{PetError, PetRecord, PetRegistry};
use tempfile::TempDir;

#[test]
fn test_neighborhood_walkthrough() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("pets.json");

    let mut registry = PetRegistry::new();
    registry.add("Rex", "Dog", "Alice").unwrap();
    registry.add("Milo", "Cat", "Bob").unwrap();

    assert_eq!(registry.get_owner("Rex"), Some("Alice"));

    let species = registry.get_all_species();
    assert_eq!(species.len(), 2);
    assert!(species.contains("Dog"));
    assert!(species.contains("Cat"));

    registry.delete("Rex");
    assert_eq!(registry.get_owner("Rex"), None);

    registry.save(&data_file).unwrap();

    let mut reloaded = PetRegistry::new();
    reloaded.load(&data_file).unwrap();
    assert_eq!(reloaded.records(), &[PetRecord::new("Milo", "Cat", "Bob")]);
}

#[test]
fn test_duplicate_add_keeps_original_record() {
    let mut registry = PetRegistry::new();
    registry.add("Rex", "Dog", "Alice").unwrap();

    let result = registry.add("Rex", "Cat", "Bob");
    assert!(matches!(result, Err(PetError::DuplicateName { ref name }) if name == "Rex"));

    let rexes: Vec<&PetRecord> = registry.iter().filter(|p| p.name == "Rex").collect();
    assert_eq!(rexes, vec![&PetRecord::new("Rex", "Dog", "Alice")]);
}

#[test]
fn test_size_matches_distinct_adds() {
    let mut registry = PetRegistry::new();
    for i in 0..25 {
        registry
            .add(format!("Pet {}", i), "Hamster", format!("Owner {}", i % 4))
            .unwrap();
    }

    assert_eq!(registry.len(), 25);
    assert_eq!(registry.get_all_species().len(), 1);
    assert_eq!(registry.get_owner("Pet 9"), Some("Owner 1"));
}

#[test]
fn test_delete_only_touches_matching_name() {
    let mut registry = PetRegistry::new();
    registry.add("Rex", "Dog", "Alice").unwrap();
    registry.add("Milo", "Cat", "Bob").unwrap();
    registry.add("Kiwi", "Bird", "Carol").unwrap();

    registry.delete("Milo");

    let names: Vec<&str> = registry.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Rex", "Kiwi"]);

    registry.delete("Milo");
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_species_reflects_deletions() {
    let mut registry = PetRegistry::new();
    registry.add("Rex", "Dog", "Alice").unwrap();
    registry.add("Milo", "Cat", "Bob").unwrap();

    registry.delete("Milo");

    let species: Vec<&str> = registry.get_all_species().into_iter().collect();
    assert_eq!(species, vec!["Dog"]);
}

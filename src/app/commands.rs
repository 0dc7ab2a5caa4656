use crate::config::Command;
use crate::core::registry::PetRegistry;
use crate::utils::error::{PetError, Result};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Loads `data_file`. A data file that does not exist yet is an empty registry.
pub fn open_registry(data_file: &Path) -> Result<PetRegistry> {
    let mut registry = PetRegistry::new();
    match registry.load(data_file) {
        Ok(()) => Ok(registry),
        Err(PetError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(
                "📁 {} does not exist yet, starting with an empty registry",
                data_file.display()
            );
            Ok(registry)
        }
        Err(e) => Err(e),
    }
}

/// Runs one command against the registry stored at `data_file`, writing
/// user-facing output to `out`. Mutating commands save the file afterwards.
pub fn run_command<W: Write>(command: &Command, data_file: &Path, out: &mut W) -> Result<()> {
    let mut registry = open_registry(data_file)?;

    match command {
        Command::Add {
            name,
            species,
            owner,
        } => {
            registry.add(name.as_str(), species.as_str(), owner.as_str())?;
            writeln!(out, "✅ Added {} the {} (owner: {})", name, species, owner)?;
        }
        Command::Delete { name } => {
            let existed = registry.contains(name);
            registry.delete(name);
            if existed {
                writeln!(out, "✅ Deleted {}", name)?;
            } else {
                writeln!(out, "No pet named {}", name)?;
            }
        }
        Command::Owner { name } => match registry.get_owner(name) {
            Some(owner) => writeln!(out, "{}", owner)?,
            None => writeln!(out, "No pet named {}", name)?,
        },
        Command::Species => {
            for species in registry.get_all_species() {
                writeln!(out, "{}", species)?;
            }
        }
        Command::List => {
            for pet in &registry {
                writeln!(out, "{}\t{}\t{}", pet.name, pet.species, pet.owner)?;
            }
        }
    }

    if command.mutates() {
        registry.save(data_file)?;
    }

    Ok(())
}

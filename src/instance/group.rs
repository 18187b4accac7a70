//! Instance groups: a directory of instances plus their solutions file.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

use super::loader::{load_instance, load_solutions, LoadWarning};
use super::model::TspInstance;
use crate::error::Error;

/// An instance paired with its known-optimal cost.
#[derive(Debug, Clone)]
pub struct LoadedInstance {
    pub instance: TspInstance,
    pub optimal_cost: i64,
    pub warnings: Vec<LoadWarning>,
}

/// A named collection of instance files sharing a directory and a
/// companion solutions file.
///
/// Invariant enforced by [`InstanceGroup::load`]: every instance file in
/// the group must resolve to an entry in the solutions file, keyed by
/// file stem. A failed lookup means the two files are out of sync and is
/// fatal to the whole load.
#[derive(Debug, Clone)]
pub struct InstanceGroup {
    pub directory: PathBuf,
    pub solutions_file: String,
    pub instance_files: Vec<String>,
}

impl InstanceGroup {
    /// Builds a group from an explicit file list.
    pub fn new(
        directory: impl Into<PathBuf>,
        solutions_file: impl Into<String>,
        instance_files: Vec<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            solutions_file: solutions_file.into(),
            instance_files,
        }
    }

    /// Builds a group by scanning `directory` for `*.txt` instance files,
    /// excluding the solutions file itself. Files are sorted so group
    /// contents are stable across platforms.
    pub fn from_directory(
        directory: impl Into<PathBuf>,
        solutions_file: impl Into<String>,
    ) -> Result<Self, Error> {
        let directory = directory.into();
        let solutions_file = solutions_file.into();
        let entries = fs::read_dir(&directory).map_err(|e| Error::resource(&directory, e))?;

        let mut instance_files: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension() == Some(OsStr::new("txt")))
            .filter_map(|path| path.file_name().and_then(OsStr::to_str).map(String::from))
            .filter(|file| file != &solutions_file)
            .collect();
        instance_files.sort();

        Ok(Self {
            directory,
            solutions_file,
            instance_files,
        })
    }

    /// Loads every instance in the group, pairing each with its optimal
    /// cost from the solutions file.
    ///
    /// Per-edge load warnings are logged and kept on the returned
    /// instances; any other defect aborts the whole load.
    pub fn load(&self) -> Result<Vec<LoadedInstance>, Error> {
        let solutions = load_solutions(&self.directory.join(&self.solutions_file))?;

        let mut loaded = Vec::with_capacity(self.instance_files.len());
        for file in &self.instance_files {
            let path = self.directory.join(file);
            let (instance, warnings) = load_instance(&path)?;
            for warning in &warnings {
                tracing::warn!("{}: {warning}", path.display());
            }

            let stem = file.split('.').next().unwrap_or(file);
            let optimal_cost = *solutions.get(stem).ok_or_else(|| {
                Error::data(format!(
                    "no optimal cost for {} (stem {stem:?}) in {}/{} — instance and solutions files are out of sync",
                    path.display(),
                    self.directory.display(),
                    self.solutions_file
                ))
            })?;

            loaded.push(LoadedInstance {
                instance,
                optimal_cost,
                warnings,
            });
        }
        Ok(loaded)
    }
}

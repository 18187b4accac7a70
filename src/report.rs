//! Result-table output.
//!
//! One sweep produces one CSV file named after the analysis run, the
//! swept parameter, and the repetition count, e.g.
//! `simulated_annealing-initial_temperature-5reps.csv`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::sweep::AnalysisPoint;

/// Writes the aggregated table for one analysis run and returns the path
/// of the file written.
pub fn write_analysis(
    directory: &Path,
    analysis_name: &str,
    repetitions: usize,
    points: &[AnalysisPoint],
) -> Result<PathBuf, Error> {
    let first = points
        .first()
        .ok_or_else(|| Error::config("nothing to write: the sweep produced no analysis points"))?;

    fs::create_dir_all(directory).map_err(|e| Error::resource(directory, e))?;
    let path = directory.join(format!(
        "{analysis_name}-{}-{repetitions}reps.csv",
        first.parameter_name
    ));

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .map_err(|e| Error::resource(&path, io::Error::other(e)))?;
    for point in points {
        writer
            .serialize(point)
            .map_err(|e| Error::resource(&path, io::Error::other(e)))?;
    }
    writer
        .flush()
        .map_err(|e| Error::resource(&path, e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: f64) -> AnalysisPoint {
        AnalysisPoint {
            parameter_name: "initial_temperature".to_string(),
            parameter_value: value,
            instance_size: 10,
            optimal_cost: 212,
            best_cost: 230,
            mean_cost: 240.5,
            mean_time_ms: 1.25,
        }
    }

    #[test]
    fn test_write_analysis_round_trip() {
        let dir = std::env::temp_dir()
            .join("tsp-anneal-tests")
            .join(format!("report-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let path =
            write_analysis(&dir, "simulated_annealing", 5, &[point(1.0), point(2.0)]).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "simulated_annealing-initial_temperature-5reps.csv"
        );

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("parameter_name"));
        assert!(header.contains("mean_time_ms"));
        assert_eq!(lines.count(), 2);
        assert!(content.contains("initial_temperature"));
        assert!(content.contains("212"));
    }

    #[test]
    fn test_empty_points_rejected() {
        let dir = std::env::temp_dir().join("tsp-anneal-tests-empty");
        let err = write_analysis(&dir, "simulated_annealing", 5, &[]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

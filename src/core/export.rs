use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::trajectory::TrajectorySample;
use crate::error::OutputError;

pub const CSV_FILE_NAME: &str = "nerf_dart_trajectory.csv";
pub const CSV_HEADER: &str = "Time (s),X Position (m),Y Position (m)";

// Shortest representation that parses back to the same f64.
fn csv_row(sample: &TrajectorySample) -> String {
    format!("{},{},{}", sample.time_s, sample.x_m, sample.y_m)
}

pub fn write_csv<W: Write>(mut writer: W, samples: &[TrajectorySample]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for sample in samples {
        writeln!(writer, "{}", csv_row(sample))?;
    }
    writer.flush()
}

pub fn to_csv_string(samples: &[TrajectorySample]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + samples.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for sample in samples {
        out.push_str(&csv_row(sample));
        out.push('\n');
    }
    out
}

/// Writes the trajectory table to `path`, replacing any existing file.
pub fn export_csv(path: &Path, samples: &[TrajectorySample]) -> Result<(), OutputError> {
    let to_output_error = |source: io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_output_error)?;
    write_csv(BufWriter::new(file), samples).map_err(to_output_error)?;
    log::info!("wrote {} trajectory samples to {}", samples.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<TrajectorySample> {
        vec![
            TrajectorySample {
                time_s: 0.0,
                x_m: 0.0,
                y_m: 2.0,
            },
            TrajectorySample {
                time_s: 0.25,
                x_m: 12.5,
                y_m: 1.6875,
            },
        ]
    }

    #[test]
    fn table_has_header_and_one_row_per_sample() {
        let csv = to_csv_string(&samples());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Time (s),X Position (m),Y Position (m)",
                "0,0,2",
                "0.25,12.5,1.6875",
            ]
        );
    }

    #[test]
    fn writer_and_string_forms_agree() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &samples()).expect("writing to memory cannot fail");

        assert_eq!(String::from_utf8(buffer).unwrap(), to_csv_string(&samples()));
    }

    #[test]
    fn values_keep_full_precision() {
        let third = TrajectorySample {
            time_s: 1.0 / 3.0,
            x_m: 0.1 + 0.2,
            y_m: -0.0,
        };
        let csv = to_csv_string(&[third]);
        let row = csv.lines().nth(1).expect("one data row");
        let parsed: Vec<f64> = row.split(',').map(|v| v.parse().unwrap()).collect();

        assert_eq!(parsed, vec![1.0 / 3.0, 0.1 + 0.2, 0.0]);
    }

    #[test]
    fn export_reports_unwritable_path() {
        let path = Path::new("/nonexistent-dir-for-export-test/out.csv");

        let err = export_csv(path, &samples()).expect_err("directory does not exist");

        assert!(matches!(err, OutputError::Io { .. }));
        assert!(err.to_string().contains("out.csv"));
    }
}

// src/report.rs

use chrono::{DateTime, Utc};
use std::fmt;

use crate::constants::REPORT_HEAD_ROWS;
use crate::data_analysis::summary_stats::{describe_column, ColumnSummary};
use crate::data_input::log_data::{GazeSample, SampleFrame, NUMERIC_COLUMNS, TIME_COLUMN};

const NUMERIC_DTYPE: &str = "float64";
const TIME_DTYPE: &str = "datetime64[UTC]";
const CELL_WIDTH: usize = 14;

/// Column metadata for the `info` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub non_null: usize,
    pub dtype: &'static str,
}

/// Descriptive overview of a sample frame: structure, first rows and
/// per-column statistics. Rendered through `Display`.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub entries: usize,
    pub columns: Vec<ColumnInfo>,
    pub head: Vec<(GazeSample, DateTime<Utc>)>,
    pub summaries: Vec<(&'static str, ColumnSummary)>,
}

impl FrameReport {
    pub fn from_frame(frame: &SampleFrame) -> Self {
        let mut columns: Vec<ColumnInfo> = NUMERIC_COLUMNS
            .iter()
            .map(|&name| ColumnInfo {
                name,
                non_null: frame
                    .column(name)
                    .map(|c| c.iter().filter(|v| !v.is_nan()).count())
                    .unwrap_or(0),
                dtype: NUMERIC_DTYPE,
            })
            .collect();
        columns.push(ColumnInfo {
            name: TIME_COLUMN,
            non_null: frame.time.len(),
            dtype: TIME_DTYPE,
        });

        let head = (0..frame.len().min(REPORT_HEAD_ROWS))
            .filter_map(|i| frame.row(i).map(|row| (row, frame.time[i])))
            .collect();

        let summaries = NUMERIC_COLUMNS
            .iter()
            .map(|&name| {
                let summary = frame
                    .column(name)
                    .map(describe_column)
                    .unwrap_or_else(ColumnSummary::empty);
                (name, summary)
            })
            .collect();

        Self {
            entries: frame.len(),
            columns,
            head,
            summaries,
        }
    }

    fn fmt_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<SampleFrame>")?;
        if self.entries == 0 {
            writeln!(f, "RangeIndex: 0 entries")?;
        } else {
            writeln!(f, "RangeIndex: {} entries, 0 to {}", self.entries, self.entries - 1)?;
        }
        writeln!(f, "Data columns (total {} columns):", self.columns.len())?;
        writeln!(f, " {:<3} {:<15} {:<15} {}", "#", "Column", "Non-Null Count", "Dtype")?;
        writeln!(f, " {:<3} {:<15} {:<15} {}", "---", "------", "--------------", "-----")?;
        for (idx, col) in self.columns.iter().enumerate() {
            writeln!(
                f,
                " {:<3} {:<15} {:<15} {}",
                idx,
                col.name,
                format!("{} non-null", col.non_null),
                col.dtype
            )?;
        }
        Ok(())
    }

    fn fmt_head(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<4}", "")?;
        for name in NUMERIC_COLUMNS {
            write!(f, "{:>w$}", name, w = CELL_WIDTH)?;
        }
        writeln!(f, "  {}", TIME_COLUMN)?;
        for (idx, (row, time)) in self.head.iter().enumerate() {
            write!(f, "{:<4}", idx)?;
            let values = [row.t, row.x, row.y, row.z, row.radius, row.theta_deg, row.xyz_magnitude];
            for value in values {
                write!(f, "{:>w$}", format_cell(value), w = CELL_WIDTH)?;
            }
            writeln!(f, "  {}", time.format("%Y-%m-%d %H:%M:%S%.6f"))?;
        }
        Ok(())
    }

    fn fmt_describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6}", "")?;
        for (name, _) in &self.summaries {
            write!(f, "{:>w$}", name, w = CELL_WIDTH)?;
        }
        writeln!(f)?;

        let rows: [(&str, fn(&ColumnSummary) -> f64); 8] = [
            ("count", |s| s.count as f64),
            ("mean", |s| s.mean),
            ("std", |s| s.std),
            ("min", |s| s.min),
            ("25%", |s| s.q25),
            ("50%", |s| s.median),
            ("75%", |s| s.q75),
            ("max", |s| s.max),
        ];
        for (stat_name, stat) in rows {
            write!(f, "{:<6}", stat_name)?;
            for (_, summary) in &self.summaries {
                write!(f, "{:>w$}", format_cell(stat(summary)), w = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Six decimals, switching to scientific notation for very large values.
fn format_cell(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.abs() >= 1e7 {
        format!("{:.6e}", value)
    } else {
        format!("{:.6}", value)
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== info ===")?;
        self.fmt_info(f)?;
        writeln!(f)?;
        writeln!(f, "=== head ===")?;
        self.fmt_head(f)?;
        writeln!(f)?;
        writeln!(f, "=== describe ===")?;
        self.fmt_describe(f)
    }
}

/// Builds the report for `frame` and prints it to stdout.
pub fn print_report(frame: &SampleFrame) {
    println!("{}", FrameReport::from_frame(frame));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::log_parser::parse_log_reader;

    const LOG: &str = r#"{"t": 1.0, "x": 1.0, "y": 0.0, "z": 0.5, "radius": 1.0, "theta_deg": 0.0, "xyz_magnitude": 1.1}
{"t": 2.0, "x": 2.0, "y": 0.0, "z": 0.5, "radius": 2.0, "theta_deg": 10.0, "xyz_magnitude": 2.1}
{"t": 3.0, "x": 3.0, "y": 0.0, "z": 0.5, "radius": 3.0, "theta_deg": 20.0, "xyz_magnitude": 3.1}
{"t": 4.0, "x": 4.0, "y": 0.0, "z": 0.5, "radius": 4.0, "theta_deg": 30.0, "xyz_magnitude": 4.1}
"#;

    #[test]
    fn test_report_sections() {
        let frame = parse_log_reader(LOG.as_bytes()).unwrap();
        let report = FrameReport::from_frame(&frame);
        assert_eq!(report.entries, 4);
        assert_eq!(report.columns.len(), 8);
        assert_eq!(report.columns[7].dtype, TIME_DTYPE);
        assert!(report.columns.iter().all(|c| c.non_null == 4));
        assert_eq!(report.head.len(), 4);

        let (name, x_summary) = report.summaries[1];
        assert_eq!(name, "x");
        assert_eq!(x_summary.q25, 1.75);

        let text = report.to_string();
        assert!(text.contains("RangeIndex: 4 entries, 0 to 3"));
        assert!(text.contains("1.750000"));
        assert!(text.contains("1970-01-01 00:00:01.000000"));
    }

    #[test]
    fn test_head_is_capped() {
        let log: String = (0..12)
            .map(|i| {
                format!(
                    "{{\"t\": {i}, \"x\": 0, \"y\": 0, \"z\": 0, \"radius\": 0, \"theta_deg\": 0, \"xyz_magnitude\": 0}}\n"
                )
            })
            .collect();
        let frame = parse_log_reader(log.as_bytes()).unwrap();
        assert_eq!(FrameReport::from_frame(&frame).head.len(), REPORT_HEAD_ROWS);
    }

    #[test]
    fn test_empty_frame_is_reported() {
        let frame = parse_log_reader("".as_bytes()).unwrap();
        let report = FrameReport::from_frame(&frame);
        assert_eq!(report.entries, 0);
        assert!(report.head.is_empty());
        let text = report.to_string();
        assert!(text.contains("RangeIndex: 0 entries"));
        assert!(text.contains("NaN"));
    }
}

// src/report.rs

//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::*;
use regionlab_domain::{Point, Predicate};
use regionlab_sampling::{Grid, PropagationMetrics, SolveOutcome};
use std::fmt::Write as _;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a point set; tables show a summary instead of every point.
    pub fn format_points(&self, points: &[Point]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(points)?),
            OutputFormat::Csv => Ok(points_csv(points)),
            OutputFormat::Table => Ok(self.format_points_table(points)),
        }
    }

    fn format_points_table(&self, points: &[Point]) -> String {
        if points.is_empty() {
            return self.colorize("No points found.", "yellow");
        }

        let finite: Vec<&Point> = points.iter().filter(|p| p.is_finite()).collect();
        let mut builder = Builder::default();
        builder.push_record(["Points", "Finite", "x range", "y range"]);

        let (x_range, y_range) = match range(&finite) {
            Some((min, max)) => (
                format!("[{:.4}, {:.4}]", min.x, max.x),
                format!("[{:.4}, {:.4}]", min.y, max.y),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        builder.push_record([
            points.len().to_string(),
            finite.len().to_string(),
            x_range,
            y_range,
        ]);

        styled(builder)
    }

    /// Format propagation metrics.
    pub fn format_metrics(&self, metrics: &PropagationMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(metrics)?),
            OutputFormat::Csv => {
                let mut out = String::from("metric,value\n");
                for (name, value) in metric_rows(metrics) {
                    if value.contains(',') {
                        let _ = writeln!(out, "{},\"{}\"", name, value);
                    } else {
                        let _ = writeln!(out, "{},{}", name, value);
                    }
                }
                Ok(out)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                for (name, value) in metric_rows(metrics) {
                    builder.push_record([name.to_string(), value]);
                }
                Ok(styled(builder))
            }
        }
    }

    /// Format the outcome of a single solve.
    pub fn format_outcome(&self, outcome: &SolveOutcome) -> Result<String> {
        let point = outcome.point();
        let status = outcome_status(outcome);

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "status": status,
                "x": point.x,
                "y": point.y,
                "iterations": outcome.iterations(),
            }))?),
            OutputFormat::Csv => Ok(format!(
                "status,x,y,iterations\n{},{},{},{}\n",
                status,
                point.x,
                point.y,
                outcome.iterations()
            )),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Status", "x", "y", "Iterations"]);
                builder.push_record([
                    status.to_string(),
                    point.x.to_string(),
                    point.y.to_string(),
                    outcome.iterations().to_string(),
                ]);
                let table = styled(builder);
                let color = match outcome {
                    SolveOutcome::Converged { .. } => "green",
                    SolveOutcome::MaxIterationsExceeded { .. } => "yellow",
                    SolveOutcome::NonFinite { .. } => "red",
                };
                Ok(format!("{}\n{}", table, self.colorize(status, color)))
            }
        }
    }

    /// Format a grid row by row, marking points accepted by `region`.
    pub fn format_grid(&self, grid: &Grid, region: &dyn Predicate) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<&[Point]> = grid.rows().collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "width": grid.width(),
                    "delta": grid.delta(),
                    "rows": rows,
                }))?)
            }
            OutputFormat::Csv => {
                let mut out = String::from("row,col,x,y,inside\n");
                for (i, row) in grid.rows().enumerate() {
                    for (j, p) in row.iter().enumerate() {
                        let _ = writeln!(out, "{},{},{},{},{}", i, j, p.x, p.y, region.holds(p.x, p.y));
                    }
                }
                Ok(out)
            }
            OutputFormat::Table => {
                let lines: Vec<String> = grid
                    .rows()
                    .map(|row| {
                        row.iter()
                            .map(|p| {
                                let text = p.to_string();
                                if region.holds(p.x, p.y) {
                                    self.colorize(&text, "green")
                                } else {
                                    text
                                }
                            })
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the effective configuration (TOML unless JSON is selected).
    pub fn format_config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table | OutputFormat::Csv => Ok(toml::to_string_pretty(config)?),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Points as `x,y` CSV with a header line.
pub fn points_csv(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 24 + 4);
    out.push_str("x,y\n");
    for p in points {
        let _ = writeln!(out, "{},{}", p.x, p.y);
    }
    out
}

fn outcome_status(outcome: &SolveOutcome) -> &'static str {
    match outcome {
        SolveOutcome::Converged { .. } => "converged",
        SolveOutcome::MaxIterationsExceeded { .. } => "max iterations exceeded",
        SolveOutcome::NonFinite { .. } => "non-finite",
    }
}

fn metric_rows(metrics: &PropagationMetrics) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("samples", metrics.samples.to_string()),
        ("converged", metrics.converged.to_string()),
        ("capped", metrics.capped.to_string()),
        ("non_finite", metrics.non_finite.to_string()),
        ("mean_solver_iterations", format!("{:.2}", metrics.mean_solver_iterations())),
        ("max_solver_iterations", metrics.max_solver_iterations.to_string()),
        ("within_hull", metrics.within_hull.to_string()),
        ("elapsed_ms", metrics.elapsed_ms.to_string()),
    ];
    if let Some(bounds) = metrics.bounds {
        rows.push(("x_range", format!("[{:.4}, {:.4}]", bounds.min_x, bounds.max_x)));
        rows.push(("y_range", format!("[{:.4}, {:.4}]", bounds.min_y, bounds.max_y)));
    }
    if let Some(mean) = metrics.mean() {
        rows.push(("mean", format!("({:.4}, {:.4})", mean.x, mean.y)));
    }
    rows
}

fn range(points: &[&Point]) -> Option<(Point, Point)> {
    let first = **points.first()?;
    Some(points.iter().fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionlab_domain::RegionClassifier;
    use regionlab_sampling::GridSampler;

    fn sample_points() -> Vec<Point> {
        vec![Point::new(1.0, -0.5), Point::new(-2.0, 3.0)]
    }

    #[test]
    fn test_json_points() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_points(&sample_points()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["x"], 1.0);
        assert_eq!(parsed[1]["y"], 3.0);
    }

    #[test]
    fn test_csv_points() {
        let formatter = Formatter::new(OutputFormat::Csv, false);
        let output = formatter.format_points(&sample_points()).unwrap();
        assert_eq!(output, "x,y\n1,-0.5\n-2,3\n");
    }

    #[test]
    fn test_table_points() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_points(&sample_points()).unwrap();
        assert!(output.contains("x range"));
        assert!(output.contains("[-2.0000, 1.0000]"));
    }

    #[test]
    fn test_empty_points() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_points(&[]).unwrap();
        assert!(output.contains("No points found"));
    }

    #[test]
    fn test_outcome_formats() {
        let outcome = SolveOutcome::Converged {
            point: Point::new(5.0, 7.0),
            iterations: 1,
        };

        let table = Formatter::new(OutputFormat::Table, false).format_outcome(&outcome).unwrap();
        assert!(table.contains("Iterations"));
        assert!(table.contains("converged"));

        let csv = Formatter::new(OutputFormat::Csv, false).format_outcome(&outcome).unwrap();
        assert_eq!(csv, "status,x,y,iterations\nconverged,5,7,1\n");
    }

    #[test]
    fn test_metrics_table() {
        let mut metrics = PropagationMetrics::new();
        metrics.record(
            &SolveOutcome::Converged {
                point: Point::new(0.5, 0.5),
                iterations: 12,
            },
            true,
        );

        let output = Formatter::new(OutputFormat::Table, false).format_metrics(&metrics).unwrap();
        assert!(output.contains("within_hull"));
        assert!(output.contains("12"));
        assert!(output.contains("[0.5000, 0.5000]"));
        assert!(output.contains("(0.5000, 0.5000)"));

        let csv = Formatter::new(OutputFormat::Csv, false).format_metrics(&metrics).unwrap();
        assert!(csv.starts_with("metric,value\nsamples,1\n"));
        assert!(csv.contains("\nx_range,\"[0.5000, 0.5000]\"\n"));
        assert!(csv.contains("\nmean,\"(0.5000, 0.5000)\"\n"));
    }

    #[test]
    fn test_grid_table() {
        let grid = GridSampler::new(-1.0, 1.0, 2).unwrap().sample();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_grid(&grid, &RegionClassifier::reference()).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "(-1, 1) (0, 1) (1, 1)");
    }

    #[test]
    fn test_config_as_toml() {
        let output = Formatter::new(OutputFormat::Table, false)
            .format_config(&Config::default())
            .unwrap();
        assert!(output.contains("[grid]"));
        assert!(output.contains("[settings]"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}

use std::io;
use std::path::PathBuf;
use std::process::Command;

use crate::series::{Series, shell_quote};

/// Everything the visualization backend needs for one render: axis bounds
/// plus the series list.
#[derive(Clone, Debug)]
pub struct PlotRequest<'a> {
    pub min_n: usize,
    pub max_n: usize,
    pub y_min: f64,
    pub y_max: f64,
    pub series: &'a [Series],
}

impl PlotRequest<'_> {
    /// Positional argument vector:
    /// `MinN MaxN yMin yMax seriesCount (coords label) x seriesCount`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            self.min_n.to_string(),
            self.max_n.to_string(),
            self.y_min.to_string(),
            self.y_max.to_string(),
            self.series.len().to_string(),
        ];
        for series in self.series {
            args.push(series.coords());
            args.push(series.label.clone());
        }
        args
    }
}

pub trait RenderSink {
    /// Hands the series to the backend; returns the backend's exit code.
    fn render(&mut self, request: &PlotRequest<'_>) -> io::Result<i32>;
}

/// Spawns the configured plotting executable and waits for it to exit.
#[derive(Clone, Debug)]
pub struct CommandPlotter {
    program: PathBuf,
}

impl CommandPlotter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Quoted single-line rendering of the invocation, for logs.
    pub fn command_line(&self, request: &PlotRequest<'_>) -> String {
        let mut line = self.program.display().to_string();
        for arg in request.to_args() {
            line.push(' ');
            line.push_str(&shell_quote(&arg));
        }
        line
    }
}

impl RenderSink for CommandPlotter {
    fn render(&mut self, request: &PlotRequest<'_>) -> io::Result<i32> {
        let status = Command::new(&self.program)
            .args(request.to_args())
            .status()?;
        // Killed-by-signal has no exit code; fold it into plain failure.
        Ok(status.code().unwrap_or(1))
    }
}

/// Fallback sink when no plotter is configured: prints the argument vector
/// line by line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutPlotter;

impl RenderSink for StdoutPlotter {
    fn render(&mut self, request: &PlotRequest<'_>) -> io::Result<i32> {
        for arg in request.to_args() {
            println!("{arg}");
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_series() -> Vec<Series> {
        vec![
            Series {
                label: "Insertion Sort (worst-case)".into(),
                points: vec![(4, 0.001234)],
            },
            Series {
                label: "Quick Sort".into(),
                points: vec![(4, 0.000987)],
            },
        ]
    }

    #[test]
    fn argument_vector_is_positional() {
        let series = two_series();
        let request = PlotRequest {
            min_n: 4,
            max_n: 50,
            y_min: 0.0,
            y_max: 1.0,
            series: &series,
        };

        let args = request.to_args();
        assert_eq!(args[..5], ["4", "50", "0", "1", "2"]);
        assert_eq!(args[5], "[[4,0.001234]]");
        assert_eq!(args[6], "Insertion Sort (worst-case)");
        assert_eq!(args[7], "[[4,0.000987]]");
        assert_eq!(args[8], "Quick Sort");
        assert_eq!(args.len(), 9);
    }

    #[test]
    fn command_line_is_quoted() {
        let series = vec![Series {
            label: "Quick \"Sort\"".into(),
            points: vec![(2, 0.5)],
        }];
        let request = PlotRequest {
            min_n: 2,
            max_n: 2,
            y_min: 0.0,
            y_max: 1.0,
            series: &series,
        };

        let plotter = CommandPlotter::new("/usr/bin/show_graphs");
        assert_eq!(
            plotter.command_line(&request),
            "/usr/bin/show_graphs \"2\" \"2\" \"0\" \"1\" \"1\" \"[[2,0.500000]]\" \"Quick \\\"Sort\\\"\""
        );
    }

    #[test]
    fn stdout_plotter_reports_success() {
        let series = two_series();
        let request = PlotRequest {
            min_n: 4,
            max_n: 50,
            y_min: 0.0,
            y_max: 1.0,
            series: &series,
        };
        assert_eq!(StdoutPlotter.render(&request).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn command_plotter_propagates_exit_codes() {
        let series = two_series();
        let request = PlotRequest {
            min_n: 4,
            max_n: 50,
            y_min: 0.0,
            y_max: 1.0,
            series: &series,
        };

        assert_eq!(
            CommandPlotter::new("/bin/true").render(&request).unwrap(),
            0
        );
        assert_eq!(
            CommandPlotter::new("/bin/false").render(&request).unwrap(),
            1
        );
    }
}

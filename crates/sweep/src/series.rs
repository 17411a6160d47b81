use std::fmt::Write as _;

/// One plotted line: a label plus `(size, seconds)` points in sweep order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(usize, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, size: usize, seconds: f64) {
        self.points.push((size, seconds));
    }

    pub fn max_time(&self) -> f64 {
        self.points.iter().fold(0.0, |acc, &(_, t)| acc.max(t))
    }

    pub fn coords(&self) -> String {
        format_coords(&self.points)
    }
}

/// The literal coordinate contract of the plotting tool: bracketed,
/// comma-separated `[size,time]` pairs with times as fixed-point decimals
/// with six digits, e.g. `[[4,0.001234],[10,0.004567]]`.
pub fn format_coords(points: &[(usize, f64)]) -> String {
    let mut out = String::from("[");
    for (i, &(size, seconds)) in points.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "[{size},{seconds:.6}]");
    }
    out.push(']');
    out
}

/// Wraps `arg` in double quotes, escaping embedded double quotes with a
/// backslash.
pub fn shell_quote(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    for c in arg.chars() {
        if c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

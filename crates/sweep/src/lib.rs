pub mod measure;
pub mod plot;
pub mod schedule;
pub mod series;

pub use measure::{UnsortedOutput, time_sort};
pub use plot::{CommandPlotter, PlotRequest, RenderSink, StdoutPlotter};
pub use schedule::sample_sizes;
pub use series::{Series, format_coords, shell_quote};

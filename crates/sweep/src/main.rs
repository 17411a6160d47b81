use std::process;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::info;

use hybrid_sort::DEFAULT_INSERTION_THRESHOLD;
use inputs::{median3_killer, reverse_sorted};
use sweep::{
    CommandPlotter, PlotRequest, RenderSink, Series, StdoutPlotter, sample_sizes, time_sort,
};

const Y_HEADROOM: f64 = 1.10;

fn main() {
    env_logger::init();
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("sweep: {err:#}");
            process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let matches = Command::new("sweep")
        .about("Times insertion sort and hybrid quicksort on engineered worst-case inputs")
        .arg(
            Arg::new("min-n")
                .long("min-n")
                .value_name("N")
                .takes_value(true)
                .default_value("4")
                .help("smallest sample size"),
        )
        .arg(
            Arg::new("max-n")
                .long("max-n")
                .value_name("N")
                .takes_value(true)
                .default_value("50")
                .help("largest sample size"),
        )
        .arg(
            Arg::new("points")
                .long("points")
                .value_name("COUNT")
                .takes_value(true)
                .help("number of swept sizes; defaults to one per integer size"),
        )
        .arg(
            Arg::new("repeats")
                .long("repeats")
                .value_name("R")
                .takes_value(true)
                .default_value("20000")
                .help("timed repetitions per size"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_name("LEN")
                .takes_value(true)
                .help("insertion fallback threshold of the hybrid quicksort"),
        )
        .arg(
            Arg::new("plotter")
                .long("plotter")
                .value_name("PATH")
                .takes_value(true)
                .help("plotting executable; series are printed to stdout when absent"),
        )
        .get_matches();

    let min_n = parse_arg(&matches, "min-n")?;
    let max_n = parse_arg(&matches, "max-n")?;
    let repeats = parse_arg(&matches, "repeats")?;
    let points = match matches.value_of("points") {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("--points expects a count, got {raw:?}"))?,
        None => max_n.saturating_sub(min_n) + 1,
    };
    let threshold = match matches.value_of("threshold") {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("--threshold expects a length, got {raw:?}"))?,
        None => DEFAULT_INSERTION_THRESHOLD,
    };

    let sizes = sample_sizes(min_n, max_n, points);
    info!(
        "sweeping {} sizes in [{min_n}, {max_n}], {repeats} repeats each",
        sizes.len()
    );

    let mut insertion_series = Series::new("Insertion Sort (worst-case)");
    let mut quicksort_series = Series::new("Quick Sort");

    for &n in &sizes {
        let reverse = reverse_sorted(n);
        let insertion_total = time_sort(&reverse, repeats, "insertion_sort", |data| {
            hybrid_sort::insertion_sort(data)
        })
        .context("sweep stopped, measurements after a sorting failure are meaningless")?;

        let killer = median3_killer(n);
        let quicksort_total = time_sort(&killer, repeats, "quicksort_hybrid", |data| {
            hybrid_sort::quicksort_hybrid_with_threshold(data, threshold)
        })
        .context("sweep stopped, measurements after a sorting failure are meaningless")?;

        info!(
            "n={n}: insertion {:.6}s, quicksort {:.6}s",
            insertion_total.as_secs_f64(),
            quicksort_total.as_secs_f64()
        );
        insertion_series.push(n, insertion_total.as_secs_f64());
        quicksort_series.push(n, quicksort_total.as_secs_f64());
    }

    let series = [insertion_series, quicksort_series];
    let mut y_max = series.iter().map(Series::max_time).fold(0.0, f64::max) * Y_HEADROOM;
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let request = PlotRequest {
        min_n,
        max_n,
        y_min: 0.0,
        y_max,
        series: &series,
    };

    match matches.value_of("plotter") {
        Some(program) => {
            let mut plotter = CommandPlotter::new(program);
            info!("executing: {}", plotter.command_line(&request));
            plotter
                .render(&request)
                .context("failed to launch the plotting tool")
        }
        None => Ok(StdoutPlotter.render(&request)?),
    }
}

fn parse_arg(matches: &clap::ArgMatches, name: &str) -> Result<usize> {
    let raw = matches
        .value_of(name)
        .with_context(|| format!("--{name} has no value"))?;
    raw.parse::<usize>()
        .with_context(|| format!("--{name} expects an unsigned integer, got {raw:?}"))
}

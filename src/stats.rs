//! # Statistics Module
//!
//! Collection and reporting of solve metrics. Each solve produces a
//! [`SolveStats`] snapshot; the benchmark command aggregates many snapshots
//! into nearest-rank percentiles and renders both forms as tables.

use std::fmt::{self, Display};

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table, modifiers, presets};

/// Metrics of a single solve.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveStats {
    /// Nodes popped from the frontier and expanded.
    pub nodes_expanded: usize,
    /// Successor states produced, including discarded duplicates.
    pub nodes_generated: usize,
    /// Successor states accepted into the frontier.
    pub nodes_enqueued: usize,
    /// Successor states discarded as already seen.
    pub duplicates_pruned: usize,
    /// Deepest node popped during the search.
    pub max_depth: u32,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
    /// Number of moves in the solution found.
    pub solution_moves: usize,
    /// Wall-clock time of the solve in milliseconds.
    pub duration_ms: u128,
}

impl Display for SolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded={}, generated={}, enqueued={}, pruned={}, max_depth={}, peak_frontier={}, moves={}, time={}ms",
            self.nodes_expanded,
            self.nodes_generated,
            self.nodes_enqueued,
            self.duplicates_pruned,
            self.max_depth,
            self.peak_frontier,
            self.solution_moves,
            self.duration_ms,
        )
    }
}

/// A metric summarized over many runs by nearest-rank percentiles.
#[derive(Clone, Copy, Debug, Default)]
pub struct Percentiles {
    pub p50: u64,
    pub p90: u64,
    pub p99: u64,
    pub max: u64,
}

impl Percentiles {
    /// Build the summary from a slice and a projection function.
    fn from_slice<T, F>(items: &[T], f: F) -> Self
    where
        F: Fn(&T) -> u64,
    {
        let count = items.len();
        if count == 0 {
            return Percentiles::default();
        }

        let mut values: Vec<u64> = items.iter().map(f).collect();
        values.sort_unstable();

        // Nearest rank: ceil(p/100 * count), 1-based, clamped to the slice.
        let at = |p: usize| -> u64 {
            let rank = (p * count).div_ceil(100);
            values[rank.saturating_sub(1).min(count - 1)]
        };

        Percentiles {
            p50: at(50),
            p90: at(90),
            p99: at(99),
            max: values[count - 1],
        }
    }
}

/// Aggregate over a batch of solves, one [`Percentiles`] per metric.
#[derive(Clone, Debug, Default)]
pub struct StatsSummary {
    pub runs: usize,
    pub nodes_expanded: Percentiles,
    pub nodes_generated: Percentiles,
    pub nodes_enqueued: Percentiles,
    pub duplicates_pruned: Percentiles,
    pub max_depth: Percentiles,
    pub peak_frontier: Percentiles,
    pub solution_moves: Percentiles,
    pub duration_ms: Percentiles,
}

impl From<&[SolveStats]> for StatsSummary {
    fn from(value: &[SolveStats]) -> Self {
        Self {
            runs: value.len(),
            nodes_expanded: Percentiles::from_slice(value, |s| s.nodes_expanded as u64),
            nodes_generated: Percentiles::from_slice(value, |s| s.nodes_generated as u64),
            nodes_enqueued: Percentiles::from_slice(value, |s| s.nodes_enqueued as u64),
            duplicates_pruned: Percentiles::from_slice(value, |s| s.duplicates_pruned as u64),
            max_depth: Percentiles::from_slice(value, |s| u64::from(s.max_depth)),
            peak_frontier: Percentiles::from_slice(value, |s| s.peak_frontier as u64),
            solution_moves: Percentiles::from_slice(value, |s| s.solution_moves as u64),
            duration_ms: Percentiles::from_slice(value, |s| {
                u64::try_from(s.duration_ms).unwrap_or(u64::MAX)
            }),
        }
    }
}

// ---------- Rendering helpers ----------

// Type aliases to keep signatures readable when describing summary rows
type MetricAccessor = fn(&StatsSummary) -> &Percentiles;
type MetricRow = (&'static str, &'static str, MetricAccessor);

fn new_base_table() -> Table {
    let mut t = Table::new();
    t.load_preset(presets::UTF8_FULL_CONDENSED);
    t.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t
}

fn add_value_row(t: &mut Table, metric: &str, value: &dyn Display) {
    t.add_row([
        Cell::new(metric).add_attribute(Attribute::Bold),
        Cell::new(format!("{value}")).set_alignment(CellAlignment::Right),
    ]);
}

/// Prints a formatted table for a single run's statistics.
pub fn print_run_stats(stats: &SolveStats) {
    let mut table = new_base_table();
    table.set_header(["Metric", "Value"]);

    add_value_row(&mut table, "Time (ms)", &stats.duration_ms);
    add_value_row(&mut table, "Nodes expanded", &stats.nodes_expanded);
    add_value_row(&mut table, "Nodes generated", &stats.nodes_generated);
    add_value_row(&mut table, "Enqueued", &stats.nodes_enqueued);
    add_value_row(&mut table, "Discards (duplicates)", &stats.duplicates_pruned);
    add_value_row(&mut table, "Solution length (moves)", &stats.solution_moves);
    add_value_row(&mut table, "Peak frontier", &stats.peak_frontier);
    add_value_row(&mut table, "Max depth", &stats.max_depth);

    println!("\nRun statistics\n\n{table}");
}

/// Prints the aggregate table for a benchmark batch, one row per metric.
pub fn print_summary_table(summary: &StatsSummary) {
    // Descriptor: label, description, accessor to the metric in a summary
    let rows: [MetricRow; 8] = [
        (
            "Time per run (ms)",
            "Wall-clock time to solve one instance.",
            |s| &s.duration_ms,
        ),
        (
            "Nodes expanded",
            "Unique states popped from the frontier.",
            |s| &s.nodes_expanded,
        ),
        (
            "Nodes generated",
            "Successors produced before duplicate filtering.",
            |s| &s.nodes_generated,
        ),
        (
            "Enqueued",
            "Successors accepted into the frontier.",
            |s| &s.nodes_enqueued,
        ),
        (
            "Discards (duplicates)",
            "Successors dropped because their layout was already seen.",
            |s| &s.duplicates_pruned,
        ),
        (
            "Solution length (moves)",
            "Number of moves in the optimal solution.",
            |s| &s.solution_moves,
        ),
        (
            "Peak frontier",
            "Largest frontier observed (proxy for peak memory).",
            |s| &s.peak_frontier,
        ),
        (
            "Max depth",
            "Deepest node popped during the search.",
            |s| &s.max_depth,
        ),
    ];

    println!("\nBenchmark summary ({} runs)\n", summary.runs);

    let mut table = new_base_table();
    table.set_header([
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("P50"),
        Cell::new("P90"),
        Cell::new("P99"),
        Cell::new("Max"),
    ]);

    for (label, _, accessor) in rows {
        let m = accessor(summary);
        table.add_row([
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(m.p50).set_alignment(CellAlignment::Right),
            Cell::new(m.p90).set_alignment(CellAlignment::Right),
            Cell::new(m.p99).set_alignment(CellAlignment::Right),
            Cell::new(m.max).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}\n");
    println!("Legend:");
    for (label, desc, _) in rows {
        println!("- {label}: {desc}");
    }
    println!("- Columns are nearest-rank percentiles plus the maximum.");
}

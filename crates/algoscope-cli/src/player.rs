//! Terminal playback of algorithm traces.
//!
//! A [`Player`] writes traces to any [`io::Write`], pausing between items
//! according to the [`PlaybackConfig`]. Players that share a [`RunGuard`]
//! refuse to start a playback while another one is in flight.

use std::{
    io::{self, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use log::{debug, info};
use thiserror::Error;

use algoscope::{
    cancel::CancelToken,
    config::PlaybackConfig,
    grid::{Grid, Terrain},
    pathfind::PathAlgorithm,
    search::SearchComparison,
    sort::{BubbleSort, SortAlgorithm},
    trace::{SearchResult, SortEvent, SortTrace, TraversalResult},
};

/// Errors raised during playback.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("A playback is already running")]
    AlreadyRunning,

    #[error("Failed to write trace output: {0}")]
    Io(#[from] io::Error),
}

/// Shared flag that allows one playback at a time.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct RunGuard {
    running: Arc<AtomicBool>,
}

impl RunGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a playback as started.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::AlreadyRunning`] if another playback holds the
    /// guard.
    pub fn try_start(&self) -> Result<RunPermit, PlayerError> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PlayerError::AlreadyRunning)?;
        Ok(RunPermit {
            running: Arc::clone(&self.running),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Releases its [`RunGuard`] when dropped.
#[derive(Debug)]
pub struct RunPermit {
    running: Arc<AtomicBool>,
}

impl Drop for RunPermit {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Renders traces as text.
#[derive(Debug)]
pub struct Player<W> {
    out: W,
    playback: PlaybackConfig,
    guard: RunGuard,
}

impl<W: Write> Player<W> {
    pub fn new(out: W, playback: PlaybackConfig, guard: RunGuard) -> Self {
        Self {
            out,
            playback,
            guard,
        }
    }

    /// Consumes the player and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Plays every frame of a sort trace. Positions that changed since the
    /// previous frame are shown in brackets.
    pub fn play_sort(
        &mut self,
        algorithm: SortAlgorithm,
        trace: &SortTrace,
    ) -> Result<(), PlayerError> {
        let _permit = self.guard.try_start()?;
        info!(algorithm:% = algorithm, frames = trace.frames().len(); "Playing sort trace");

        writeln!(self.out, "{algorithm} sort")?;
        let mut previous: Option<&[i64]> = None;
        for (number, frame) in trace.frames().iter().enumerate() {
            if number > 0 {
                self.pause(self.playback.frame_delay());
            }
            writeln!(self.out, "{number:>4}: {}", format_frame(previous, frame))?;
            previous = Some(frame.as_slice());
        }

        self.write_stats(&[
            ("operations", trace.operations().to_string()),
            ("frames", trace.frames().len().to_string()),
            ("elapsed", format!("{:?}", trace.elapsed())),
            ("complexity", algorithm.complexity().to_string()),
        ])
    }

    /// Plays a bubble sort event by event.
    ///
    /// With a `step_limit`, `cancel` is set once that many comparisons have
    /// been made and the partially sorted array is reported.
    pub fn play_bubble(
        &mut self,
        mut sorter: BubbleSort,
        cancel: &CancelToken,
        step_limit: Option<u64>,
    ) -> Result<(), PlayerError> {
        let _permit = self.guard.try_start()?;
        info!(step_limit:?; "Playing bubble sort");

        writeln!(self.out, "bubble sort")?;
        writeln!(self.out, "   start: {}", format_frame(None, sorter.values()))?;
        if step_limit == Some(0) {
            debug!("Step limit of zero, nothing to compare");
            cancel.cancel();
        }
        while let Some(event) = sorter.next() {
            match event {
                SortEvent::Compare {
                    left,
                    right,
                    operations,
                    ..
                } => {
                    writeln!(self.out, " compare: {left} and {right}")?;
                    if step_limit.is_some_and(|limit| operations >= limit) {
                        debug!(operations; "Step limit reached");
                        cancel.cancel();
                    }
                }
                SortEvent::Swap { left, right } => {
                    writeln!(
                        self.out,
                        "    swap: {left} and {right} -> {}",
                        format_frame(None, sorter.values())
                    )?;
                }
                SortEvent::Settled { index } => {
                    writeln!(self.out, " settled: {index}")?;
                }
            }
            self.pause(self.playback.step_delay());
        }

        let outcome = if sorter.is_cancelled() {
            "stopped, partially sorted"
        } else {
            "sorted"
        };
        writeln!(
            self.out,
            "{outcome}: {}",
            format_frame(None, sorter.values())
        )?;
        self.write_stats(&[
            ("operations", sorter.operations().to_string()),
            ("elapsed", format!("{:?}", sorter.elapsed())),
            ("complexity", SortAlgorithm::Bubble.complexity().to_string()),
        ])
    }

    /// Plays the probes of both searches, linear first.
    pub fn play_search(
        &mut self,
        comparison: &SearchComparison,
        target: i64,
    ) -> Result<(), PlayerError> {
        let _permit = self.guard.try_start()?;
        info!(sought = target; "Playing search trace");

        writeln!(
            self.out,
            "sorted: {}",
            format_frame(None, comparison.sorted())
        )?;
        self.write_search("linear", "O(n)", target, comparison.linear())?;
        self.write_search("binary", "O(log n)", target, comparison.binary())
    }

    /// Plays the cells a traversal visited, then draws the grid with the
    /// visited cells and the path marked.
    pub fn play_path(
        &mut self,
        algorithm: PathAlgorithm,
        grid: &Grid,
        result: &TraversalResult,
    ) -> Result<(), PlayerError> {
        let _permit = self.guard.try_start()?;
        info!(algorithm:% = algorithm, visited = result.visited().len(); "Playing traversal");

        writeln!(self.out, "{algorithm}")?;
        write!(self.out, "visiting: ")?;
        for &cell in result.visited() {
            let (row, column) = grid.coordinates(cell);
            write!(self.out, "({row},{column}) ")?;
            self.out.flush()?;
            self.pause(self.playback.cell_delay());
        }
        writeln!(self.out)?;

        self.out
            .write_all(render_grid(&grid.with_traversal(result)).as_bytes())?;

        let path = if result.reached() {
            format!(
                "{} steps, cost {}",
                result.path_steps(),
                result.path_cost(grid)
            )
        } else {
            "goal not reachable".to_string()
        };
        self.write_stats(&[
            ("path", path),
            ("visited", result.visited().len().to_string()),
            ("operations", result.operations().to_string()),
            ("elapsed", format!("{:?}", result.elapsed())),
            ("complexity", algorithm.complexity().to_string()),
        ])
    }

    fn write_search(
        &mut self,
        name: &str,
        complexity: &str,
        target: i64,
        result: &SearchResult,
    ) -> Result<(), PlayerError> {
        writeln!(self.out, "{name} search for {target}")?;
        for (number, step) in result.steps().iter().enumerate() {
            if number > 0 {
                self.pause(self.playback.probe_delay());
            }
            let mark = if step.matched { '✔' } else { '✘' };
            writeln!(
                self.out,
                "  i={}, value={} {mark}  window [{}, {}]",
                step.index, step.value, step.low, step.high
            )?;
        }

        let outcome = match result.index() {
            Some(index) => format!("found at index {index}"),
            None => "not found".to_string(),
        };
        self.write_stats(&[
            ("result", outcome),
            ("operations", result.operations().to_string()),
            ("elapsed", format!("{:?}", result.elapsed())),
            ("complexity", complexity.to_string()),
        ])
    }

    fn write_stats(&mut self, stats: &[(&str, String)]) -> Result<(), PlayerError> {
        for (name, value) in stats {
            writeln!(self.out, "  {name:<11}{value}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Formats a frame with the positions that differ from `previous` in
/// brackets.
fn format_frame(previous: Option<&[i64]>, frame: &[i64]) -> String {
    frame
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let changed = previous.is_some_and(|previous| previous.get(index) != Some(value));
            if changed {
                format!("[{value}]")
            } else {
                value.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draws a grid, one row per line.
///
/// `S` start, `G` goal, `#` wall, `*` path, `+` visited, `~` forest,
/// `.` plain.
fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.size());
    for (index, cell) in grid.cells().iter().enumerate() {
        let symbol = if index == grid.start() {
            'S'
        } else if index == grid.goal() {
            'G'
        } else if cell.is_wall() {
            '#'
        } else if cell.is_on_path() {
            '*'
        } else if cell.is_visited() {
            '+'
        } else if cell.terrain() == Terrain::Forest {
            '~'
        } else {
            '.'
        };
        out.push(symbol);
        if (index + 1) % grid.size() == 0 {
            out.push('\n');
        }
    }
    out
}

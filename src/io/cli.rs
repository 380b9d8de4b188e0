//! Command-line interface for searching tatami layouts of one or more rooms

use crate::algorithm::{SearchLimits, SearchOutcome, StopReason};
use crate::io::configuration::{
    ANIMATION_SUFFIX, DEFAULT_CELL_SIZE, GIF_FRAME_DELAY_MS, ROOM_FILE_EXTENSION, SOLUTION_SUFFIX,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::{export_solution_png, export_solutions_gif};
use crate::io::progress::ProgressManager;
use crate::io::render::render_corners;
use crate::io::room::Room;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "tatami")]
#[command(
    author,
    version,
    about = "Enumerate every tatami layout of a room"
)]
/// Command-line arguments for the layout search
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Room description file or directory of room files
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Height of an open room (used without TARGET)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Width of an open room (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Stop after this many solutions per room
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Stop searching a room after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Print only the number of solutions
    #[arg(short, long)]
    pub count: bool,

    /// Also print the corner-touch counts of each layout
    #[arg(short = 'C', long)]
    pub corners: bool,

    /// Write every solution as a PNG image
    #[arg(short, long)]
    pub image: bool,

    /// Write all solutions as one animated GIF
    #[arg(short, long)]
    pub animate: bool,

    /// Directory for image output (defaults to the room file's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Edge length of one cell in exported images, in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Suppress progress output and non-error logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging detail (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Search bounds requested on the command line, timed from now
    pub fn search_limits(&self) -> SearchLimits {
        let mut limits = SearchLimits::unbounded();
        if let Some(limit) = self.limit {
            limits = limits.with_max_solutions(limit);
        }
        if let Some(seconds) = self.timeout {
            limits = limits.with_timeout(Duration::from_secs(seconds));
        }
        limits
    }
}

/// Where a room comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomSource {
    /// A room description file
    File(PathBuf),
    /// An open room of the given size
    Open {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
}

impl RoomSource {
    /// Name used for output files and messages
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            Self::Open { rows, cols } => format!("room_{rows}x{cols}"),
        }
    }

    /// Load the room
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the open
    /// room dimensions are invalid
    pub fn load(&self) -> Result<Room> {
        match self {
            Self::File(path) => Room::from_path(path),
            Self::Open { rows, cols } => Room::open(*rows, *cols),
        }
    }
}

/// What one room's search produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    /// Room name
    pub name: String,
    /// Number of distinct solutions found
    pub solutions: usize,
    /// Why the search stopped early, if it did
    pub stopped: Option<StopReason>,
}

/// Orchestrates the search over all requested rooms with progress tracking
pub struct RoomProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RoomProcessor {
    /// Create a new room processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process rooms according to CLI arguments, printing to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, room loading or output fails
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out).map(|_| ())
    }

    /// Process rooms, writing the textual report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, room loading or output fails
    pub fn process_to(&mut self, out: &mut impl Write) -> Result<Vec<RoomSummary>> {
        let sources = self.collect_rooms()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(sources.len());
        }

        let mut summaries = Vec::with_capacity(sources.len());
        for (index, source) in sources.iter().enumerate() {
            summaries.push(self.process_room(index, source, out)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(summaries)
    }

    /// Resolve the target argument into the list of rooms to search
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a file nor a directory, the
    /// directory cannot be read, or no target and no dimensions were given
    pub fn collect_rooms(&self) -> Result<Vec<RoomSource>> {
        let Some(target) = &self.cli.target else {
            return match (self.cli.height, self.cli.width) {
                (Some(rows), Some(cols)) => Ok(vec![RoomSource::Open { rows, cols }]),
                (Some(size), None) | (None, Some(size)) => Ok(vec![RoomSource::Open {
                    rows: size,
                    cols: size,
                }]),
                (None, None) => Err(invalid_parameter(
                    "target",
                    &"",
                    &"give a room file, a directory or --height/--width",
                )),
            };
        };

        if target.is_file() {
            Ok(vec![RoomSource::File(target.clone())])
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(ROOM_FILE_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files.into_iter().map(RoomSource::File).collect())
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a room file or a directory of room files",
            ))
        }
    }

    fn process_room(
        &mut self,
        index: usize,
        source: &RoomSource,
        out: &mut impl Write,
    ) -> Result<RoomSummary> {
        let name = source.name();
        let room = source.load()?;
        let stdout_path = Path::new("<stdout>");

        let grid = room.grid();
        writeln!(
            out,
            "{name}: {}x{} room, {} placeable cells",
            grid.rows(),
            grid.cols(),
            grid.placeable_count()
        )
        .with_path(stdout_path, "write output")?;
        write!(out, "{grid}").with_path(stdout_path, "write output")?;
        if self.cli.corners {
            write!(out, "{}", render_corners(grid.corner_lattice()))
                .with_path(stdout_path, "write output")?;
        }

        let limits = self.cli.search_limits();
        let mut solver = room.into_solver().with_limits(limits);
        if let Some(pm) = self.progress_manager.as_mut() {
            pm.start_room(index, &name);
            let mut found = 0;
            solver = solver.on_solution(move |_, stats| {
                found += 1;
                pm.update_search(index, found, stats.nodes);
            });
        }
        let outcome = solver.solve();

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_room(index, outcome.solutions.len(), outcome.elapsed);
        }

        self.write_report(&name, &outcome, out)
            .with_path(stdout_path, "write output")?;
        self.export_images(source, &name, &outcome)?;

        log::info!(
            "{name}: {} solutions, {} nodes, {} placements, {} dead ends in {:.2?}",
            outcome.solutions.len(),
            outcome.stats.nodes,
            outcome.stats.placements,
            outcome.stats.dead_ends,
            outcome.elapsed
        );
        if let Some(reason) = outcome.stopped {
            log::warn!("{name}: search stopped early ({})", describe_stop(reason));
        }

        Ok(RoomSummary {
            name,
            solutions: outcome.solutions.len(),
            stopped: outcome.stopped,
        })
    }

    fn write_report(
        &self,
        name: &str,
        outcome: &SearchOutcome,
        out: &mut impl Write,
    ) -> std::io::Result<()> {
        if !self.cli.count {
            for (number, solution) in outcome.solutions.iter().enumerate() {
                writeln!(out, "solution {}:", number + 1)?;
                write!(out, "{solution}")?;
                if self.cli.corners
                    && let Ok(lattice) = solution.corner_lattice()
                {
                    write!(out, "{}", render_corners(&lattice))?;
                }
            }
        }

        let suffix = outcome
            .stopped
            .map(|reason| format!(" (stopped: {})", describe_stop(reason)))
            .unwrap_or_default();
        writeln!(
            out,
            "{name}: {} solutions{suffix}",
            outcome.solutions.len()
        )
    }

    fn export_images(&self, source: &RoomSource, name: &str, outcome: &SearchOutcome) -> Result<()> {
        if !self.cli.image && !self.cli.animate {
            return Ok(());
        }

        let output_dir = self.output_dir(source);

        if self.cli.image {
            for (number, solution) in outcome.solutions.iter().enumerate() {
                let path = output_dir.join(format!("{name}{SOLUTION_SUFFIX}_{}.png", number + 1));
                export_solution_png(solution, &path, self.cli.cell_size)?;
            }
        }

        if self.cli.animate {
            if outcome.solutions.is_empty() {
                log::warn!("{name}: no solutions, skipping animation");
            } else {
                let path = output_dir.join(format!("{name}{ANIMATION_SUFFIX}.gif"));
                export_solutions_gif(
                    outcome.solutions.as_slice(),
                    &path,
                    self.cli.cell_size,
                    GIF_FRAME_DELAY_MS,
                )?;
            }
        }

        Ok(())
    }

    fn output_dir(&self, source: &RoomSource) -> PathBuf {
        if let Some(ref dir) = self.cli.output {
            return dir.clone();
        }
        match source {
            RoomSource::File(path) => path
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
            RoomSource::Open { .. } => PathBuf::from("."),
        }
    }
}

const fn describe_stop(reason: StopReason) -> &'static str {
    match reason {
        StopReason::SolutionLimit => "solution limit reached",
        StopReason::Deadline => "timeout",
    }
}

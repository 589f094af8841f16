//! Command-line interface for building a tile grid and applying fills to it

use crate::algorithm::fill::start_cell;
use crate::algorithm::{FillStrategy, FloodFill, connected_region};
use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_OUTPUT, DEFAULT_PALETTE,
    DEFAULT_REPLACE_COLOR, DEFAULT_SEED, DEFAULT_TILE_SIZE, GIF_FRAME_DELAY_MS,
    VISUALIZATION_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{export_grid_as_png, load_grid_from_png};
use crate::io::initializer::{random_palette_grid, uniform_grid};
use crate::io::pointer::PointerMapper;
use crate::io::progress::ProgressManager;
use crate::io::visualization::FillRecorder;
use crate::spatial::{Color, Grid};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Traversal order selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Explicit stack
    Depth,
    /// Explicit queue
    Breadth,
}

impl From<StrategyArg> for FillStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Depth => Self::DepthFirst,
            StrategyArg::Breadth => Self::BreadthFirst,
        }
    }
}

#[derive(Parser)]
#[command(name = "floodtile")]
#[command(
    author,
    version,
    about = "Recolor connected tile regions with an iterative flood fill"
)]
/// Command-line arguments for the flood-fill tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of columns (ignored with --input)
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Number of rows (ignored with --input)
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Random seed for the initial palette grid
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Rendered tile size in pixels, also sets the pointer unit size
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Replacement color: a name (red, blue, ...) or #rrggbb[aa]
    #[arg(short, long, default_value_t = DEFAULT_REPLACE_COLOR)]
    pub color: Color,

    /// Start from a single-color grid instead of a random palette
    #[arg(short, long)]
    pub background: Option<Color>,

    /// Fill starting at grid cell X,Y (repeatable)
    #[arg(
        short = 'k',
        long = "click",
        value_name = "X,Y",
        value_parser = parse_cell,
        allow_hyphen_values = true
    )]
    pub clicks: Vec<[i64; 2]>,

    /// Fill starting under world position X,Y (repeatable, applied after clicks)
    #[arg(
        short,
        long = "pointer",
        value_name = "X,Y",
        value_parser = parse_world_position,
        allow_hyphen_values = true
    )]
    pub pointers: Vec<[f64; 2]>,

    /// Load the initial grid from a PNG with one pixel per cell
    #[arg(short, long, value_name = "PNG")]
    pub input: Option<PathBuf>,

    /// Where to write the final grid as PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write an animated GIF with one frame per fill
    #[arg(short, long)]
    pub visualize: bool,

    /// Traversal order used by the fill engine
    #[arg(long, value_enum, default_value_t = StrategyArg::Depth)]
    pub strategy: StrategyArg,

    /// Report region sizes without modifying the grid or writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Fill engine configured from the command line
    pub fn fill_engine(&self) -> FloodFill {
        FloodFill::with_strategy(self.strategy.into())
    }

    /// Path of the animation written with --visualize
    pub fn visualization_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        self.output
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}

/// Parse a grid cell given as `X,Y`
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated integers
pub fn parse_cell(value: &str) -> std::result::Result<[i64; 2], String> {
    let (x, y) = split_pair(value)?;
    let parse = |part: &str| {
        part.parse::<i64>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };
    Ok([parse(x)?, parse(y)?])
}

/// Parse a world position given as `X,Y`
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated numbers
pub fn parse_world_position(value: &str) -> std::result::Result<[f64; 2], String> {
    let (x, y) = split_pair(value)?;
    let parse = |part: &str| {
        part.parse::<f64>()
            .map_err(|e| format!("invalid position '{part}': {e}"))
    };
    Ok([parse(x)?, parse(y)?])
}

fn split_pair(value: &str) -> std::result::Result<(&str, &str), String> {
    value
        .split_once(',')
        .map(|(x, y)| (x.trim(), y.trim()))
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))
}

/// Outcome of a processed session
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Cells changed by each fill in order (would-be changes for dry runs)
    pub changed: Vec<usize>,
    /// Grid after all fills
    pub grid: Grid<Color>,
}

impl SessionSummary {
    /// Total cells changed across the session
    pub fn total_changed(&self) -> usize {
        self.changed.iter().sum()
    }
}

/// Runs a fill session: build the grid, apply every requested fill, export
pub struct FillSession {
    cli: Cli,
    progress: ProgressManager,
}

impl FillSession {
    /// Create a new session with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self { cli, progress }
    }

    /// Process the session according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be built, a fill fails, or the
    /// results cannot be exported
    pub fn process(&mut self) -> Result<SessionSummary> {
        let mut grid = self.build_grid()?;
        let starts = self.start_cells()?;

        if self.cli.dry_run {
            let changed = starts
                .iter()
                .map(|&start| self.preview(&grid, start))
                .collect::<Result<Vec<_>>>()?;
            return Ok(SessionSummary { changed, grid });
        }

        let engine = self.cli.fill_engine();
        let mut recorder = self
            .cli
            .visualize
            .then(|| FillRecorder::new(self.cli.tile_size));
        if let Some(recorder) = recorder.as_mut() {
            recorder.capture(&grid)?;
        }

        self.progress.initialize(starts.len());
        let mut changed = Vec::with_capacity(starts.len());

        for [x, y] in starts {
            if start_cell(x, y, grid.width(), grid.height()).is_none() {
                self.notify(&format!(
                    "Ignoring fill at ({x}, {y}): outside the {}x{} grid",
                    grid.width(),
                    grid.height()
                ));
            }

            let result = engine.fill(&mut grid, x, y, self.cli.color)?;
            self.progress.record_fill(result.changed);
            changed.push(result.changed);

            if let Some(recorder) = recorder.as_mut() {
                recorder.capture(&grid)?;
            }
        }

        self.progress.finish();

        export_grid_as_png(&grid, self.cli.tile_size, &self.cli.output)?;

        if let Some(recorder) = &recorder {
            recorder.export_gif(&self.cli.visualization_path(), GIF_FRAME_DELAY_MS)?;
        }

        Ok(SessionSummary { changed, grid })
    }

    /// Build the initial grid from an input image, a background color, or
    /// the seeded random palette
    ///
    /// # Errors
    ///
    /// Returns an error if the input image cannot be loaded or the
    /// dimensions are invalid
    pub fn build_grid(&self) -> Result<Grid<Color>> {
        if let Some(input) = &self.cli.input {
            return load_grid_from_png(input);
        }
        self.cli.background.map_or_else(
            || {
                random_palette_grid(
                    self.cli.width,
                    self.cli.height,
                    &DEFAULT_PALETTE,
                    self.cli.seed,
                )
            },
            |color| uniform_grid(self.cli.width, self.cli.height, color),
        )
    }

    /// All fill start cells: grid clicks first, then mapped pointer positions
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size gives an invalid pointer unit size
    pub fn start_cells(&self) -> Result<Vec<[i64; 2]>> {
        let mut starts = self.cli.clicks.clone();
        if self.cli.pointers.is_empty() {
            return Ok(starts);
        }

        let mapper = PointerMapper::for_tile_size(self.cli.tile_size)?;
        for &position in &self.cli.pointers {
            match mapper.cell_at(position) {
                Some(cell) => starts.push(cell),
                None => self.notify(&format!(
                    "Ignoring pointer at ({}, {}): not a representable cell",
                    position[0], position[1]
                )),
            }
        }
        Ok(starts)
    }

    fn preview(&self, grid: &Grid<Color>, [x, y]: [i64; 2]) -> Result<usize> {
        let Some(region) = connected_region(grid, x, y)? else {
            self.notify(&format!("Fill at ({x}, {y}) is outside the grid"));
            return Ok(0);
        };

        let target = start_cell(x, y, grid.width(), grid.height())
            .map(|[cx, cy]| grid.get(cx, cy))
            .transpose()?;
        let would_change = if target == Some(self.cli.color) {
            0
        } else {
            region.len()
        };
        self.notify(&format!(
            "Fill at ({x}, {y}) would recolor {would_change} cells"
        ));
        Ok(would_change)
    }

    // Allow print for user feedback on skipped or previewed fills
    #[allow(clippy::print_stderr)]
    fn notify(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}

//! Command-line interface for enumerating, counting and rendering walls

use crate::algorithm::walls::{Strategy, Wall, WallBuilder, WallCounts};
use crate::algorithm::worker::{WallRequest, WallTask};
use crate::io::configuration::{
    DEFAULT_FRAME_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_SHEET_COLUMNS,
    DEFAULT_WALL_LIMIT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH,
};
use crate::io::error::{AlgorithmError, Result, WithPath};
use crate::io::export::{WallReport, write_report};
use crate::io::image::{export_sheet_as_png, sheet_dimensions};
use crate::io::logging::level_for;
use crate::io::progress::ProgressManager;
use crate::io::text::write_walls;
use crate::io::visualization::WallAnimation;
use clap::{ArgAction, Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How walls are written to stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bricks drawn with brackets, one row per line
    #[default]
    Text,
    /// A single JSON report object
    Json,
    /// Only the number of walls
    Count,
    /// Nothing; useful with --png or --gif
    Silent,
}

#[derive(Parser)]
#[command(name = "brickwall")]
#[command(
    author,
    version,
    about = "Enumerate every brick wall whose adjacent rows share no seam"
)]
/// Command-line arguments for the wall enumerator
pub struct Cli {
    /// Width of the wall in brick units
    #[arg(
        value_name = "WIDTH",
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(i64).range(1..=MAX_WIDTH)
    )]
    pub width: i64,

    /// Number of rows in each wall
    #[arg(value_name = "HEIGHT", default_value_t = DEFAULT_HEIGHT, value_parser = parse_height)]
    pub height: usize,

    /// Enumeration strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Levels)]
    pub strategy: Strategy,

    /// Output written to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Save a PNG contact sheet of the walls
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Save a looping GIF showing one wall per frame
    #[arg(long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Draw this many walls uniformly at random instead of enumerating all
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,

    /// Random seed for reproducible sampling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Refuse to materialise more walls than this
    #[arg(short, long, default_value_t = DEFAULT_WALL_LIMIT)]
    pub limit: u128,

    /// Walls per line on the PNG contact sheet
    #[arg(short, long, default_value_t = DEFAULT_SHEET_COLUMNS)]
    pub columns: usize,

    /// Milliseconds each wall is shown in the GIF
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_height(value: &str) -> std::result::Result<usize, String> {
    let height: usize = value
        .parse()
        .map_err(|e| format!("'{value}' is not a row count: {e}"))?;
    if (1..=MAX_HEIGHT).contains(&height) {
        Ok(height)
    } else {
        Err(format!("must be between 1 and {MAX_HEIGHT}"))
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `--verbose` and `--quiet`
    pub const fn log_level(&self) -> tracing::Level {
        level_for(self.verbose, self.quiet)
    }

    /// Dimensions requested on the command line
    pub const fn request(&self) -> WallRequest {
        WallRequest::new(self.width, self.height)
    }

    /// Check if any output needs the walls themselves rather than their count
    pub const fn needs_walls(&self) -> bool {
        matches!(self.format, OutputFormat::Text | OutputFormat::Json)
            || self.png.is_some()
            || self.gif.is_some()
    }
}

/// Orchestrates one request: validation, counting, enumeration and output
pub struct WallCommand {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl WallCommand {
    /// Create a command from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the request, writing results to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if validation, enumeration or any output fails
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the request, writing results to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dimensions are out of range
    /// - The wall count overflows, or the walls wanted exceed `--limit`
    /// - The PNG contact sheet would be too large
    /// - The background worker fails
    /// - Writing text, JSON or image output fails
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let request = self.cli.request();
        request.validate()?;

        let builder = Arc::new(WallBuilder::for_width(request.width));
        let counts = WallCounts::new(builder.relation(), request.height)?;
        tracing::info!(
            width = request.width,
            height = request.height,
            rows = builder.relation().len(),
            walls = counts.total(),
            "counted walls"
        );

        if self.cli.format == OutputFormat::Count {
            writeln!(out, "{}", counts.total()).with_path(Path::new("<stdout>"), "write")?;
        }

        if !self.cli.needs_walls() {
            return Ok(());
        }

        let wanted = match self.cli.sample {
            Some(_) if counts.total() == 0 => 0,
            Some(samples) => samples as u128,
            None => counts.total(),
        };
        if wanted > self.cli.limit {
            return Err(AlgorithmError::TooManyWalls {
                count: wanted,
                limit: self.cli.limit,
            });
        }
        if self.cli.png.is_some() && wanted > 0 {
            sheet_dimensions(
                usize::try_from(wanted).unwrap_or(usize::MAX),
                request.width as usize,
                request.height,
                self.cli.columns,
            )?;
        }

        let walls = match self.cli.sample {
            Some(samples) => Self::sample(&counts, samples, self.cli.seed),
            None => self.enumerate(request, &builder)?,
        };

        self.write_output(out, request, &walls)
    }

    fn sample(counts: &WallCounts<'_>, samples: usize, seed: u64) -> Vec<Wall> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..samples)
            .filter_map(|_| counts.sample(&mut rng))
            .collect()
    }

    fn enumerate(&self, request: WallRequest, builder: &Arc<WallBuilder>) -> Result<Vec<Wall>> {
        if let Some(ref pm) = self.progress_manager {
            pm.start(request, self.cli.strategy);
        }

        let task = WallTask::spawn_with_builder(request, self.cli.strategy, Arc::clone(builder))?;
        let result = task.wait(|progress| {
            if let Some(ref pm) = self.progress_manager {
                pm.update(progress);
            }
        });

        if let Some(ref pm) = self.progress_manager {
            match &result {
                Ok(walls) => pm.finish(walls.len()),
                Err(_) => pm.abandon(),
            }
        }

        result
    }

    fn write_output<W: Write>(
        &self,
        out: &mut W,
        request: WallRequest,
        walls: &[Wall],
    ) -> Result<()> {
        let stdout_path = Path::new("<stdout>");

        match self.cli.format {
            OutputFormat::Text => write_walls(out, walls).with_path(stdout_path, "write")?,
            OutputFormat::Json => write_report(out, &WallReport::new(request, walls.to_vec()))?,
            OutputFormat::Count | OutputFormat::Silent => {}
        }

        if let Some(ref path) = self.cli.png {
            export_sheet_as_png(walls, request, self.cli.columns, path)?;
        }

        if let Some(ref path) = self.cli.gif {
            if walls.is_empty() {
                return Err(AlgorithmError::NoWalls {
                    width: request.width,
                    height: request.height,
                });
            }
            WallAnimation::from_walls(walls, self.cli.frame_delay).export_gif(path)?;
        }

        Ok(())
    }
}

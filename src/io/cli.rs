//! Command-line interface for batch rendering PNG files into mosaics

use crate::algorithm::executor::{CancelToken, Mode, QuadtreeMosaic, RenderOptions};
use crate::io::configuration::{
    DEFAULT_DOWNSAMPLE_FACTOR, DEFAULT_LINE_LUMINANCE_SCALE, DEFAULT_LUMINANCE_SCALE,
    DEFAULT_MAX_LIMIT_COUNT, DEFAULT_MINIMUM_SPLIT_WIDTH, DEFAULT_SEED, DEFAULT_SIZE_RATIO,
    OUTPUT_SUFFIX, VISUALIZATION_CAPTURE_INTERVAL,
};
use crate::io::error::Result;
use crate::io::image::{downsample, export_png, load_source};
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Painter mode as exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModeArg {
    /// Fill each region with its mean color
    #[default]
    Plain,
    /// Fill each region and stroke a darker border
    WithBorder,
}

impl ModeArg {
    /// Map the CLI mode onto the engine mode
    pub const fn to_mode(self) -> Mode {
        match self {
            Self::Plain => Mode::Plain,
            Self::WithBorder => Mode::PlainWithBorder,
        }
    }
}

#[derive(Parser)]
#[command(name = "quadmosaic")]
#[command(
    author,
    version,
    about = "Render adaptive quadtree mosaics from raster images"
)]
/// Command-line arguments for the mosaic renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Painter stroke behavior
    #[arg(long, value_enum, default_value = "plain")]
    pub mode: ModeArg,

    /// Area weighting in the selection heuristic
    #[arg(long, default_value_t = DEFAULT_SIZE_RATIO)]
    pub size_ratio: f64,

    /// Unsplittable-region encounters tolerated before stopping
    #[arg(long, default_value_t = DEFAULT_MAX_LIMIT_COUNT)]
    pub max_limit_count: u32,

    /// Minimum half-dimension that still permits splitting
    #[arg(long, default_value_t = DEFAULT_MINIMUM_SPLIT_WIDTH)]
    pub minimum_split_width: u32,

    /// Border darkness relative to the fill color (0 to 1)
    #[arg(long, default_value_t = DEFAULT_LINE_LUMINANCE_SCALE)]
    pub line_luminance_scale: f64,

    /// Fill brightness multiplier
    #[arg(long, default_value_t = DEFAULT_LUMINANCE_SCALE)]
    pub luminance_scale: f64,

    /// Downsampling divisor applied before rendering
    #[arg(short, long, default_value_t = DEFAULT_DOWNSAMPLE_FACTOR)]
    pub downsample: u32,

    /// Collapse fills to their NTSC luminance
    #[arg(long)]
    pub monochrome: bool,

    /// Swap which of interior and outline is darkened in bordered mode
    #[arg(long)]
    pub swap_stroke: bool,

    /// Select split candidates stochastically, proportional to weight
    #[arg(long)]
    pub randomness: bool,

    /// Random seed for stochastic selection
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Render options assembled from the command line
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mode: self.mode.to_mode(),
            size_ratio: self.size_ratio,
            max_limit_count: self.max_limit_count,
            minimum_split_width: self.minimum_split_width,
            line_luminance_scale: self.line_luminance_scale,
            luminance_scale: self.luminance_scale,
            monochrome: self.monochrome,
            swap_stroke: self.swap_stroke,
            randomness: self.randomness,
            seed: self.seed,
        }
    }
}

/// Orchestrates batch rendering of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = get_output_path(input_path);
        let options = self.cli.render_options();

        let source = load_source(input_path)?;
        let working = downsample(&source, self.cli.downsample.max(1));

        let mut engine = QuadtreeMosaic::new(working, options)?;
        if self.cli.visualize {
            engine.enable_visualization(VISUALIZATION_CAPTURE_INTERVAL);
        }

        let pm = self.progress_manager.as_ref();
        if let Some(pm) = pm {
            pm.start_file(index, input_path, options.max_limit_count);
        }

        // Batch renders are non-interactive; the token stays unraised and
        // the loop runs to its counting-based termination.
        let cancel = CancelToken::new();
        engine.run_with(&cancel, |limit_count, _iteration| {
            if let Some(pm) = pm {
                pm.update_refusals(index, limit_count, options.max_limit_count);
            }
        });

        if self.cli.visualize {
            let viz_path = get_visualization_path(input_path);
            engine.export_visualization(
                viz_path
                    .to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid visualization path"))?,
            )?;
        }

        export_png(
            engine.output(),
            output_path
                .to_str()
                .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
        )?;

        if let Some(pm) = pm {
            pm.complete_file(index);
        }

        Ok(())
    }
}

/// Output path for a given input: `<stem>_mosaic.<ext>` beside the input
pub fn get_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let extension = input_path.extension().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        extension.to_string_lossy()
    );

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}

/// Visualization path for a given input: `<stem>_visualization.gif`
pub fn get_visualization_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let viz_name = format!("{}_visualization.gif", stem.to_string_lossy());

    input_path.parent().map_or_else(
        || PathBuf::from(&viz_name),
        |parent| parent.join(&viz_name),
    )
}

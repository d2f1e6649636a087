//! Greedy quadtree decomposition loop
//!
//! The engine owns the active set, the output buffer, and the termination
//! counter. One region seeds the set; every iteration selects a region,
//! removes it, and either replaces it with four painted children or counts
//! it as a finalized leaf. At every iteration boundary the active-set
//! rectangles together with the already-finalized leaves tile the canvas
//! exactly.

use crate::algorithm::region::Region;
use crate::algorithm::selection::{RandomSelector, select_split_candidate};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::painter::MosaicPainter;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::Rect;
use image::RgbaImage;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Painter stroke behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fill each region with its mean color
    #[default]
    Plain,
    /// Fill each region and stroke a darker one-pixel border
    PlainWithBorder,
}

/// Render parameters, validated once and immutable per render
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Painter stroke behavior
    pub mode: Mode,
    /// Area weighting in the selection heuristic, >= 0
    pub size_ratio: f64,
    /// Unsplittable-region encounters tolerated before stopping
    pub max_limit_count: u32,
    /// Half-dimension floor below which splitting refuses, >= 1
    pub minimum_split_width: u32,
    /// Border darkness relative to the fill color, in [0, 1]
    pub line_luminance_scale: f64,
    /// Fill brightness multiplier, > 0
    pub luminance_scale: f64,
    /// Collapse fills to their NTSC luminance
    pub monochrome: bool,
    /// Invert which of interior and outline is attenuated in bordered mode
    pub swap_stroke: bool,
    /// Select stochastically, weight-proportional instead of greatest-weight
    pub randomness: bool,
    /// RNG seed for the stochastic selection mode
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        use crate::io::configuration::{
            DEFAULT_LINE_LUMINANCE_SCALE, DEFAULT_LUMINANCE_SCALE, DEFAULT_MAX_LIMIT_COUNT,
            DEFAULT_MINIMUM_SPLIT_WIDTH, DEFAULT_SEED, DEFAULT_SIZE_RATIO,
        };

        Self {
            mode: Mode::Plain,
            size_ratio: DEFAULT_SIZE_RATIO,
            max_limit_count: DEFAULT_MAX_LIMIT_COUNT,
            minimum_split_width: DEFAULT_MINIMUM_SPLIT_WIDTH,
            line_luminance_scale: DEFAULT_LINE_LUMINANCE_SCALE,
            luminance_scale: DEFAULT_LUMINANCE_SCALE,
            monochrome: false,
            swap_stroke: false,
            randomness: false,
            seed: DEFAULT_SEED,
        }
    }
}

impl RenderOptions {
    /// Check every parameter against its documented domain
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] naming the first parameter
    /// outside its domain.
    pub fn validate(&self) -> Result<()> {
        if !self.size_ratio.is_finite() || self.size_ratio < 0.0 {
            return Err(invalid_parameter(
                "size_ratio",
                &self.size_ratio,
                &"must be a finite value >= 0",
            ));
        }
        if self.minimum_split_width < 1 {
            return Err(invalid_parameter(
                "minimum_split_width",
                &self.minimum_split_width,
                &"must be >= 1",
            ));
        }
        if !self.line_luminance_scale.is_finite()
            || !(0.0..=1.0).contains(&self.line_luminance_scale)
        {
            return Err(invalid_parameter(
                "line_luminance_scale",
                &self.line_luminance_scale,
                &"must be within [0, 1]",
            ));
        }
        if !self.luminance_scale.is_finite() || self.luminance_scale <= 0.0 {
            return Err(invalid_parameter(
                "luminance_scale",
                &self.luminance_scale,
                &"must be a finite value > 0",
            ));
        }
        Ok(())
    }
}

/// Cooperative cancellation flag shared with the render loop
///
/// Any clone may raise the flag from any thread; the loop observes it once
/// per iteration and exits at the boundary, leaving a valid partial mosaic.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an unraised token
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag; the loop exits at its next iteration boundary
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether the flag has been raised
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Quadtree decomposition engine over one source buffer
///
/// Constructed per render: the seed region is measured and painted during
/// construction, after which [`Self::execute_iteration`] steps the loop.
/// Overlapping renders on one engine value are unrepresentable.
pub struct QuadtreeMosaic {
    /// Immutable render parameters
    options: RenderOptions,
    /// Working canvas the statistics are measured against
    source: RgbaImage,
    /// Progressively refined mosaic
    output: RgbaImage,
    /// Regions not yet finalized as leaves, in insertion order
    active: Vec<Region>,
    /// Count of unsplittable-region encounters
    limit_count: u32,
    /// Completed loop iterations
    iteration: usize,
    painter: MosaicPainter,
    selector: Option<RandomSelector>,
    visualization: Option<VisualizationCapture>,
}

impl QuadtreeMosaic {
    /// Validate inputs, seed the active set, and paint the seed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any render option is outside its domain
    /// - The working canvas has a zero dimension
    pub fn new(source: RgbaImage, options: RenderOptions) -> Result<Self> {
        options.validate()?;

        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(MosaicError::InvalidSourceData {
                reason: format!("working canvas must be at least 1x1, got {width}x{height}"),
            });
        }

        let painter = MosaicPainter::from_options(&options);
        let seed = Region::new(&source, Rect::full_canvas(width, height))?;
        let mut output = RgbaImage::new(width, height);
        painter.paint(&mut output, &seed);

        Ok(Self {
            options,
            source,
            output,
            active: vec![seed],
            limit_count: 0,
            iteration: 0,
            painter,
            selector: options.randomness.then(|| RandomSelector::new(options.seed)),
            visualization: None,
        })
    }

    /// Execute a single select-and-split iteration
    ///
    /// Returns whether the loop should continue. Split refusal increments
    /// the termination counter; the loop ends once the counter exceeds the
    /// configured tolerance, or when the active set drains empty.
    pub fn execute_iteration(&mut self) -> bool {
        let selected = self.selector.as_mut().map_or_else(
            || select_split_candidate(&self.active, self.options.size_ratio),
            |selector| selector.pick(&self.active, self.options.size_ratio),
        );
        let Some(index) = selected else {
            // Every region drained away as a leaf before the counter tripped.
            return false;
        };

        let region = self.active.remove(index);
        self.iteration += 1;

        region
            .split(&self.source, self.options.minimum_split_width)
            .map_or_else(
                || {
                    // Already painted when it was created; just count it.
                    self.limit_count += 1;
                    self.limit_count <= self.options.max_limit_count
                },
                |children| {
                    debug_assert_eq!(
                        children.iter().map(|child| child.rect.area()).sum::<u64>(),
                        region.rect.area(),
                    );
                    for child in children {
                        self.painter.paint(&mut self.output, &child);
                        self.active.push(child);
                    }
                    if let Some(viz) = &mut self.visualization {
                        viz.capture(&self.output);
                    }
                    true
                },
            )
    }

    /// Run the loop to termination or cancellation
    ///
    /// The token is observed once per iteration; cancellation exits at the
    /// boundary with the output buffer a valid partial mosaic.
    pub fn run(&mut self, cancel: &CancelToken) {
        self.run_with(cancel, |_, _| {});
    }

    /// Run the loop, reporting `(limit_count, iteration)` after each step
    pub fn run_with<F: FnMut(u32, usize)>(&mut self, cancel: &CancelToken, mut observer: F) {
        while !cancel.is_cancelled() && self.execute_iteration() {
            observer(self.limit_count, self.iteration);
        }
        if let Some(viz) = &mut self.visualization {
            viz.capture_final(&self.output);
        }
    }

    /// Enable snapshot capture of the progressive refinement
    pub fn enable_visualization(&mut self, capture_interval: usize) {
        self.visualization = Some(VisualizationCapture::new(capture_interval));
    }

    /// Export the captured refinement as a GIF if visualization was enabled
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Visualization was not enabled
    /// - GIF export fails
    pub fn export_visualization(&self, output_path: &str) -> Result<()> {
        self.visualization.as_ref().map_or_else(
            || {
                Err(MosaicError::InvalidParameter {
                    parameter: "visualization",
                    value: "disabled".to_string(),
                    reason: "Visualization was not enabled for this render".to_string(),
                })
            },
            |viz| viz.export_gif(output_path, crate::io::configuration::GIF_FRAME_DELAY_MS),
        )
    }

    /// The progressively refined output buffer
    pub const fn output(&self) -> &RgbaImage {
        &self.output
    }

    /// Consume the engine, returning the output buffer
    pub fn into_output(self) -> RgbaImage {
        self.output
    }

    /// Regions not yet finalized, in insertion order
    pub fn active_regions(&self) -> &[Region] {
        &self.active
    }

    /// Unsplittable-region encounters so far
    pub const fn limit_count(&self) -> u32 {
        self.limit_count
    }

    /// Completed loop iterations
    pub const fn iteration(&self) -> usize {
        self.iteration
    }
}

/// Decompose a source buffer into a mosaic in one call
///
/// Convenience wrapper over [`QuadtreeMosaic`]: builds the engine, runs the
/// loop to termination or cancellation, and returns the output buffer.
///
/// # Errors
///
/// Returns an error if:
/// - Any render option is outside its domain
/// - The working canvas has a zero dimension
pub fn render_mosaic(
    source: RgbaImage,
    options: RenderOptions,
    cancel: &CancelToken,
) -> Result<RgbaImage> {
    let mut engine = QuadtreeMosaic::new(source, options)?;
    engine.run(cancel);
    Ok(engine.into_output())
}

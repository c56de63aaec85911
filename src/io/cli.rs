//! Command-line interface for batch processing images into seamless tiles

use crate::io::configuration::{
    DEFAULT_PREVIEW_SCALE, DEFAULT_PREVIEW_SIZE, INPUT_EXTENSIONS, MAX_PREVIEW_SCALE,
    MIN_PREVIEW_SCALE, OUTPUT_SEPARATOR, PREVIEW_SUFFIX,
};
use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::io::image::download_pattern;
use crate::io::progress::ProgressManager;
use crate::pattern::preview::render_preview;
use crate::pattern::variations::{generate_all_variations, generate_variations};
use crate::tiling::TilingMethod;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "seamtile")]
#[command(
    author,
    version,
    about = "Generate seamless pattern tiles from images"
)]
/// Command-line arguments for the tile generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory for generated tiles (defaults to the input's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Tiling method to run; repeat for several (defaults to all)
    #[arg(short, long = "method", value_enum)]
    pub methods: Vec<TilingMethod>,

    /// Also write a repeating-grid preview for each tile
    #[arg(short, long)]
    pub preview: bool,

    /// Preview scale from 1 (small tiles) to 100 (large tiles)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PREVIEW_SCALE,
        value_parser = clap::value_parser!(i32).range(MIN_PREVIEW_SCALE..=MAX_PREVIEW_SCALE)
    )]
    pub scale: i32,

    /// Preview canvas edge length in pixels
    #[arg(long, default_value_t = DEFAULT_PREVIEW_SIZE)]
    pub preview_size: u32,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
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

    /// Methods to run, all of them when none were selected
    pub fn selected_methods(&self) -> Vec<TilingMethod> {
        if self.methods.is_empty() {
            return TilingMethod::ALL.to_vec();
        }
        let mut methods = Vec::with_capacity(self.methods.len());
        for &method in &self.methods {
            if !methods.contains(&method) {
                methods.push(method);
            }
        }
        methods
    }

    /// Files written per input
    pub fn outputs_per_file(&self) -> usize {
        let per_method = if self.preview { 2 } else { 1 };
        self.selected_methods().len() * per_method
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        // Quiet runs keep the bookkeeping but never draw
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the number of input files processed.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<usize> {
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to process");
            return Ok(0);
        }

        self.progress_manager.initialize(files.len());
        debug!(
            files = files.len(),
            bars = self.progress_manager.bar_count(),
            batched = self.progress_manager.is_batched(),
            "progress initialized"
        );

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        self.progress_manager.finish();

        Ok(files.len())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("file must have one of the extensions {INPUT_EXTENSIONS:?}"),
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| PatternError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !self.is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let Some(&first) = self.cli.selected_methods().first() else {
            return true;
        };

        let output_path = self.output_path(input_path, first.id());
        if output_path.exists() {
            warn!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    // Outputs written into the input directory must not be picked up on the next run
    fn is_generated_output(&self, path: &Path) -> bool {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        stem.ends_with(PREVIEW_SUFFIX)
            || self
                .cli
                .selected_methods()
                .iter()
                .any(|method| stem.ends_with(&format!("{OUTPUT_SEPARATOR}{}", method.id())))
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let methods = self.cli.selected_methods();

        self.progress_manager
            .start_file(index, input_path, self.cli.outputs_per_file());

        let variations = if methods == TilingMethod::ALL {
            generate_all_variations(input_path)?
        } else {
            generate_variations(input_path, &methods)?
        };

        for variation in &variations {
            if variation.is_placeholder() {
                debug!(id = variation.id(), "skipping placeholder variation");
                continue;
            }

            download_pattern(variation.image(), self.output_path(input_path, variation.id()))?;
            self.record_output(index);

            if self.cli.preview {
                let preview = render_preview(
                    variation.image(),
                    self.cli.scale,
                    Some(self.cli.preview_size),
                )?;
                download_pattern(&preview, self.preview_path(input_path, variation.id()))?;
                self.record_output(index);
            }
        }

        let written = self
            .progress_manager
            .file_state(index)
            .map_or(0, |state| state.written);
        self.progress_manager.complete_file(index);

        info!(
            input = %input_path.display(),
            outputs = written,
            elapsed_ms = start_time.elapsed().as_millis(),
            "tiles written"
        );
        Ok(())
    }

    fn record_output(&mut self, index: usize) {
        self.progress_manager.output_written(index);
    }

    fn output_dir(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output_dir
            .clone()
            .unwrap_or_else(|| input_path.parent().map(Path::to_path_buf).unwrap_or_default())
    }

    /// Path of the tile written for `input_path` and a variation id
    pub fn output_path(&self, input_path: &Path, id: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        self.output_dir(input_path).join(format!(
            "{}{OUTPUT_SEPARATOR}{id}.png",
            stem.to_string_lossy()
        ))
    }

    /// Path of the preview written for `input_path` and a variation id
    pub fn preview_path(&self, input_path: &Path, id: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        self.output_dir(input_path).join(format!(
            "{}{OUTPUT_SEPARATOR}{id}{PREVIEW_SUFFIX}.png",
            stem.to_string_lossy()
        ))
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

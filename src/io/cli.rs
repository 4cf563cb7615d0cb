//! Command-line interface for batch rendering of prefix-code trees

use crate::io::configuration::{
    BUNDLED_OUTPUT_STEM, DEFAULT_TOP_K, DEFAULT_X_OFFSET, DEFAULT_Y_OFFSET, OUTPUT_SUFFIX, ROOT_Y,
};
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::export::{OutputFormat, export_document, export_tree};
use crate::io::progress::ProgressManager;
use crate::layout::geometry::Point;
use crate::layout::renderer::{RenderOptions, TreeRenderer};
use crate::tree::builder::{
    build_from_counts, count_frequencies, select_top_k, with_space_symbol,
};
use crate::tree::definition::{english_tree, load_path};
use crate::tree::node::CodeTreeNode;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "huffdraw")]
#[command(author, version, about = "Render prefix-code (Huffman) trees to SVG or PNG")]
/// Command-line arguments for the tree renderer
pub struct Cli {
    /// Tree definition (.json), text corpus (.txt) or directory of them;
    /// renders the bundled English tree when omitted
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Horizontal distance from the root to its children
    #[arg(short = 'x', long, default_value_t = DEFAULT_X_OFFSET)]
    pub x_offset: f64,

    /// Vertical distance between depth levels
    #[arg(short = 'y', long, default_value_t = DEFAULT_Y_OFFSET)]
    pub y_offset: f64,

    /// Canvas width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Number of most frequent characters kept when building from a corpus
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
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

    /// Canvas size requested on the command line, if any
    pub const fn canvas_size(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            (Some(w), None) => Some((w, w)),
            (None, Some(h)) => Some((h, h)),
            (None, None) => None,
        }
    }
}

/// Where a tree comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeSource {
    /// The embedded English alphabet
    Bundled,
    /// A JSON tree definition
    Definition(PathBuf),
    /// A text corpus to count characters in and build a tree from
    Corpus(PathBuf),
}

impl TreeSource {
    fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        if stem.ends_with(OUTPUT_SUFFIX) {
            return None;
        }
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(Self::Definition(path.to_path_buf())),
            Some("txt") => Some(Self::Corpus(path.to_path_buf())),
            _ => None,
        }
    }

    /// Path of the input file, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Bundled => None,
            Self::Definition(path) | Self::Corpus(path) => Some(path),
        }
    }

    /// Output path for the given format
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        self.sibling_path(format.extension())
    }

    /// Output path of the definition written for corpus builds
    pub fn document_path(&self) -> PathBuf {
        self.sibling_path("json")
    }

    fn sibling_path(&self, extension: &str) -> PathBuf {
        let Some(input_path) = self.path() else {
            return PathBuf::from(format!("{BUNDLED_OUTPUT_STEM}.{extension}"));
        };
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Orchestrates batch rendering with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress_manager: None,
        }
    }

    /// Render every tree selected by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading or rendering fails
    pub fn process(&mut self) -> Result<()> {
        let sources = self.collect_sources()?;

        if sources.is_empty() {
            tracing::info!("nothing to render");
            return Ok(());
        }

        if self.cli.should_show_progress() {
            self.progress_manager = Some(ProgressManager::new(sources.len()));
        }

        for source in &sources {
            self.process_source(source)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Inputs selected by the target argument, minus those already rendered
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a supported file nor a
    /// directory, or the directory cannot be read
    pub fn collect_sources(&self) -> Result<Vec<TreeSource>> {
        let Some(target) = &self.cli.target else {
            return Ok(self
                .should_process(&TreeSource::Bundled)
                .then_some(TreeSource::Bundled)
                .into_iter()
                .collect());
        };

        if target.is_file() {
            let source = TreeSource::from_path(target).ok_or_else(|| {
                invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a .json tree definition or a .txt corpus",
                )
            })?;
            Ok(self
                .should_process(&source)
                .then_some(source)
                .into_iter()
                .collect())
        } else if target.is_dir() {
            let entries =
                std::fs::read_dir(target).map_err(file_system(target, "read directory"))?;
            let mut paths = Vec::new();
            for entry in entries {
                let entry = entry.map_err(file_system(target, "read directory entry"))?;
                paths.push(entry.path());
            }
            paths.sort();
            Ok(paths
                .iter()
                .filter_map(|path| TreeSource::from_path(path))
                .filter(|source| self.should_process(source))
                .collect())
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a tree definition, corpus or directory",
            ))
        }
    }

    fn should_process(&self, source: &TreeSource) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = source.output_path(self.cli.format);
        if output_path.exists() {
            tracing::info!(output = %output_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_source(&self, source: &TreeSource) -> Result<()> {
        let start_time = Instant::now();
        if let (Some(pm), Some(path)) = (&self.progress_manager, source.path()) {
            pm.start_file(path);
        }

        let tree = self.load_source(source)?;
        let renderer = TreeRenderer::new(self.render_options(&tree));
        export_tree(
            &tree,
            &renderer,
            self.cli.format,
            &source.output_path(self.cli.format),
        )?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(start_time.elapsed());
        }
        Ok(())
    }

    fn load_source(&self, source: &TreeSource) -> Result<CodeTreeNode> {
        match source {
            TreeSource::Bundled => english_tree(),
            TreeSource::Definition(path) => load_path(path),
            TreeSource::Corpus(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(file_system(path, "read corpus"))?;
                let top = select_top_k(&count_frequencies(&text), self.cli.top_k);
                let top = with_space_symbol(&top);
                tracing::debug!(
                    path = %path.display(),
                    symbols = top.len(),
                    "building tree from corpus"
                );
                let tree = build_from_counts(&top)?;
                export_document(&tree, &source.document_path())?;
                Ok(tree)
            }
        }
    }

    /// Geometry for a tree, fitted to the layout unless a size was given
    pub fn render_options(&self, tree: &CodeTreeNode) -> RenderOptions {
        match self.cli.canvas_size() {
            Some((width, height)) => RenderOptions {
                canvas_width: width,
                canvas_height: height,
                origin: Point::new(f64::from(width) / 2.0, ROOT_Y),
                x_offset: self.cli.x_offset,
                y_offset: self.cli.y_offset,
                ..RenderOptions::default()
            },
            None => RenderOptions::fitted(tree, self.cli.x_offset, self.cli.y_offset),
        }
    }
}

//! Rendering trees to SVG and PNG files

use std::path::Path;

use crate::io::error::{Result, TreeRenderError, file_system};
use crate::layout::renderer::TreeRenderer;
use crate::surface::{RasterSurface, SvgSurface};
use crate::tree::definition::TreeDocument;
use crate::tree::node::CodeTreeNode;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Vector image with labels
    #[default]
    Svg,
    /// Raster image, glyphs and edges only
    Png,
}

impl OutputFormat {
    /// File extension without the dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str, operation: &'static str) -> Result<()> {
    create_parent_dir(path)?;
    std::fs::write(path, contents).map_err(file_system(path, operation))
}

/// Render the tree as an SVG document string
///
/// # Errors
///
/// Returns an error if the renderer options are invalid
pub fn render_svg(root: &CodeTreeNode, renderer: &TreeRenderer) -> Result<String> {
    let mut surface = SvgSurface::new();
    renderer.draw_tree(root, &mut surface)?;
    surface.finish()
}

/// Render the tree and save it in the requested format
///
/// # Errors
///
/// Returns an error if:
/// - The renderer options are invalid
/// - The parent directory cannot be created
/// - The file cannot be written or encoded
pub fn export_tree(
    root: &CodeTreeNode,
    renderer: &TreeRenderer,
    format: OutputFormat,
    output_path: &Path,
) -> Result<()> {
    match format {
        OutputFormat::Svg => {
            let document = render_svg(root, renderer)?;
            write_text(output_path, &document, "write SVG")?;
        }
        OutputFormat::Png => {
            let mut surface = RasterSurface::new();
            renderer.draw_tree(root, &mut surface)?;
            let image = surface.finish()?;
            create_parent_dir(output_path)?;
            image
                .save(output_path)
                .map_err(|e| TreeRenderError::ImageExport {
                    path: output_path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    tracing::info!(path = %output_path.display(), format = format.extension(), "exported tree");
    Ok(())
}

/// Save a tree as a JSON definition document
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn export_document(root: &CodeTreeNode, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&TreeDocument::from_tree(root)).map_err(|e| {
        TreeRenderError::DefinitionExport {
            path: output_path.to_path_buf(),
            source: e,
        }
    })?;
    write_text(output_path, &json, "write tree definition")?;
    tracing::info!(path = %output_path.display(), "exported tree definition");
    Ok(())
}

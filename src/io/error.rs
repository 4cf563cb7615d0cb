//! Error types for tree loading, construction and rendering

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all tree and rendering operations
#[derive(Debug)]
pub enum TreeRenderError {
    /// Tree definition violates a structural invariant
    ///
    /// Raised while loading when a node has exactly one child, a leaf has
    /// no symbol, an internal node carries a symbol or weight, or a code
    /// disagrees with the node's position in the tree.
    MalformedTree {
        /// Prefix of the offending node (path-derived)
        prefix: String,
        /// Description of the violated invariant
        reason: String,
    },

    /// Drawing surface cannot be drawn on
    ///
    /// Checked once before any drawing happens, so a failed render leaves
    /// the surface untouched.
    SurfaceUnavailable {
        /// Why the surface was rejected
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Symbol has no code in the codebook
    UnknownSymbol {
        /// The symbol that could not be encoded
        symbol: char,
    },

    /// Bit stream ended in the middle of a code word
    IncompleteCode {
        /// Bit offset where the unfinished code word starts
        position: usize,
    },

    /// Tree definition could not be parsed
    DefinitionParse {
        /// Source of the definition
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Tree definition could not be serialized for export
    DefinitionExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TreeRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTree { prefix, reason } => {
                if prefix.is_empty() {
                    write!(f, "Malformed tree at root: {reason}")
                } else {
                    write!(f, "Malformed tree at node '{prefix}': {reason}")
                }
            }
            Self::SurfaceUnavailable { reason } => {
                write!(f, "Drawing surface unavailable: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownSymbol { symbol } => {
                write!(f, "Symbol {symbol:?} has no code in this tree")
            }
            Self::IncompleteCode { position } => {
                write!(f, "Bit stream ends inside a code word starting at bit {position}")
            }
            Self::DefinitionParse { path, source } => {
                write!(
                    f,
                    "Failed to parse tree definition '{}': {source}",
                    path.display()
                )
            }
            Self::DefinitionExport { path, source } => {
                write!(
                    f,
                    "Failed to export tree definition to '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TreeRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DefinitionParse { source, .. } | Self::DefinitionExport { source, .. } => {
                Some(source)
            }
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tree rendering results
pub type Result<T> = std::result::Result<T, TreeRenderError>;

impl From<serde_json::Error> for TreeRenderError {
    fn from(err: serde_json::Error) -> Self {
        Self::DefinitionParse {
            path: PathBuf::from("<inline>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TreeRenderError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a malformed tree error for the node at `prefix`
pub fn malformed(prefix: &str, reason: &impl ToString) -> TreeRenderError {
    TreeRenderError::MalformedTree {
        prefix: prefix.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TreeRenderError {
    TreeRenderError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Error mapper for a failed file system `operation` on `path`
///
/// For use with `map_err`, so I/O errors keep the path they occurred on.
pub fn file_system(
    path: &Path,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> TreeRenderError {
    let path = path.to_path_buf();
    move |source| TreeRenderError::FileSystem {
        path,
        operation,
        source,
    }
}

/// Create a surface unavailable error
pub fn surface_unavailable(reason: &impl ToString) -> TreeRenderError {
    TreeRenderError::SurfaceUnavailable {
        reason: reason.to_string(),
    }
}

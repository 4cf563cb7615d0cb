//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use huffdraw::io::configuration::{
        DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_X_OFFSET, DEFAULT_Y_OFFSET,
        LEAF_LABEL_SPACING, MAX_CANVAS_DIMENSION, NODE_RADIUS, OFFSET_DECAY, OUTPUT_SUFFIX,
    };

    // Tests the default canvas is within the accepted range
    // Verified by lowering the maximum below the default
    #[test]
    fn test_canvas_defaults_valid() {
        assert!(DEFAULT_CANVAS_WIDTH > 0 && DEFAULT_CANVAS_WIDTH <= MAX_CANVAS_DIMENSION);
        assert!(DEFAULT_CANVAS_HEIGHT > 0 && DEFAULT_CANVAS_HEIGHT <= MAX_CANVAS_DIMENSION);
    }

    // Tests geometry constants keep glyphs apart
    // Verified by setting the vertical step below a glyph diameter
    #[test]
    fn test_geometry_constants() {
        assert_eq!(OFFSET_DECAY, 0.5);
        assert!(DEFAULT_Y_OFFSET > 2.0 * NODE_RADIUS);
        assert!(DEFAULT_X_OFFSET > 2.0 * NODE_RADIUS);
        assert!(LEAF_LABEL_SPACING < NODE_RADIUS);
    }

    // Tests the output suffix is a plain stem suffix
    // Verified by adding a dot to the suffix
    #[test]
    fn test_output_suffix() {
        assert!(!OUTPUT_SUFFIX.contains('.'));
        assert!(!OUTPUT_SUFFIX.is_empty());
    }
}

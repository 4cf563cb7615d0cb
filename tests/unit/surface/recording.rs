//! Tests for the draw call recorder

#[cfg(test)]
mod tests {
    use huffdraw::TreeRenderError;
    use huffdraw::layout::geometry::Point;
    use huffdraw::surface::{DrawCall, GlyphStyle, RecordingSurface, Surface, TextAlignment};

    const STYLE: GlyphStyle = GlyphStyle {
        fill: [1, 2, 3, 255],
        stroke: [0, 0, 0, 255],
    };

    // Tests calls are kept in issue order with their arguments
    // Verified by inserting calls at the front
    #[test]
    fn test_records_calls_in_order() {
        let mut surface = RecordingSurface::new();
        surface.clear(10, 20, [255, 255, 255, 255]);
        surface.draw_filled_circle(Point::new(1.0, 2.0), 3.0, STYLE);
        surface.draw_text("x", Point::new(4.0, 5.0), TextAlignment::Left);
        surface.draw_line(Point::new(0.0, 0.0), Point::new(6.0, 7.0));

        assert_eq!(
            surface.calls(),
            &[
                DrawCall::Clear {
                    width: 10,
                    height: 20,
                    background: [255, 255, 255, 255],
                },
                DrawCall::Circle {
                    center: Point::new(1.0, 2.0),
                    radius: 3.0,
                    style: STYLE,
                },
                DrawCall::Text {
                    text: "x".to_string(),
                    at: Point::new(4.0, 5.0),
                    alignment: TextAlignment::Left,
                },
                DrawCall::Line {
                    from: Point::new(0.0, 0.0),
                    to: Point::new(6.0, 7.0),
                },
            ]
        );
    }

    // Tests the filtered views pick out their call kind
    // Verified by returning every call from circles
    #[test]
    fn test_filtered_views() {
        let mut surface = RecordingSurface::new();
        surface.draw_filled_circle(Point::new(1.0, 1.0), 2.0, STYLE);
        surface.draw_line(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        surface.draw_text("ab", Point::new(3.0, 3.0), TextAlignment::Center);
        surface.draw_filled_circle(Point::new(4.0, 4.0), 2.0, STYLE);

        assert_eq!(surface.circles(), vec![Point::new(1.0, 1.0), Point::new(4.0, 4.0)]);
        assert_eq!(surface.lines().len(), 1);
        assert_eq!(surface.texts(), vec![("ab", Point::new(3.0, 3.0))]);
    }

    // Tests availability of attached and detached recorders
    // Verified by making detached recorders available
    #[test]
    fn test_availability() {
        assert!(RecordingSurface::new().check_available().is_ok());
        assert!(RecordingSurface::default().check_available().is_ok());
        assert!(matches!(
            RecordingSurface::detached().check_available(),
            Err(TreeRenderError::SurfaceUnavailable { .. })
        ));
    }
}

//! Tests for the RGBA raster surface

#[cfg(test)]
mod tests {
    use huffdraw::TreeRenderError;
    use huffdraw::layout::geometry::Point;
    use huffdraw::layout::renderer::{RenderOptions, TreeRenderer};
    use huffdraw::surface::{GlyphStyle, RasterSurface, Surface, TextAlignment};
    use huffdraw::tree::load_str;
    use image::Rgba;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const STYLE: GlyphStyle = GlyphStyle {
        fill: [76, 175, 80, 255],
        stroke: [0, 0, 0, 255],
    };

    // Tests clear allocates a buffer filled with the background
    // Verified by allocating a transparent buffer
    #[test]
    fn test_clear_allocates() {
        let mut surface = RasterSurface::new();
        surface.clear(8, 6, WHITE);
        let image = surface.finish().unwrap();

        assert_eq!(image.dimensions(), (8, 6));
        assert!(image.pixels().all(|p| *p == Rgba(WHITE)));
    }

    // Tests circles are filled with an outline ring
    // Verified by filling the whole disc with the stroke color
    #[test]
    fn test_filled_circle() {
        let mut surface = RasterSurface::new();
        surface.clear(50, 50, WHITE);
        surface.draw_filled_circle(Point::new(25.0, 25.0), 10.0, STYLE);
        let image = surface.finish().unwrap();

        assert_eq!(*image.get_pixel(25, 25), Rgba(STYLE.fill));
        assert_eq!(*image.get_pixel(35, 25), Rgba(STYLE.stroke));
        assert_eq!(*image.get_pixel(25, 15), Rgba(STYLE.stroke));
        assert_eq!(*image.get_pixel(40, 25), Rgba(WHITE));
        assert_eq!(*image.get_pixel(0, 0), Rgba(WHITE));
    }

    // Tests lines cover both endpoints
    // Verified by stopping one step early
    #[test]
    fn test_line_endpoints() {
        let mut surface = RasterSurface::new();
        surface.clear(20, 20, WHITE);
        surface.draw_line(Point::new(2.0, 3.0), Point::new(12.0, 8.0));
        let image = surface.finish().unwrap();

        assert_ne!(*image.get_pixel(2, 3), Rgba(WHITE));
        assert_ne!(*image.get_pixel(12, 8), Rgba(WHITE));
        assert_ne!(*image.get_pixel(7, 6), Rgba(WHITE));
    }

    // Tests drawing beyond the canvas is clipped
    // Verified by removing the bounds check in put
    #[test]
    fn test_clipping() {
        let mut surface = RasterSurface::new();
        surface.clear(10, 10, WHITE);
        surface.draw_filled_circle(Point::new(-5.0, 12.0), 8.0, STYLE);
        surface.draw_line(Point::new(-20.0, -20.0), Point::new(30.0, 30.0));
        surface.draw_text("ignored", Point::new(5.0, 5.0), TextAlignment::Center);
        let image = surface.finish().unwrap();

        assert_eq!(image.dimensions(), (10, 10));
        assert_ne!(*image.get_pixel(5, 5), Rgba(WHITE));
    }

    // Tests a segment reaching far off the canvas only steps over the visible part
    // Verified by stepping over the unclipped segment length
    #[test]
    fn test_line_far_off_canvas() {
        let mut surface = RasterSurface::new();
        surface.clear(20, 20, WHITE);
        surface.draw_line(Point::new(5.0, 5.0), Point::new(1.0e12, 5.0));
        surface.draw_line(Point::new(-1.0e12, -1.0e12), Point::new(-1.0e12, 1.0e12));
        let image = surface.finish().unwrap();

        assert_eq!(*image.get_pixel(4, 5), Rgba(WHITE));
        assert_ne!(*image.get_pixel(5, 5), Rgba(WHITE));
        assert_ne!(*image.get_pixel(19, 5), Rgba(WHITE));
        assert_eq!(image.pixels().filter(|p| **p != Rgba(WHITE)).count(), 15);
    }

    // Tests a huge circle only scans the canvas
    // Verified by scanning the whole bounding box
    #[test]
    fn test_huge_circle() {
        let mut surface = RasterSurface::new();
        surface.clear(20, 20, WHITE);
        surface.draw_filled_circle(Point::new(10.0, 10.0), 1.0e9, STYLE);
        surface.draw_filled_circle(Point::new(-1.0e9, 10.0), 5.0, STYLE);
        let image = surface.finish().unwrap();

        assert!(image.pixels().all(|p| *p == Rgba(STYLE.fill)));
    }

    // Tests drawing a tree with an offset far larger than the canvas
    // Verified by removing segment clipping
    #[test]
    fn test_tree_with_huge_offset() {
        let tree = load_str(r#"{"left": {"char": "a"}, "right": {"char": "b"}}"#).unwrap();
        let renderer = TreeRenderer::new(RenderOptions {
            canvas_width: 200,
            canvas_height: 200,
            origin: Point::new(100.0, 50.0),
            x_offset: 1.0e12,
            y_offset: 40.0,
            ..RenderOptions::default()
        });
        let mut surface = RasterSurface::new();
        renderer.draw_tree(&tree, &mut surface).unwrap();
        let image = surface.finish().unwrap();

        assert_eq!(*image.get_pixel(100, 50), Rgba(RenderOptions::default().internal_style.fill));
    }

    // Tests the image can only be taken once and only after clearing
    // Verified by leaving the surface available after finish
    #[test]
    fn test_finish_errors() {
        let mut never_cleared = RasterSurface::new();
        assert!(matches!(
            never_cleared.finish(),
            Err(TreeRenderError::SurfaceUnavailable { .. })
        ));

        let mut surface = RasterSurface::new();
        surface.clear(4, 4, WHITE);
        surface.finish().unwrap();
        assert!(surface.check_available().is_err());
        assert!(surface.finish().is_err());
    }
}

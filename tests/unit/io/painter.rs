//! Tests for region fill, border stroking, and color scaling

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use quadmosaic::algorithm::executor::{Mode, RenderOptions};
    use quadmosaic::algorithm::region::Region;
    use quadmosaic::io::painter::MosaicPainter;
    use quadmosaic::spatial::Rect;

    fn region_over(source: &RgbaImage, rect: Rect) -> Region {
        match Region::new(source, rect) {
            Ok(region) => region,
            Err(error) => unreachable!("in-bounds region must measure: {error}"),
        }
    }

    // Tests plain mode writes the exact mean color with opaque alpha
    #[test]
    fn test_plain_fill_writes_mean_color() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let region = region_over(&source, Rect::full_canvas(4, 4));
        let painter = MosaicPainter::from_options(&RenderOptions::default());

        let mut output = RgbaImage::new(4, 4);
        painter.paint(&mut output, &region);

        assert!(
            output
                .pixels()
                .all(|pixel| *pixel == Rgba([10, 20, 30, 255]))
        );
    }

    // Tests fill painting stays inside the region's rectangle
    #[test]
    fn test_fill_respects_rect_bounds() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([200, 0, 0, 255]));
        let region = region_over(&source, Rect::new(0, 0, 2, 2));
        let painter = MosaicPainter::from_options(&RenderOptions::default());

        let mut output = RgbaImage::new(4, 4);
        painter.paint(&mut output, &region);

        assert_eq!(*output.get_pixel(1, 1), Rgba([200, 0, 0, 255]));
        assert_eq!(*output.get_pixel(2, 2), Rgba([0, 0, 0, 0]));
    }

    // Tests bordered mode darkens the one-pixel outline
    // Verified by hand: 200 * 0.5 rounds to 100
    #[test]
    fn test_border_darkens_outline() {
        let source = RgbaImage::from_pixel(6, 6, Rgba([200, 100, 50, 255]));
        let region = region_over(&source, Rect::full_canvas(6, 6));
        let painter = MosaicPainter::from_options(&RenderOptions {
            mode: Mode::PlainWithBorder,
            line_luminance_scale: 0.5,
            ..RenderOptions::default()
        });

        let mut output = RgbaImage::new(6, 6);
        painter.paint(&mut output, &region);

        assert_eq!(*output.get_pixel(2, 2), Rgba([200, 100, 50, 255]));
        assert_eq!(*output.get_pixel(0, 0), Rgba([100, 50, 25, 255]));
        assert_eq!(*output.get_pixel(5, 5), Rgba([100, 50, 25, 255]));
        assert_eq!(*output.get_pixel(3, 0), Rgba([100, 50, 25, 255]));
    }

    // Tests swap-stroke inverts which side of the border is darkened
    #[test]
    fn test_swap_stroke_inverts_fill_and_outline() {
        let source = RgbaImage::from_pixel(6, 6, Rgba([200, 100, 50, 255]));
        let region = region_over(&source, Rect::full_canvas(6, 6));
        let painter = MosaicPainter::from_options(&RenderOptions {
            mode: Mode::PlainWithBorder,
            line_luminance_scale: 0.5,
            swap_stroke: true,
            ..RenderOptions::default()
        });

        let mut output = RgbaImage::new(6, 6);
        painter.paint(&mut output, &region);

        assert_eq!(*output.get_pixel(2, 2), Rgba([100, 50, 25, 255]));
        assert_eq!(*output.get_pixel(0, 0), Rgba([200, 100, 50, 255]));
    }

    // Tests monochrome collapses the fill to the NTSC luminance
    #[test]
    fn test_monochrome_fill_is_gray() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
        let region = region_over(&source, Rect::full_canvas(4, 4));
        let painter = MosaicPainter::from_options(&RenderOptions {
            monochrome: true,
            ..RenderOptions::default()
        });

        let mut output = RgbaImage::new(4, 4);
        painter.paint(&mut output, &region);

        // 200 * 0.2989 + 100 * 0.587 + 50 * 0.114 rounds to 124
        assert_eq!(*output.get_pixel(0, 0), Rgba([124, 124, 124, 255]));
    }

    // Tests luminance scaling brightens and saturates at white
    #[test]
    fn test_luminance_scale_saturates() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
        let region = region_over(&source, Rect::full_canvas(4, 4));
        let painter = MosaicPainter::from_options(&RenderOptions {
            luminance_scale: 1.5,
            ..RenderOptions::default()
        });

        let mut output = RgbaImage::new(4, 4);
        painter.paint(&mut output, &region);

        assert_eq!(*output.get_pixel(0, 0), Rgba([255, 150, 75, 255]));
    }

    // Tests a single-pixel region in bordered mode paints once
    #[test]
    fn test_border_on_single_pixel_region() {
        let source = RgbaImage::from_pixel(3, 3, Rgba([80, 80, 80, 255]));
        let region = region_over(&source, Rect::new(1, 1, 1, 1));
        let painter = MosaicPainter::from_options(&RenderOptions {
            mode: Mode::PlainWithBorder,
            line_luminance_scale: 0.5,
            ..RenderOptions::default()
        });

        let mut output = RgbaImage::new(3, 3);
        painter.paint(&mut output, &region);

        // Outline and interior coincide; the outline stroke wins
        assert_eq!(*output.get_pixel(1, 1), Rgba([40, 40, 40, 255]));
    }
}

use super::*;
use crate::{dilate_mask, extract_alpha_mask};

fn filled_square(n: u32, x0: u32, y0: u32, side: u32, rgba: [u8; 4]) -> PixelBuffer {
    let mut buf = PixelBuffer::new(n, n).unwrap();
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            buf.set_pixel(x, y, rgba).unwrap();
        }
    }
    buf
}

#[test]
fn blank_canvas_is_transparent() {
    let canvas = blank(4, 4).unwrap();
    assert!(canvas.data().iter().all(|&b| b == 0));
}

#[test]
fn draw_over_rejects_mismatched_dimensions() {
    let mut canvas = blank(4, 4).unwrap();
    let layer = blank(4, 5).unwrap();
    assert!(draw_over(&mut canvas, &layer).is_err());
}

#[test]
fn subject_always_covers_the_silhouette() {
    let red = [255, 0, 0, 255];
    let cutout = filled_square(32, 10, 10, 12, red);
    let silhouette = dilate_mask(&extract_alpha_mask(&cutout).unwrap(), 4).unwrap();

    let mut canvas = blank(32, 32).unwrap();
    draw_over(&mut canvas, &silhouette).unwrap();
    draw_over(&mut canvas, &cutout).unwrap();

    // Wherever the cutout is opaque the canvas equals the cutout exactly.
    for y in 10..22 {
        for x in 10..22 {
            assert_eq!(canvas.pixel(x, y).unwrap(), red);
        }
    }
}

#[test]
fn outline_forms_an_exact_ring_around_the_subject() {
    let red = [255, 0, 0, 255];
    let (n, r) = (64u32, 5u32);
    let cutout = filled_square(n, 24, 24, 16, red);
    let silhouette = dilate_mask(&extract_alpha_mask(&cutout).unwrap(), r).unwrap();

    let mut canvas = blank(n, n).unwrap();
    draw_over(&mut canvas, &silhouette).unwrap();
    draw_over(&mut canvas, &cutout).unwrap();

    // Just outside every edge: white ring.
    assert_eq!(canvas.pixel(23, 32).unwrap(), [255, 255, 255, 255]);
    assert_eq!(canvas.pixel(40, 32).unwrap(), [255, 255, 255, 255]);
    assert_eq!(canvas.pixel(32, 23).unwrap(), [255, 255, 255, 255]);
    assert_eq!(canvas.pixel(32, 40).unwrap(), [255, 255, 255, 255]);
    // Ring reaches exactly radius pixels out, not further.
    assert_eq!(canvas.pixel(24 - r, 32).unwrap(), [255, 255, 255, 255]);
    assert_eq!(canvas.pixel(24 - r - 1, 32).unwrap(), [0, 0, 0, 0]);
    // Inside stays the subject's pixel.
    assert_eq!(canvas.pixel(32, 32).unwrap(), red);
}


extern crate softcanvas;

use softcanvas::{Bitmap, Canvas, Color, LinearGradient, Paint, Pixel, Point, Rect, Shader, TileMode, Transform};

fn rbg() -> Vec<Color> {
    vec![Color::rgba(1., 0., 0., 1.), Color::rgba(0., 0., 1., 1.), Color::rgba(0., 1., 0., 1.)]
}

/// Pixel x of a gradient running from device x = 0 to x = 10
fn sample(g: &LinearGradient, x: i32) -> Pixel {
    let mut px = [Pixel(0)];
    g.shade_row(x, 0, &mut px);
    px[0]
}

fn gradient(tile: TileMode) -> LinearGradient {
    let g = LinearGradient::new(Point::new(0.5, 0.), Point::new(10.5, 0.), &rbg(), tile).unwrap();
    assert!(g.set_context(&Transform::new()));
    g
}

#[test]
fn mirror() {
    let g = gradient(TileMode::Mirror);
    // local 0.5 == 1.5 == -0.5
    assert_eq!(sample(&g, 5), sample(&g, 15));
    assert_eq!(sample(&g, 5), sample(&g, -5));
    assert_eq!(sample(&g, 5).argb(), [255, 0, 0, 255]);
    assert_eq!(sample(&g, 9), sample(&g, 11));
    assert_eq!(sample(&g, 3), sample(&g, 17));
    assert_eq!(sample(&g, 3), sample(&g, -3));
}

#[test]
fn repeat() {
    let g = gradient(TileMode::Repeat);
    assert_eq!(sample(&g, 2), sample(&g, 12));
    assert_eq!(sample(&g, 2), sample(&g, -8));
    assert_eq!(sample(&g, 2).argb(), [255, 153, 0, 102]);
}

#[test]
fn clamp() {
    let g = gradient(TileMode::Clamp);
    assert_eq!(sample(&g, 25).argb(), [255, 0, 255, 0]);
    assert_eq!(sample(&g, -10).argb(), [255, 255, 0, 0]);
    assert_eq!(sample(&g, 9).argb(), [255, 0, 204, 51]);
}

#[test]
fn drawn_row_matches_shader() {
    let g = gradient(TileMode::Mirror);
    let mut c = Canvas::new(Bitmap::new(30, 2));
    c.draw_rect(&Rect::wh(30., 2.), &Paint::from_shader(&g));
    let mut row = vec![Pixel(0); 30];
    g.shade_row(0, 1, &mut row);
    assert_eq!(c.bitmap().row(1), &row[..]);
}

#[test]
fn transparent_stops_leave_destination() {
    let clear = [Color::rgba(1., 0., 0., 0.), Color::rgba(0., 1., 0., 0.)];
    let g = LinearGradient::new(Point::new(0., 0.), Point::new(4., 0.), &clear, TileMode::Clamp).unwrap();
    assert!(!g.is_opaque());
    let mut c = Canvas::new(Bitmap::new(4, 4));
    c.clear(Color::white());
    c.draw_rect(&Rect::wh(4., 4.), &Paint::from_shader(&g));
    assert!(c.bitmap().to_vec().iter().all(|&p| p == Pixel(0xFFFF_FFFF)));
}

#[test]
fn degenerate() {
    assert!(LinearGradient::new(Point::new(0., 0.), Point::new(1., 0.), &[], TileMode::Clamp).is_none());
    let g = LinearGradient::new(Point::new(3., 3.), Point::new(3., 3.), &rbg(), TileMode::Clamp).unwrap();
    assert!(!g.set_context(&Transform::new()));
    let mut c = Canvas::new(Bitmap::new(4, 4));
    c.draw_rect(&Rect::wh(4., 4.), &Paint::from_shader(&g));
    assert!(c.bitmap().to_vec().iter().all(|&p| p == Pixel(0)));
}


extern crate softcanvas;

use softcanvas::{Bitmap, BlendMode, Canvas, Color, Paint, Pixel, Rect, Transform};

fn count(c: &Canvas, p: Pixel) -> usize {
    c.bitmap().to_vec().iter().filter(|&&v| v == p).count()
}

#[test]
fn clear() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut c = Canvas::new(Bitmap::new(3, 3));

    c.clear(Color::rgba(1., 0., 0., 1.));
    assert!(c.bitmap().to_vec().iter().all(|p| p.argb() == [0xFF, 0xFF, 0, 0]));

    c.clear(Color::rgba(1., 0., 0., 0.25));
    assert!(c.bitmap().to_vec().iter().all(|p| p.argb() == [0x40, 0x40, 0, 0]));

    c.clear(Color::rgba(0., 0., 1., 0.75));
    assert!(c.bitmap().to_vec().iter().all(|p| p.argb() == [0xBF, 0, 0, 0xBF]));

    c.clear(Color::rgba(1., 1., 1., 0.));
    assert_eq!(count(&c, Pixel(0)), 9);
}

#[test]
fn rect_nodraw() {
    let mut c = Canvas::new(Bitmap::new(10, 10));
    c.clear(Color::white());
    let before = c.bitmap().to_vec();
    let paint = Paint::new(Color::black());
    let rects = [
        Rect::ltrb(0., 0., 0., 0.),
        Rect::ltrb(-10., -10., 0., 0.),
        Rect::ltrb(10., 10., 20., 20.),
        Rect::ltrb(-5., 3., 15., 3.4),
        Rect::ltrb(0.6, 0.6, 1.4, 1.4),
        Rect::ltrb(2., 12., 4., 30.),
    ];
    for r in rects.iter() {
        c.draw_rect(r, &paint);
    }
    assert_eq!(c.bitmap().to_vec(), before);

    // Rotated rectangles outside the bitmap draw nothing either
    c.save();
    c.concat(&Transform::new_rotate(0.5));
    c.draw_rect(&Rect::ltrb(-40., -40., -20., -20.), &paint);
    c.restore();
    assert_eq!(c.bitmap().to_vec(), before);
}

#[test]
fn rect_rounds_to_pixel_centers() {
    let mut c = Canvas::new(Bitmap::new(10, 10));
    c.fill_rect(&Rect::ltrb(1.5, 1.5, 3.4, 4.6), Color::black());
    let black = Pixel(0xFF00_0000);
    assert_eq!(count(&c, black), 3);
    for y in 2 .. 5 {
        assert_eq!(c.bitmap()[(2, y)], black);
    }
}

#[test]
fn rect_fast_path_matches_polygon() {
    let rects = [
        Rect::ltrb(1.2, 1.2, 5.7, 3.3),
        Rect::ltrb(-3., 2.5, 4.5, 8.5),
        Rect::ltrb(7.1, -2., 12., 12.),
    ];
    for r in rects.iter() {
        let mut a = Canvas::new(Bitmap::new(10, 10));
        let mut b = Canvas::new(Bitmap::new(10, 10));
        a.fill_rect(r, Color::black());
        b.draw_convex_polygon(&r.corners(), &Paint::new(Color::black()));
        assert_eq!(a.bitmap().to_vec(), b.bitmap().to_vec(), "{:?}", r);
    }
}

#[test]
fn rotated_rect_is_a_polygon() {
    let m = Transform::new_translate(10., 2.) * Transform::new_rotate(std::f32::consts::PI / 6.);
    let r = Rect::ltrb(1., 1., 12., 7.);
    let mut a = Canvas::new(Bitmap::new(20, 20));
    a.concat(&m);
    a.fill_rect(&r, Color::black());

    let mut pts = r.corners();
    m.map_points_in_place(&mut pts);
    let mut b = Canvas::new(Bitmap::new(20, 20));
    b.draw_convex_polygon(&pts, &Paint::new(Color::black()));

    assert_eq!(a.bitmap().to_vec(), b.bitmap().to_vec());
    assert!(count(&a, Pixel(0xFF00_0000)) > 40);
}

#[test]
fn blend_modes() {
    let blue = Color::rgba(0., 0., 1., 1.);
    let half_red = Color::rgba(1., 0., 0., 0.5);
    let r = Rect::wh(2., 2.);
    let draw = |mode: BlendMode, color: Color| {
        let mut c = Canvas::new(Bitmap::new(2, 2));
        c.clear(blue);
        c.draw_rect(&r, &Paint::new(color).with_blend_mode(mode));
        c.bitmap()[(1, 1)].argb()
    };
    assert_eq!(draw(BlendMode::SrcOver, half_red), [255, 128, 0, 127]);
    assert_eq!(draw(BlendMode::Src, half_red), [128, 128, 0, 0]);
    assert_eq!(draw(BlendMode::Dst, half_red), [255, 0, 0, 255]);
    assert_eq!(draw(BlendMode::Clear, half_red), [0, 0, 0, 0]);
    assert_eq!(draw(BlendMode::DstOver, half_red), [255, 0, 0, 255]);
    assert_eq!(draw(BlendMode::SrcIn, half_red), [128, 128, 0, 0]);
    assert_eq!(draw(BlendMode::DstOut, Color::black()), [0, 0, 0, 0]);
    assert_eq!(draw(BlendMode::SrcOver, Color::transparent()), [255, 0, 0, 255]);
    assert_eq!(draw(BlendMode::Xor, Color::white()), [0, 0, 0, 0]);
}

#[test]
fn paint_alpha() {
    let mut c = Canvas::new(Bitmap::new(1, 1));
    c.draw_rect(&Rect::wh(1., 1.), &Paint::new(Color::white()).with_alpha(0.5));
    assert_eq!(c.bitmap()[(0, 0)].argb(), [128, 128, 128, 128]);
    c.draw_rect(&Rect::wh(1., 1.), &Paint::new(Color::black()).with_alpha(0.0));
    assert_eq!(c.bitmap()[(0, 0)].argb(), [128, 128, 128, 128]);
}

#[test]
fn draws_into_borrowed_memory() {
    let mut mem = vec![Pixel(0); 16];
    {
        let bm = Bitmap::from_slice(2, 2, 4, &mut mem[5..]).unwrap();
        let mut c = Canvas::new(bm);
        c.fill_rect(&Rect::ltrb(-10., -10., 100., 100.), Color::white());
    }
    let set: Vec<usize> = (0 .. 16).filter(|&i| mem[i] != Pixel(0)).collect();
    assert_eq!(set, vec![5, 6, 9, 10]);
}

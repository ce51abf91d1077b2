
extern crate softcanvas;

use softcanvas::{Path, PathCommand, PathOrientation, Point, Rect};

fn cmds(p: &Path) -> Vec<PathCommand> {
    p.edges().map(|s| s.cmd).collect()
}

#[test]
fn open_polygon_is_closed() {
    let mut p = Path::new();
    p.add_polygon(&[Point::new(0., 0.), Point::new(4., 0.), Point::new(4., 4.)]);
    let segs: Vec<_> = p.edges().collect();
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[2].points(), &[Point::new(4., 4.), Point::new(0., 0.)]);
}

#[test]
fn closed_polygon_gets_no_extra_line() {
    let mut p = Path::new();
    p.move_to(0., 0.);
    p.line_to(4., 0.);
    p.line_to(4., 4.);
    p.line_to(0., 0.);
    assert_eq!(cmds(&p), vec![PathCommand::LineTo; 3]);
}

#[test]
fn every_contour_is_closed() {
    let mut p = Path::new();
    p.add_rect(&Rect::ltrb(0., 0., 2., 2.), PathOrientation::Clockwise);
    p.add_rect(&Rect::ltrb(5., 5., 7., 7.), PathOrientation::CounterClockwise);
    let segs: Vec<_> = p.edges().collect();
    assert_eq!(segs.len(), 8);
    assert_eq!(segs[3].points(), &[Point::new(0., 2.), Point::new(0., 0.)]);
    assert_eq!(segs[7].points(), &[Point::new(7., 5.), Point::new(5., 5.)]);
    assert!(segs.iter().all(|s| s.cmd == PathCommand::LineTo));
}

#[test]
fn curves_pass_through() {
    let mut p = Path::new();
    p.move_to(0., 0.);
    p.quad_to(5., 5., 10., 0.);
    p.cubic_to(10., 5., 5., 10., 0., 10.);
    assert_eq!(cmds(&p), vec![PathCommand::QuadTo, PathCommand::CubicTo, PathCommand::LineTo]);

    let mut c = Path::new();
    c.add_circle(Point::new(0., 0.), 1., PathOrientation::Clockwise);
    assert_eq!(cmds(&c), vec![PathCommand::CubicTo; 4]);
}

#[test]
fn lone_moves_produce_nothing() {
    let mut p = Path::new();
    p.move_to(1., 1.);
    p.move_to(2., 2.);
    assert_eq!(p.edges().count(), 0);
    assert_eq!(p.iter().count(), 2);
}

#[test]
fn implicit_move() {
    let mut p = Path::new();
    p.line_to(4., 0.);
    p.line_to(4., 4.);
    assert_eq!(p.verbs()[0], PathCommand::MoveTo);
    assert_eq!(p.points()[0], Point::new(0., 0.));
    assert_eq!(p.edges().count(), 3);
}

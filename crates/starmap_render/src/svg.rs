//! SVG serialization of a [`Scene`].
//!
//! Coordinates are written with two decimals and dash lengths with one. Star
//! points reference a shared glow filter and pattern paths reference a clip
//! path built from the scene disk.

use std::f64::consts::PI;
use std::fmt::Write;

use starmap_core::geometry::Point;
use starmap_core::scene::{PathGeometry, Primitive, Scene, Stroke, WHITE};

const GLOW_ID: &str = "glow";
const CLIP_ID: &str = "circleClip";

pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    write_header(&mut out, scene);
    for item in &scene.items {
        write_primitive(&mut out, &item.primitive);
    }
    out.push_str("</svg>\n");
    out
}

fn write_header(out: &mut String, scene: &Scene) {
    let (w, h) = (scene.width, scene.height);
    let clip = scene.clip;
    let _ = write!(
        out,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <filter id="{GLOW_ID}" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="1" result="blur"/>
      <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
    <clipPath id="{CLIP_ID}"><circle cx="{:.2}" cy="{:.2}" r="{:.2}"/></clipPath>
  </defs>
"#,
        clip.center.x, clip.center.y, clip.radius
    );
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Rect {
            origin,
            width,
            height,
            fill,
        } => {
            let _ = writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                origin.x, origin.y, width, height, fill
            );
        }
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}""#,
                center.x,
                center.y,
                radius,
                fill.unwrap_or("none")
            );
            if let Some(stroke) = stroke {
                write_stroke(out, stroke);
            }
            if *opacity < 1.0 {
                let _ = write!(out, r#" opacity="{}""#, opacity);
            }
            out.push_str("/>\n");
        }
        Primitive::Polyline(path) => write_polyline(out, path),
        Primitive::Arc {
            center,
            radius,
            start,
            end,
            stroke,
        } => {
            let from = polar(*center, *radius, *start);
            let to = polar(*center, *radius, *end);
            let large_arc = u8::from((end - start).abs() > PI);
            let _ = write!(
                out,
                r#"<path d="M {:.2},{:.2} A {r:.2},{r:.2} 0 {large_arc} 1 {:.2},{:.2}" fill="none""#,
                from.x,
                from.y,
                to.x,
                to.y,
                r = radius,
            );
            write_stroke(out, stroke);
            out.push_str("/>\n");
        }
        Primitive::Point {
            center,
            radius,
            glow,
        } => {
            let _ = write!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{WHITE}""#,
                center.x, center.y, radius
            );
            if *glow {
                let _ = write!(out, r#" filter="url(#{GLOW_ID})""#);
            }
            out.push_str("/>\n");
        }
        Primitive::Text {
            anchor,
            text,
            size,
            fill,
        } => {
            let _ = writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="middle" fill="{}">{}</text>"#,
                anchor.x,
                anchor.y,
                size,
                fill,
                escape(text)
            );
        }
    }
}

fn write_polyline(out: &mut String, path: &PathGeometry) {
    let Some((first, rest)) = path.points.split_first() else {
        return;
    };
    let _ = write!(out, r#"<path d="M {:.2},{:.2}"#, first.x, first.y);
    for point in rest {
        let _ = write!(out, " L {:.2},{:.2}", point.x, point.y);
    }
    out.push_str(r#"" fill="none""#);
    write_stroke(out, &path.stroke);
    if path.clipped {
        let _ = write!(out, r#" clip-path="url(#{CLIP_ID})""#);
    }
    out.push_str("/>\n");
}

fn write_stroke(out: &mut String, stroke: &Stroke) {
    let _ = write!(
        out,
        r#" stroke="{WHITE}" stroke-width="{}""#,
        stroke.width
    );
    if let Some((on, off)) = stroke.dash {
        let _ = write!(out, r#" stroke-dasharray="{on:.1},{off:.1}""#);
    }
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    starmap_core::geometry::polar_to_xy(center, radius, angle)
}

/// Escape the characters that break XML text content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use starmap_core::geometry::Disk;
    use starmap_core::scene::{Layer, Stroke};

    fn scene_with(primitive: Primitive) -> Scene {
        let mut scene = Scene::new(100.0, 100.0, Disk::for_canvas(100.0, 1.0));
        scene.push(Layer::Pattern, primitive);
        scene
    }

    #[test]
    fn header_declares_filter_and_clip() {
        let svg = to_svg(&Scene::new(1080.0, 1080.0, Disk::for_canvas(1080.0, 0.93)));
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 1080 1080""#));
        assert!(svg.contains(r#"<filter id="glow""#));
        assert!(svg.contains(
            r#"<clipPath id="circleClip"><circle cx="540.00" cy="540.00" r="431.89"/>"#
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn polyline_writes_moves_dashes_and_clip() {
        let svg = to_svg(&scene_with(Primitive::Polyline(PathGeometry {
            points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.5)],
            stroke: Stroke::dashed(1.3, 3.52, 2.42),
            clipped: true,
        })));
        assert!(svg.contains(r#"d="M 1.00,2.00 L 3.00,4.50""#));
        assert!(svg.contains(r#"stroke-width="1.3""#));
        assert!(svg.contains(r#"stroke-dasharray="3.5,2.4""#));
        assert!(svg.contains(r#"clip-path="url(#circleClip)""#));
    }

    #[test]
    fn empty_polyline_is_skipped() {
        let svg = to_svg(&scene_with(Primitive::Polyline(PathGeometry {
            points: Vec::new(),
            stroke: Stroke::solid(1.0),
            clipped: false,
        })));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn arc_uses_small_clockwise_sweep() {
        let svg = to_svg(&scene_with(Primitive::Arc {
            center: Point::new(50.0, 50.0),
            radius: 10.0,
            start: -0.1,
            end: 0.1,
            stroke: Stroke::solid(2.0),
        }));
        assert!(svg.contains(" A 10.00,10.00 0 0 1 "));
        assert!(svg.contains(r#"stroke-width="2""#));
    }

    #[test]
    fn glowing_point_references_filter() {
        let svg = to_svg(&scene_with(Primitive::Point {
            center: Point::new(5.0, 6.0),
            radius: 1.25,
            glow: true,
        }));
        assert!(svg.contains(
            r##"<circle cx="5.00" cy="6.00" r="1.25" fill="#FFF" filter="url(#glow)"/>"##
        ));
    }

    #[test]
    fn text_is_escaped() {
        let svg = to_svg(&scene_with(Primitive::Text {
            anchor: Point::new(50.0, 90.0),
            text: "Ada & <Grace>".to_string(),
            size: 28.0,
            fill: WHITE,
        }));
        assert!(svg.contains(">Ada &amp; &lt;Grace&gt;</text>"));
    }
}

//! SVG visualization of a viewer's current transform.
//!
//! Draws one annotated panel: the viewport, the fit-size image outline, the
//! image as currently displayed (scaled and offset, possibly overshooting the
//! viewport mid-gesture), and the region the image center may be panned to.
//!
//! # Example
//!
//! ```
//! use zenzoom::{GestureEvent, Size, TransformReducer, svg::render_transform_svg};
//!
//! let mut reducer =
//!     TransformReducer::with_geometry(Size::new(4000.0, 3000.0), Size::new(1000.0, 800.0));
//! reducer.apply(GestureEvent::DoubleTap).unwrap();
//!
//! let svg = render_transform_svg(&reducer);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("×4.00"));
//! ```

use crate::geometry::{Axis, Size};
use crate::reducer::TransformReducer;

/// Maximum pixel width of the panel.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height of the panel.
const MAX_PANEL_H: f64 = 200.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top and bottom margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of the label line above the panel.
const LABEL_H: f64 = 22.0;
/// Height of each annotation line below the panel.
const ANNOTATION_H: f64 = 16.0;

/// Axis-aligned box in viewport-centered coordinates.
#[derive(Copy, Clone, Debug)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn centered(cx: f64, cy: f64, size: Size) -> Self {
        Self {
            left: cx - size.width / 2.0,
            top: cy - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    fn union(self, other: Frame) -> Frame {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = (self.left + self.width).max(other.left + other.width);
        let bottom = (self.top + self.height).max(other.top + other.height);
        Frame {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }
}

/// Render a complete SVG document for the reducer's current state.
pub fn render_transform_svg(reducer: &TransformReducer) -> String {
    let (Some(transform), Some(viewport)) = (reducer.current_transform(), reducer.viewport_size())
    else {
        return render_empty();
    };
    let fit = reducer.fit();
    let state = reducer.state();

    let view = Frame::centered(0.0, 0.0, viewport);
    let fitted = Frame::centered(0.0, 0.0, fit.min_display_size);
    let shown = Frame::centered(
        transform.offset.x,
        transform.offset.y,
        transform.display_size(fit),
    );
    let rx = reducer.offset_range(Axis::Horizontal);
    let ry = reducer.offset_range(Axis::Vertical);
    let pan = Frame {
        left: rx.min,
        top: ry.min,
        width: rx.max - rx.min,
        height: ry.max - ry.min,
    };

    let bounds = view.union(shown).union(fitted);
    let scale = (MAX_PANEL_W / bounds.width).min(MAX_PANEL_H / bounds.height);
    let panel_w = bounds.width * scale;
    let panel_h = bounds.height * scale;

    let annotations = [
        format!(
            "scale ×{:.2} (native {:.0}%)",
            state.scale_ratio,
            transform.absolute_scale(fit) * 100.0
        ),
        format!("offset ({:.1}, {:.1})", state.offset.x, state.offset.y),
        format!("{:?}", reducer.phase()),
    ];

    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP
        + LABEL_H
        + MAX_PANEL_H
        + ANNOTATION_H * annotations.len() as f64
        + MARGIN_TOP;

    let mut svg = String::with_capacity(2048);
    push_header(&mut svg, total_w, total_h);

    let center_x = total_w / 2.0;
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&format!(
            "Viewport  {}×{}",
            fmt_dim(viewport.width),
            fmt_dim(viewport.height)
        ))
    ));
    svg.push('\n');

    let origin_x = center_x - panel_w / 2.0;
    let origin_y = MARGIN_TOP + LABEL_H + (MAX_PANEL_H - panel_h) / 2.0;
    let place = |f: Frame| {
        (
            origin_x + (f.left - bounds.left) * scale,
            origin_y + (f.top - bounds.top) * scale,
            f.width * scale,
            f.height * scale,
        )
    };

    push_rect(&mut svg, place(view), "outer");
    push_rect(&mut svg, place(shown), "image");
    push_rect(&mut svg, place(fitted), "fit");
    push_rect(&mut svg, place(view), "frame");
    if pan.width > 0.0 || pan.height > 0.0 {
        push_rect(&mut svg, place(pan), "pan");
    }

    let mut y = MARGIN_TOP + LABEL_H + MAX_PANEL_H;
    for line in &annotations {
        y += ANNOTATION_H;
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            y - 2.0,
            escape_xml(line)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Document shown before image and viewport sizes are usable.
fn render_empty() -> String {
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + MARGIN_TOP;
    let mut svg = String::with_capacity(1024);
    push_header(&mut svg, total_w, total_h);
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">no geometry</text>"#,
        total_w / 2.0,
        MARGIN_TOP + 14.0
    ));
    svg.push('\n');
    svg.push_str("</svg>\n");
    svg
}

fn push_header(svg: &mut String, total_w: f64, total_h: f64) {
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: none; }
  .image { fill: #6ba3d6; fill-opacity: 0.75; stroke: #2c6faa; stroke-width: 1.5; }
  .fit { fill: none; stroke: #2c6faa; stroke-width: 1; stroke-dasharray: 4,2; }
  .frame { fill: none; stroke: #999; stroke-width: 1.5; }
  .pan { fill: none; stroke: #d67a3a; stroke-width: 1; stroke-dasharray: 2,2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; }
    .image { fill: #3a72a4; stroke: #5a9fd4; }
    .fit { stroke: #5a9fd4; }
    .frame { stroke: #555; }
    .pan { stroke: #e0965a; }
  }
</style>
"##,
    );
}

fn push_rect(svg: &mut String, (x, y, w, h): (f64, f64, f64, f64), class: &str) {
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="{class}"/>"#
    ));
    svg.push('\n');
}

/// Whole numbers without a fraction, others with one decimal.
fn fmt_dim(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;
    use crate::reducer::GestureEvent;

    fn landscape() -> TransformReducer {
        TransformReducer::with_geometry(Size::new(4000.0, 3000.0), Size::new(1000.0, 800.0))
    }

    #[test]
    fn svg_without_geometry() {
        let svg = render_transform_svg(&TransformReducer::new());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("no geometry"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn svg_fit_state() {
        let svg = render_transform_svg(&landscape());
        assert!(svg.contains("Viewport  1000×800"));
        assert!(svg.contains("×1.00"));
        assert!(svg.contains("native 25%"));
        assert!(svg.contains("offset (0.0, 0.0)"));
        assert!(svg.contains("Idle"));
        // Nothing to pan at fit size.
        assert!(!svg.contains(r#"class="pan""#));
    }

    #[test]
    fn svg_zoomed_shows_pan_region() {
        let mut r = landscape();
        r.apply(GestureEvent::DoubleTap).unwrap();
        let svg = render_transform_svg(&r);
        assert!(svg.contains("×4.00"));
        assert!(svg.contains("native 100%"));
        assert!(svg.contains(r#"class="pan""#));
    }

    #[test]
    fn svg_mid_gesture_reports_phase() {
        let mut r = landscape();
        r.apply(GestureEvent::DragChanged {
            translation: Vec2::ZERO,
        })
        .unwrap();
        r.apply(GestureEvent::DragChanged {
            translation: Vec2::new(300.0, 0.0),
        })
        .unwrap();
        let svg = render_transform_svg(&r);
        assert!(svg.contains("DragActive"));
        assert!(svg.contains("offset (300.0, 0.0)"));
    }

    #[test]
    fn svg_panel_fits_limits() {
        let mut r = landscape();
        r.apply(GestureEvent::DoubleTap).unwrap();
        let svg = render_transform_svg(&r);
        for chunk in svg.split(r#"width=""#).skip(2) {
            let w: f64 = chunk.split('"').next().unwrap().parse().unwrap();
            assert!(w <= MAX_PANEL_W + 0.05, "rect width {w} exceeds panel");
        }
    }

    #[test]
    fn svg_is_valid_xml() {
        let svg = render_transform_svg(&landscape());
        let opens = svg.matches("<rect").count() + svg.matches("<text").count();
        let closes = svg.matches("/>").count() + svg.matches("</text>").count();
        assert_eq!(opens, closes);
        assert_eq!(svg.matches("<svg").count(), 1);
        assert_eq!(svg.matches("</svg>").count(), 1);
    }

    #[test]
    fn xml_escaping() {
        assert_eq!(escape_xml("a<b&\"c\">"), "a&lt;b&amp;&quot;c&quot;&gt;");
    }
}

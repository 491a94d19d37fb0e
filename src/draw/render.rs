//! Cairo-based rendering functions for marks.

use super::color::Color;
use super::geometry::Outline;
use super::mark::Mark;

/// Renders a single mark to a Cairo context.
///
/// Dispatches on the mark variant; stroked outlines and text blocks cover
/// every committed or previewed primitive. Rendering errors are swallowed,
/// callers that must know whether drawing succeeded check the context status
/// afterwards.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `mark` - The mark to render
pub fn render_mark(ctx: &cairo::Context, mark: &Mark) {
    match mark {
        Mark::Stroke {
            outline,
            color,
            width,
        } => {
            render_outline(ctx, outline, *color, *width);
        }
        Mark::Text {
            x,
            y,
            text,
            color,
            size,
            font,
        } => {
            render_text(ctx, *x, *y, text, *color, *size, font);
        }
    }
}

/// Renders a stroked outline.
pub fn render_outline(ctx: &cairo::Context, outline: &Outline, color: Color, width: f64) {
    match outline {
        Outline::Rect { x, y, w, h } => render_rect(ctx, *x, *y, *w, *h, color, width),
        Outline::Ellipse { cx, cy, rx, ry } => {
            render_ellipse(ctx, *cx, *cy, *rx, *ry, color, width);
        }
        Outline::Segment { x1, y1, x2, y2 } => {
            render_segment(ctx, *x1, *y1, *x2, *y2, color, width);
        }
        Outline::Polygon(points) => render_polygon(ctx, points, color, width),
    }
}

/// Render a straight segment with rounded caps
fn render_segment(
    ctx: &cairo::Context,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
    width: f64,
) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
}

/// Render a rectangle (outline)
fn render_rect(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, color: Color, width: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);

    // Previews carry the raw drag box, so extents may be negative here even
    // though commits are normalized
    let (norm_x, norm_w) = if w >= 0.0 { (x, w) } else { (x + w, -w) };
    let (norm_y, norm_h) = if h >= 0.0 { (y, h) } else { (y + h, -h) };

    ctx.rectangle(norm_x, norm_y, norm_w, norm_h);
    let _ = ctx.stroke();
}

/// Render an ellipse using Cairo's arc with scaling
fn render_ellipse(
    ctx: &cairo::Context,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    color: Color,
    width: f64,
) {
    if rx == 0.0 || ry == 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);

    // Build the path under a scale transform, then stroke outside it so the
    // line width is not distorted
    ctx.save().ok();
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}

/// Render a closed polygon through the listed vertices
fn render_polygon(ctx: &cairo::Context, points: &[(f64, f64)], color: Color, width: f64) {
    if points.len() < 2 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Round);

    let (x0, y0) = points[0];
    ctx.move_to(x0, y0);
    for &(x, y) in &points[1..] {
        ctx.line_to(x, y);
    }
    ctx.close_path();
    let _ = ctx.stroke();
}

/// Renders text anchored at its top-left corner using Pango.
///
/// Pango lays the text out from the given point downward, so no baseline
/// arithmetic is needed; newlines in the content produce additional lines
/// with spacing taken from the font metrics.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `x` - Left edge of the laid-out text
/// * `y` - Top edge of the laid-out text
/// * `text` - Text content to render
/// * `color` - Fill color
/// * `size` - Font size in points
/// * `font` - Font configuration (family, weight, style)
pub fn render_text(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    text: &str,
    color: Color,
    size: f64,
    font: &super::FontDescriptor,
) {
    // Save context state to prevent settings from leaking to other drawing operations
    ctx.save().ok();

    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);

    let font_desc_str = font.to_pango_string(size);
    let font_desc = pango::FontDescription::from_string(&font_desc_str);
    layout.set_font_description(Some(&font_desc));

    // Pango handles newlines automatically
    layout.set_text(text);

    ctx.move_to(x, y);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

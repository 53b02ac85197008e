//! Drawing helpers over tiny-skia.
//!
//! Thin wrappers that keep the pattern generators free of pixmap plumbing:
//! allocation, solid paints, the shape primitives and the whole-canvas
//! rotation pass.

use tiny_skia::{
    Color, FillRule, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

use mangrove_dither::Raster;

use crate::error::RenderError;

/// Allocate an opaque white pixmap of the given size.
pub(crate) fn white_pixmap(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
    pixmap.fill(Color::WHITE);
    Ok(pixmap)
}

fn solid_paint(rgb: [u8; 3]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgb[0], rgb[1], rgb[2], 255);
    paint.anti_alias = true;
    paint
}

fn rotation_at(degrees: f32, cx: f32, cy: f32) -> Transform {
    if degrees == 0.0 {
        Transform::identity()
    } else {
        Transform::from_rotate_at(degrees, cx, cy)
    }
}

/// Fill a circle centered at (cx, cy).
pub(crate) fn fill_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, radius: f32, rgb: [u8; 3]) {
    if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
        pixmap.fill_path(
            &path,
            &solid_paint(rgb),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

/// Stroke a line segment with the given width.
pub(crate) fn stroke_segment(
    pixmap: &mut Pixmap,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    width: f32,
    rgb: [u8; 3],
) {
    let mut pb = PathBuilder::new();
    pb.move_to(x1, y1);
    pb.line_to(x2, y2);
    if let Some(path) = pb.finish() {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        pixmap.stroke_path(
            &path,
            &solid_paint(rgb),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}

/// Fill a square centered at (cx, cy), rotated about its own center.
pub(crate) fn fill_square(
    pixmap: &mut Pixmap,
    cx: f32,
    cy: f32,
    size: f32,
    rotation_deg: f32,
    rgb: [u8; 3],
) {
    let half = size / 2.0;
    if let Some(rect) = Rect::from_xywh(cx - half, cy - half, size, size) {
        pixmap.fill_rect(
            rect,
            &solid_paint(rgb),
            rotation_at(rotation_deg, cx, cy),
            None,
        );
    }
}

/// Fill a regular hexagon (6 vertices at 60 degree increments) centered at
/// (cx, cy), rotated about its own center.
pub(crate) fn fill_hexagon(
    pixmap: &mut Pixmap,
    cx: f32,
    cy: f32,
    size: f32,
    rotation_deg: f32,
    rgb: [u8; 3],
) {
    let radius = size * 0.5;
    let mut pb = PathBuilder::new();
    for i in 0..6 {
        let theta = std::f32::consts::TAU / 6.0 * i as f32;
        let px = cx + theta.cos() * radius;
        let py = cy + theta.sin() * radius;
        if i == 0 {
            pb.move_to(px, py);
        } else {
            pb.line_to(px, py);
        }
    }
    pb.close();
    if let Some(path) = pb.finish() {
        pixmap.fill_path(
            &path,
            &solid_paint(rgb),
            FillRule::Winding,
            rotation_at(rotation_deg, cx, cy),
            None,
        );
    }
}

/// Rotate the whole pixmap around the canvas center onto a fresh white
/// canvas of the same size. Corners swept outside the canvas are lost;
/// uncovered corners stay white.
pub(crate) fn rotate_about_center(pixmap: Pixmap, degrees: f32) -> Result<Pixmap, RenderError> {
    let mut rotated = white_pixmap(pixmap.width(), pixmap.height())?;
    let transform = Transform::from_rotate_at(
        degrees,
        pixmap.width() as f32 / 2.0,
        pixmap.height() as f32 / 2.0,
    );
    rotated.draw_pixmap(
        0,
        0,
        pixmap.as_ref(),
        &PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        },
        transform,
        None,
    );
    Ok(rotated)
}

/// Convert a fully opaque pixmap into a [`Raster`].
pub(crate) fn into_raster(pixmap: Pixmap) -> Raster {
    let width = pixmap.width();
    let height = pixmap.height();
    // Everything drawn here is opaque over an opaque background, so the
    // premultiplied pixmap bytes are already straight RGBA; the alpha byte
    // is pinned to 255 to keep the output contract exact.
    let mut data = pixmap.take();
    for px in data.chunks_mut(4) {
        px[3] = 255;
    }
    Raster::from_rgba(width, height, data)
}

// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello CPU–backed implementation of the Plotpane imaging backend.
//!
//! This crate implements [`ImagingBackend`] on top of the sparse-strips
//! [`vello_cpu::RenderContext`], so a frame emitted as imaging IR can be
//! rasterized headlessly on the CPU.

#![deny(unsafe_code)]
#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use kurbo::{Cap, Join};
use peniko::Brush;
use plotpane_imaging::{
    Affine, DrawOp, ImagingBackend, PaintDesc, PaintId, ResourceBackend, StateOp,
    points_to_bez_path,
};
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath, Cap as CpuCap, Join as CpuJoin, Rect, Stroke,
};
use vello_cpu::{
    Image as CpuImage, ImageSource, Pixmap, RenderContext, RenderMode, RenderSettings,
};

/// CPU-backed implementation of the imaging backend using `vello_cpu`.
pub struct VelloCpuImagingBackend<'ctx> {
    /// Underlying Vello CPU render context to draw into.
    pub ctx: &'ctx mut RenderContext,
    paints: Vec<Option<PaintDesc>>,
    current_paint: Option<PaintId>,
}

impl fmt::Debug for VelloCpuImagingBackend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VelloCpuImagingBackend { .. }")
    }
}

impl<'ctx> VelloCpuImagingBackend<'ctx> {
    /// Create a new backend that renders into the given CPU render context.
    pub fn new(ctx: &'ctx mut RenderContext) -> Self {
        Self {
            ctx,
            paints: Vec::new(),
            current_paint: None,
        }
    }

    fn affine_to_cpu(xf: Affine) -> CpuAffine {
        CpuAffine::new(xf.as_coeffs())
    }

    fn path_to_cpu(path: &kurbo::BezPath) -> BezPath {
        let mut out = BezPath::new();
        for el in path.elements() {
            match *el {
                kurbo::PathEl::MoveTo(p) => out.move_to((p.x, p.y)),
                kurbo::PathEl::LineTo(p) => out.line_to((p.x, p.y)),
                kurbo::PathEl::QuadTo(p1, p) => out.quad_to((p1.x, p1.y), (p.x, p.y)),
                kurbo::PathEl::CurveTo(p1, p2, p) => {
                    out.curve_to((p1.x, p1.y), (p2.x, p2.y), (p.x, p.y));
                }
                kurbo::PathEl::ClosePath => out.close_path(),
            }
        }
        out
    }

    fn apply_current_paint(&mut self) {
        let Some(id) = self.current_paint else {
            return;
        };
        let idx = id.0 as usize;
        if let Some(Some(PaintDesc { brush })) = self.paints.get(idx) {
            match brush.clone() {
                Brush::Solid(color) => {
                    self.ctx.set_paint(color);
                }
                Brush::Gradient(gradient) => {
                    self.ctx.set_paint(gradient);
                }
                Brush::Image(image_brush) => {
                    // Map peniko image brushes into vello_cpu image paints.
                    let source = ImageSource::from_peniko_image_data(&image_brush.image);
                    let image = CpuImage {
                        image: source,
                        sampler: image_brush.sampler,
                    };
                    self.ctx.set_paint(image);
                }
            }
        }
    }
}

impl ResourceBackend for VelloCpuImagingBackend<'_> {
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id = u32::try_from(self.paints.len())
            .expect("VelloCpuImagingBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paints.get_mut(idx) {
            *slot = None;
        }
    }
}

impl ImagingBackend for VelloCpuImagingBackend<'_> {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetTransform(xf) => {
                self.ctx.set_transform(Self::affine_to_cpu(xf));
            }
            StateOp::SetPaint(id) => {
                self.current_paint = Some(id);
                self.apply_current_paint();
            }
            StateOp::SetStroke(style) => {
                let mut stroke = Stroke::new(style.width);
                stroke.miter_limit = style.miter_limit;
                stroke.join = match style.join {
                    Join::Bevel => CpuJoin::Bevel,
                    Join::Miter => CpuJoin::Miter,
                    Join::Round => CpuJoin::Round,
                };
                stroke.start_cap = match style.start_cap {
                    Cap::Butt => CpuCap::Butt,
                    Cap::Round => CpuCap::Round,
                    Cap::Square => CpuCap::Square,
                };
                stroke.end_cap = match style.end_cap {
                    Cap::Butt => CpuCap::Butt,
                    Cap::Round => CpuCap::Round,
                    Cap::Square => CpuCap::Square,
                };
                self.ctx.set_stroke(stroke);
            }
        }
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::FillRect { x0, y0, x1, y1 } => {
                let rect = Rect::new(f64::from(x0), f64::from(y0), f64::from(x1), f64::from(y1));
                self.ctx.fill_rect(&rect);
            }
            DrawOp::StrokeLine { p0, p1 } => {
                let mut path = BezPath::new();
                path.move_to((f64::from(p0.x), f64::from(p0.y)));
                path.line_to((f64::from(p1.x), f64::from(p1.y)));
                self.ctx.stroke_path(&path);
            }
            DrawOp::StrokePolyline { points } => {
                if let Some(path) = points_to_bez_path(&points, false) {
                    self.ctx.stroke_path(&Self::path_to_cpu(&path));
                }
            }
            DrawOp::FillPolygon { points } => {
                if points.len() < 3 {
                    return;
                }
                if let Some(path) = points_to_bez_path(&points, true) {
                    self.ctx.fill_path(&Self::path_to_cpu(&path));
                }
            }
        }
    }
}

/// Renders imaging ops into an RGBA8 pixel buffer.
///
/// Creates a fresh [`RenderContext`] of the given size, lets `build` drive a
/// backend over it, then flushes and reads back unpremultiplied RGBA bytes in
/// row-major order.
pub fn render_to_rgba<F>(width: u16, height: u16, build: F) -> Vec<u8>
where
    F: FnOnce(&mut VelloCpuImagingBackend<'_>),
{
    let settings = RenderSettings {
        // Force the u8 pipeline so output bytes are stable across feature
        // configurations.
        render_mode: RenderMode::OptimizeSpeed,
        ..RenderSettings::default()
    };
    let mut ctx = RenderContext::new_with(width, height, settings);
    let mut backend = VelloCpuImagingBackend::new(&mut ctx);
    build(&mut backend);

    let mut pixmap = Pixmap::new(width, height);
    backend.ctx.flush();
    backend.ctx.render_to_pixmap(&mut pixmap);

    let unpremul = pixmap.take_unpremultiplied();
    let mut bytes = Vec::with_capacity(unpremul.len() * 4);
    for p in unpremul {
        bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    bytes
}

// chart.rs
use egui::{Align2, Color32, FontId, Pos2, Response, Sense, Shape, Stroke, Ui, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};
use crate::skin::{Composition, Percent};

pub const LABELS: [&str; 3] = ["Pimples", "Dead Skin", "Normal Skin"];
pub const COLORS: [Color32; 3] = [
    Color32::from_rgb(0xff, 0x99, 0x99),
    Color32::from_rgb(0x66, 0xb3, 0xff),
    Color32::from_rgb(0x99, 0xff, 0x99),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub color: Color32,
    pub percent: Percent,
    /// Radians, 0 = 3 o'clock, increasing counter-clockwise.
    pub start: f32,
    pub sweep: f32,
}

impl ChartSlice {
    pub fn mid(&self) -> f32 { self.start + self.sweep / 2.0 }
}

/// Slices start at 12 o'clock and run counter-clockwise.
pub fn slices(c: &Composition) -> [ChartSlice; 3] {
    let mut start = FRAC_PI_2;
    let parts = c.parts();
    std::array::from_fn(|i| {
        let sweep = parts[i].fraction() * TAU;
        let s = ChartSlice { label: LABELS[i], color: COLORS[i], percent: parts[i], start, sweep };
        start += sweep;
        s
    })
}

// Screen y grows downward, so counter-clockwise needs the sine flipped.
fn polar(center: Pos2, r: f32, a: f32) -> Pos2 { center + Vec2::new(a.cos(), -a.sin()) * r }

pub fn draw_composition_chart(ui: &mut Ui, c: &Composition, size: f32) -> Response {
    let (resp, p) = ui.allocate_painter(Vec2::new(size, size + 24.0), Sense::hover());
    let text = ui.visuals().text_color();
    let bg = ui.visuals().panel_fill;
    let rect = resp.rect;
    p.text(Pos2::new(rect.center().x, rect.top() + 10.0), Align2::CENTER_CENTER,
        "Skin Composition Analysis", FontId::proportional(14.0), text);

    let center = Pos2::new(rect.center().x, rect.top() + 24.0 + size / 2.0);
    let outer = size * 0.34;
    let width = outer * 0.3;
    let ring = outer - width / 2.0;

    for s in slices(c) {
        if s.sweep <= 0.0 { continue; }
        let steps = ((s.sweep / TAU) * 96.0).ceil().max(2.0) as usize;
        let pts: Vec<Pos2> = (0..=steps)
            .map(|k| polar(center, ring, s.start + s.sweep * k as f32 / steps as f32))
            .collect();
        p.add(Shape::line(pts, Stroke::new(width, s.color)));
    }
    // White wedge edges, as in a classic donut chart.
    for s in slices(c) {
        p.line_segment([polar(center, outer - width - 1.0, s.start), polar(center, outer + 1.0, s.start)],
            Stroke::new(2.0, bg));
    }
    for s in slices(c) {
        p.text(polar(center, ring, s.mid()), Align2::CENTER_CENTER,
            format!("{}%", s.percent), FontId::proportional(11.0), Color32::from_gray(30));
        p.text(polar(center, outer * 1.22, s.mid()), Align2::CENTER_CENTER,
            s.label, FontId::proportional(12.0), text);
    }
    resp
}

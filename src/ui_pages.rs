// ui_pages.rs
use egui::{Color32, Grid, RichText, TextureHandle, Ui};
use crate::chart;
use crate::recommend::{Recommender, RemedyKind, StepKind, ANTIOXIDANT_MIN_DAMAGE};
use crate::session::{Action, Page, Session};
use crate::skin::Assessment;

/// What a page asked for this frame. Applied by the app after rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Nav(Action),
    LoadPath,
    ClearImage,
    #[cfg(feature = "camera")]
    Capture,
}

pub struct PageCtx<'a> {
    pub session:       &'a Session,
    pub recommender:   Recommender<'a>,
    pub preview:       Option<&'a TextureHandle>,
    pub preview_width: f32,
    pub path_input:    &'a mut String,
}

pub fn render_page(ui: &mut Ui, cx: &mut PageCtx<'_>) -> Option<UiEvent> {
    if cx.session.page() == Page::Upload { return render_upload(ui, cx); }
    let Some(a) = cx.session.assessment().copied() else {
        // Unreachable through Session::dispatch; offer a way out anyway.
        ui.label("No analysis available.");
        return accent_btn(ui, "Start over").clicked().then_some(UiEvent::Nav(Action::StartOver));
    };
    match cx.session.page() {
        Page::Results  => render_results(ui, cx, &a),
        Page::Products => render_products(ui, cx, &a),
        Page::Remedies => render_remedies(ui, cx, &a),
        Page::Upload   => None,
    }
}

pub fn accent_btn(ui: &mut Ui, label: &str) -> egui::Response {
    ui.add(egui::Button::new(RichText::new(label).color(Color32::WHITE).size(14.0))
        .fill(Color32::from_rgb(214, 92, 132)).corner_radius(egui::CornerRadius::same(6)))
}
pub fn ghost_btn(ui: &mut Ui, label: &str) -> egui::Response {
    ui.add(egui::Button::new(RichText::new(label).size(14.0))
        .fill(Color32::TRANSPARENT).corner_radius(egui::CornerRadius::same(6)))
}

fn preview(ui: &mut Ui, cx: &PageCtx<'_>) {
    match cx.preview {
        Some(tex) => { ui.add(egui::Image::new(tex).max_width(cx.preview_width)); }
        None      => { ui.label(RichText::new("(preview unavailable)").weak()); }
    }
}

// ── Upload ────────────────────────────────────────────────────────────────────

fn render_upload(ui: &mut Ui, cx: &mut PageCtx<'_>) -> Option<UiEvent> {
    let mut ev = None;
    ui.heading("Upload or Capture Your Image");
    ui.add_space(8.0);
    ui.columns(2, |cols| {
        cols[0].label(RichText::new("Choose an image").strong());
        cols[0].horizontal(|ui| {
            let edit = ui.add(egui::TextEdit::singleline(&mut *cx.path_input)
                .hint_text("path/to/photo.jpg").desired_width(ui.available_width() - 70.0));
            let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("Open").clicked() || enter) && !cx.path_input.trim().is_empty() {
                ev = Some(UiEvent::LoadPath);
            }
        });
        cols[0].label(RichText::new("…or drop a JPG / PNG onto this window.").small().weak());

        cols[1].label(RichText::new("Take a photo").strong());
        #[cfg(feature = "camera")]
        if cols[1].button("📷 Capture").clicked() { ev = Some(UiEvent::Capture); }
        #[cfg(not(feature = "camera"))]
        cols[1].label(RichText::new("Camera capture is not enabled in this build (rebuild with `--features camera`).").small().weak());
    });

    if let Some(img) = cx.session.image() {
        ui.add_space(12.0);
        ui.separator();
        preview(ui, cx);
        ui.label(RichText::new(format!("{} · {:?}", img.origin, img.format)).small().weak());
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if accent_btn(ui, "🔬 Analyze Skin").clicked() { ev = Some(UiEvent::Nav(Action::Analyze)); }
            if ghost_btn(ui, "Remove").clicked() { ev = Some(UiEvent::ClearImage); }
        });
    }
    ev
}

fn step_tag(kind: StepKind) -> Option<String> {
    match kind {
        StepKind::Base                 => None,
        StepKind::SunProtection        => Some("for everyone".into()),
        StepKind::AntiAging { weekly } => Some(format!("anti-aging, {weekly}x weekly")),
        StepKind::Antioxidant          => Some(format!("damage {ANTIOXIDANT_MIN_DAMAGE}%+")),
        StepKind::Repair               => Some("repair".into()),
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

fn metric_box(ui: &mut Ui, title: &str, value: &str, note: Option<&str>) {
    egui::Frame::NONE.fill(Color32::BLACK).corner_radius(10.0).inner_margin(egui::Margin::same(15))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).color(Color32::WHITE).size(16.0).strong());
                ui.label(RichText::new(value).color(Color32::WHITE).size(24.0));
                if let Some(n) = note { ui.label(RichText::new(n).color(Color32::from_gray(200)).small()); }
            });
        });
}

fn render_results(ui: &mut Ui, cx: &PageCtx<'_>, a: &Assessment) -> Option<UiEvent> {
    let mut ev = None;
    let band = a.damage_band();
    let comp = a.composition;

    preview(ui, cx);
    ui.add_space(8.0);
    ui.columns(3, |cols| {
        metric_box(&mut cols[0], "Skin Type", a.skin_type.as_str(), None);
        metric_box(&mut cols[1], "Estimated Age", &format!("{} years", a.age), None);
        metric_box(&mut cols[2], "Skin Damage", &format!("{}%", a.damage), Some(band.title()));
    });

    ui.add_space(12.0);
    ui.heading("Skin Composition Analysis");
    chart::draw_composition_chart(ui, &comp, 320.0);

    egui::CollapsingHeader::new("🔍 What does this mean?").id_salt("chart_help").show(ui, |ui| {
        ui.label("• Pimples: the share of your skin affected by acne or blemishes");
        ui.label("• Dead Skin: dry, flaky or dull areas that need exfoliation");
        ui.label("• Normal Skin: healthy, well-balanced areas");
        for note in comp.notes() {
            ui.colored_label(Color32::from_rgb(230, 160, 40), format!("⚠ {note}"));
        }
    });

    let age = a.age_band();
    egui::CollapsingHeader::new(format!("🔍 {} Recommendations", age.title())).id_salt("age_tips").show(ui, |ui| {
        for tip in age.tips() { ui.label(format!("• {tip}")); }
    });

    ui.add_space(12.0);
    ui.heading("Personalized Routine");
    egui::Frame::NONE.fill(ui.visuals().faint_bg_color).corner_radius(10.0).inner_margin(egui::Margin::same(15))
        .show(ui, |ui| {
            ui.label(RichText::new("Based on your analysis:").strong());
            ui.label(format!("• Your skin type is {}", a.skin_type));
            ui.label(format!("• Your skin shows {} ({}%)", band.title().to_lowercase(), a.damage));
            ui.label(format!("• Your skin has {}% pimples and {}% dead skin", comp.pimples(), comp.dead_skin()));
            ui.label(RichText::new(band.advice()).italics());
        });
    ui.add_space(8.0);

    for (i, step) in cx.recommender.care_steps_for(a).iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&step.entry.label).strong());
            if let Some(tag) = step_tag(step.kind) { ui.label(RichText::new(tag).small().weak()); }
        });
        Grid::new(("care_step", i)).num_columns(3).spacing([16.0, 4.0]).show(ui, |ui| {
            ui.label(format!("How to use: {}", step.entry.how_to_use));
            ui.label(format!("Precautions: {}", step.entry.precautions));
            ui.label(format!("Expected results: {}", step.entry.expected_result));
            ui.end_row();
        });
        ui.separator();
    }

    ui.horizontal(|ui| {
        if accent_btn(ui, "View Product Recommendations").clicked() { ev = Some(UiEvent::Nav(Action::ViewProducts)); }
        if accent_btn(ui, "View Home Remedies").clicked()           { ev = Some(UiEvent::Nav(Action::ViewRemedies)); }
        if ghost_btn(ui, "New analysis").clicked()                  { ev = Some(UiEvent::Nav(Action::StartOver)); }
    });
    ev
}

// ── Products ──────────────────────────────────────────────────────────────────

fn render_products(ui: &mut Ui, cx: &PageCtx<'_>, a: &Assessment) -> Option<UiEvent> {
    let mut ev = None;
    ui.heading("Recommended Products for You");
    ui.add_space(8.0);
    for cat in cx.recommender.products_for(a) {
        ui.label(RichText::new(&cat.name).size(20.0).strong());
        ui.columns(3, |cols| {
            for (i, item) in cat.items.iter().enumerate() {
                let ui = &mut cols[i % 3];
                ui.label(RichText::new(&item.tier).strong());
                ui.label(&item.name_and_price);
                ui.hyperlink_to("Buy Now", &item.link);
                ui.add_space(4.0);
            }
        });
        ui.separator();
    }
    ui.horizontal(|ui| {
        if ghost_btn(ui, "Back to Analysis").clicked()    { ev = Some(UiEvent::Nav(Action::BackToResults)); }
        if accent_btn(ui, "View Home Remedies").clicked() { ev = Some(UiEvent::Nav(Action::ViewRemedies)); }
    });
    ev
}

// ── Remedies ──────────────────────────────────────────────────────────────────

fn render_remedies(ui: &mut Ui, cx: &PageCtx<'_>, a: &Assessment) -> Option<UiEvent> {
    let mut ev = None;
    ui.heading("Natural Home Remedies for Your Skin");
    ui.label(format!("These remedies are specially selected for {} skin:", a.skin_type.as_str().to_lowercase()));
    ui.add_space(8.0);
    for (i, r) in cx.recommender.remedies_for(a).iter().enumerate() {
        let title = match r.kind {
            RemedyKind::Base         => r.entry.label.clone(),
            RemedyKind::AgingToner   => format!("{} (for maturing skin)", r.entry.label),
            RemedyKind::DamageRepair => format!("{} (for damaged skin)", r.entry.label),
        };
        egui::CollapsingHeader::new(title).id_salt(("remedy", i)).show(ui, |ui| {
            ui.label(RichText::new(format!("How to use: {}", r.entry.how_to_use)));
            ui.label(RichText::new(format!("Benefits: {}", r.entry.benefits)));
        });
        ui.separator();
    }
    if ghost_btn(ui, "Back to Analysis").clicked() { ev = Some(UiEvent::Nav(Action::BackToResults)); }
    ev
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_source::{fixtures::PNG, ImageHandle, ImageOrigin};
    use crate::json_loader::Catalog;
    use rand::{rngs::StdRng, SeedableRng};

    fn render_once(session: &Session, catalog: &Catalog) -> Option<UiEvent> {
        let ctx = egui::Context::default();
        let mut path = String::new();
        let mut out = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut cx = PageCtx {
                    session, recommender: Recommender::new(catalog),
                    preview: None, preview_width: 300.0, path_input: &mut path,
                };
                out = render_page(ui, &mut cx);
            });
        });
        out
    }

    #[test]
    fn every_page_renders_without_input() {
        let catalog = Catalog::load();
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = Session::new();
        assert_eq!(render_once(&s, &catalog), None);

        s.attach_image(ImageHandle::from_bytes(ImageOrigin::Camera, PNG).unwrap()).unwrap();
        assert_eq!(render_once(&s, &catalog), None);

        for action in [Action::Analyze, Action::ViewProducts, Action::ViewRemedies] {
            assert!(s.dispatch(action, &mut rng).moved());
            assert_eq!(render_once(&s, &catalog), None, "page {:?}", s.page());
        }
    }

    #[test]
    fn step_tags_name_the_frequency() {
        assert_eq!(step_tag(StepKind::AntiAging { weekly: 3 }).as_deref(), Some("anti-aging, 3x weekly"));
        assert_eq!(step_tag(StepKind::Base), None);
    }

    #[test]
    fn antioxidant_tag_tracks_the_threshold() {
        let tag = step_tag(StepKind::Antioxidant).unwrap();
        assert_eq!(tag, format!("damage {ANTIOXIDANT_MIN_DAMAGE}%+"));
        assert_eq!(tag, "damage 40%+");
    }
}

use egui::{Context, CentralPanel, TopBottomPanel, ScrollArea, RichText, TextureHandle};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use crate::{config::AppConfig,
    image_source::ImageHandle,
    json_loader::Catalog,
    recommend::Recommender,
    session::{Action, Session},
    ui_pages::{self, PageCtx, UiEvent}};

pub struct SkinMatchApp {
    pub session:        Session,
    pub catalog:        Catalog,
    pub config:         AppConfig,
    rng:                StdRng,
    pub dark_mode:      bool,
    pub path_input:     String,
    // Keyed by image id; `None` inside marks an image that failed to decode.
    preview:            Option<(u64, Option<TextureHandle>)>,
    pub status_message: String,
    pub status_timer:   f32,
}

impl SkinMatchApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let app = Self::with_config(config);
        cc.egui_ctx.set_theme(if app.dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
        app
    }

    fn with_config(config: AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => { tracing::info!(seed, "using fixed RNG seed"); StdRng::seed_from_u64(seed) }
            None       => StdRng::from_entropy(),
        };
        Self {
            session: Session::new(),
            catalog: Catalog::load(),
            dark_mode: config.dark_mode,
            config, rng,
            path_input: String::new(),
            preview: None,
            status_message: String::new(),
            status_timer: 0.0,
        }
    }

    pub fn set_status(&mut self, msg: &str, dur: f32) {
        self.status_message = msg.to_string(); self.status_timer = dur;
    }

    fn attach(&mut self, loaded: Result<ImageHandle, crate::error::ImageError>) {
        match loaded.and_then(|img| self.session.attach_image(img)) {
            Ok(()) => self.set_status("✅ Image ready", 2.0),
            Err(e) => {
                tracing::warn!(error = %e, "image rejected");
                self.set_status(&format!("⚠ {e}"), 4.0);
            }
        }
    }

    fn apply(&mut self, ev: UiEvent) {
        match ev {
            UiEvent::Nav(action) => {
                let t = self.session.dispatch(action, &mut self.rng);
                if action == Action::Analyze && t.moved() { self.set_status("✅ Analysis complete", 2.0); }
            }
            UiEvent::LoadPath => {
                let path = PathBuf::from(self.path_input.trim());
                self.attach(ImageHandle::from_path(&path));
            }
            UiEvent::ClearImage => self.session.clear_image(),
            #[cfg(feature = "camera")]
            UiEvent::Capture => self.attach(crate::camera::capture_once(self.config.camera_id)),
        }
    }

    fn handle_dropped_files(&mut self, ctx: &Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.first() else { return };
        if dropped.len() > 1 { tracing::debug!(count = dropped.len(), "several files dropped; using the first"); }
        self.attach(ImageHandle::from_dropped(file));
    }

    /// Keeps the preview texture in step with the session's image. Decoding
    /// happens here, for display only, and at most once per image.
    fn sync_preview(&mut self, ctx: &Context) {
        let Some(img) = self.session.image() else { self.preview = None; return };
        if self.preview.as_ref().is_some_and(|(id, _)| *id == img.id) { return; }
        let texture = match image::load_from_memory(&img.bytes) {
            Ok(decoded) => {
                let rgba = decoded.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                Some(ctx.load_texture(format!("photo-{}", img.id), color, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                tracing::warn!(error = %e, id = img.id, "preview decode failed");
                None
            }
        };
        self.preview = Some((img.id, texture));
    }
}

// ── Main loop ─────────────────────────────────────────────────────────────────

impl eframe::App for SkinMatchApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.sync_preview(ctx);

        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.heading("🧖 Personalized Skincare Recommendations");
                ui.add_space(12.0);
                ui.label(RichText::new(self.session.page().title()).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    if ui.button(if self.dark_mode { "☀ Light" } else { "🌙 Dark" }).clicked() {
                        self.dark_mode = !self.dark_mode;
                        ctx.set_theme(if self.dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
                    }
                    if !self.status_message.is_empty() {
                        ui.add_space(12.0);
                        ui.label(&self.status_message);
                    }
                });
            });
            ui.add_space(4.0);
        });

        let event = CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let mut cx = PageCtx {
                    session:       &self.session,
                    recommender:   Recommender::new(&self.catalog),
                    preview:       self.preview.as_ref().and_then(|(_, t)| t.as_ref()),
                    preview_width: self.config.preview_width,
                    path_input:    &mut self.path_input,
                };
                ui_pages::render_page(ui, &mut cx)
            }).inner
        }).inner;
        if let Some(ev) = event { self.apply(ev); }

        if self.status_timer > 0.0 {
            self.status_timer -= ctx.input(|i| i.stable_dt);
            if self.status_timer <= 0.0 { self.status_message.clear(); }
            ctx.request_repaint();
        }
    }
}

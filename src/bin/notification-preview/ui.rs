//! UI rendering methods for the notification previewer.

use crate::colors;
use crate::constants::{
    FOOTER_TEXT, ICON_SLOT, INPUT_PANEL_WIDTH, LOGO_SIZE, PICTURE_HEIGHT, PLACEHOLDER_TEXT,
};
use crate::{AppIcon, PreviewApp};
use eframe::egui::{self, RichText};
use notification_preview::TargetBox;
use notification_preview::preview::{COLLAPSED_THUMBNAIL, PreviewMode, display_body, display_title};

/// Texture coordinates covering a whole texture.
fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

impl PreviewApp {
    /// Renders the bottom status bar with fetch progress and hints.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_fetching() {
                    ui.spinner();
                    ui.label("Fetching image…");
                } else {
                    ui.label("Enter in the URL field: generate preview");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Fetch timeout: {}s", self.fetcher.timeout().as_secs()));
                });
            });
        });
    }

    /// Renders the left panel with the title, body and image URL inputs.
    pub fn show_input_panel(&mut self, ctx: &egui::Context) {
        let mut generate = false;
        let mut clear = false;

        egui::SidePanel::left("inputs")
            .exact_width(INPUT_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);

                ui.label("Title");
                ui.add(egui::TextEdit::singleline(&mut self.title).desired_width(f32::INFINITY));
                ui.add_space(12.0);

                ui.label("Body");
                ui.add(
                    egui::TextEdit::multiline(&mut self.body)
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(12.0);

                ui.label("Image URL");
                let url = ui.add(
                    egui::TextEdit::singleline(&mut self.image_url)
                        .hint_text("https://…  (PNG, JPEG, WebP or SVG)")
                        .desired_width(f32::INFINITY),
                );
                if url.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    generate = true;
                }
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    generate |= ui.button("Generate Preview").clicked();
                    clear = ui.button("Clear").clicked();
                });
            });

        if clear {
            self.clear();
        } else if generate {
            self.generate(ctx);
        }
    }

    /// Renders both notification cards side by side.
    pub fn show_preview_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.strong("Preview");
            ui.add_space(10.0);

            ui.columns(PreviewMode::ALL.len(), |columns| {
                for (ui, mode) in columns.iter_mut().zip(PreviewMode::ALL) {
                    ui.label(mode.label());
                    ui.add_space(6.0);
                    self.show_card(ui, ctx, mode);
                }
            });
        });
    }

    /// Renders one notification card.
    fn show_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, mode: PreviewMode) {
        let title = display_title(&self.content.title, mode);
        let body = display_body(&self.content.body, mode);

        egui::Frame::new()
            .fill(colors::CARD_FILL)
            .stroke(egui::Stroke::new(1.0, colors::CARD_STROKE))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    self.paint_app_icon(ui);
                    ui.add_space(4.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new("App Title").size(12.0).color(colors::APP_LINE));
                        ui.label(RichText::new(title).size(15.0).strong().color(colors::TITLE));
                    });

                    if mode == PreviewMode::Collapsed {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            self.show_picture(ui, ctx, mode, COLLAPSED_THUMBNAIL);
                        });
                    }
                });
                ui.add_space(6.0);

                ui.add(egui::Label::new(RichText::new(body).size(13.0).color(colors::BODY)).wrap());
                ui.add_space(10.0);

                if mode == PreviewMode::Expanded {
                    let width = ui.available_width().round().max(1.0) as u32;
                    self.show_picture(ui, ctx, mode, TargetBox::new(width, PICTURE_HEIGHT));
                    ui.add_space(12.0);
                }

                ui.label(RichText::new(FOOTER_TEXT).size(12.0).color(colors::FOOTER));
            });
    }

    /// Draws the picture region: the fitted image, a spinner, or a placeholder.
    fn show_picture(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        mode: PreviewMode,
        target: TargetBox,
    ) {
        let size = egui::vec2(target.width as f32, target.height as f32);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

        if self.is_fetching() {
            ui.painter().rect_filled(rect, 4.0, colors::PICTURE_FILL);
            ui.put(rect, egui::Spinner::new());
            return;
        }

        let texture_id = self
            .picture_texture(ctx, mode, target)
            .map(|texture| texture.id());

        let painter = ui.painter();
        match texture_id {
            Some(id) => {
                painter.image(id, rect, full_uv(), egui::Color32::WHITE);
            }
            None => {
                painter.rect_filled(rect, 4.0, colors::PICTURE_FILL);
                painter.rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(1.0, colors::CARD_STROKE),
                    egui::StrokeKind::Inside,
                );
                // The thumbnail is too small for an explanation.
                if mode == PreviewMode::Expanded {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        PLACEHOLDER_TEXT,
                        egui::FontId::proportional(13.0),
                        colors::PLACEHOLDER_TEXT,
                    );
                }
            }
        }
    }

    /// Draws the app logo on a round backing, or the generated glyph.
    fn paint_app_icon(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(ICON_SLOT, ICON_SLOT), egui::Sense::hover());
        let painter = ui.painter();
        let center = rect.center();
        let radius = ICON_SLOT / 2.0 - 3.0;

        match &self.icon {
            AppIcon::Logo(texture) => {
                painter.circle_filled(center, radius, colors::LOGO_BACKING);
                let logo_rect =
                    egui::Rect::from_center_size(center, egui::Vec2::splat(LOGO_SIZE as f32));
                painter.image(texture.id(), logo_rect, full_uv(), egui::Color32::WHITE);
            }
            AppIcon::Glyph => {
                painter.circle_filled(center, radius, colors::GLYPH_FILL);
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "A",
                    egui::FontId::proportional(18.0),
                    egui::Color32::WHITE,
                );
            }
        }
    }
}

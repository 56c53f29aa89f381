use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use image_fetch_common::{Locale, StatusMessage, UiText};
use image_fetch_rust::{FlowController, Session};

pub struct DesktopApp {
    controller: FlowController,
    runtime: tokio::runtime::Runtime,
    locale: Locale,
    url_input: String,
    texture: Option<egui::TextureHandle>,
    texture_revision: u64,
}

impl DesktopApp {
    pub fn new(controller: FlowController, runtime: tokio::runtime::Runtime, locale: Locale) -> Self {
        let url_input = controller.snapshot().url().to_string();
        Self {
            controller,
            runtime,
            locale,
            url_input,
            texture: None,
            texture_revision: 0,
        }
    }

    fn start_download(&self) {
        // 結果は状態に書き込まれるので、ハンドルは待たない
        let _task = self.controller.trigger(self.runtime.handle());
    }

    /// 画像が差し替わったときだけテクスチャを作り直す
    fn sync_texture(&mut self, ctx: &egui::Context, state: &Session) {
        if state.image_revision() == self.texture_revision {
            return;
        }
        self.texture_revision = state.image_revision();
        self.texture = state.image().map(|image| {
            let rgba = image.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            ctx.load_texture("downloaded_image", color_image, egui::TextureOptions::default())
        });
    }

    fn render(&mut self, ui: &mut egui::Ui, state: &Session) {
        let text = UiText::for_locale(self.locale);

        ui.vertical_centered(|ui| {
            ui.label(text.url_label);
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.url_input)
                    .hint_text("https://")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.controller.set_url(self.url_input.clone());
            }

            ui.add_space(8.0);
            let button = egui::Button::new(text.download_button);
            if ui.add_sized([ui.available_width(), 32.0], button).clicked() {
                self.start_download();
            }
            ui.add_space(16.0);

            if state.is_loading() {
                ui.spinner();
            } else if let Some(texture) = &self.texture {
                let max = (ui.available_size() - egui::vec2(0.0, 32.0)).max(egui::Vec2::ZERO);
                ui.add(egui::Image::new(texture).max_size(max).shrink_to_fit())
                    .on_hover_text(text.image_description);
            }

            ui.add_space(8.0);
            if let Some(message) = state.message() {
                let color = if message == StatusMessage::ImageSaved {
                    Color32::from_gray(200)
                } else {
                    Color32::from_rgb(230, 110, 100)
                };
                ui.label(RichText::new(message.text(self.locale)).color(color));
            }
        });
    }
}

pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let candidates = [
        r"C:\Windows\Fonts\meiryo.ttc",
        r"C:\Windows\Fonts\msgothic.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            fonts.font_data.insert("cjk_fallback".to_string(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .push("cjk_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.controller.snapshot();
        if state.is_loading() {
            ctx.request_repaint();
        }
        self.sync_texture(ctx, &state);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render(ui, &state);
        });
    }
}

// 画面が閉じたら実行中の処理も止める
impl Drop for DesktopApp {
    fn drop(&mut self) {
        tracing::info!("window closed, cancelling downloads");
        self.controller.shutdown();
    }
}

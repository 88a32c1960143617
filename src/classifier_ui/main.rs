use crate::classifier_ui::core::{init, transition, Event, Preview, State};
use crate::classifier_ui::render::{render, PreviewView, StatusView, Tone};
use crate::classifier_ui::run_effect::{panic_message, RunEffect};
use crate::config::Config;
use crate::file_picker::interface::FilePicker;
use crate::intake::candidate_file::CandidateFile;
use crate::intake::drag::drag_events;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use eframe::egui;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Instant;

pub struct ClassifierApp {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    state: State,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    was_hovering: bool,
    preview_texture: Option<(u64, egui::TextureHandle)>,
}

impl ClassifierApp {
    pub fn new(
        ctx: egui::Context,
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let max_texture_side = ctx.input(|i| i.max_texture_side);
        let preview_max_side = u32::try_from(max_texture_side)
            .unwrap_or(u32::MAX)
            .min(config.preview_max_side);
        let run_effect = RunEffect::new(
            logger.with_namespace("effect"),
            prediction_client,
            file_picker,
            event_sender,
            Arc::new(move || ctx.request_repaint()),
            preview_max_side,
        );

        let (state, effects) = init();
        run_effect.spawn_effects(effects);

        Self {
            config,
            logger,
            state,
            event_receiver,
            run_effect,
            was_hovering: false,
            preview_texture: None,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Runs `work` on the GUI thread. A panic inside it is reported as
    /// `Event::UnexpectedFault` instead of taking the window down.
    pub fn guarded(&mut self, work: impl FnOnce(&mut Self)) {
        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| work(self))) {
            self.dispatch(Event::UnexpectedFault(panic_message(payload.as_ref())));
        }
    }

    /// The only place the display state is replaced.
    pub fn dispatch(&mut self, event: Event) {
        if !event.is_noisy() {
            let _ = self.logger.info(&format!("event: {:?}", event));
        }

        let state = std::mem::take(&mut self.state);
        let (new_state, effects) = transition(&self.config, state, event);
        self.state = new_state;

        if !effects.is_empty() {
            let _ = self.logger.info(&format!("effects: {:?}", effects));
        }
        self.run_effect.spawn_effects(effects);
    }

    fn collect_drag_events(&mut self, ctx: &egui::Context) -> Vec<Event> {
        let (is_hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw
                    .dropped_files
                    .iter()
                    .filter_map(CandidateFile::from_dropped_file)
                    .collect::<Vec<_>>(),
            )
        });

        let events = drag_events(self.was_hovering, is_hovering, dropped);
        self.was_hovering = is_hovering;
        events.into_iter().map(Event::Drag).collect()
    }

    /// Uploads a decoded preview to the GPU and hands the pixel buffer back
    /// for release. Drops the texture once the state no longer shows it.
    pub fn sync_preview_texture(&mut self, ctx: &egui::Context) {
        let texture_id = self.preview_texture.as_ref().map(|(id, _)| *id);

        let loaded = match &self.state.preview {
            Some(Preview::Ready { upload_id, image }) => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [image.width, image.height],
                    &image.rgba,
                );
                let texture = ctx.load_texture(
                    format!("preview-{}", upload_id),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                Some((*upload_id, texture))
            }
            Some(preview) if texture_id == Some(preview.upload_id()) => None,
            Some(_) | None => {
                self.preview_texture = None;
                None
            }
        };

        if let Some((upload_id, texture)) = loaded {
            self.preview_texture = Some((upload_id, texture));
            self.dispatch(Event::PreviewLoaded {
                upload_id,
                at: Instant::now(),
            });
        }
    }

    pub fn preview_texture_for(&self, upload_id: u64) -> Option<&egui::TextureHandle> {
        match &self.preview_texture {
            Some((id, texture)) if *id == upload_id => Some(texture),
            _ => None,
        }
    }
}

impl eframe::App for ClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.guarded(|app| {
            for event in app.collect_drag_events(ctx) {
                app.dispatch(event);
            }
            while let Ok(event) = app.event_receiver.try_recv() {
                app.dispatch(event);
            }
            app.sync_preview_texture(ctx);
        });

        let view = render(&self.config, &self.state, Instant::now());

        let (drop_zone_clicked, reset_clicked) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    ui.heading("Tea Leaf Disease Classifier");
                    ui.add_space(16.0);

                    let drop_zone_clicked = draw_drop_zone(ui, view.highlight);

                    ui.add_space(8.0);
                    let reset_clicked = ui.button("Reset").clicked();
                    ui.add_space(16.0);

                    draw_status(ui, &view.status);

                    ui.add_space(16.0);
                    if let PreviewView::Image { upload_id, opacity } = view.preview {
                        if let Some(texture) = self.preview_texture_for(upload_id) {
                            ui.add(
                                egui::Image::from_texture(egui::load::SizedTexture::from_handle(
                                    texture,
                                ))
                                .max_size(egui::vec2(480.0, 360.0))
                                .tint(egui::Color32::WHITE.gamma_multiply(opacity)),
                            );
                        }
                    }

                    (drop_zone_clicked, reset_clicked)
                })
                .inner
            })
            .inner;

        self.guarded(|app| {
            if drop_zone_clicked {
                app.dispatch(Event::DropZoneClicked);
            }
            if reset_clicked {
                app.dispatch(Event::ResetClicked);
            }
        });
        if view.preview.is_animating() {
            ctx.request_repaint();
        }
    }
}

fn draw_drop_zone(ui: &mut egui::Ui, highlight: bool) -> bool {
    let (stroke_color, fill) = if highlight {
        (
            Tone::Info.color(),
            egui::Color32::from_rgba_unmultiplied(0x1e, 0x60, 0xd0, 24),
        )
    } else {
        (egui::Color32::GRAY, egui::Color32::TRANSPARENT)
    };

    egui::Frame::none()
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .fill(fill)
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(24.0, 32.0))
        .show(ui, |ui| {
            ui.set_min_width(360.0);
            ui.label("Drag and drop leaf images here, or click to select");
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

fn draw_status(ui: &mut egui::Ui, status: &StatusView) {
    match status {
        StatusView::Empty => {}
        StatusView::Text { text, tone } => {
            ui.label(egui::RichText::new(text).color(tone.color()));
        }
        StatusView::Prediction {
            label,
            class_name,
            confidence_text,
            confidence_tone,
        } => {
            egui::Frame::none()
                .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 230))
                .inner_margin(15.0)
                .rounding(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(format!("{}:", label)).strong().size(17.0));
                        ui.label(egui::RichText::new(class_name).size(17.0));
                    });
                    ui.horizontal(|ui| {
                        let color = confidence_tone.color();
                        ui.label(egui::RichText::new("Confidence:").strong().color(color));
                        ui.label(egui::RichText::new(confidence_text).color(color));
                    });
                });
        }
    }
}

//! The deck application: control-panel wiring and event routing.

use std::collections::HashMap;

use egui::{Context, Rect};

use moldeck_core::{
    AnimationMode, BoxConfig, ColorBoxRegistry, PickerController, RegisterError, Rgb,
    ScriptDispatcher, set_animation_mode, set_spin,
};
use moldeck_widgets::{
    AnimationModeBar, ColorBoxButton, ColorSwatch, PickerPopup, SpinCheckbox, SwatchStyle,
    color32, section_label, separator, theme, toolbar_frame, vertical_separator,
};

use crate::config::AppConfig;
use crate::dispatcher::{LogDispatcher, ProcessDispatcher};

/// The MolDeck application.
pub struct DeckApp {
    config: AppConfig,
    registry: ColorBoxRegistry,
    picker: PickerController,
    dispatcher: Box<dyn ScriptDispatcher>,
    spin: bool,
    anim_mode: Option<AnimationMode>,
    last_picked: Option<Rgb>,
    /// Anchor rects of the boxes rendered this frame, by box id.
    anchors: HashMap<String, Rect>,
    /// Last surfaced error, shown on the status line.
    status: Option<String>,
}

impl DeckApp {
    pub fn new(config: AppConfig) -> Result<Self, RegisterError> {
        let dispatcher: Box<dyn ScriptDispatcher> = match &config.viewer.command {
            Some(command) => match ProcessDispatcher::spawn(command, &config.viewer.args) {
                Ok(d) => Box::new(d),
                Err(e) => {
                    log::warn!("viewer unavailable, falling back to dry-run: {e}");
                    Box::new(LogDispatcher)
                }
            },
            None => Box::new(LogDispatcher),
        };

        let target = config.viewer.target.clone();
        let mut registry = ColorBoxRegistry::new();
        registry.register(
            BoxConfig::script("background [$COLOR$];")?
                .id("background")
                .start_color([0, 0, 0])
                .target(target.clone()),
        )?;
        registry.register(
            BoxConfig::script("select carbon; color atom [$COLOR$];")?
                .id("carbons")
                .target(target.clone()),
        )?;
        registry.register(
            BoxConfig::script("select protein; color ribbon [$COLOR$];")?
                .id("ribbons")
                .start_color("#6464c8")
                .target(target),
        )?;

        Ok(Self {
            config,
            registry,
            picker: PickerController::new(),
            dispatcher,
            spin: false,
            anim_mode: None,
            last_picked: None,
            anchors: HashMap::new(),
            status: None,
        })
    }

    fn report(&mut self, message: String) {
        log::warn!("{message}");
        self.status = Some(message);
    }

    /// Color boxes, rendered in registration order.
    fn color_section(&mut self, ui: &mut egui::Ui) {
        section_label(ui, "COLORS");
        ui.add_space(4.0);

        let mut open_request: Option<(usize, String)> = None;
        let open_id = self.picker.session().map(|s| s.anchor.clone());
        toolbar_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                for (index, bx) in self.registry.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(bx.id())
                                .size(10.0)
                                .color(theme::TEXT_MUTED),
                        );
                        let open = open_id.as_deref() == Some(bx.id());
                        let (clicked, rect) = ColorBoxButton::new(color32(bx.color()), bx.id())
                            .open(open)
                            .show(ui);
                        self.anchors.insert(bx.id().to_string(), rect);
                        if clicked {
                            open_request = Some((index, bx.id().to_string()));
                        }
                    });
                    ui.add_space(10.0);
                }
            });
        });

        // A click on a box opens the picker there, silently redirecting any
        // session already open on another box.
        if let Some((token, anchor)) = open_request {
            self.picker.activate(anchor, token);
        }
    }

    /// Spin toggle and animation-mode bar.
    fn motion_section(&mut self, ui: &mut egui::Ui) {
        section_label(ui, "MOTION");
        ui.add_space(4.0);

        let target = self.config.viewer.target.clone();
        toolbar_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if let Some(on) = SpinCheckbox::new(self.spin).show(ui) {
                    self.spin = on;
                    match set_spin(self.dispatcher.as_mut(), on, &target) {
                        Ok(reply) => log::debug!("spin acknowledged: {reply}"),
                        Err(e) => self.report(format!("spin command failed: {e}")),
                    }
                }

                ui.add_space(8.0);
                vertical_separator(ui);
                ui.add_space(8.0);

                if let Some(mode) = AnimationModeBar::new(self.anim_mode).show(ui) {
                    match set_animation_mode(self.dispatcher.as_mut(), mode.name(), &target) {
                        Ok(Some(applied)) => self.anim_mode = Some(applied),
                        Ok(None) => {}
                        Err(e) => self.report(format!("animation command failed: {e}")),
                    }
                }
            });
        });
    }

    /// The popup for the active picker session, anchored at its box.
    fn picker_popup(&mut self, ctx: &Context) {
        let Some(session) = self.picker.session().cloned() else {
            return;
        };
        let Some(anchor_rect) = self.anchors.get(&session.anchor).copied() else {
            self.picker.cancel();
            self.report(format!("color box {:?} is not on the deck", session.anchor));
            return;
        };

        let current = self.registry.get(session.token).map(|bx| bx.color());
        let response = PickerPopup::new(&mut self.picker, anchor_rect)
            .current_color(current)
            .show(ctx);

        if let Some(pick) = response.picked {
            match self
                .registry
                .apply_pick(pick.token, pick.color, self.dispatcher.as_mut())
            {
                Ok(()) => {
                    self.last_picked = Some(pick.color);
                    self.status = None;
                }
                Err(e) => self.report(format!("pick failed: {e}")),
            }
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("deck_header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(&self.config.title);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.anchors.clear();

            ui.add_space(4.0);
            self.color_section(ui);
            ui.add_space(12.0);
            separator(ui);
            self.motion_section(ui);

            if let Some(color) = self.last_picked {
                ui.add_space(12.0);
                separator(ui);
                ui.horizontal(|ui| {
                    section_label(ui, "LAST PICK");
                    ColorSwatch::new(color32(color), color.to_string())
                        .style(SwatchStyle::rounded())
                        .show(ui);
                    ui.label(
                        egui::RichText::new(color.to_string())
                            .size(11.0)
                            .color(theme::TEXT),
                    );
                });
            }

            if let Some(status) = self.status.clone() {
                ui.add_space(12.0);
                separator(ui);
                ui.label(
                    egui::RichText::new(status)
                        .size(11.0)
                        .color(egui::Color32::from_rgb(200, 60, 60)),
                );
            }
        });

        self.picker_popup(ctx);
    }
}

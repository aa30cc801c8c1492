//! Main application for the Othello GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::config::{Difficulty, DEFAULT_TIME_BUDGET};
use crate::{GameOutcome, Side};

/// Startup settings chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub time_budget: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }
}

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    /// Tier used by the next new game
    selected_difficulty: Difficulty,
    show_debug: bool,
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self {
            state: GameState::new(settings.mode, settings.difficulty, settings.time_budget),
            board_view: BoardView::default(),
            selected_difficulty: settings.difficulty,
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        let budget = self.state.time_budget();
        self.state = GameState::new(mode, self.selected_difficulty, budget);
    }

    /// Same mode again, picking up the selected difficulty
    fn restart(&mut self) {
        self.state.difficulty = self.selected_difficulty;
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - Dark)").clicked() {
                        self.new_game(GameMode::PvE { human: Side::Dark });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - Light)").clicked() {
                        self.new_game(GameMode::PvE { human: Side::Light });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    ui.checkbox(&mut self.board_view.show_legal_moves, "Legal Moves (L)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => {
                            format!("vs AI ({}) - You: {}", self.state.difficulty, human)
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_difficulty_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.state.current_turn();
            let (fill, glyph_color) = match side {
                Side::Dark => (DARK_DISK, TEXT_PRIMARY),
                Side::Light => (LIGHT_DISK, DARK_DISK),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().circle_stroke(rect.center(), 22.0, egui::Stroke::new(1.0, glyph_color));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(side.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Waiting for AI", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let budget = self.state.time_budget().as_secs_f32();
                let color = if secs < budget * 0.5 {
                    TIMER_NORMAL
                } else if secs < budget {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.add_space(6.0);
                ui.label(RichText::new(format!("{:.2}s", secs)).size(20.0).strong().color(color));
            } else if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render disk counts
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DISKS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let (dark, light) = self.state.board.tally();
            ui.horizontal(|ui| {
                ui.label(RichText::new("●").size(18.0).color(TEXT_PRIMARY));
                ui.label(RichText::new(format!("Dark {}", dark)).size(14.0).color(TEXT_PRIMARY));
                ui.add_space(16.0);
                ui.label(RichText::new("○").size(18.0).color(TEXT_PRIMARY));
                ui.label(RichText::new(format!("Light {}", light)).size(14.0).color(TEXT_PRIMARY));
            });
        });
    }

    /// Difficulty selector; takes effect on the next new game
    fn render_difficulty_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            egui::ComboBox::from_id_salt("difficulty")
                .selected_text(self.selected_difficulty.name())
                .show_ui(ui, |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.selectable_value(
                            &mut self.selected_difficulty,
                            difficulty,
                            format!("{} (depth {})", difficulty, difficulty.depth()),
                        );
                    }
                });

            if self.selected_difficulty != self.state.difficulty {
                ui.label(RichText::new("Applies to the next game").size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("↩ Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("New Game").clicked() {
                    self.restart();
                }
                if let GameMode::PvP = self.state.mode {
                    if ui.button("Hint").clicked() {
                        self.state.request_suggestion();
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("Depth {} / score {}", result.depth, result.score))
                    .size(11.0)
                    .strong()
                    .color(TIMER_NORMAL),
            );
            ui.label(
                RichText::new(format!("{}ms, {} nodes", result.time_ms, result.nodes))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    /// Render game over card with the final tally
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let headline = match outcome.winner() {
            Some(side) => format!("{} WINS!", side.name().to_uppercase()),
            None => "IT'S A TIE!".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("Dark {} - Light {}", outcome.dark, outcome.light))
                            .size(12.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.restart();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.last_move,
                self.state.suggested_move,
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, legal, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::L),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if legal {
            self.board_view.show_legal_moves = !self.board_view.show_legal_moves;
        }
        if hint && self.state.mode == GameMode::PvP {
            self.state.request_suggestion();
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.restart();
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}

//! Main application for the checkers GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::session::{GameMode, Session, SessionConfig};
use super::theme::*;
use crate::board::Color;
use crate::rules::GameOutcome;

/// Main checkers application
pub struct CheckersApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl CheckersApp {
    /// Create a new app with the given mode and computer settings
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode, config: SessionConfig) -> Self {
        Self {
            session: Session::new(mode, config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Light)").clicked() {
                        self.session.restart(GameMode::PvE { human_color: Color::Light });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Dark)").clicked() {
                        self.session.restart(GameMode::PvE { human_color: Color::Dark });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.session.restart(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {human_color}"),
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

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_material_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.session.game.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
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

    /// Piece swatch drawn next to labels
    fn piece_swatch(ui: &mut egui::Ui, color: Color, size: f32) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), egui::Sense::hover());
        let fill = match color {
            Color::Dark => DARK_PIECE,
            Color::Light => LIGHT_PIECE,
        };
        ui.painter().circle_filled(rect.center(), size * 0.45, fill);
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            Self::piece_swatch(ui, Color::Light, 20.0);
            Self::piece_swatch(ui, Color::Dark, 20.0);
            ui.add_space(4.0);
            ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("10x10 board").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.game.turn();

            ui.horizontal(|ui| {
                Self::piece_swatch(ui, turn, 48.0);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.session.game.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.session.game.is_continuing() {
                        ("Continue the capture", TIMER_WARNING)
                    } else if self.session.is_ai_turn() {
                        ("AI to move", TEXT_SECONDARY)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let budget = self.session.config.time_limit_ms as f32 / 1000.0;
                let color = if secs < budget * 0.5 {
                    TIMER_NORMAL
                } else if secs < budget {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.session.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render remaining material for both sides
    fn render_material_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MATERIAL").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let board = self.session.game.board();
            for color in [Color::Light, Color::Dark] {
                ui.horizontal(|ui| {
                    Self::piece_swatch(ui, color, 18.0);
                    ui.label(RichText::new(color.name()).size(12.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{} pieces, {} kings", board.pieces_left(color), board.kings(color)))
                                .size(12.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });
                ui.add_space(4.0);
            }

            ui.label(
                RichText::new(format!("Quiet plies: {}", self.session.game.quiet_plies()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.session.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.session.reset();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.session.game.moves_played())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.session.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("Depth {}", result.depth)).size(11.0).strong().color(TIMER_NORMAL));
                            ui.label(RichText::new(format!("Score: {:.2}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                                ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            });
                        });
                    });

                    if let Some((from, to)) = self.session.game.last_move() {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("{from} -> {to}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let headline = match outcome {
            GameOutcome::Win(color) => format!("{} WINS!", color.name().to_uppercase()),
            GameOutcome::Draw => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if let Some(color) = outcome.winner() {
                            Self::piece_swatch(ui, color, 32.0);
                            ui.add_space(8.0);
                        }
                        ui.label(RichText::new(&headline).size(18.0).strong().color(TEXT_PRIMARY));
                    });

                    if outcome == GameOutcome::Draw {
                        ui.add_space(4.0);
                        ui.label(RichText::new("no capture for too long").size(11.0).color(TEXT_SECONDARY));
                    }

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui.add(egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY)
                            ).sense(egui::Sense::click())).clicked() {
                                self.session.reset();
                            }
                        });
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
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let interactive = self.session.is_human_turn()
                && !self.session.is_ai_thinking()
                && !self.session.game.is_over();

            let game = &self.session.game;
            let overlay = BoardOverlay {
                selected: game.selected(),
                destinations: game.destinations(),
                last_move: game.last_move(),
                interactive,
            };
            let clicked = self.board_view.show(ui, game.board(), overlay);

            if let Some(pos) = clicked {
                self.session.handle_click(pos.row as i32, pos.col as i32);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.ai_should_start() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.session.is_ai_turn() && !self.session.game.is_over() {
            // Wake up when the pause after the last computer move runs out
            let wait = self.session.pacing_remaining().max(Duration::from_millis(16));
            ctx.request_repaint_after(wait);
        } else if !self.session.game.is_over() {
            // Keep the move timer ticking
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use crate::config::AppConfig;
use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Connect-five desktop app: human as Black, computer as White
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: GameState::new(config.ai_delay()),
            board_view: BoardView::default(),
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with move counts, turn and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("CONNECT FIVE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                Self::card_frame().show(ui, |ui| {
                    ui.label(RichText::new(self.state.moves_text()).size(13.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(self.state.turn_text()).size(16.0).strong().color(TEXT_PRIMARY));
                    if self.state.is_ai_pending() {
                        ui.label(RichText::new("Computer thinking...").size(12.0).color(STATUS_THINKING));
                    }
                });
                ui.add_space(10.0);

                if let Some(text) = self.state.winner_text() {
                    Frame::new()
                        .fill(egui::Color32::from_rgb(45, 80, 55))
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(16.0)
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(text).size(20.0).strong().color(WIN_HIGHLIGHT));
                            });
                        });
                    ui.add_space(10.0);
                }

                Self::card_frame().show(ui, |ui| {
                    if ui.button(RichText::new("Reset (N)").size(14.0)).clicked() {
                        self.state.reset();
                    }
                });

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(12.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let session = &self.state.session;
            let accepting_input =
                session.current_player() == Some(crate::Player::Black) && !session.is_board_full();

            let clicked = self.board_view.show(
                ui,
                session.board(),
                session.last_move(),
                session.phase().winning_cells(),
                accepting_input,
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_stone(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.poll_ai();

        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Wake up again when the computer's reply is due
        if let Some(remaining) = self.state.ai_remaining() {
            ctx.request_repaint_after(remaining);
        }
    }
}

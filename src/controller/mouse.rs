//! Mouse handling: card drag-and-drop and page button clicks

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::model::{DropEffect, Focus, Screen};
use crate::view::layout::{card_cells, gallery_areas, hit_test, page_buttons};
use super::AppController;

impl AppController {
    pub async fn handle_mouse_event(&self, mouse: MouseEvent) -> Result<()> {
        let model = self.model.lock().await;
        if model.has_alert().await || model.is_help_popup_open().await {
            return Ok(());
        }
        let Screen::Gallery(page) = model.get_screen().await else {
            return Ok(());
        };

        let ui_state = model.get_ui_state().await;
        let areas = gallery_areas(ui_state.viewport);
        let cells = card_cells(areas.grid, model.page_size(), page.items.len());
        let card = hit_test(&cells, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = card {
                    model.set_focus(Focus::Grid).await;
                    model.drag_start(index).await;
                } else if let Some((number, _)) = page_buttons(areas.pagination, page.total_pages)
                    .into_iter()
                    .find(|(_, rect)| hit_test(&[*rect], mouse.column, mouse.row).is_some())
                {
                    model.set_page(number).await;
                } else if hit_test(&[areas.search], mouse.column, mouse.row).is_some() {
                    model.set_focus(Focus::Search).await;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(index) = card {
                    if model.drag_over(index).await == DropEffect::None {
                        tracing::trace!(index, "Drag over ignored");
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // A press and release without motion is a click, not a drop
                match card {
                    Some(index) if ui_state.drop_target.is_some() => {
                        model.drop_on(index).await;
                    }
                    _ => model.cancel_drag().await,
                }
            }
            _ => {}
        }
        Ok(())
    }
}

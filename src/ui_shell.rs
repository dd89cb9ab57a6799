use iced::{Element, Length, Theme};
use iced::widget::{button, container, text, Column, Row, Stack};

use crate::{pages, ui};
use super::{AppState, Message};
use crate::state::ToastKind;

// --- TOASTS ---
fn toasts_layer(state: &AppState, t: ui::Tokens) -> Element<'_, Message> {
    let mut col = Column::new().spacing(8).width(Length::Fixed(340.0));

    for toast in &state.toasts {
        let accent = match toast.kind {
            ToastKind::Info => t.muted_fg,
            ToastKind::Success => t.success,
            ToastKind::Error => t.danger,
        };

        let row = Row::new()
            .spacing(10)
            .push(text(&toast.message).size(13).color(t.foreground).width(Length::Fill))
            .push(
                button(text("×").size(14))
                    .padding([0, 6])
                    .style(button::text)
                    .on_press(Message::ToastDismiss(toast.id)),
            );

        col = col.push(
            container(row)
                .padding(10)
                .width(Length::Fill)
                .style(move |_: &Theme| ui::container_style(ui::alpha(accent, 0.22), t.foreground)),
        );
    }

    // Esquina inferior derecha
    container(col)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_right(Length::Fill)
        .align_bottom(Length::Fill)
        .into()
}

// --- ROOT VIEW ---
pub fn view(state: &AppState) -> Element<'_, Message> {
    let t = ui::Tokens::dark();

    let mut body = Row::new()
        .height(Length::Fill)
        .push(container(pages::gallery_page(state, t)).width(Length::Fill));

    // Panel de team independiente del detalle
    if state.team_panel_open {
        body = body.push(pages::team_panel(state, t));
    }

    let base = Column::new()
        .push(pages::header(state, t))
        .push(ui::h_divider(t))
        .push(body);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            container(base)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_: &Theme| ui::container_style(t.background, t.foreground)),
        );

    if let Some(c) = &state.selection {
        stack = stack.push(pages::detail_panel(state, c, t));
    }

    if !state.toasts.is_empty() {
        stack = stack.push(toasts_layer(state, t));
    }

    stack.into()
}

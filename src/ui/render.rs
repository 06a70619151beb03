use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::roster::CharacterDetails;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, STATUS_ERROR, STATUS_LOADING};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.roster()), header);
    draw_body(frame, app, body);
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: ratatui::layout::Rect) {
    let roster = app.roster();

    if roster.loading {
        let widget = Paragraph::new("Loading characters...")
            .style(Style::default().fg(STATUS_LOADING))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(widget, centered_rect(60, 20, body));
        return;
    }

    if let Some(error) = &roster.error {
        let widget = Paragraph::new(error.clone())
            .style(Style::default().fg(STATUS_ERROR))
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, centered_rect(60, 20, body));
        return;
    }

    // The rendering contract: one projection lookup per slot, absent
    // projections render nothing.
    let items: Vec<ListItem> = (0..roster.characters.len())
        .filter_map(|index| roster.character_details(index))
        .map(|details| card_item(&details))
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, body, &mut list_state);
}

fn card_item(details: &CharacterDetails) -> ListItem<'static> {
    let text = Text::from(vec![
        Line::from(Span::styled(
            details.actor.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            details.name.clone(),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            details.image.clone(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::DIM),
        )),
        Line::from(""),
    ]);
    ListItem::new(text)
}

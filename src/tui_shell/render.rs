use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::*;

const KEY_HINTS: &str = " Tab complete · ↑/↓ history · PgUp/PgDn scroll · Esc quit ";

pub(super) fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Red)),
        Span::styled("● ", Style::default().fg(Color::Yellow)),
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(
            WINDOW_TITLE,
            Style::default().fg(Color::Black).bg(Color::White),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Transcript. Layout first, then let the scroll state follow the newest
    // revision against the rows that were just computed.
    let block = Block::default().borders(Borders::LEFT | Borders::RIGHT);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    app.layout = layout_transcript(app.session.transcript(), inner.width);
    app.transcript_area = inner;
    app.scroll.sync(
        app.session.transcript().revision(),
        app.layout.rows.len(),
        usize::from(inner.height),
    );

    let lines = app
        .layout
        .rows
        .iter()
        .skip(app.scroll.offset)
        .take(usize::from(inner.height))
        .map(|row| {
            Line::from(
                row.spans
                    .iter()
                    .map(|s| Span::styled(s.text.as_str(), span_style(s.kind)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines), inner);

    // Input
    let input = app.session.input();
    let title = match &app.notice {
        Some(n) => Line::from(Span::styled(
            format!(" {} ", n),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )),
    };
    let prompt_w = PROMPT.width() + 1;
    let avail = usize::from(chunks[2].width).saturating_sub(prompt_w);
    let start = input_scroll_start(input.text(), input.cursor(), avail);
    let visible: String = input.text().chars().skip(start).collect();
    let input_line = Line::from(vec![
        Span::styled(PROMPT, span_style(SpanKind::Prompt)),
        Span::raw(" "),
        Span::raw(visible),
    ]);
    let input_block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .title_bottom(title);
    frame.render_widget(Paragraph::new(input_line).block(input_block), chunks[2]);

    // Cursor
    let before: String = input
        .text()
        .chars()
        .skip(start)
        .take(input.cursor().saturating_sub(start))
        .collect();
    let x = (prompt_w + before.width()).min(usize::from(chunks[2].width.saturating_sub(1)));
    frame.set_cursor_position((chunks[2].x + x as u16, chunks[2].y + 1));
}

/// First char of the input to draw so the text before the cursor, plus the
/// cursor cell itself, fits in `avail` columns.
fn input_scroll_start(text: &str, cursor: usize, avail: usize) -> usize {
    let widths = text
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .collect::<Vec<_>>();
    let mut used: usize = widths.iter().sum();
    let mut start = 0;
    while start < widths.len() && used >= avail {
        used -= widths[start];
        start += 1;
    }
    start
}

fn span_style(kind: SpanKind) -> Style {
    match kind {
        SpanKind::Prompt => Style::default().fg(Color::Green),
        SpanKind::Command => Style::default().add_modifier(Modifier::BOLD),
        SpanKind::Text => Style::default(),
        SpanKind::Link => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
        SpanKind::Invocable => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

use super::*;

const WHEEL_STEP: isize = 3;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(250)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                Event::Mouse(m) => handle_mouse(app, m),
                Event::Paste(s) => app.session.input_mut().insert_str(&s),
                Event::Resize(w, _) => app.resize(w),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    app.notice = None;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Up => app.session.history_up(),
        KeyCode::Down => app.session.history_down(),
        KeyCode::Tab => app.session.complete(),

        KeyCode::Esc => {
            if app.session.input().text().is_empty() {
                app.quit = true;
            } else {
                app.session.input_mut().clear_line();
            }
        }
        KeyCode::Char('c') if ctrl => app.quit = true,
        KeyCode::Char('d') if ctrl && app.session.input().text().is_empty() => {
            app.quit = true;
        }
        KeyCode::Char('u') if ctrl => app.session.input_mut().clear_line(),

        KeyCode::PageUp => {
            let page = app.page();
            app.scroll_by(-page);
        }
        KeyCode::PageDown => {
            let page = app.page();
            app.scroll_by(page);
        }

        KeyCode::Left => app.session.input_mut().move_left(),
        KeyCode::Right => app.session.input_mut().move_right(),
        KeyCode::Home => app.session.input_mut().move_home(),
        KeyCode::End => app.session.input_mut().move_end(),
        KeyCode::Backspace => app.session.input_mut().backspace(),
        KeyCode::Delete => app.session.input_mut().delete(),

        KeyCode::Char(c) if !ctrl => app.session.input_mut().insert_char(c),

        _ => {}
    }
}

pub(super) fn handle_mouse(app: &mut App, m: MouseEvent) {
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(m.column, m.row),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP),
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP),
        _ => {}
    }
}

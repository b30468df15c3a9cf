use super::*;

pub(super) struct App {
    pub(super) session: Session,
    pub(super) config: PortfolioConfig,

    pub(super) trace: Option<TraceWriter>,
    // Shown in the input border until the next keypress.
    pub(super) notice: Option<String>,

    // Filled in by the renderer; used for scrolling and mouse hit tests.
    pub(super) layout: TranscriptLayout,
    pub(super) transcript_area: Rect,
    pub(super) scroll: TranscriptScroll,

    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(config: PortfolioConfig, width: u16) -> Self {
        Self {
            session: Session::new(config.is_compact(width)),
            config,
            trace: None,
            notice: None,
            layout: TranscriptLayout::default(),
            transcript_area: Rect::default(),
            scroll: TranscriptScroll::default(),
            quit: false,
        }
    }

    pub(super) fn load(opts: TuiRunOptions, width: u16) -> Self {
        let mut app = App::new(opts.config, width);
        if let Some(path) = opts.trace {
            match TraceWriter::open(&path) {
                Ok(writer) => {
                    app.trace = Some(writer);
                    let compact = app.session.is_compact();
                    app.write_trace(|w| w.session_start(compact));
                    app.notice = Some(format!("trace: {}", path.display()));
                }
                Err(err) => {
                    app.notice = Some(format!("trace disabled: {:#}", err));
                }
            }
        }
        app
    }

    pub(super) fn submit(&mut self) {
        let raw = self.session.input().text().trim().to_string();
        let effect = self.session.submit();
        if !raw.is_empty() {
            self.write_trace(|w| w.command_submitted(&raw, effect.as_ref()));
        }
    }

    /// Runs the command under a click, if any.
    pub(super) fn click(&mut self, x: u16, y: u16) {
        let area = self.transcript_area;
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return;
        }
        let row = self.scroll.offset + usize::from(y - area.y);
        let Some(command) = self.layout.hit(row, x - area.x) else {
            return;
        };
        self.write_trace(|w| w.invocation(command));
        let effect = self.session.invoke(command);
        self.write_trace(|w| w.command_submitted(command.name(), effect.as_ref()));
    }

    pub(super) fn resize(&mut self, width: u16) {
        let was = self.session.is_compact();
        let compact = self.config.is_compact(width);
        if self.session.set_compact(compact) {
            self.write_trace(|w| w.viewport_change(width, was, compact));
        }
    }

    pub(super) fn scroll_by(&mut self, delta: isize) {
        self.scroll.scroll_by(delta);
    }

    pub(super) fn page(&self) -> isize {
        self.transcript_area.height.saturating_sub(1).max(1) as isize
    }

    pub(super) fn finish(&mut self, reason: &str) {
        self.write_trace(|w| w.session_end(reason));
    }

    // A failed trace write turns tracing off instead of ending the session.
    fn write_trace(&mut self, f: impl FnOnce(&mut TraceWriter) -> Result<()>) {
        let Some(writer) = self.trace.as_mut() else {
            return;
        };
        if let Err(err) = f(writer) {
            self.notice = Some(format!(
                "trace disabled ({}): {:#}",
                writer.path().display(),
                err
            ));
            self.trace = None;
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;

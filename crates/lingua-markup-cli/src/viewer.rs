use std::io::{Stdout, stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lingua_markup_config::Palette;
use lingua_markup_engine::{Segment, Spacing};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::palette;

/// Blank rows shown after a line with the given spacing.
fn gap_rows(spacing: Spacing) -> usize {
    match spacing {
        Spacing::None | Spacing::Small => 0,
        Spacing::Medium => 1,
        Spacing::Large => 2,
    }
}

/// Lays a segment stream out as styled terminal lines.
///
/// Gaps never stack: a spacer after a line that already asked for a gap adds
/// nothing, and trailing gaps are dropped.
pub fn to_lines(segments: &[Segment], scheme: Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut pending = 0;

    for line in segments.split_inclusive(|s| s.new_line) {
        if line.iter().all(Segment::is_spacer) {
            pending = pending.max(1);
            continue;
        }
        lines.extend(std::iter::repeat_n(Line::default(), pending));
        lines.push(Line::from(
            line.iter()
                .map(|seg| Span::styled(seg.text.clone(), palette::segment_style(scheme, seg)))
                .collect::<Vec<_>>(),
        ));
        pending = line.last().map_or(0, |seg| gap_rows(seg.spacing_after));
    }

    lines
}

struct App {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(title: String, lines: Vec<Line<'static>>) -> Self {
        Self {
            title,
            lines,
            scroll: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll());
    }

    fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }
}

/// Shows the stream in a full-screen scrolling viewer until the user quits.
pub fn run(segments: &[Segment], scheme: Palette, title: String) -> Result<()> {
    let mut app = App::new(title, to_lines(segments, scheme));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                KeyCode::End | KeyCode::Char('G') => app.scroll = app.max_scroll(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let content = Paragraph::new(app.lines.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.as_str()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q/Esc: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

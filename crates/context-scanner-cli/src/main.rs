use anyhow::{Context, Result};
use context_scanner_config::Config;
use context_scanner_engine::{
    OutlineEntry, ScanOptions, VerbatimPolicy, io, scan_document,
    scanning::snapshot::{render_outline, render_runs},
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use xi_rope::Rope;

mod highlight;

const PAGE: u16 = 20;

struct App {
    path: PathBuf,
    options: ScanOptions,
    lines: Vec<Line<'static>>,
    outline: Vec<OutlineEntry>,
    outline_state: ListState,
    scroll: u16,
    status: String,
}

impl App {
    fn new(path: PathBuf, options: ScanOptions) -> Result<Self> {
        let mut app = Self {
            path,
            options,
            lines: Vec::new(),
            outline: Vec::new(),
            outline_state: ListState::default(),
            scroll: 0,
            status: String::new(),
        };
        app.reload()?;
        Ok(app)
    }

    /// Re-reads the file and re-runs both scanners, keeping the selection
    /// where it still exists.
    fn reload(&mut self) -> Result<()> {
        let text = io::read_source(&self.path)?;
        let doc = scan_document(&Rope::from(text.as_str()), &self.options);
        log::debug!(
            "{}: {} runs, {} outline entries",
            self.path.display(),
            doc.runs.len(),
            doc.outline.len()
        );

        self.lines = highlight::styled_lines(&text, &doc.runs);
        self.outline = doc.outline;
        self.status = format!(
            "{} | {} runs | {} blocks",
            self.path.display(),
            doc.runs.len(),
            self.outline.len()
        );

        let selected = match self.outline_state.selected() {
            _ if self.outline.is_empty() => None,
            Some(i) => Some(i.min(self.outline.len() - 1)),
            None => Some(0),
        };
        self.outline_state.select(selected);
        self.scroll = self.scroll.min(self.max_scroll());
        Ok(())
    }

    fn next_entry(&mut self) {
        if self.outline.is_empty() {
            return;
        }
        let i = match self.outline_state.selected() {
            Some(i) => (i + 1) % self.outline.len(),
            None => 0,
        };
        self.outline_state.select(Some(i));
    }

    fn previous_entry(&mut self) {
        if self.outline.is_empty() {
            return;
        }
        let i = match self.outline_state.selected() {
            Some(0) | None => self.outline.len() - 1,
            Some(i) => i - 1,
        };
        self.outline_state.select(Some(i));
    }

    fn jump_to_selected(&mut self) {
        if let Some(index) = self.outline_state.selected()
            && let Some(entry) = self.outline.get(index)
        {
            self.scroll = to_u16(entry.line.saturating_sub(1)).min(self.max_scroll());
        }
    }

    fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by).min(self.max_scroll());
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn max_scroll(&self) -> u16 {
        to_u16(self.lines.len().saturating_sub(1))
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn scan_options(config: &Config) -> ScanOptions {
    ScanOptions {
        verbatim: VerbatimPolicy::with_verbatim(config.all_verbatim_commands()),
        max_nesting: config.max_nesting,
    }
}

/// Prints runs and outline for a file, or for every ConTeXt file under a
/// directory.
fn dump(path: &Path, options: &ScanOptions) -> Result<()> {
    let files = if path.is_dir() {
        io::scan_context_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    for file in files {
        let text =
            io::read_source(&file).with_context(|| format!("reading {}", file.display()))?;
        let rope = Rope::from(text.as_str());
        let doc = scan_document(&rope, options);

        println!("== {}", file.display());
        print!("{}", render_runs(&rope, &doc.runs));
        println!("-- outline");
        print!("{}", render_outline(&doc.outline));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let args: Vec<String> = env::args().collect();
    let (dump_mode, path) = match args.as_slice() {
        [_, flag, path] if flag == "--dump" => (true, PathBuf::from(path)),
        [_, path] if !path.starts_with("--") => (false, PathBuf::from(path)),
        _ => {
            eprintln!("Usage: {} [--dump] <file.tex>", args[0]);
            eprintln!("       {} --dump <directory>", args[0]);
            process::exit(1);
        }
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let options = scan_options(&config);

    if dump_mode {
        if let Err(e) = dump(&path, &options) {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
        return Ok(());
    }

    // Fail before touching the terminal if the file can't be read
    let mut app = match App::new(path.clone(), options) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: '{}' could not be opened: {e}", path.display());
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
                KeyCode::Enter => app.jump_to_selected(),
                KeyCode::PageDown => app.scroll_down(PAGE),
                KeyCode::PageUp => app.scroll_up(PAGE),
                KeyCode::Char('r') => {
                    if let Err(e) = app.reload() {
                        app.status = format!("Reload failed: {e}");
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Outline panel
    let outline_items: Vec<ListItem> = app
        .outline
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(entry.depth);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}{}", indent, entry.name)),
                Span::styled(
                    format!("  :{}", entry.line),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let outline_list = List::new(outline_items)
        .block(Block::default().borders(Borders::ALL).title("Outline"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(outline_list, chunks[0], &mut app.outline_state);

    // Document panel
    let document = Paragraph::new(app.lines.clone())
        .block(Block::default().borders(Borders::ALL).title("Document"))
        .scroll((app.scroll, 0));

    f.render_widget(document, chunks[1]);

    // Status and instructions
    let help_text = Line::from(vec![
        Span::raw(format!("{} | ", app.status)),
        Span::raw("q: Quit | ↑/k ↓/j: Outline | Enter: Jump | PgUp/PgDn: Scroll | r: Reload"),
    ]);

    f.render_widget(Paragraph::new(help_text), rows[1]);
}

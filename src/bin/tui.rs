//! Kyara TUI - Terminal browser for the anime character catalog
//!
//! Sidebar navigation between the mixed home listing and the per-series
//! listings, a filterable and sortable character table, and a detail view
//! that returns to the listing it was opened from.

use color_eyre::{eyre::Result, install};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState, Wrap},
};
use std::{
    fs::{self, OpenOptions},
    io,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kyara::prelude::*;
use kyara::tui::{
    COLUMNS, cell_text, column_header, create_status_message, format_character_title,
    format_description, format_details, page_indicator, truncate_text,
};

// Results of background work
#[derive(Debug)]
enum AppEvent {
    Listing {
        route: Route,
        records: Vec<CharacterRecord>,
    },
    Character {
        id: String,
        record: Option<CharacterRecord>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AppMode {
    Listing,
    Detail,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FilterField {
    Name = 0,
    Affiliation = 1,
    Race = 2,
    Gender = 3,
}

impl FilterField {
    const ALL: [FilterField; 4] = [
        FilterField::Name,
        FilterField::Affiliation,
        FilterField::Race,
        FilterField::Gender,
    ];

    fn label(&self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Affiliation => "Affiliation",
            FilterField::Race => "Race",
            FilterField::Gender => "Gender",
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }
}

mod theme {
    use ratatui::style::Color;

    pub const PRIMARY: Color = Color::Rgb(255, 152, 0); // Orange
    pub const ACCENT: Color = Color::Rgb(75, 85, 255); // Blue
    pub const SUCCESS: Color = Color::Rgb(76, 175, 80); // Green
    pub const WARNING: Color = Color::Rgb(255, 193, 7); // Yellow
    pub const INFO: Color = Color::Rgb(33, 150, 243); // Light Blue

    pub const TEXT_PRIMARY: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color = Color::Rgb(189, 189, 189);
    pub const TEXT_MUTED: Color = Color::Rgb(117, 117, 117);

    pub const BORDER: Color = Color::Rgb(66, 66, 66);
    pub const BORDER_FOCUS: Color = PRIMARY;
}

#[derive(Debug, Clone, PartialEq)]
enum StatusType {
    Info,
    Success,
    Warning,
}

impl StatusType {
    fn line(&self, message: &str) -> Line<'static> {
        match self {
            StatusType::Info => create_status_message("Info", message, theme::INFO),
            StatusType::Success => create_status_message("Success", message, theme::SUCCESS),
            StatusType::Warning => create_status_message("Warning", message, theme::WARNING),
        }
    }
}

struct App {
    mode: AppMode,
    route: Route,
    should_quit: bool,
    sidebar_selected: usize,

    // Listing state
    list: CharacterList,
    table_state: TableState,
    filter_values: [String; 4],
    editing: Option<FilterField>,
    sort_column: usize,
    sort_direction: SortDirection,
    loading: bool,

    // Detail state
    character: Option<CharacterRecord>,

    status_message: String,
    status_type: StatusType,

    event_sender: mpsc::UnboundedSender<AppEvent>,
    event_receiver: mpsc::UnboundedReceiver<AppEvent>,

    catalog: Arc<Catalog>,
}

impl App {
    fn new(catalog: Catalog) -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        let sources = catalog.len();

        Self {
            mode: AppMode::Listing,
            route: Route::Home,
            should_quit: false,
            sidebar_selected: 0,

            list: CharacterList::new(),
            table_state: TableState::default(),
            filter_values: Default::default(),
            editing: None,
            sort_column: 1,
            sort_direction: SortDirection::None,
            loading: false,

            character: None,

            status_message: format!("{} sources registered", sources),
            status_type: StatusType::Info,

            event_sender,
            event_receiver,

            catalog: Arc::new(catalog),
        }
    }

    fn sidebar_items() -> [&'static str; 5] {
        ["Home", "Dragon Ball", "One Piece", "Naruto", "Help"]
    }

    fn sidebar_route(index: usize) -> Option<Route> {
        match index {
            0 => Some(Route::Home),
            1..=3 => Series::ALL.get(index - 1).copied().map(Route::Series),
            _ => None,
        }
    }

    fn set_status(&mut self, message: String, status_type: StatusType) {
        self.status_message = message;
        self.status_type = status_type;
    }

    fn select_sidebar(&mut self, index: usize) {
        self.sidebar_selected = index;
        match Self::sidebar_route(index) {
            Some(route) => self.navigate(route),
            None => self.mode = AppMode::Help,
        }
    }

    fn navigate(&mut self, route: Route) {
        debug!(route = %route, "navigating");
        self.route = route.clone();

        match route {
            Route::Home | Route::Series(_) => {
                self.mode = AppMode::Listing;
                self.sidebar_selected = match route.series() {
                    Some(series) => Series::ALL.iter().position(|s| *s == series).unwrap_or(0) + 1,
                    None => 0,
                };
                self.load_listing(route);
            }
            Route::Detail { id, .. } => {
                self.mode = AppMode::Detail;
                self.character = None;
                self.load_character(id);
            }
        }
    }

    fn load_listing(&mut self, route: Route) {
        self.loading = true;
        self.set_status("Loading characters...".to_string(), StatusType::Info);

        let catalog = Arc::clone(&self.catalog);
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let records = catalog.load_all().await;
            let _ = sender.send(AppEvent::Listing { route, records });
        });
    }

    fn load_character(&mut self, id: String) {
        self.loading = true;
        self.set_status(format!("Loading {}...", id), StatusType::Info);

        let catalog = Arc::clone(&self.catalog);
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let record = catalog.find_by_id(&id).await;
            let _ = sender.send(AppEvent::Character { id, record });
        });
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Listing { route, records } => {
                if route != self.route {
                    debug!(route = %route, "dropping stale listing");
                    return;
                }
                self.loading = false;
                self.list.set_records(records, route.series());
                self.apply_filters();
                self.set_status(
                    format!("Loaded {} characters", self.list.data().len()),
                    StatusType::Success,
                );
            }
            AppEvent::Character { id, record } => {
                if !matches!(&self.route, Route::Detail { id: current, .. } if *current == id) {
                    return;
                }
                self.loading = false;
                match record {
                    Some(record) => {
                        self.set_status(format!("Showing {}", record.name), StatusType::Success);
                        self.character = Some(record);
                    }
                    None => {
                        self.set_status(format!("Character {} not found", id), StatusType::Warning)
                    }
                }
            }
        }
    }

    fn criteria(&self) -> FilterCriteria {
        let value = |field: FilterField| {
            let text = self.filter_values[field as usize].trim();
            (!text.is_empty()).then(|| text.to_string())
        };

        FilterCriteria {
            name: value(FilterField::Name),
            series: None,
            race: value(FilterField::Race),
            gender: value(FilterField::Gender),
            affiliation: value(FilterField::Affiliation),
        }
    }

    fn apply_filters(&mut self) {
        self.list.set_filters(self.criteria());
        self.sort_direction = SortDirection::None;
        self.table_state.select((!self.list.paged().is_empty()).then_some(0));
    }

    fn cycle_sort(&mut self) {
        self.sort_direction = self.sort_direction.cycle();
        let spec = SortSpec::new(COLUMNS[self.sort_column], self.sort_direction);
        if spec.is_identity() {
            // Unsorted again: restore the filtered order
            self.list.set_filters(self.criteria());
        } else {
            self.list.sort(spec);
        }
        self.set_status(
            format!("Sorted by {}", column_header(spec.field, Some(spec))),
            StatusType::Info,
        );
    }

    fn next_sort_column(&mut self) {
        self.sort_column = (self.sort_column + 1) % COLUMNS.len();
        self.sort_direction = SortDirection::None;
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.list.paged().len();
        if len == 0 {
            return;
        }
        let selected = self.table_state.selected().unwrap_or(0);
        let next = if down {
            (selected + 1).min(len - 1)
        } else {
            selected.saturating_sub(1)
        };
        self.table_state.select(Some(next));
    }

    fn open_selected(&mut self) {
        let selected = self
            .table_state
            .selected()
            .and_then(|i| self.list.paged().get(i))
            .map(|record| record.id.clone());

        if let Some(id) = selected {
            let from = self.list.return_route();
            self.navigate(Route::detail(id, &from));
        }
    }

    fn handle_key_event(&mut self, key: KeyCode) {
        if let Some(field) = self.editing {
            self.handle_filter_input(field, key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => {
                let next = (self.sidebar_selected + 1) % Self::sidebar_items().len();
                self.select_sidebar(next);
            }
            KeyCode::BackTab => {
                let count = Self::sidebar_items().len();
                self.select_sidebar((self.sidebar_selected + count - 1) % count);
            }
            KeyCode::F(1) => self.mode = AppMode::Help,
            _ => match self.mode {
                AppMode::Listing => self.handle_listing_keys(key),
                AppMode::Detail => self.handle_detail_keys(key),
                AppMode::Help => {
                    if key == KeyCode::Esc {
                        self.select_sidebar(0);
                    }
                }
            },
        }
    }

    fn handle_listing_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.editing = Some(FilterField::Name);
                self.set_status(
                    "Type to filter, Tab for next field, Enter or Esc when done".to_string(),
                    StatusType::Info,
                );
            }
            KeyCode::Char('c') => {
                self.filter_values = Default::default();
                self.apply_filters();
                self.set_status("Filters cleared".to_string(), StatusType::Info);
            }
            KeyCode::Char('o') => self.next_sort_column(),
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Char('r') => self.load_listing(self.route.clone()),
            KeyCode::Up => self.move_selection(false),
            KeyCode::Down => self.move_selection(true),
            KeyCode::Right | KeyCode::Char('n') => {
                if self.list.pages.next_page() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if self.list.pages.previous_page() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn handle_filter_input(&mut self, field: FilterField, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => self.editing = None,
            KeyCode::Tab => self.editing = Some(field.next()),
            KeyCode::Backspace => {
                self.filter_values[field as usize].pop();
                self.apply_filters();
            }
            KeyCode::Char(c) => {
                self.filter_values[field as usize].push(c);
                self.apply_filters();
            }
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')) {
            let back = self.route.back().unwrap_or(Route::Home);
            self.navigate(back);
        }
    }
}

// Rendering implementation
impl App {
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(f.size());

        self.render_sidebar(f, chunks[0]);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Status bar
            ])
            .split(chunks[1]);

        self.render_header(f, main_chunks[0]);
        match self.mode {
            AppMode::Listing => self.render_listing(f, main_chunks[1]),
            AppMode::Detail => self.render_detail(f, main_chunks[1]),
            AppMode::Help => self.render_help(f, main_chunks[1]),
        }
        self.render_status_bar(f, main_chunks[2]);
    }

    fn render_sidebar(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = Self::sidebar_items()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let style = if i == self.sidebar_selected {
                    Style::default()
                        .fg(theme::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::TEXT_SECONDARY)
                };

                ListItem::new(Line::from(label.to_string())).style(style)
            })
            .collect();

        let sidebar = List::new(items).block(
            Block::default()
                .title("Kyara")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER))
                .title_style(
                    Style::default()
                        .fg(theme::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        f.render_widget(sidebar, area);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let title = match (&self.mode, &self.route) {
            (AppMode::Help, _) => "Help".to_string(),
            (_, Route::Home) => "All Characters".to_string(),
            (_, Route::Series(series)) => format!("{} Characters", series),
            (_, Route::Detail { .. }) => "Character Details".to_string(),
        };

        let header = Paragraph::new(title)
            .style(
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::BORDER)),
            )
            .alignment(Alignment::Center);

        f.render_widget(header, area);
    }

    fn render_listing(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filters
                Constraint::Min(0),    // Table
                Constraint::Length(1), // Pager
            ])
            .margin(1)
            .split(area);

        self.render_filters(f, chunks[0]);

        if self.list.paged().is_empty() {
            let message = if self.loading {
                "Loading characters..."
            } else {
                "No characters match. Press 'c' to clear the filters."
            };
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(theme::TEXT_MUTED))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme::BORDER))
                        .title("Characters"),
                )
                .alignment(Alignment::Center);
            f.render_widget(placeholder, chunks[1]);
        } else {
            let sort = SortSpec::new(COLUMNS[self.sort_column], self.sort_direction);
            let header = Row::new(COLUMNS.iter().enumerate().map(|(i, field)| {
                let style = if i == self.sort_column {
                    Style::default()
                        .fg(theme::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::ACCENT)
                };
                Cell::from(column_header(*field, Some(sort))).style(style)
            }));

            let rows: Vec<Row> = self
                .list
                .paged()
                .iter()
                .map(|record| {
                    Row::new(
                        COLUMNS
                            .iter()
                            .map(|field| Cell::from(truncate_text(&cell_text(record, *field), 24))),
                    )
                    .style(Style::default().fg(theme::TEXT_PRIMARY))
                })
                .collect();

            let widths = [
                Constraint::Length(12),
                Constraint::Percentage(22),
                Constraint::Percentage(12),
                Constraint::Length(8),
                Constraint::Percentage(20),
                Constraint::Percentage(12),
                Constraint::Percentage(14),
            ];

            let table = Table::new(rows, widths)
                .header(header)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme::BORDER))
                        .title("Characters - Enter for details, 'o' column, 's' sort"),
                )
                .highlight_style(
                    Style::default()
                        .bg(theme::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                );

            f.render_stateful_widget(table, chunks[1], &mut self.table_state);
        }

        let pager = Paragraph::new(page_indicator(&self.list.pages))
            .style(Style::default().fg(theme::TEXT_SECONDARY))
            .alignment(Alignment::Right);
        f.render_widget(pager, chunks[2]);
    }

    fn render_filters(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (field, chunk) in FilterField::ALL.iter().zip(chunks.iter()) {
            let focused = self.editing == Some(*field);
            let border = if focused {
                theme::BORDER_FOCUS
            } else {
                theme::BORDER
            };

            let input = Paragraph::new(self.filter_values[*field as usize].as_str())
                .style(Style::default().fg(if focused {
                    theme::PRIMARY
                } else {
                    theme::TEXT_SECONDARY
                }))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border))
                        .title(field.label()),
                );
            f.render_widget(input, *chunk);
        }
    }

    fn render_detail(&self, f: &mut Frame, area: Rect) {
        let area = area.inner(&Margin {
            horizontal: 1,
            vertical: 1,
        });

        let Some(record) = &self.character else {
            let message = if self.loading {
                "Loading character..."
            } else {
                "Character not found. Press Esc to go back."
            };
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(theme::TEXT_MUTED))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme::BORDER))
                        .title("Character"),
                )
                .alignment(Alignment::Center);
            f.render_widget(placeholder, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(area);

        let mut info = vec![format_character_title(record), Line::from("")];
        info.extend(format_details(record));

        let details = Paragraph::new(info).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER))
                .title("Character Information"),
        );
        f.render_widget(details, chunks[0]);

        let mut text = format_description(
            &record.description,
            chunks[1].width.saturating_sub(2) as usize,
        );
        if !record.image.is_empty() {
            text.push(Line::from(""));
            text.push(Line::from(vec![
                Span::styled("Image: ", Style::default().fg(theme::ACCENT)),
                Span::styled(record.image.clone(), Style::default().fg(theme::TEXT_MUTED)),
            ]));
        }

        let description = Paragraph::new(text)
            .style(Style::default().fg(theme::TEXT_PRIMARY))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::BORDER))
                    .title("Description - Esc to go back"),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(description, chunks[1]);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status = Paragraph::new(self.status_type.line(&self.status_message))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::BORDER)),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(status, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let area = area.inner(&Margin {
            horizontal: 1,
            vertical: 1,
        });

        let help_text = vec![
            Line::from("Kyara - Anime Character Catalog"),
            Line::from(""),
            Line::from("Global Controls:"),
            Line::from("  Tab/S-Tab - Switch sections"),
            Line::from("  q         - Quit application"),
            Line::from("  F1        - Show this help"),
            Line::from(""),
            Line::from("Character Table:"),
            Line::from("  ↑↓        - Select character"),
            Line::from("  ←→ / p n  - Previous/next page"),
            Line::from("  Enter     - Open details"),
            Line::from("  / or f    - Edit filters (Tab moves between fields)"),
            Line::from("  c         - Clear filters"),
            Line::from("  o         - Select sort column"),
            Line::from("  s         - Cycle sort: ascending, descending, none"),
            Line::from("  r         - Reload"),
            Line::from(""),
            Line::from("Character Details:"),
            Line::from("  Esc/b     - Back to the listing"),
        ];

        let help = Paragraph::new(help_text)
            .style(Style::default().fg(theme::TEXT_PRIMARY))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::BORDER))
                    .title("Help"),
            );

        f.render_widget(help, area);
    }
}

fn init_logging() -> Result<()> {
    let dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("kyara");
    fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("kyara.log"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kyara=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    install()?;
    dotenvy::dotenv().ok();
    init_logging()?;

    let catalog = Catalog::from_config(&CatalogConfig::from_env());
    info!(sources = ?catalog.list_ids(), "starting kyara-tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog);
    app.navigate(Route::Home);

    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key.code);
                }
            }
        }

        while let Ok(app_event) = app.event_receiver.try_recv() {
            app.handle_app_event(app_event);
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

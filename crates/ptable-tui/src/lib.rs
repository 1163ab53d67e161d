// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ptable_app::{
    AtomicNumber, Category, CategoryPalette, ElementRecord, GridCell, Rgb, Session, ViewCommand,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;

const GRID_COLUMNS: u16 = GridCell::COLUMNS;
const CATEGORY_KEYS: [char; 11] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-'];
const CLOSE_GLYPH: &str = "✕";
const READ_MORE: &str = "Read more ↗";

pub trait AppRuntime {
    fn load_dataset(&mut self) -> Result<Vec<ElementRecord>>;
    /// Starts the one dataset fetch for this session. The default runs the
    /// load inline; runtimes backed by the network override this to fetch on
    /// a background thread.
    fn spawn_dataset_load(&mut self, tx: Sender<InternalEvent>) -> Result<()> {
        let event = match self.load_dataset() {
            Ok(records) => InternalEvent::DatasetLoaded(records),
            Err(error) => InternalEvent::DatasetFailed(format!("{error:#}")),
        };
        tx.send(event)
            .map_err(|_| anyhow!("dataset event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    DatasetLoaded(Vec<ElementRecord>),
    DatasetFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiOptions {
    pub title: String,
    pub show_names: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            title: "Periodic Table".to_owned(),
            show_names: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    screen: Rect,
    cursor: Option<GridCell>,
    help_visible: bool,
    status_token: u64,
    year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScreenLayout {
    header: Rect,
    legend: Rect,
    grid: Rect,
    footer: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridGeometry {
    area: Rect,
    cell_width: u16,
    cell_height: u16,
    rows: u16,
}

impl GridGeometry {
    fn new(area: Rect, rows: u16) -> Self {
        let rows = rows.max(1);
        Self {
            area,
            cell_width: (area.width / GRID_COLUMNS).max(1),
            cell_height: (area.height / rows).max(1),
            rows,
        }
    }

    /// Painted area of `cell`; the last column of each slot is left as a
    /// gap when there is room for one.
    fn cell_rect(&self, cell: GridCell) -> Option<Rect> {
        if cell.column == 0 || cell.row == 0 || cell.column > GRID_COLUMNS || cell.row > self.rows
        {
            return None;
        }
        let x = (cell.column - 1)
            .checked_mul(self.cell_width)
            .and_then(|offset| self.area.x.checked_add(offset))?;
        let y = (cell.row - 1)
            .checked_mul(self.cell_height)
            .and_then(|offset| self.area.y.checked_add(offset))?;
        if x >= self.area.right() || y >= self.area.bottom() {
            return None;
        }
        let width = if self.cell_width >= 3 {
            self.cell_width - 1
        } else {
            self.cell_width
        };
        Some(Rect::new(x, y, width, self.cell_height))
    }

    fn cell_at(&self, x: u16, y: u16) -> Option<GridCell> {
        if !rect_contains(self.area, x, y) {
            return None;
        }
        let column = (x - self.area.x) / self.cell_width + 1;
        let row = (y - self.area.y) / self.cell_height + 1;
        let cell = GridCell::new(column, row);
        let painted = self.cell_rect(cell)?;
        rect_contains(painted, x, y).then_some(cell)
    }
}

pub fn run_app<R: AppRuntime>(
    session: &mut Session,
    runtime: &mut R,
    palette: &CategoryPalette,
    options: &UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        year: OffsetDateTime::now_utc().year(),
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    start_dataset_load(session, runtime, &mut view_data, &internal_tx);

    let mut result = Ok(());
    loop {
        process_internal_events(session, &mut view_data, &internal_tx, &internal_rx);

        match terminal.draw(|frame| render(frame, session, &view_data, palette, options)) {
            Ok(completed) => view_data.screen = completed.area,
            Err(error) => {
                result = Err(error).context("draw frame");
                break;
            }
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) => {
                if handle_key_event(session, &mut view_data, &internal_tx, key) {
                    break;
                }
            }
            Ok(Event::Mouse(mouse)) => {
                handle_mouse_event(session, &mut view_data, &internal_tx, mouse);
            }
            Ok(_) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    log::debug!("terminal restored");
    result
}

fn start_dataset_load<R: AppRuntime>(
    session: &mut Session,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if !session.catalog.begin_load() {
        return;
    }
    if let Err(error) = runtime.spawn_dataset_load(internal_tx.clone()) {
        log::warn!("dataset load could not start: {error:#}");
        session.catalog.publish_failure();
        emit_status(session, view_data, internal_tx, "dataset unavailable");
    }
}

fn process_internal_events(
    session: &mut Session,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                session.view.dispatch(ViewCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::DatasetLoaded(records) => {
                let count = records.len();
                log::debug!("publishing {count} elements");
                session.catalog.publish(records);
                emit_status(
                    session,
                    view_data,
                    tx,
                    format!("dataset loaded: {}", element_count(count)),
                );
            }
            InternalEvent::DatasetFailed(error) => {
                log::warn!("dataset unavailable: {error}");
                session.catalog.publish_failure();
                emit_status(session, view_data, tx, "dataset unavailable");
            }
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    session: &mut Session,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    session.view.dispatch(ViewCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event(
    session: &mut Session,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if session.view.selected.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
            session.view.dispatch(ViewCommand::DismissOverlay);
        }
        return false;
    }

    match key.code {
        KeyCode::Char('?') => {
            view_data.help_visible = true;
        }
        KeyCode::Esc => {
            view_data.cursor = None;
            session.view.dispatch(ViewCommand::Hover(None));
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(number) = session.hovered_record().map(|record| record.number) {
                session.view.dispatch(ViewCommand::Select(Some(number)));
            }
        }
        KeyCode::Left | KeyCode::Char('h') => move_cursor(session, view_data, -1, 0),
        KeyCode::Right | KeyCode::Char('l') => move_cursor(session, view_data, 1, 0),
        KeyCode::Up | KeyCode::Char('k') => move_cursor(session, view_data, 0, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(session, view_data, 0, 1),
        KeyCode::Char('a') => {
            session.view.dispatch(ViewCommand::ClearCategory);
            emit_status(session, view_data, internal_tx, "showing all categories");
        }
        KeyCode::Char(ch) => {
            if let Some(category) = category_for_key(ch) {
                toggle_category(session, view_data, internal_tx, category);
            }
        }
        _ => {}
    }
    false
}

fn handle_mouse_event(
    session: &mut Session,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mouse: MouseEvent,
) {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => {
            let hit = record_under(session, view_data.screen, x, y)
                .map(|record| (record.number, record.cell));
            let number = hit.map(|(number, _)| number);
            if number != session.view.hovered {
                view_data.cursor = hit.map(|(_, cell)| cell);
                session.view.dispatch(ViewCommand::Hover(number));
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if session.view.selected.is_some() {
                let panel = detail_panel_rect(view_data.screen);
                if rect_contains(close_button_rect(panel), x, y) || !rect_contains(panel, x, y) {
                    session.view.dispatch(ViewCommand::DismissOverlay);
                }
                return;
            }
            if view_data.help_visible {
                view_data.help_visible = false;
                return;
            }

            let layout = screen_layout(view_data.screen);
            if let Some(category) = legend_buttons(layout.legend)
                .into_iter()
                .find(|(_, rect)| rect_contains(*rect, x, y))
                .map(|(category, _)| category)
            {
                toggle_category(session, view_data, internal_tx, category);
                return;
            }

            if let Some(number) =
                record_under(session, view_data.screen, x, y).map(|record| record.number)
            {
                session.view.dispatch(ViewCommand::Select(Some(number)));
            }
        }
        _ => {}
    }
}

fn toggle_category(
    session: &mut Session,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    category: Category,
) {
    session.view.dispatch(ViewCommand::ToggleCategory(category));
    drop_hidden_hover(session, view_data);
    let visible = session.visible_records().len();
    let message = match session.view.active_category {
        Some(active) => format!("{}: {}", active.as_str(), element_count(visible)),
        None => "showing all categories".to_owned(),
    };
    emit_status(session, view_data, internal_tx, message);
}

/// Clears the hover once its record is filtered out of the grid.
fn drop_hidden_hover(session: &mut Session, view_data: &mut ViewData) {
    let Some(hovered) = session.view.hovered else {
        return;
    };
    let still_visible = session
        .visible_records()
        .iter()
        .any(|record| record.number == hovered);
    if !still_visible {
        view_data.cursor = None;
        session.view.dispatch(ViewCommand::Hover(None));
    }
}

fn move_cursor(session: &mut Session, view_data: &mut ViewData, dx: i32, dy: i32) {
    let visible = session.visible_records();
    let next = match view_data.cursor {
        None => visible.first().map(|record| record.cell),
        Some(from) => nearest_cell(&visible, from, dx, dy).or(Some(from)),
    };
    let number: Option<AtomicNumber> = next.and_then(|cell| {
        visible
            .iter()
            .find(|record| record.cell == cell)
            .map(|record| record.number)
    });
    view_data.cursor = next;
    session.view.dispatch(ViewCommand::Hover(number));
}

/// Horizontal moves stay on the current row; vertical moves pick the
/// closest row in that direction, then the closest column.
fn nearest_cell(
    records: &[&ElementRecord],
    from: GridCell,
    dx: i32,
    dy: i32,
) -> Option<GridCell> {
    let from_column = i32::from(from.column);
    let from_row = i32::from(from.row);
    records
        .iter()
        .map(|record| record.cell)
        .filter(|cell| {
            let column = i32::from(cell.column);
            let row = i32::from(cell.row);
            if dx != 0 {
                row == from_row && (column - from_column).signum() == dx.signum()
            } else {
                (row - from_row).signum() == dy.signum()
            }
        })
        .min_by_key(|cell| {
            let column_distance = (i32::from(cell.column) - from_column).abs();
            let row_distance = (i32::from(cell.row) - from_row).abs();
            if dx != 0 {
                (column_distance, 0)
            } else {
                (row_distance, column_distance)
            }
        })
}

fn category_for_key(ch: char) -> Option<Category> {
    CATEGORY_KEYS
        .iter()
        .position(|key| *key == ch)
        .map(|index| Category::ALL[index])
}

fn record_under(session: &Session, screen: Rect, x: u16, y: u16) -> Option<&ElementRecord> {
    if session.is_loading() {
        return None;
    }
    let layout = screen_layout(screen);
    let geometry = GridGeometry::new(layout.grid, grid_rows(session.records()));
    let cell = geometry.cell_at(x, y)?;
    session.record_at(cell)
}

/// Rows needed to show every record, capped to the periodic layout.
fn grid_rows(records: &[ElementRecord]) -> u16 {
    records
        .iter()
        .map(|record| record.cell.row)
        .max()
        .unwrap_or(GridCell::ROWS)
        .min(GridCell::ROWS)
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let legend_height = legend_height(area.width.saturating_sub(2));
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(legend_height),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        header: layout[0],
        legend: inset_horizontal(layout[1], 1),
        grid: inset_horizontal(layout[2], 1),
        footer: layout[3],
    }
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    if area.width <= margin * 2 {
        return area;
    }
    Rect::new(area.x + margin, area.y, area.width - margin * 2, area.height)
}

fn legend_label(category: Category) -> String {
    format!(" {} {} ", CATEGORY_KEYS[category.index()], category.as_str())
}

/// Lays the category buttons out left to right, wrapping to a new line
/// when the next button would overflow. Buttons past the last line are
/// dropped.
fn legend_buttons(area: Rect) -> Vec<(Category, Rect)> {
    let mut buttons = Vec::with_capacity(Category::ALL.len());
    let mut x = area.x;
    let mut y = area.y;
    for category in Category::ALL {
        let width = legend_label(category).chars().count() as u16;
        if x > area.x && x + width > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= area.bottom() {
            break;
        }
        buttons.push((category, Rect::new(x, y, width.min(area.width), 1)));
        x += width + 1;
    }
    buttons
}

fn legend_height(width: u16) -> u16 {
    let probe = Rect {
        x: 0,
        y: 0,
        width: width.max(1),
        height: Category::ALL.len() as u16,
    };
    legend_buttons(probe)
        .last()
        .map(|(_, rect)| rect.y + 1)
        .unwrap_or(1)
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    session: &Session,
    view_data: &ViewData,
    palette: &CategoryPalette,
    options: &UiOptions,
) {
    let layout = screen_layout(frame.area());

    let header = Paragraph::new(Line::from(Span::styled(
        options.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, layout.header);

    render_legend(frame, layout.legend, session, palette);

    if session.is_loading() {
        let loading = Paragraph::new("Loading…").alignment(Alignment::Center);
        frame.render_widget(loading, vertical_center(layout.grid, 1));
    } else {
        render_grid(frame, layout.grid, session, view_data, palette, options);
    }

    let footer = Paragraph::new(status_text(session, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, layout.footer);

    if let Some(record) = session.tooltip_record() {
        render_tooltip(frame, layout.grid, record);
    }

    if let Some(record) = session.selected_record() {
        render_detail_panel(frame, record, palette);
    }

    if view_data.help_visible {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_legend(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    session: &Session,
    palette: &CategoryPalette,
) {
    for (category, rect) in legend_buttons(area) {
        let style = if session.view.active_category == Some(category) {
            Style::default()
                .bg(to_color(palette.color(category)))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(to_color(palette.color(category)))
        };
        let button = Paragraph::new(legend_label(category)).style(style);
        frame.render_widget(button, rect);
    }
}

fn render_grid(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    session: &Session,
    view_data: &ViewData,
    palette: &CategoryPalette,
    options: &UiOptions,
) {
    let geometry = GridGeometry::new(area, grid_rows(session.records()));
    for record in session.visible_records() {
        let Some(rect) = geometry.cell_rect(record.cell) else {
            continue;
        };
        let highlighted =
            session.view.hovered == Some(record.number) || view_data.cursor == Some(record.cell);
        let mut style = Style::default()
            .bg(to_color(palette.color(record.category)))
            .fg(Color::Black);
        if highlighted {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        let cell = Paragraph::new(Text::from(cell_lines(record, rect, options.show_names)))
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(cell, rect);
    }
}

fn cell_lines(record: &ElementRecord, rect: Rect, show_names: bool) -> Vec<Line<'static>> {
    let width = usize::from(rect.width);
    let symbol = Line::from(Span::styled(
        record.symbol.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    match rect.height {
        0 | 1 => vec![symbol],
        2 => vec![Line::from(record.number.get().to_string()), symbol],
        _ => {
            let mut lines = vec![Line::from(record.number.get().to_string()), symbol];
            if show_names {
                lines.push(Line::from(truncate_label(&record.name, width)));
            }
            lines
        }
    }
}

fn render_tooltip(frame: &mut ratatui::Frame<'_>, area: Rect, record: &ElementRecord) {
    let text = record.tooltip_text();
    let width = (text.chars().count() as u16 + 4).min(area.width);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(3) / 2,
        width,
        3.min(area.height),
    );
    frame.render_widget(Clear, rect);
    let tooltip = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black).fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tooltip, rect);
}

fn render_detail_panel(
    frame: &mut ratatui::Frame<'_>,
    record: &ElementRecord,
    palette: &CategoryPalette,
) {
    let area = detail_panel_rect(frame.area());
    frame.render_widget(Clear, area);
    let panel = Paragraph::new(detail_text(record).join("\n"))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(record.name.clone())
                .borders(Borders::ALL)
                .style(Style::default().fg(to_color(palette.color(record.category)))),
        );
    frame.render_widget(panel, area);
    frame.render_widget(
        Paragraph::new(format!("[{CLOSE_GLYPH}]")),
        close_button_rect(area),
    );
}

fn detail_text(record: &ElementRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Symbol: {}", record.symbol),
        format!("Atomic Number: {}", record.number.get()),
        format!("Category: {}", record.category_label),
    ];
    if let Some(summary) = &record.summary {
        lines.push(String::new());
        lines.push(summary.clone());
    }
    if let Some(source) = &record.source_url {
        lines.push(String::new());
        lines.push(format!("{READ_MORE} {source}"));
    }
    lines
}

fn detail_panel_rect(screen: Rect) -> Rect {
    centered_rect(70, 60, screen)
}

fn close_button_rect(panel: Rect) -> Rect {
    let width = 3.min(panel.width);
    Rect::new(
        panel.right().saturating_sub(width + 1).max(panel.x),
        panel.y,
        width,
        1.min(panel.height),
    )
}

fn status_text(session: &Session, view_data: &ViewData) -> String {
    let filter = session
        .view
        .active_category
        .map(Category::as_str)
        .unwrap_or("all");
    let hints = if session.view.selected.is_some() {
        "esc/enter close".to_owned()
    } else {
        format!("filter:{filter} | hjkl move | enter open | 1-9 0 - category | a all | ? help | q")
    };
    let footer = footer_text(view_data.year);
    match &session.view.status_line {
        Some(status) => format!("{status} | {hints} | {footer}"),
        None => format!("{hints} | {footer}"),
    }
}

fn element_count(count: usize) -> String {
    if count == 1 {
        "1 element".to_owned()
    } else {
        format!("{count} elements")
    }
}

fn footer_text(year: i32) -> String {
    format!("Bowserinator dataset • © {year}")
}

fn help_overlay_text() -> &'static str {
    "mouse: hover a cell for a tooltip, click to open details\n\
     h/j/k/l or arrows: move between elements\n\
     enter/space: open details for the highlighted element\n\
     esc: close details, or clear the highlight\n\
     1-9, 0, -: toggle a category filter (legend order)\n\
     a: show all categories\n\
     ?: toggle this help\n\
     q / ctrl+c: quit"
}

fn truncate_label(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }
    if max_chars <= 1 {
        return value.chars().take(max_chars).collect();
    }
    let mut out = value.chars().take(max_chars - 1).collect::<String>();
    out.push('…');
    out
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

fn vertical_center(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    )
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use quien_app::{Person, SuggestionCache, WidgetCommand, WidgetEvent, WidgetState, chosen_title};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const NO_SELECTION_TITLE: &str = "No selected person";
const NO_MATCH_NOTICE: &str = "No matching suggestions";
const INPUT_PLACEHOLDER: &str = "Enter a part of the name";
const CURSOR_MARK: &str = "▏";

/// Events delivered to the loop thread from timer threads. Everything
/// that mutates widget state runs on the loop thread; timers only send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ApplyQuery { token: u64, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    suggestions: SuggestionCache,
    highlighted: usize,
}

pub fn run_app(state: &mut WidgetState, people: &[Person], debounce: Duration) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    view_data.suggestions.refresh(people, &state.applied_query);
    let (internal_tx, internal_rx) = mpsc::channel();

    let mut result = Ok(());
    loop {
        process_internal_events(
            state,
            people,
            &mut view_data,
            &internal_tx,
            &internal_rx,
            debounce,
        );

        if let Err(error) = terminal.draw(|frame| render(frame, state, people, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, people, &mut view_data, &internal_tx, debounce, key)
                    {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut WidgetState,
    people: &[Person],
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    internal_rx: &Receiver<InternalEvent>,
    debounce: Duration,
) {
    while let Ok(event) = internal_rx.try_recv() {
        handle_internal_event(state, people, view_data, internal_tx, debounce, event);
    }
}

fn handle_internal_event(
    state: &mut WidgetState,
    people: &[Person],
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    debounce: Duration,
    event: InternalEvent,
) -> Vec<WidgetEvent> {
    let emitted = match event {
        InternalEvent::ApplyQuery { token, value } => {
            state.dispatch(WidgetCommand::ApplyQuery { token, value })
        }
    };
    apply_widget_events(people, view_data, internal_tx, debounce, &emitted);
    emitted
}

/// Runs the side effects the state machine asked for: timer scheduling
/// for delayed applies and suggestion-cache refreshes on application.
fn apply_widget_events(
    people: &[Person],
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    debounce: Duration,
    events: &[WidgetEvent],
) {
    for event in events {
        match event {
            WidgetEvent::ApplyScheduled { token, value } => {
                schedule_apply(internal_tx, debounce, *token, value.clone());
            }
            WidgetEvent::QueryApplied(applied) => {
                view_data.suggestions.refresh(people, applied);
                view_data.highlighted = 0;
            }
            WidgetEvent::SelectionMade(_) | WidgetEvent::SelectionCleared => {}
        }
    }
}

/// The quiet-window timer. Fire-and-forget: a superseded timer still
/// sends, and the stale token is discarded inside `dispatch` on the loop
/// thread.
fn schedule_apply(internal_tx: &Sender<InternalEvent>, debounce: Duration, token: u64, value: String) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(debounce);
        let _ = sender.send(InternalEvent::ApplyQuery { token, value });
    });
}

fn handle_key_event(
    state: &mut WidgetState,
    people: &[Person],
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    debounce: Duration,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Down => move_highlight(state, view_data, 1),
        KeyCode::Up => move_highlight(state, view_data, -1),
        KeyCode::Enter => choose_highlighted(state, people, view_data, internal_tx, debounce),
        KeyCode::Backspace => {
            let mut text = state.raw_query.clone();
            text.pop();
            edit_query(state, people, view_data, internal_tx, debounce, text);
        }
        KeyCode::Char(character)
            if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
        {
            let mut text = state.raw_query.clone();
            text.push(character);
            edit_query(state, people, view_data, internal_tx, debounce, text);
        }
        _ => {}
    }
    false
}

fn edit_query(
    state: &mut WidgetState,
    people: &[Person],
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    debounce: Duration,
    text: String,
) {
    let emitted = state.dispatch(WidgetCommand::QueryEdited(text));
    apply_widget_events(people, view_data, internal_tx, debounce, &emitted);
}

fn choose_highlighted(
    state: &mut WidgetState,
    people: &[Person],
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    debounce: Duration,
) {
    if !dropdown_visible(state, view_data) {
        return;
    }
    let Some(name) = view_data.suggestions.name_at(people, view_data.highlighted) else {
        return;
    };
    let emitted = state.dispatch(WidgetCommand::SuggestionChosen(name.to_owned()));
    apply_widget_events(people, view_data, internal_tx, debounce, &emitted);
}

fn move_highlight(state: &WidgetState, view_data: &mut ViewData, delta: isize) {
    if !dropdown_visible(state, view_data) {
        return;
    }
    let len = view_data.suggestions.len() as isize;
    let current = view_data.highlighted as isize;
    view_data.highlighted = (current + delta).rem_euclid(len) as usize;
}

fn dropdown_visible(state: &WidgetState, view_data: &ViewData) -> bool {
    state.chosen_name.is_empty() && !view_data.suggestions.is_empty()
}

fn title_text(state: &WidgetState, people: &[Person]) -> String {
    if state.chosen_name.is_empty() {
        NO_SELECTION_TITLE.to_owned()
    } else {
        chosen_title(people, &state.chosen_name)
    }
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    state: &WidgetState,
    people: &[Person],
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let title = Paragraph::new(title_text(state, people))
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title("quien").borders(Borders::ALL));
    frame.render_widget(title, layout[0]);

    let input = if state.raw_query.is_empty() {
        Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(format!("{}{CURSOR_MARK}", state.raw_query))
    };
    frame.render_widget(
        input.block(Block::default().title("search").borders(Borders::ALL)),
        layout[1],
    );

    if view_data.suggestions.is_empty() {
        let notice = Paragraph::new(NO_MATCH_NOTICE)
            .style(Style::default().fg(Color::Red))
            .block(Block::default().title("suggestions").borders(Borders::ALL));
        frame.render_widget(notice, layout[2]);
    } else if dropdown_visible(state, view_data) {
        render_dropdown(frame, layout[2], people, view_data);
    } else {
        frame.render_widget(
            Block::default().title("suggestions").borders(Borders::ALL),
            layout[2],
        );
    }

    let status = Paragraph::new("up/down move, enter select, ctrl-q quit")
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[3]);
}

fn render_dropdown(
    frame: &mut ratatui::Frame<'_>,
    area: ratatui::layout::Rect,
    people: &[Person],
    view_data: &ViewData,
) {
    let rows: Vec<Row> = view_data
        .suggestions
        .indices()
        .iter()
        .enumerate()
        .map(|(position, index)| {
            let name = people
                .get(*index)
                .map(|person| person.name.clone())
                .unwrap_or_default();
            let style = if position == view_data.highlighted {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![Cell::from(name)]).style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(100)]).block(
        Block::default()
            .title(format!("suggestions ({})", view_data.suggestions.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

use crate::kanban_board::{KanbanBoard, ModalState};
use crate::surface::{BoardView, Card};
use crate::task::Column;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalField {
    #[default]
    Title,
    Description,
    Status,
}

impl ModalField {
    fn next(self) -> Self {
        match self {
            ModalField::Title => ModalField::Description,
            ModalField::Description => ModalField::Status,
            ModalField::Status => ModalField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            ModalField::Title => ModalField::Status,
            ModalField::Description => ModalField::Title,
            ModalField::Status => ModalField::Description,
        }
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub selected_column: usize,
    pub selected_card: usize,
    pub modal_field: ModalField,
    /// Scroll position of each column, kept between frames.
    lists: [ListState; 3],
}

impl UiState {
    fn column(&self) -> Column {
        Column::ALL[self.selected_column]
    }

    fn clamp_card(&mut self, view: &BoardView) {
        let len = view.cards(self.column()).len();
        self.selected_card = self.selected_card.min(len.saturating_sub(1));
    }

    fn select_task(&mut self, view: &BoardView, task_id: u32) {
        if let Some((column, row)) = view.card_position(task_id) {
            self.selected_column = column.index();
            self.selected_card = row;
        } else {
            self.clamp_card(view);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

struct BoardLayout {
    columns: [Rect; 3],
    modal: Rect,
}

fn board_layout(area: Rect) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    BoardLayout {
        columns: [chunks[0], chunks[1], chunks[2]],
        modal: centered_rect(60, 60, area),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn card_height(card: &Card) -> u16 {
    if card.description.is_some() {
        2
    } else {
        1
    }
}

/// Task id of the card drawn under `pos`, if any.
fn card_at(
    view: &BoardView,
    layout: &BoardLayout,
    state: &UiState,
    pos: Position,
) -> Option<u32> {
    let (column, rect) = Column::ALL
        .into_iter()
        .zip(layout.columns)
        .find(|(_, rect)| rect.contains(pos))?;

    let inner = Block::default().borders(Borders::ALL).inner(rect);
    if !inner.contains(pos) {
        return None;
    }

    let cards = view.cards(column);
    let offset = state.lists[column.index()]
        .offset()
        .min(cards.len().saturating_sub(1));
    let mut top = inner.y;
    for card in &cards[offset..] {
        let bottom = top + card_height(card);
        if pos.y < bottom {
            return Some(card.task_id);
        }
        top = bottom;
    }
    None
}

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    board: &mut KanbanBoard<BoardView>,
) -> io::Result<()> {
    let mut state = UiState::default();
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            draw(f, board, &mut state);
        })?;

        let flow = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key(board, &mut state, key)
            }
            Event::Mouse(mouse) => handle_mouse(board, &mut state, mouse, area),
            _ => Flow::Continue,
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

pub fn draw(f: &mut Frame, board: &KanbanBoard<BoardView>, state: &mut UiState) {
    let view = board.surface();
    let layout = board_layout(f.area());
    let modal_open = view.is_modal_visible();

    for column in Column::ALL {
        let focused = state.selected_column == column.index();
        let items: Vec<ListItem> = view
            .cards(column)
            .iter()
            .enumerate()
            .map(|(row, card)| {
                let selected = focused && row == state.selected_card && !modal_open;
                let title_style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let mut lines = vec![Line::from(vec![
                    Span::raw(format!("[#{}] ", card.task_id)),
                    Span::styled(card.title.clone(), title_style),
                ])];
                if let Some(description) = &card.description {
                    lines.push(Line::from(Span::styled(
                        format!("  {description}"),
                        Style::default().fg(Color::Gray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(view.header(column).to_string())
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                }),
        );
        let list_state = &mut state.lists[column.index()];
        list_state.select(focused.then_some(state.selected_card));
        f.render_stateful_widget(list, layout.columns[column.index()], list_state);
    }

    if let ModalState::Open(task_id) = board.modal_state() {
        draw_modal(f, board, state, task_id, layout.modal);
    }
}

fn draw_modal(
    f: &mut Frame,
    board: &KanbanBoard<BoardView>,
    state: &UiState,
    task_id: u32,
    area: Rect,
) {
    let read_only = board.options().read_only;
    let fields = board.surface().fields();

    let label = |field: ModalField, text: &'static str| {
        let style = if !read_only && state.modal_field == field {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::from(Span::styled(text, style))
    };
    let value = |field: ModalField, text: &str| {
        if !read_only && state.modal_field == field {
            Line::from(format!("{text}_"))
        } else {
            Line::from(text.to_string())
        }
    };

    let status = if read_only {
        fields.status.to_string()
    } else {
        format!("< {} >", fields.status)
    };
    let hint = if read_only {
        "Esc close"
    } else {
        "Enter save · Esc close · Tab next field"
    };
    let title = if read_only {
        format!(" Task #{task_id} ")
    } else {
        format!(" Edit task #{task_id} ")
    };

    let body = vec![
        label(ModalField::Title, "Title"),
        value(ModalField::Title, &fields.title),
        Line::from(""),
        label(ModalField::Description, "Description"),
        value(ModalField::Description, &fields.description),
        Line::from(""),
        label(ModalField::Status, "Status"),
        value(ModalField::Status, &status),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let dialog = Paragraph::new(body)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

pub fn handle_key(board: &mut KanbanBoard<BoardView>, state: &mut UiState, key: KeyEvent) -> Flow {
    if board.modal_state() != ModalState::Closed {
        handle_modal_key(board, state, key);
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Left | KeyCode::Char('h') => {
            if state.selected_column > 0 {
                state.selected_column -= 1;
                state.clamp_card(board.surface());
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if state.selected_column < Column::ALL.len() - 1 {
                state.selected_column += 1;
                state.clamp_card(board.surface());
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected_card = state.selected_card.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = board.surface().cards(state.column()).len();
            if state.selected_card + 1 < len {
                state.selected_card += 1;
            }
        }
        KeyCode::Enter => {
            let selected = board
                .surface()
                .cards(state.column())
                .get(state.selected_card)
                .map(|card| card.task_id);
            if let Some(task_id) = selected {
                state.modal_field = ModalField::Title;
                board.open_modal(task_id);
            }
        }
        _ => {}
    }
    Flow::Continue
}

fn handle_modal_key(board: &mut KanbanBoard<BoardView>, state: &mut UiState, key: KeyEvent) {
    let ModalState::Open(task_id) = board.modal_state() else {
        return;
    };

    match key.code {
        KeyCode::Esc => board.close_modal(),
        KeyCode::Enter => {
            board.save_task();
            state.select_task(board.surface(), task_id);
        }
        _ if board.options().read_only => {}
        KeyCode::Char(_)
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
        KeyCode::Tab => state.modal_field = state.modal_field.next(),
        KeyCode::BackTab => state.modal_field = state.modal_field.prev(),
        code => {
            let fields = board.surface_mut().fields_mut();
            match (state.modal_field, code) {
                (ModalField::Title, KeyCode::Char(c)) => fields.title.push(c),
                (ModalField::Title, KeyCode::Backspace) => {
                    fields.title.pop();
                }
                (ModalField::Description, KeyCode::Char(c)) => fields.description.push(c),
                (ModalField::Description, KeyCode::Backspace) => {
                    fields.description.pop();
                }
                (ModalField::Status, KeyCode::Right) => fields.status = fields.status.next(),
                (ModalField::Status, KeyCode::Left) => fields.status = fields.status.prev(),
                _ => {}
            }
        }
    }
}

pub fn handle_mouse(
    board: &mut KanbanBoard<BoardView>,
    state: &mut UiState,
    mouse: MouseEvent,
    area: Rect,
) -> Flow {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Flow::Continue;
    }

    let layout = board_layout(area);
    let pos = Position::new(mouse.column, mouse.row);

    if board.modal_state() != ModalState::Closed {
        if !layout.modal.contains(pos) {
            board.backdrop_click();
        }
        return Flow::Continue;
    }

    if let Some(task_id) = card_at(board.surface(), &layout, state, pos) {
        state.select_task(board.surface(), task_id);
        state.modal_field = ModalField::Title;
        board.open_modal(task_id);
    }
    Flow::Continue
}

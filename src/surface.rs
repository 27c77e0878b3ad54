//! The element tree the board draws into.
//!
//! [`Surface`] is everything the controller needs from a presentation layer.
//! [`BoardView`] is the in-memory implementation the terminal UI draws from.

use crate::task::{Column, Status, TaskId};

/// A rendered task as it sits in a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub task_id: TaskId,
    pub title: String,
    pub description: Option<String>,
}

/// Values held by the modal's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalFields {
    pub title: String,
    pub description: String,
    pub status: Status,
}

impl Default for ModalFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: Status::Todo,
        }
    }
}

pub trait Surface {
    fn clear_column(&mut self, column: Column);
    fn append_card(&mut self, column: Column, card: Card);
    fn set_header(&mut self, column: Column, text: String);
    fn show_modal(&mut self);
    fn hide_modal(&mut self);
    fn modal_fields(&self) -> ModalFields;
    fn set_modal_fields(&mut self, fields: ModalFields);
}

#[derive(Debug, Default)]
pub struct BoardView {
    columns: [Vec<Card>; 3],
    headers: [String; 3],
    modal_visible: bool,
    fields: ModalFields,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self, column: Column) -> &[Card] {
        &self.columns[column.index()]
    }

    pub fn header(&self, column: Column) -> &str {
        &self.headers[column.index()]
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn fields(&self) -> &ModalFields {
        &self.fields
    }

    /// Direct access to the modal inputs, as a user typing into them would have.
    pub fn fields_mut(&mut self) -> &mut ModalFields {
        &mut self.fields
    }

    /// Finds the column and row of the card carrying `task_id`.
    pub fn card_position(&self, task_id: TaskId) -> Option<(Column, usize)> {
        Column::ALL.into_iter().find_map(|column| {
            self.cards(column)
                .iter()
                .position(|card| card.task_id == task_id)
                .map(|row| (column, row))
        })
    }
}

impl Surface for BoardView {
    fn clear_column(&mut self, column: Column) {
        self.columns[column.index()].clear();
    }

    fn append_card(&mut self, column: Column, card: Card) {
        self.columns[column.index()].push(card);
    }

    fn set_header(&mut self, column: Column, text: String) {
        self.headers[column.index()] = text;
    }

    fn show_modal(&mut self) {
        self.modal_visible = true;
    }

    fn hide_modal(&mut self) {
        self.modal_visible = false;
    }

    fn modal_fields(&self) -> ModalFields {
        self.fields.clone()
    }

    fn set_modal_fields(&mut self, fields: ModalFields) {
        self.fields = fields;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(task_id: TaskId, title: &str) -> Card {
        Card {
            task_id,
            title: title.into(),
            description: None,
        }
    }

    #[test]
    fn card_position_finds_card_by_id() {
        let mut view = BoardView::new();
        view.append_card(Column::Todo, card(1, "a"));
        view.append_card(Column::Done, card(7, "b"));
        view.append_card(Column::Done, card(9, "c"));

        assert_eq!(view.card_position(9), Some((Column::Done, 1)));
        assert_eq!(view.card_position(1), Some((Column::Todo, 0)));
        assert_eq!(view.card_position(2), None);
    }

    #[test]
    fn clear_column_only_touches_that_column() {
        let mut view = BoardView::new();
        view.append_card(Column::Todo, card(1, "a"));
        view.append_card(Column::Doing, card(2, "b"));
        view.clear_column(Column::Todo);

        assert!(view.cards(Column::Todo).is_empty());
        assert_eq!(view.cards(Column::Doing).len(), 1);
    }

    #[test]
    fn modal_visibility_toggles() {
        let mut view = BoardView::new();
        assert!(!view.is_modal_visible());
        view.show_modal();
        assert!(view.is_modal_visible());
        view.hide_modal();
        assert!(!view.is_modal_visible());
    }
}

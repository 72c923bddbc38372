// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Collection browser view and table state management.
//!
//! This module provides a scrollable table over the full record library,
//! separating the persistent selection state from the transient widget view.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::CatalogEntry;

pub(crate) struct CollectionView {
    pub(crate) records: Vec<CatalogEntry>,
    pub(crate) table_state: TableState,
    pub(crate) is_active: bool,
}

impl CollectionView {
    pub(crate) fn new() -> Self {
        Self {
            records: vec![],
            table_state: TableState::new(),
            is_active: false,
        }
    }

    pub(crate) fn set_records(&mut self, records: Vec<CatalogEntry>) {
        self.records = records;
        self.table_state = TableState::new();
        self.ensure_table_selection();
    }

    pub(crate) fn ensure_table_selection(&mut self) {
        if self.table_state.selected().is_none() && !self.records.is_empty() {
            self.table_state.select(Some(0));
        }
    }
}

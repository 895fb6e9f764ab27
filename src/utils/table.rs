//! Table rendering utilities for CLI outputs.

use crate::models::record::Record;
use crate::models::slot::Slot;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Widen columns so every cell fits.
    fn fit(&mut self) {
        for row in &self.rows {
            for (col, cell) in self.columns.iter_mut().zip(row) {
                col.width = col.width.max(cell.chars().count());
            }
        }
    }

    pub fn render(&mut self) -> String {
        self.fit();
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
            out.push('\n');
        }

        out
    }
}

/// One line per record: id, name, date, then every slot in display order.
pub fn records_table(records: &[Record]) -> Table {
    let mut columns = vec![
        Column {
            header: "ID".into(),
            width: 4,
        },
        Column {
            header: "NAME".into(),
            width: 8,
        },
        Column {
            header: "DATE".into(),
            width: 10,
        },
    ];
    columns.extend(Slot::ALL.iter().map(|s| Column {
        header: s.label().to_string(),
        width: s.label().len(),
    }));

    let mut table = Table::new(columns);
    for r in records {
        let mut row = vec![r.id.to_string(), r.person.clone(), r.date.clone()];
        row.extend(r.slots().iter().map(|s| s.to_string()));
        table.add_row(row);
    }
    table
}

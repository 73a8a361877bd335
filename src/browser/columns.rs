// SPDX-License-Identifier: MPL-2.0
//! Column descriptors and row records.
//!
//! A [`ColumnDescriptor`] tells both views how one field is labeled,
//! aligned and sized. A [`Record`] is one renderable unit of the
//! collection: an ordered field map keyed by [`ColumnId`], a mandatory
//! [`RecordId`] and optional trailing row actions supplied by the caller.

use chrono::{DateTime, Utc};
use std::fmt;

/// Identifier of one column, matching a key present in every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnId(&'static str);

impl ColumnId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Column injected into the card-bar "order by" dropdown when the caller
/// declares no timestamp column of their own.
pub const UPDATED_AT: ColumnId = ColumnId::new("updated_at");

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Metadata describing how one field renders across both views.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub label: String,
    /// Explicit alignment; when absent the first column is left-aligned
    /// and later columns right-aligned.
    pub align: Option<Align>,
    pub numeric: bool,
    /// Fixed width in logical pixels; fills available space when absent.
    pub width: Option<f32>,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(id: ColumnId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            align: None,
            numeric: false,
            width: None,
        }
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Alignment for this column at position `index` in the descriptor
    /// sequence, applying the first-column-is-row-header default.
    #[must_use]
    pub fn effective_align(&self, index: usize) -> Align {
        self.align
            .unwrap_or(if index == 0 { Align::Left } else { Align::Right })
    }
}

/// Stable identifier of one record, used for selection and click targets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One renderable field value.
///
/// Text renders as plain text; the other variants carry enough type
/// information for the views to format them (and for callers to sort on
/// them) without falling back to stringly-typed maps.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl CellValue {
    /// Display form used by both views.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Float(x) => format!("{x:.2}"),
            CellValue::Bool(true) => "yes".to_string(),
            CellValue::Bool(false) => "no".to_string(),
            CellValue::Timestamp(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Timestamp(value)
    }
}

/// A caller-described per-row action rendered in the trailing `actions`
/// slot. The browser only draws the glyph and forwards the press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    /// Stable key reported back through `Effect::RowAction`.
    pub id: &'static str,
    /// Tooltip label.
    pub label: String,
    /// Short glyph shown on the button.
    pub icon: String,
}

impl RowAction {
    #[must_use]
    pub fn new(id: &'static str, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// One row of the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    fields: Vec<(ColumnId, CellValue)>,
    pub actions: Vec<RowAction>,
}

impl Record {
    #[must_use]
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: Vec::new(),
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, column: ColumnId, value: impl Into<CellValue>) -> Self {
        self.fields.push((column, value.into()));
        self
    }

    #[must_use]
    pub fn action(mut self, action: RowAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Value for `column`, if the record carries it.
    #[must_use]
    pub fn get(&self, column: ColumnId) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(id, _)| *id == column)
            .map(|(_, v)| v)
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[(ColumnId, CellValue)] {
        &self.fields
    }
}

//! Shared fixtures for the table tests.

#![allow(dead_code)]

use listing::{Align, CellKind, CellValue, Column, QuerySnapshot, Row, RowId};

#[derive(Debug, Clone)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub status: &'static str,
    pub age: u32,
}

impl Row for User {
    fn id(&self) -> RowId {
        self.id.to_string()
    }

    fn field(&self, name: &str) -> CellValue {
        match name {
            "name" => self.name.as_str().into(),
            "email" => format!("user{}@example.com", self.id).into(),
            "status" => self.status.into(),
            "age" => self.age.into(),
            _ => CellValue::Empty,
        }
    }
}

pub fn user(id: u32) -> User {
    const STATUSES: [&str; 3] = ["Active", "Inactive", "Pending"];
    User {
        id,
        name: format!("User {}", id),
        status: STATUSES[(id as usize - 1) % STATUSES.len()],
        age: 20 + (id % 30),
    }
}

/// Rows `first..first + count`, as one page of a data source.
pub fn page(first: u32, count: u32) -> Vec<User> {
    (first..first + count).map(user).collect()
}

pub fn ready(first: u32, count: u32, total: usize) -> QuerySnapshot<User> {
    QuerySnapshot::ready(page(first, count), total)
}

pub fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
        Column::new("status", "Status")
            .sortable()
            .kind(CellKind::Status)
            .align(Align::Right),
        Column::new("age", "Age").sortable().align(Align::Right),
    ]
}

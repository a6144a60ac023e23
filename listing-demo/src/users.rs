//! The mock user dataset.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use listing::{
    Align, CellKind, CellValue, Column, Decoration, Row, RowId, SortState, TableConfig,
};

/// Number of users in the dataset.
pub const USER_COUNT: u32 = 187;

const ROLES: [&str; 3] = ["Admin", "Editor", "Viewer"];
const STATUSES: [&str; 3] = ["Active", "Inactive", "Pending"];
const DEPARTMENTS: [&str; 4] = ["HR", "Engineering", "Marketing", "Sales"];

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub status: &'static str,
    pub department: &'static str,
    pub age: u32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The `n`th user, counting from zero. Each one was created a day before
    /// the previous one.
    pub fn nth(n: u32, now: DateTime<Utc>) -> Self {
        let i = n as usize;
        let id = n + 1;
        Self {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            role: ROLES[i % ROLES.len()],
            status: STATUSES[i % STATUSES.len()],
            department: DEPARTMENTS[i % DEPARTMENTS.len()],
            age: 20 + n % 30,
            created_at: now - Duration::days(i64::from(n)),
        }
    }
}

impl Row for User {
    fn id(&self) -> RowId {
        self.id.to_string()
    }

    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.into(),
            "status" => self.status.into(),
            "department" => self.department.into(),
            "age" => self.age.into(),
            // ISO-8601 sorts chronologically as text.
            "created_at" => self
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true)
                .into(),
            _ => CellValue::Empty,
        }
    }
}

/// All users, the newest created at `now`.
pub fn mock_users(now: DateTime<Utc>) -> Vec<User> {
    (0..USER_COUNT).map(|n| User::nth(n, now)).collect()
}

pub fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
        Column::new("role", "Role")
            .sortable()
            .kind(CellKind::Role)
            .align(Align::Right),
        Column::new("status", "Status")
            .sortable()
            .kind(CellKind::Status)
            .align(Align::Right),
        Column::new("department", "Department")
            .sortable()
            .kind(CellKind::Department),
        Column::new("age", "Age").sortable().align(Align::Right),
        Column::computed("created_at", "Created At", |user: &User| {
            user.created_at.format("%Y-%m-%d").to_string().into()
        })
        .sortable()
        .align(Align::Right),
    ]
}

pub fn table_config() -> TableConfig {
    TableConfig::new()
        .selectable(true)
        .sort(SortState::asc("name"))
        .header(
            Decoration::new("Premium Users")
                .subtitle("Manage your premium user accounts and permissions.")
                .badge("Premium"),
        )
        .footer(Decoration::new(
            "←/→ page  g/G ends  [/] size  1-9 sort  space select  a all  c clear  r reload  e fail  q quit",
        ))
}

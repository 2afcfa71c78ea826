use sqlx::FromRow;

/// Row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub second_name: String,
    pub email: String,
    pub phone: String,
    pub birth: String,
    pub notes: String,
}

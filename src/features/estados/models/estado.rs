use sqlx::FromRow;

/// Database model for an estado row.
///
/// The id is absent until the row is first persisted; the repository assigns
/// it on insert.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Estado {
    pub id: Option<i64>,
    pub nome: Option<String>,
}

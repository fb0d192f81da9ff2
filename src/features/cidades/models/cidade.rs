use sqlx::FromRow;

/// Foreign-key reference to an estado, carrying only the id.
///
/// Kept distinct from a loaded `Estado` so an unresolved reference can never
/// be mistaken for a row with valid non-id fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstadoRef {
    pub id: i64,
}

/// Domain entity for a cidade, as written to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cidade {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub estado: Option<EstadoRef>,
}

/// Row produced by cidade read queries, with the estado name joined in.
///
/// `estado_nome` exists only on this read path; it is never written back.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CidadeRow {
    pub id: i64,
    pub nome: Option<String>,
    pub estado_id: Option<i64>,
    pub estado_nome: Option<String>,
}

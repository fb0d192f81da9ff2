use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire-format projection of a cidade.
///
/// `estado_nome` is read-only: it is populated from the referenced estado
/// when reading and ignored on writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CidadeDto {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub estado_id: Option<i64>,
    pub estado_nome: Option<String>,
}

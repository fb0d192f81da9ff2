use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire-format projection of an estado.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EstadoDto {
    pub id: Option<i64>,
    pub nome: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_absent_fields_as_null() {
        let dto = EstadoDto {
            id: Some(1),
            nome: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "nome": null}));
    }
}

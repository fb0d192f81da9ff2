use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A pessoa row, exposed directly on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pessoa {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub documento: Option<String>,
    pub idade: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_equals_storage_format() {
        let pessoa = Pessoa {
            id: Some(1),
            nome: Some("AAAAA".to_string()),
            documento: Some("AAAAA".to_string()),
            idade: Some(1),
        };
        let json = serde_json::to_value(&pessoa).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "nome": "AAAAA",
                "documento": "AAAAA",
                "idade": 1
            })
        );
    }

    #[test]
    fn missing_wire_fields_deserialize_to_none() {
        let pessoa: Pessoa = serde_json::from_str("{\"nome\":\"AAAAA\"}").unwrap();
        assert_eq!(pessoa.id, None);
        assert_eq!(pessoa.documento, None);
        assert_eq!(pessoa.idade, None);
    }
}

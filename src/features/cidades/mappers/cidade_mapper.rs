use crate::features::cidades::dtos::CidadeDto;
use crate::features::cidades::models::{Cidade, CidadeRow, EstadoRef};

/// Explicit conversions between Cidade, its read rows, and the wire DTO.
#[derive(Debug, Clone, Copy, Default)]
pub struct CidadeMapper;

impl CidadeMapper {
    /// Map a freshly persisted entity.
    ///
    /// The entity only holds the estado reference by id, so `estado_nome`
    /// stays absent here; read responses resolve it via `row_to_dto`.
    pub fn to_dto(&self, cidade: &Cidade) -> CidadeDto {
        CidadeDto {
            id: cidade.id,
            nome: cidade.nome.clone(),
            estado_id: cidade.estado.map(|e| e.id),
            estado_nome: None,
        }
    }

    /// Map a read-path row, which carries the joined estado name.
    pub fn row_to_dto(&self, row: &CidadeRow) -> CidadeDto {
        CidadeDto {
            id: Some(row.id),
            nome: row.nome.clone(),
            estado_id: row.estado_id,
            estado_nome: row.estado_nome.clone(),
        }
    }

    /// Rebuild the entity from the wire format.
    ///
    /// The estado reference is reconstructed from `estado_id` alone; a
    /// client-supplied `estado_nome` is discarded.
    pub fn to_entity(&self, dto: &CidadeDto) -> Cidade {
        Cidade {
            id: dto.id,
            nome: dto.nome.clone(),
            estado: dto.estado_id.map(|id| EstadoRef { id }),
        }
    }

    pub fn rows_to_dtos(&self, rows: &[CidadeRow]) -> Vec<CidadeDto> {
        rows.iter().map(|r| self.row_to_dto(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_entity_keeps_only_the_estado_id() {
        let dto = CidadeDto {
            id: Some(10),
            nome: Some("Ouro Preto".to_string()),
            estado_id: Some(2),
            estado_nome: Some("made up by the client".to_string()),
        };
        let cidade = CidadeMapper.to_entity(&dto);
        assert_eq!(cidade.estado, Some(EstadoRef { id: 2 }));
    }

    #[test]
    fn dto_round_trip_reproduces_the_entity() {
        let cidade = Cidade {
            id: Some(10),
            nome: Some("Ouro Preto".to_string()),
            estado: Some(EstadoRef { id: 2 }),
        };
        let mapper = CidadeMapper;
        assert_eq!(mapper.to_entity(&mapper.to_dto(&cidade)), cidade);
    }

    #[test]
    fn entity_round_trip_preserves_scalars_but_drops_estado_nome() {
        let dto = CidadeDto {
            id: Some(10),
            nome: Some("Ouro Preto".to_string()),
            estado_id: Some(2),
            estado_nome: Some("Minas Gerais".to_string()),
        };
        let mapper = CidadeMapper;
        let round_tripped = mapper.to_dto(&mapper.to_entity(&dto));
        assert_eq!(round_tripped.id, dto.id);
        assert_eq!(round_tripped.nome, dto.nome);
        assert_eq!(round_tripped.estado_id, dto.estado_id);
        assert_eq!(round_tripped.estado_nome, None);
    }

    #[test]
    fn absent_estado_maps_to_absent_id_and_nome() {
        let cidade = Cidade {
            id: Some(1),
            nome: Some("Brasília".to_string()),
            estado: None,
        };
        let dto = CidadeMapper.to_dto(&cidade);
        assert_eq!(dto.estado_id, None);
        assert_eq!(dto.estado_nome, None);
    }

    #[test]
    fn row_mapping_carries_the_joined_estado_nome() {
        let row = CidadeRow {
            id: 1,
            nome: Some("Belo Horizonte".to_string()),
            estado_id: Some(2),
            estado_nome: Some("Minas Gerais".to_string()),
        };
        let dto = CidadeMapper.row_to_dto(&row);
        assert_eq!(dto.estado_nome.as_deref(), Some("Minas Gerais"));
    }

    #[test]
    fn row_list_mapping_preserves_order_and_length() {
        let rows = vec![
            CidadeRow {
                id: 1,
                nome: Some("a".to_string()),
                estado_id: None,
                estado_nome: None,
            },
            CidadeRow {
                id: 2,
                nome: Some("b".to_string()),
                estado_id: None,
                estado_nome: None,
            },
        ];
        let dtos = CidadeMapper.rows_to_dtos(&rows);
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].id, Some(1));
        assert_eq!(dtos[1].id, Some(2));

        assert!(CidadeMapper.rows_to_dtos(&[]).is_empty());
    }
}

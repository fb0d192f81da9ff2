use crate::features::estados::dtos::EstadoDto;
use crate::features::estados::models::Estado;

/// Explicit field-by-field conversion between Estado and its DTO.
///
/// Stateless; handler state carries one so the wiring in `main` stays
/// explicit.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstadoMapper;

impl EstadoMapper {
    pub fn to_dto(&self, estado: &Estado) -> EstadoDto {
        EstadoDto {
            id: estado.id,
            nome: estado.nome.clone(),
        }
    }

    pub fn to_entity(&self, dto: &EstadoDto) -> Estado {
        Estado {
            id: dto.id,
            nome: dto.nome.clone(),
        }
    }

    pub fn to_dtos(&self, estados: &[Estado]) -> Vec<EstadoDto> {
        estados.iter().map(|e| self.to_dto(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_all_fields() {
        let estado = Estado {
            id: Some(3),
            nome: Some("Minas Gerais".to_string()),
        };
        let mapper = EstadoMapper;
        assert_eq!(mapper.to_entity(&mapper.to_dto(&estado)), estado);
    }

    #[test]
    fn list_mapping_preserves_order_and_length() {
        let estados = vec![
            Estado {
                id: Some(1),
                nome: Some("Acre".to_string()),
            },
            Estado {
                id: Some(2),
                nome: None,
            },
        ];
        let dtos = EstadoMapper.to_dtos(&estados);
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].id, Some(1));
        assert_eq!(dtos[1].nome, None);

        assert!(EstadoMapper.to_dtos(&[]).is_empty());
    }
}

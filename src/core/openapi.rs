use utoipa::{Modify, OpenApi};

use crate::features::cidades::{dtos as cidades_dtos, handlers as cidades_handlers};
use crate::features::estados::{dtos as estados_dtos, handlers as estados_handlers};
use crate::features::pessoas::{handlers as pessoas_handlers, models as pessoas_models};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Cidades
        cidades_handlers::create_cidade,
        cidades_handlers::update_cidade,
        cidades_handlers::get_all_cidades,
        cidades_handlers::get_cidade,
        cidades_handlers::delete_cidade,
        // Estados
        estados_handlers::create_estado,
        estados_handlers::update_estado,
        estados_handlers::get_all_estados,
        estados_handlers::get_estado,
        estados_handlers::delete_estado,
        // Pessoas
        pessoas_handlers::create_pessoa,
        pessoas_handlers::update_pessoa,
        pessoas_handlers::get_all_pessoas,
        pessoas_handlers::get_pessoa,
        pessoas_handlers::delete_pessoa,
    ),
    components(
        schemas(
            cidades_dtos::CidadeDto,
            estados_dtos::EstadoDto,
            pessoas_models::Pessoa,
        )
    ),
    tags(
        (name = "cidades", description = "Cidade management"),
        (name = "estados", description = "Estado management"),
        (name = "pessoas", description = "Pessoa management"),
    ),
    info(
        title = "Cadastro API",
        version = "0.1.0",
        description = "CRUD API for cidades, estados and pessoas",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

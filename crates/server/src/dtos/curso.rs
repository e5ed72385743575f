use super::common::PaginationMeta;
use database::services::{AtualizacaoCurso, NovoCurso};
use models::{CategoriaCurso, Curso, NivelCurso, StatusCurso};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CursoCreateRequest {
    pub nome: String,
    pub descricao: String,
    pub carga_horaria_total: i32,
    pub duracao_meses: i32,
    #[schema(value_type = Option<String>, example = "INTERMEDIARIO")]
    pub nivel: Option<NivelCurso>,
    #[schema(value_type = String, example = "TECNOLOGIA")]
    pub categoria: CategoriaCurso,
}

impl From<CursoCreateRequest> for NovoCurso {
    fn from(req: CursoCreateRequest) -> Self {
        NovoCurso {
            nome: req.nome,
            descricao: req.descricao,
            carga_horaria_total: req.carga_horaria_total,
            duracao_meses: req.duracao_meses,
            nivel: req.nivel,
            categoria: req.categoria,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CursoUpdateRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub carga_horaria_total: Option<i32>,
    pub duracao_meses: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub nivel: Option<NivelCurso>,
    #[schema(value_type = Option<String>)]
    pub categoria: Option<CategoriaCurso>,
}

impl From<CursoUpdateRequest> for AtualizacaoCurso {
    fn from(req: CursoUpdateRequest) -> Self {
        AtualizacaoCurso {
            nome: req.nome,
            descricao: req.descricao,
            carga_horaria_total: req.carga_horaria_total,
            duracao_meses: req.duracao_meses,
            nivel: req.nivel,
            categoria: req.categoria,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CursoResponse {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,
    pub carga_horaria_total: i32,
    pub duracao_meses: i32,
    #[schema(value_type = String, example = "BASICO")]
    pub nivel: NivelCurso,
    #[schema(value_type = String, example = "TECNOLOGIA")]
    pub categoria: CategoriaCurso,
    #[schema(value_type = String, example = "ATIVO")]
    pub status: StatusCurso,
    pub professores: Vec<Uuid>,
}

impl From<Curso> for CursoResponse {
    fn from(curso: Curso) -> Self {
        Self {
            id: curso.id(),
            nome: curso.nome().to_owned(),
            descricao: curso.descricao().to_owned(),
            carga_horaria_total: curso.carga_horaria_total(),
            duracao_meses: curso.duracao_meses(),
            nivel: curso.nivel(),
            categoria: curso.categoria(),
            status: curso.status(),
            professores: curso.professores().to_vec(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCursosResponse {
    pub items: Vec<CursoResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CargaHorariaQuery {
    pub min: i32,
    pub max: i32,
}

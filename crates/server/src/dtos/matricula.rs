use super::common::PaginationMeta;
use chrono::NaiveDate;
use database::services::{MatriculaCompleta, NovaMatricula};
use models::{MotivoCancelamento, StatusMatricula};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MatriculaCreateRequest {
    pub aluno_id: Uuid,
    pub curso_id: Uuid,
    pub turma_id: Option<Uuid>,
    pub data_matricula: Option<NaiveDate>,
}

impl From<MatriculaCreateRequest> for NovaMatricula {
    fn from(req: MatriculaCreateRequest) -> Self {
        NovaMatricula {
            aluno_id: req.aluno_id,
            curso_id: req.curso_id,
            turma_id: req.turma_id,
            data_matricula: req.data_matricula,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ConcluirMatriculaRequest {
    /// 0 to 10, at least 7 to pass
    pub nota_final: Option<f64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CancelarMatriculaRequest {
    #[schema(value_type = Option<String>, example = "DESISTENCIA")]
    pub motivo: Option<MotivoCancelamento>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MatriculaBuscaQuery {
    pub nome_aluno: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatriculaResponse {
    pub id: Uuid,
    pub aluno_id: Uuid,
    pub nome_aluno: String,
    pub curso_id: Uuid,
    pub nome_curso: String,
    pub turma_id: Option<Uuid>,
    pub codigo_turma: Option<String>,
    pub data_matricula: NaiveDate,
    pub data_conclusao: Option<NaiveDate>,
    pub nota_final: Option<f64>,
    #[schema(value_type = String, example = "ATIVA")]
    pub status: StatusMatricula,
    #[schema(value_type = Option<String>)]
    pub motivo_cancelamento: Option<MotivoCancelamento>,
}

impl From<MatriculaCompleta> for MatriculaResponse {
    fn from((matricula, aluno, curso, turma): MatriculaCompleta) -> Self {
        Self {
            id: matricula.id(),
            aluno_id: matricula.aluno_id(),
            nome_aluno: aluno.nome().to_owned(),
            curso_id: matricula.curso_id(),
            nome_curso: curso.nome().to_owned(),
            turma_id: matricula.turma_id(),
            codigo_turma: turma.map(|t| t.codigo().to_owned()),
            data_matricula: matricula.data_matricula(),
            data_conclusao: matricula.data_conclusao(),
            nota_final: matricula.nota_final(),
            status: matricula.status(),
            motivo_cancelamento: matricula.motivo_cancelamento(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedMatriculasResponse {
    pub items: Vec<MatriculaResponse>,
    pub pagination: PaginationMeta,
}

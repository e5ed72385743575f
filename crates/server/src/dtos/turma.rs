use super::common::PaginationMeta;
use chrono::{NaiveDate, NaiveTime};
use database::services::{AtualizacaoTurma, NovaTurma};
use models::{Modalidade, StatusTurma, Turma};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TurmaCreateRequest {
    pub codigo: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    #[schema(value_type = String, example = "19:00:00")]
    pub horario_inicio: NaiveTime,
    #[schema(value_type = String, example = "22:00:00")]
    pub horario_fim: NaiveTime,
    pub vagas_totais: i32,
    #[schema(value_type = String, example = "PRESENCIAL")]
    pub modalidade: Modalidade,
    pub professor_id: Option<Uuid>,
    pub curso_id: Option<Uuid>,
}

impl From<TurmaCreateRequest> for NovaTurma {
    fn from(req: TurmaCreateRequest) -> Self {
        NovaTurma {
            codigo: req.codigo,
            data_inicio: req.data_inicio,
            data_fim: req.data_fim,
            horario_inicio: req.horario_inicio,
            horario_fim: req.horario_fim,
            vagas_totais: req.vagas_totais,
            modalidade: req.modalidade,
            professor_id: req.professor_id,
            curso_id: req.curso_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TurmaUpdateRequest {
    pub codigo: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub horario_inicio: Option<NaiveTime>,
    #[schema(value_type = Option<String>)]
    pub horario_fim: Option<NaiveTime>,
    pub vagas_totais: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub modalidade: Option<Modalidade>,
}

impl From<TurmaUpdateRequest> for AtualizacaoTurma {
    fn from(req: TurmaUpdateRequest) -> Self {
        AtualizacaoTurma {
            codigo: req.codigo,
            data_inicio: req.data_inicio,
            data_fim: req.data_fim,
            horario_inicio: req.horario_inicio,
            horario_fim: req.horario_fim,
            vagas_totais: req.vagas_totais,
            modalidade: req.modalidade,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TurmaResponse {
    pub id: Uuid,
    pub codigo: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    #[schema(value_type = String)]
    pub horario_inicio: NaiveTime,
    #[schema(value_type = String)]
    pub horario_fim: NaiveTime,
    pub vagas_totais: i32,
    pub vagas_disponiveis: i32,
    #[schema(value_type = String, example = "PRESENCIAL")]
    pub modalidade: Modalidade,
    #[schema(value_type = String, example = "ABERTA")]
    pub status: StatusTurma,
    pub professor_id: Option<Uuid>,
    pub curso_id: Option<Uuid>,
    pub matriculas: Vec<Uuid>,
}

impl From<Turma> for TurmaResponse {
    fn from(turma: Turma) -> Self {
        Self {
            id: turma.id(),
            codigo: turma.codigo().to_owned(),
            data_inicio: turma.data_inicio(),
            data_fim: turma.data_fim(),
            horario_inicio: turma.horario_inicio(),
            horario_fim: turma.horario_fim(),
            vagas_totais: turma.vagas_totais(),
            vagas_disponiveis: turma.vagas_disponiveis(),
            modalidade: turma.modalidade(),
            status: turma.status(),
            professor_id: turma.professor_id(),
            curso_id: turma.curso_id(),
            matriculas: turma.matriculas().to_vec(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedTurmasResponse {
    pub items: Vec<TurmaResponse>,
    pub pagination: PaginationMeta,
}

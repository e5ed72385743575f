use super::common::{EnderecoDto, PaginationMeta};
use chrono::NaiveDate;
use database::services::{AtualizacaoProfessor, NovoProfessor};
use models::{Modalidade, Professor, StatusProfessor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfessorCreateRequest {
    pub nome: String,
    pub email: String,
    pub data_nascimento: NaiveDate,
    pub telefone: String,
    pub cpf: String,
    #[schema(value_type = String, example = "EAD")]
    pub modalidade: Modalidade,
    pub endereco: Option<EnderecoDto>,
}

impl From<ProfessorCreateRequest> for NovoProfessor {
    fn from(req: ProfessorCreateRequest) -> Self {
        NovoProfessor {
            nome: req.nome,
            email: req.email,
            data_nascimento: req.data_nascimento,
            telefone: req.telefone,
            cpf: req.cpf,
            modalidade: req.modalidade,
            endereco: req.endereco.map(Into::into),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProfessorUpdateRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub telefone: Option<String>,
    #[schema(value_type = Option<String>, example = "AFASTADO")]
    pub status: Option<StatusProfessor>,
    #[schema(value_type = Option<String>, example = "HIBRIDO")]
    pub modalidade: Option<Modalidade>,
    pub endereco: Option<EnderecoDto>,
}

impl From<ProfessorUpdateRequest> for AtualizacaoProfessor {
    fn from(req: ProfessorUpdateRequest) -> Self {
        AtualizacaoProfessor {
            nome: req.nome,
            email: req.email,
            data_nascimento: req.data_nascimento,
            telefone: req.telefone,
            status: req.status,
            modalidade: req.modalidade,
            endereco: req.endereco.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorResponse {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub data_nascimento: NaiveDate,
    pub telefone: String,
    pub cpf: String,
    #[schema(value_type = String, example = "EAD")]
    pub modalidade: Modalidade,
    pub endereco: Option<EnderecoDto>,
    #[schema(value_type = String, example = "ATIVO")]
    pub status: StatusProfessor,
}

impl From<Professor> for ProfessorResponse {
    fn from(professor: Professor) -> Self {
        Self {
            id: professor.id(),
            nome: professor.nome().to_owned(),
            email: professor.email().to_owned(),
            data_nascimento: professor.data_nascimento(),
            telefone: professor.telefone().to_owned(),
            cpf: professor.cpf().to_owned(),
            modalidade: professor.modalidade(),
            endereco: professor.endereco().map(EnderecoDto::from),
            status: professor.status(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedProfessoresResponse {
    pub items: Vec<ProfessorResponse>,
    pub pagination: PaginationMeta,
}

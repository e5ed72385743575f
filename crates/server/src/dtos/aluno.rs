use super::common::{EnderecoDto, PaginationMeta, default_page, default_per_page};
use chrono::NaiveDate;
use database::services::{AtualizacaoAluno, NovoAluno};
use models::{Aluno, StatusAluno};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AlunoCreateRequest {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub endereco: Option<EnderecoDto>,
}

impl From<AlunoCreateRequest> for NovoAluno {
    fn from(req: AlunoCreateRequest) -> Self {
        NovoAluno {
            nome: req.nome,
            email: req.email,
            telefone: req.telefone,
            cpf: req.cpf,
            data_nascimento: req.data_nascimento,
            endereco: req.endereco.map(Into::into),
        }
    }
}

/// Absent fields are left unchanged
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AlunoUpdateRequest {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "ATIVO")]
    pub status: Option<StatusAluno>,
    pub endereco: Option<EnderecoDto>,
}

impl From<AlunoUpdateRequest> for AtualizacaoAluno {
    fn from(req: AlunoUpdateRequest) -> Self {
        AtualizacaoAluno {
            nome: req.nome,
            email: req.email,
            telefone: req.telefone,
            data_nascimento: req.data_nascimento,
            status: req.status,
            endereco: req.endereco.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlunoResponse {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub endereco: Option<EnderecoDto>,
    #[schema(value_type = String, example = "ATIVO")]
    pub status: StatusAluno,
}

impl From<Aluno> for AlunoResponse {
    fn from(aluno: Aluno) -> Self {
        Self {
            id: aluno.id(),
            nome: aluno.nome().to_owned(),
            email: aluno.email().to_owned(),
            telefone: aluno.telefone().to_owned(),
            cpf: aluno.cpf().to_owned(),
            data_nascimento: aluno.data_nascimento(),
            endereco: aluno.endereco().map(EnderecoDto::from),
            status: aluno.status(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedAlunosResponse {
    pub items: Vec<AlunoResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AlunoQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    /// ATIVO, INATIVO or CANCELADO
    #[param(value_type = Option<String>)]
    pub status: Option<StatusAluno>,
}

use crate::endereco::Endereco;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusAluno {
    #[cfg_attr(feature = "database", sea_orm(string_value = "ATIVO"))]
    Ativo,
    #[cfg_attr(feature = "database", sea_orm(string_value = "INATIVO"))]
    Inativo,
    #[cfg_attr(feature = "database", sea_orm(string_value = "CANCELADO"))]
    Cancelado,
}

/// A student. Never physically removed: [`Aluno::excluir`] flips the status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aluno {
    id: Uuid,
    nome: String,
    email: String,
    telefone: String,
    cpf: String,
    data_nascimento: NaiveDate,
    endereco: Option<Endereco>,
    status: StatusAluno,
}

impl Aluno {
    pub fn new(
        nome: String,
        email: String,
        telefone: String,
        cpf: String,
        data_nascimento: NaiveDate,
        endereco: Option<Endereco>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            nome,
            email,
            telefone,
            cpf,
            data_nascimento,
            endereco,
            status: StatusAluno::Ativo,
        }
    }

    /// Rebuilds a student from stored state, bypassing creation defaults
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        nome: String,
        email: String,
        telefone: String,
        cpf: String,
        data_nascimento: NaiveDate,
        endereco: Option<Endereco>,
        status: StatusAluno,
    ) -> Self {
        Self {
            id,
            nome,
            email,
            telefone,
            cpf,
            data_nascimento,
            endereco,
            status,
        }
    }

    /// Overwrites every field given as `Some`; `None` leaves it unchanged
    pub fn atualizar(
        &mut self,
        nome: Option<String>,
        email: Option<String>,
        telefone: Option<String>,
        data_nascimento: Option<NaiveDate>,
        status: Option<StatusAluno>,
        endereco: Option<Endereco>,
    ) {
        if let Some(nome) = nome {
            self.nome = nome;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(telefone) = telefone {
            self.telefone = telefone;
        }
        if let Some(data_nascimento) = data_nascimento {
            self.data_nascimento = data_nascimento;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(endereco) = endereco {
            self.endereco = Some(endereco);
        }
    }

    /// Soft delete
    pub fn excluir(&mut self) {
        self.status = StatusAluno::Inativo;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn telefone(&self) -> &str {
        &self.telefone
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn data_nascimento(&self) -> NaiveDate {
        self.data_nascimento
    }

    pub fn endereco(&self) -> Option<&Endereco> {
        self.endereco.as_ref()
    }

    pub fn status(&self) -> StatusAluno {
        self.status
    }

    pub fn is_ativo(&self) -> bool {
        self.status == StatusAluno::Ativo
    }
}

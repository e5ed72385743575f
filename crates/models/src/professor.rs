use crate::{
    endereco::Endereco,
    error::{ValidationError, ValidationResult},
    modalidade::Modalidade,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusProfessor {
    #[cfg_attr(feature = "database", sea_orm(string_value = "ATIVO"))]
    Ativo,
    #[cfg_attr(feature = "database", sea_orm(string_value = "INATIVO"))]
    Inativo,
    /// On leave
    #[cfg_attr(feature = "database", sea_orm(string_value = "AFASTADO"))]
    Afastado,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Professor {
    id: Uuid,
    nome: String,
    email: String,
    data_nascimento: NaiveDate,
    telefone: String,
    cpf: String,
    modalidade: Modalidade,
    endereco: Option<Endereco>,
    status: StatusProfessor,
}

impl Professor {
    pub fn new(
        nome: String,
        email: String,
        data_nascimento: NaiveDate,
        telefone: String,
        cpf: String,
        modalidade: Modalidade,
        endereco: Option<Endereco>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            nome,
            email,
            data_nascimento,
            telefone,
            cpf,
            modalidade,
            endereco,
            status: StatusProfessor::Ativo,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        nome: String,
        email: String,
        data_nascimento: NaiveDate,
        telefone: String,
        cpf: String,
        modalidade: Modalidade,
        endereco: Option<Endereco>,
        status: StatusProfessor,
    ) -> Self {
        Self {
            id,
            nome,
            email,
            data_nascimento,
            telefone,
            cpf,
            modalidade,
            endereco,
            status,
        }
    }

    /// Partial update: only `Some` values are written
    #[allow(clippy::too_many_arguments)]
    pub fn atualizar(
        &mut self,
        nome: Option<String>,
        email: Option<String>,
        data_nascimento: Option<NaiveDate>,
        telefone: Option<String>,
        status: Option<StatusProfessor>,
        modalidade: Option<Modalidade>,
        endereco: Option<Endereco>,
    ) {
        if let Some(nome) = nome {
            self.nome = nome;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(data_nascimento) = data_nascimento {
            self.data_nascimento = data_nascimento;
        }
        if let Some(telefone) = telefone {
            self.telefone = telefone;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(modalidade) = modalidade {
            self.modalidade = modalidade;
        }
        if let Some(endereco) = endereco {
            self.endereco = Some(endereco);
        }
    }

    /// Soft delete. Professors on leave or already inactive cannot be removed.
    pub fn excluir(&mut self) -> ValidationResult<()> {
        if matches!(
            self.status,
            StatusProfessor::Afastado | StatusProfessor::Inativo
        ) {
            return Err(ValidationError::new(
                "Professor afastado ou inativo não pode ser cancelado",
            ));
        }

        self.status = StatusProfessor::Inativo;
        Ok(())
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

    pub fn data_nascimento(&self) -> NaiveDate {
        self.data_nascimento
    }

    pub fn telefone(&self) -> &str {
        &self.telefone
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn modalidade(&self) -> Modalidade {
        self.modalidade
    }

    pub fn endereco(&self) -> Option<&Endereco> {
        self.endereco.as_ref()
    }

    pub fn status(&self) -> StatusProfessor {
        self.status
    }

    pub fn is_ativo(&self) -> bool {
        self.status == StatusProfessor::Ativo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn professor() -> Professor {
        Professor::new(
            "Carlos".to_string(),
            "carlos@email.com".to_string(),
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            "(11)99999-8888".to_string(),
            "12345678900".to_string(),
            Modalidade::Ead,
            None,
        )
    }

    #[test]
    fn test_new_professor_is_active() {
        let professor = professor();
        assert_eq!(professor.nome(), "Carlos");
        assert_eq!(professor.modalidade(), Modalidade::Ead);
        assert_eq!(professor.status(), StatusProfessor::Ativo);
    }

    #[test]
    fn test_atualizar_ignores_absent_fields() {
        let mut professor = professor();
        let before = professor.clone();

        professor.atualizar(None, None, None, None, None, None, None);
        assert_eq!(professor, before);

        professor.atualizar(
            Some("Novo Nome".to_string()),
            None,
            None,
            Some("888888888".to_string()),
            Some(StatusProfessor::Afastado),
            Some(Modalidade::Presencial),
            None,
        );
        assert_eq!(professor.nome(), "Novo Nome");
        assert_eq!(professor.email(), "carlos@email.com");
        assert_eq!(professor.telefone(), "888888888");
        assert_eq!(professor.status(), StatusProfessor::Afastado);
        assert_eq!(professor.modalidade(), Modalidade::Presencial);
    }

    #[test]
    fn test_excluir_marks_inactive() {
        let mut professor = professor();
        professor.excluir().unwrap();
        assert_eq!(professor.status(), StatusProfessor::Inativo);
    }

    #[test]
    fn test_excluir_rejects_on_leave_and_inactive() {
        for status in [StatusProfessor::Afastado, StatusProfessor::Inativo] {
            let mut professor = professor();
            professor.atualizar(None, None, None, None, Some(status), None, None);

            let err = professor.excluir().unwrap_err();
            assert!(err.mensagem().contains("afastado ou inativo"));
            assert_eq!(professor.status(), status);
        }
    }
}

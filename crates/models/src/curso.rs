use crate::{
    error::{ValidationError, ValidationResult},
    professor::Professor,
};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCurso {
    #[cfg_attr(feature = "database", sea_orm(string_value = "ATIVO"))]
    Ativo,
    #[cfg_attr(feature = "database", sea_orm(string_value = "INATIVO"))]
    Inativo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NivelCurso {
    #[cfg_attr(feature = "database", sea_orm(string_value = "BASICO"))]
    Basico,
    #[cfg_attr(feature = "database", sea_orm(string_value = "INTERMEDIARIO"))]
    Intermediario,
    #[cfg_attr(feature = "database", sea_orm(string_value = "AVANCADO"))]
    Avancado,
}

impl NivelCurso {
    /// Minimum total workload in hours a course of this level must have
    pub fn carga_horaria_minima(self) -> Option<i32> {
        match self {
            Self::Basico | Self::Intermediario => None,
            Self::Avancado => Some(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoriaCurso {
    #[cfg_attr(feature = "database", sea_orm(string_value = "PROGRAMACAO"))]
    Programacao,
    #[cfg_attr(feature = "database", sea_orm(string_value = "BANCO_DE_DADOS"))]
    BancoDeDados,
    #[cfg_attr(feature = "database", sea_orm(string_value = "DESIGN"))]
    Design,
    #[cfg_attr(feature = "database", sea_orm(string_value = "GESTAO"))]
    Gestao,
    #[cfg_attr(feature = "database", sea_orm(string_value = "IDIOMAS"))]
    Idiomas,
    #[cfg_attr(feature = "database", sea_orm(string_value = "OUTROS"))]
    Outros,
}

/// A catalog course. Scheduled offerings of it are [`crate::Turma`]s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curso {
    id: Uuid,
    nome: String,
    descricao: String,
    carga_horaria_total: i32,
    duracao_meses: i32,
    nivel: NivelCurso,
    categoria: CategoriaCurso,
    status: StatusCurso,
    professores: Vec<Uuid>,
}

impl Curso {
    pub fn new(
        nome: String,
        descricao: String,
        carga_horaria_total: i32,
        duracao_meses: i32,
        nivel: Option<NivelCurso>,
        categoria: CategoriaCurso,
    ) -> ValidationResult<Self> {
        let nivel = Self::validar(nivel, carga_horaria_total)?;

        Ok(Self {
            id: Uuid::new_v4(),
            nome,
            descricao,
            carga_horaria_total,
            duracao_meses,
            nivel,
            categoria,
            status: StatusCurso::Ativo,
            professores: Vec::new(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        nome: String,
        descricao: String,
        carga_horaria_total: i32,
        duracao_meses: i32,
        nivel: NivelCurso,
        categoria: CategoriaCurso,
        status: StatusCurso,
        professores: Vec<Uuid>,
    ) -> Self {
        Self {
            id,
            nome,
            descricao,
            carga_horaria_total,
            duracao_meses,
            nivel,
            categoria,
            status,
            professores,
        }
    }

    /// Partial update. The merged level and workload are validated before
    /// anything is written.
    pub fn atualizar(
        &mut self,
        nome: Option<String>,
        descricao: Option<String>,
        carga_horaria_total: Option<i32>,
        duracao_meses: Option<i32>,
        nivel: Option<NivelCurso>,
        categoria: Option<CategoriaCurso>,
    ) -> ValidationResult<()> {
        let carga_horaria_total = carga_horaria_total.unwrap_or(self.carga_horaria_total);
        let nivel = Self::validar(Some(nivel.unwrap_or(self.nivel)), carga_horaria_total)?;

        if let Some(nome) = nome {
            self.nome = nome;
        }
        if let Some(descricao) = descricao {
            self.descricao = descricao;
        }
        if let Some(duracao_meses) = duracao_meses {
            self.duracao_meses = duracao_meses;
        }
        if let Some(categoria) = categoria {
            self.categoria = categoria;
        }
        self.carga_horaria_total = carga_horaria_total;
        self.nivel = nivel;

        Ok(())
    }

    pub fn ativar(&mut self) -> ValidationResult<()> {
        if self.status == StatusCurso::Ativo {
            return Err(ValidationError::new("Curso já está ativo."));
        }
        self.status = StatusCurso::Ativo;
        Ok(())
    }

    pub fn inativar(&mut self) -> ValidationResult<()> {
        if self.status == StatusCurso::Inativo {
            return Err(ValidationError::new("Curso já está inativo."));
        }
        self.status = StatusCurso::Inativo;
        Ok(())
    }

    /// Links an active professor. Linking twice is a no-op.
    pub fn vincular_professor(&mut self, professor: &Professor) -> ValidationResult<()> {
        if !professor.is_ativo() {
            return Err(ValidationError::new(
                "Não é possível vincular um professor com status diferente de ATIVO ao curso.",
            ));
        }

        if !self.possui_professor(professor.id()) {
            self.professores.push(professor.id());
        }
        Ok(())
    }

    pub fn desvincular_professor(&mut self, professor_id: Uuid) -> ValidationResult<()> {
        if !self.possui_professor(professor_id) {
            return Err(ValidationError::new(
                "Este professor não esta vinculado ao curso",
            ));
        }

        self.professores.retain(|id| *id != professor_id);
        Ok(())
    }

    pub fn possui_professor(&self, professor_id: Uuid) -> bool {
        self.professores.contains(&professor_id)
    }

    fn validar(nivel: Option<NivelCurso>, carga_horaria_total: i32) -> ValidationResult<NivelCurso> {
        let nivel = nivel.ok_or_else(|| ValidationError::new("Nivel do curso é obrigatório"))?;

        if let Some(minima) = nivel.carga_horaria_minima()
            && carga_horaria_total < minima
        {
            return Err(ValidationError::new(
                "Cursos avançados ou de especialização devem ter 100+ horas",
            ));
        }

        Ok(nivel)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn carga_horaria_total(&self) -> i32 {
        self.carga_horaria_total
    }

    pub fn duracao_meses(&self) -> i32 {
        self.duracao_meses
    }

    pub fn nivel(&self) -> NivelCurso {
        self.nivel
    }

    pub fn categoria(&self) -> CategoriaCurso {
        self.categoria
    }

    pub fn status(&self) -> StatusCurso {
        self.status
    }

    pub fn is_ativo(&self) -> bool {
        self.status == StatusCurso::Ativo
    }

    pub fn professores(&self) -> &[Uuid] {
        &self.professores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{modalidade::Modalidade, professor::StatusProfessor};
    use chrono::NaiveDate;

    fn curso(carga: i32, nivel: NivelCurso) -> ValidationResult<Curso> {
        Curso::new(
            "Curso Java".to_string(),
            "Curso completo de Java".to_string(),
            carga,
            6,
            Some(nivel),
            CategoriaCurso::Programacao,
        )
    }

    fn professor() -> Professor {
        Professor::new(
            "Maria".to_string(),
            "maria@email.com".to_string(),
            NaiveDate::from_ymd_opt(1985, 3, 10).unwrap(),
            "11988887777".to_string(),
            "11122233344".to_string(),
            Modalidade::Presencial,
            None,
        )
    }

    #[test]
    fn test_new_curso_is_active() {
        let curso = curso(120, NivelCurso::Avancado).unwrap();
        assert_eq!(curso.nome(), "Curso Java");
        assert_eq!(curso.status(), StatusCurso::Ativo);
        assert_eq!(curso.nivel(), NivelCurso::Avancado);
        assert!(curso.professores().is_empty());
    }

    #[test]
    fn test_nivel_is_required() {
        let err = Curso::new(
            "Curso Java".to_string(),
            "Descrição".to_string(),
            120,
            6,
            None,
            CategoriaCurso::Programacao,
        )
        .unwrap_err();
        assert_eq!(err.mensagem(), "Nivel do curso é obrigatório");
    }

    #[test]
    fn test_advanced_course_workload_boundary() {
        let err = curso(99, NivelCurso::Avancado).unwrap_err();
        assert_eq!(
            err.mensagem(),
            "Cursos avançados ou de especialização devem ter 100+ horas"
        );

        assert!(curso(100, NivelCurso::Avancado).is_ok());
        assert!(curso(40, NivelCurso::Basico).is_ok());
        assert!(curso(40, NivelCurso::Intermediario).is_ok());
    }

    #[test]
    fn test_ativar_inativar_reject_repeated_calls() {
        let mut curso = curso(120, NivelCurso::Basico).unwrap();

        assert_eq!(curso.ativar().unwrap_err().mensagem(), "Curso já está ativo.");

        curso.inativar().unwrap();
        assert_eq!(curso.status(), StatusCurso::Inativo);
        assert_eq!(
            curso.inativar().unwrap_err().mensagem(),
            "Curso já está inativo."
        );

        curso.ativar().unwrap();
        assert_eq!(curso.status(), StatusCurso::Ativo);
    }

    #[test]
    fn test_atualizar_keeps_absent_fields() {
        let mut curso = Curso::new(
            "Nome".to_string(),
            "Desc".to_string(),
            100,
            5,
            Some(NivelCurso::Basico),
            CategoriaCurso::Programacao,
        )
        .unwrap();

        curso
            .atualizar(
                Some("Novo Nome".to_string()),
                None,
                Some(200),
                Some(8),
                Some(NivelCurso::Avancado),
                None,
            )
            .unwrap();

        assert_eq!(curso.nome(), "Novo Nome");
        assert_eq!(curso.descricao(), "Desc");
        assert_eq!(curso.carga_horaria_total(), 200);
        assert_eq!(curso.duracao_meses(), 8);
        assert_eq!(curso.nivel(), NivelCurso::Avancado);
        assert_eq!(curso.categoria(), CategoriaCurso::Programacao);
    }

    #[test]
    fn test_atualizar_rejects_advanced_without_workload_and_changes_nothing() {
        let mut curso = curso(60, NivelCurso::Intermediario).unwrap();
        let before = curso.clone();

        let err = curso
            .atualizar(
                Some("Outro".to_string()),
                None,
                None,
                None,
                Some(NivelCurso::Avancado),
                None,
            )
            .unwrap_err();

        assert_eq!(
            err.mensagem(),
            "Cursos avançados ou de especialização devem ter 100+ horas"
        );
        assert_eq!(curso, before);
    }

    #[test]
    fn test_vincular_and_desvincular_professor() {
        let mut curso = curso(120, NivelCurso::Basico).unwrap();
        let professor = professor();

        curso.vincular_professor(&professor).unwrap();
        curso.vincular_professor(&professor).unwrap();
        assert_eq!(curso.professores(), &[professor.id()]);

        curso.desvincular_professor(professor.id()).unwrap();
        assert!(!curso.possui_professor(professor.id()));

        let err = curso.desvincular_professor(professor.id()).unwrap_err();
        assert_eq!(err.mensagem(), "Este professor não esta vinculado ao curso");
    }

    #[test]
    fn test_vincular_rejects_inactive_professor() {
        let mut curso = curso(120, NivelCurso::Basico).unwrap();
        let mut professor = professor();
        professor.atualizar(None, None, None, None, Some(StatusProfessor::Inativo), None, None);

        let err = curso.vincular_professor(&professor).unwrap_err();
        assert_eq!(
            err.mensagem(),
            "Não é possível vincular um professor com status diferente de ATIVO ao curso."
        );
        assert!(curso.professores().is_empty());
    }
}

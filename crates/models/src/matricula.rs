use crate::{
    aluno::Aluno,
    curso::Curso,
    error::{ValidationError, ValidationResult},
    hoje,
    turma::Turma,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use uuid::Uuid;

/// Minimum final grade for an enrollment to be completed
pub const NOTA_MINIMA: f64 = 7.0;

pub const NOTA_MAXIMA: f64 = 10.0;

/// `ATIVA -> CONCLUIDA | TRANCADA | CANCELADA`, `TRANCADA -> ATIVA | CANCELADA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusMatricula {
    #[cfg_attr(feature = "database", sea_orm(string_value = "ATIVA"))]
    Ativa,
    #[cfg_attr(feature = "database", sea_orm(string_value = "CONCLUIDA"))]
    Concluida,
    /// Suspended by the student, can be reactivated
    #[cfg_attr(feature = "database", sea_orm(string_value = "TRANCADA"))]
    Trancada,
    #[cfg_attr(feature = "database", sea_orm(string_value = "CANCELADA"))]
    Cancelada,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MotivoCancelamento {
    #[cfg_attr(feature = "database", sea_orm(string_value = "DESISTENCIA"))]
    Desistencia,
    #[cfg_attr(feature = "database", sea_orm(string_value = "TRANSFERENCIA"))]
    Transferencia,
    #[cfg_attr(feature = "database", sea_orm(string_value = "INADIMPLENCIA"))]
    Inadimplencia,
    #[cfg_attr(feature = "database", sea_orm(string_value = "PROBLEMAS_DE_SAUDE"))]
    ProblemasDeSaude,
    #[cfg_attr(feature = "database", sea_orm(string_value = "OUTROS"))]
    Outros,
}

/// Enrollment of a student in a course, optionally through one of its class sections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matricula {
    id: Uuid,
    aluno_id: Uuid,
    curso_id: Uuid,
    turma_id: Option<Uuid>,
    data_matricula: NaiveDate,
    data_conclusao: Option<NaiveDate>,
    nota_final: Option<f64>,
    status: StatusMatricula,
    motivo_cancelamento: Option<MotivoCancelamento>,
}

impl Matricula {
    /// Builds an active enrollment.
    ///
    /// The course is `curso` when given, otherwise the course linked to `turma`.
    pub fn new(
        aluno: Option<&Aluno>,
        curso: Option<&Curso>,
        turma: Option<&Turma>,
        data_matricula: Option<NaiveDate>,
    ) -> ValidationResult<Self> {
        let aluno =
            aluno.ok_or_else(|| ValidationError::new("Aluno é obrigatório para a matrícula"))?;
        let curso_id = curso
            .map(Curso::id)
            .or_else(|| turma.and_then(Turma::curso_id))
            .ok_or_else(|| ValidationError::new("Curso é obrigatório para a matrícula"))?;
        let data_matricula = data_matricula
            .ok_or_else(|| ValidationError::new("Data da matrícula é obrigatória"))?;

        Ok(Self {
            id: Uuid::new_v4(),
            aluno_id: aluno.id(),
            curso_id,
            turma_id: turma.map(Turma::id),
            data_matricula,
            data_conclusao: None,
            nota_final: None,
            status: StatusMatricula::Ativa,
            motivo_cancelamento: None,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        aluno_id: Uuid,
        curso_id: Uuid,
        turma_id: Option<Uuid>,
        data_matricula: NaiveDate,
        data_conclusao: Option<NaiveDate>,
        nota_final: Option<f64>,
        status: StatusMatricula,
        motivo_cancelamento: Option<MotivoCancelamento>,
    ) -> Self {
        Self {
            id,
            aluno_id,
            curso_id,
            turma_id,
            data_matricula,
            data_conclusao,
            nota_final,
            status,
            motivo_cancelamento,
        }
    }

    pub fn concluir(&mut self, nota_final: Option<f64>) -> ValidationResult<()> {
        self.concluir_em(nota_final, hoje())
    }

    /// Completes the enrollment with `nota_final`, stamping `hoje` as the completion date
    pub fn concluir_em(&mut self, nota_final: Option<f64>, hoje: NaiveDate) -> ValidationResult<()> {
        self.verificar_consistencia()?;

        if self.status != StatusMatricula::Ativa {
            return Err(ValidationError::new(
                "Apenas matrículas ativas podem ser concluídas",
            ));
        }
        let nota = nota_final
            .ok_or_else(|| ValidationError::new("Nota final é obrigatória para conclusão"))?;
        if !nota.is_finite() || nota > NOTA_MAXIMA {
            return Err(ValidationError::new("Nota final deve estar entre 0 e 10"));
        }
        if nota < NOTA_MINIMA {
            return Err(ValidationError::new("Matricula concluida requer nota >= 7"));
        }

        self.status = StatusMatricula::Concluida;
        self.nota_final = Some(nota);
        self.data_conclusao = Some(hoje);
        Ok(())
    }

    pub fn trancar(&mut self) -> ValidationResult<()> {
        self.verificar_consistencia()?;

        if self.status != StatusMatricula::Ativa {
            return Err(ValidationError::new(
                "Apenas matriculas ativas podem ser trancadas",
            ));
        }

        self.status = StatusMatricula::Trancada;
        Ok(())
    }

    pub fn reativar(&mut self) -> ValidationResult<()> {
        self.verificar_consistencia()?;

        if self.status != StatusMatricula::Trancada {
            return Err(ValidationError::new(
                "Apenas matrículas trancadas podem ser reativadas",
            ));
        }

        self.status = StatusMatricula::Ativa;
        Ok(())
    }

    pub fn cancelar(&mut self, motivo: Option<MotivoCancelamento>) -> ValidationResult<()> {
        self.verificar_consistencia()?;

        let motivo =
            motivo.ok_or_else(|| ValidationError::new("Motivo do cancelamento é obrigatório"))?;
        if self.status == StatusMatricula::Concluida {
            return Err(ValidationError::new(
                "Matricula concluída não pode ser cancelada",
            ));
        }

        self.status = StatusMatricula::Cancelada;
        self.motivo_cancelamento = Some(motivo);
        Ok(())
    }

    /// Still in force, so a second enrollment in the same section (or course) is blocked.
    /// Seats are counted by `Turma::vagas_disponiveis` over every recorded enrollment.
    pub fn is_vigente(&self) -> bool {
        matches!(
            self.status,
            StatusMatricula::Ativa | StatusMatricula::Trancada
        )
    }

    // Stored rows may predate the transition rules
    fn verificar_consistencia(&self) -> ValidationResult<()> {
        if let Some(conclusao) = self.data_conclusao
            && conclusao < self.data_matricula
        {
            return Err(ValidationError::new(
                "Data de conclusão não pode ser anterior à data da matrícula",
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn aluno_id(&self) -> Uuid {
        self.aluno_id
    }

    pub fn curso_id(&self) -> Uuid {
        self.curso_id
    }

    pub fn turma_id(&self) -> Option<Uuid> {
        self.turma_id
    }

    pub fn data_matricula(&self) -> NaiveDate {
        self.data_matricula
    }

    pub fn data_conclusao(&self) -> Option<NaiveDate> {
        self.data_conclusao
    }

    pub fn nota_final(&self) -> Option<f64> {
        self.nota_final
    }

    pub fn status(&self) -> StatusMatricula {
        self.status
    }

    pub fn motivo_cancelamento(&self) -> Option<MotivoCancelamento> {
        self.motivo_cancelamento
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        curso::{CategoriaCurso, NivelCurso},
        modalidade::Modalidade,
    };
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn aluno() -> Aluno {
        Aluno::new(
            "João".to_string(),
            "joao@email.com".to_string(),
            "999999999".to_string(),
            "12345678900".to_string(),
            date(2000, 1, 1),
            None,
        )
    }

    fn curso() -> Curso {
        Curso::new(
            "Java".to_string(),
            "Curso de Java".to_string(),
            120,
            4,
            Some(NivelCurso::Basico),
            CategoriaCurso::Programacao,
        )
        .unwrap()
    }

    fn turma() -> Turma {
        Turma::new(
            "T1".to_string(),
            date(2025, 5, 20),
            date(2025, 7, 20),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            20,
            Modalidade::Presencial,
        )
        .unwrap()
    }

    fn matricula() -> Matricula {
        Matricula::new(Some(&aluno()), Some(&curso()), None, Some(hoje())).unwrap()
    }

    #[test]
    fn test_new_matricula_is_active() {
        let aluno = aluno();
        let curso = curso();
        let matricula = Matricula::new(Some(&aluno), Some(&curso), None, Some(hoje())).unwrap();

        assert_eq!(matricula.status(), StatusMatricula::Ativa);
        assert_eq!(matricula.aluno_id(), aluno.id());
        assert_eq!(matricula.curso_id(), curso.id());
        assert_eq!(matricula.turma_id(), None);
        assert_eq!(matricula.data_conclusao(), None);
        assert_eq!(matricula.nota_final(), None);
    }

    #[test]
    fn test_new_takes_course_from_turma() {
        let curso = curso();
        let mut turma = turma();
        turma.vincular_curso(&curso);

        let matricula = Matricula::new(Some(&aluno()), None, Some(&turma), Some(hoje())).unwrap();

        assert_eq!(matricula.curso_id(), curso.id());
        assert_eq!(matricula.turma_id(), Some(turma.id()));
    }

    #[test]
    fn test_new_requires_aluno_curso_and_date() {
        let err = Matricula::new(None, Some(&curso()), None, Some(hoje())).unwrap_err();
        assert_eq!(err.mensagem(), "Aluno é obrigatório para a matrícula");

        // a section with no linked course does not count as a course
        let err = Matricula::new(Some(&aluno()), None, Some(&turma()), Some(hoje())).unwrap_err();
        assert_eq!(err.mensagem(), "Curso é obrigatório para a matrícula");

        let err = Matricula::new(Some(&aluno()), Some(&curso()), None, None).unwrap_err();
        assert_eq!(err.mensagem(), "Data da matrícula é obrigatória");
    }

    #[test]
    fn test_concluir_requires_minimum_grade() {
        let mut matricula = matricula();

        let err = matricula.concluir(Some(6.9)).unwrap_err();
        assert_eq!(err.mensagem(), "Matricula concluida requer nota >= 7");
        assert_eq!(matricula.status(), StatusMatricula::Ativa);

        matricula.concluir(Some(7.0)).unwrap();
        assert_eq!(matricula.status(), StatusMatricula::Concluida);
        assert_eq!(matricula.nota_final(), Some(7.0));
        assert_eq!(matricula.data_conclusao(), Some(hoje()));
    }

    #[test]
    fn test_concluir_rejects_grade_out_of_range() {
        let mut matricula = matricula();

        for nota in [1000.0, 10.5, f64::NAN, f64::INFINITY] {
            let err = matricula.concluir(Some(nota)).unwrap_err();
            assert_eq!(err.mensagem(), "Nota final deve estar entre 0 e 10");
            assert_eq!(matricula.status(), StatusMatricula::Ativa);
            assert_eq!(matricula.nota_final(), None);
        }

        matricula.concluir(Some(10.0)).unwrap();
        assert_eq!(matricula.nota_final(), Some(10.0));
    }

    #[test]
    fn test_concluir_requires_grade_and_active_status() {
        let mut matricula = matricula();
        let err = matricula.concluir(None).unwrap_err();
        assert_eq!(err.mensagem(), "Nota final é obrigatória para conclusão");

        matricula.trancar().unwrap();
        let err = matricula.concluir(Some(9.0)).unwrap_err();
        assert_eq!(err.mensagem(), "Apenas matrículas ativas podem ser concluídas");
    }

    #[test]
    fn test_concluir_em_stamps_given_date() {
        let mut matricula =
            Matricula::new(Some(&aluno()), Some(&curso()), None, Some(date(2025, 1, 10))).unwrap();

        matricula.concluir_em(Some(8.5), date(2025, 6, 30)).unwrap();

        assert_eq!(matricula.data_conclusao(), Some(date(2025, 6, 30)));
    }

    #[test]
    fn test_trancar_and_reativar() {
        let mut matricula = matricula();

        assert_eq!(
            matricula.reativar().unwrap_err().mensagem(),
            "Apenas matrículas trancadas podem ser reativadas"
        );

        matricula.trancar().unwrap();
        assert_eq!(matricula.status(), StatusMatricula::Trancada);
        assert_eq!(
            matricula.trancar().unwrap_err().mensagem(),
            "Apenas matriculas ativas podem ser trancadas"
        );

        matricula.reativar().unwrap();
        assert_eq!(matricula.status(), StatusMatricula::Ativa);
    }

    #[test]
    fn test_cancelar_requires_motivo() {
        let mut matricula = matricula();

        let err = matricula.cancelar(None).unwrap_err();
        assert_eq!(err.mensagem(), "Motivo do cancelamento é obrigatório");

        matricula.cancelar(Some(MotivoCancelamento::Desistencia)).unwrap();
        assert_eq!(matricula.status(), StatusMatricula::Cancelada);
        assert_eq!(
            matricula.motivo_cancelamento(),
            Some(MotivoCancelamento::Desistencia)
        );
    }

    #[test]
    fn test_cancelar_from_trancada() {
        let mut matricula = matricula();
        matricula.trancar().unwrap();

        matricula.cancelar(Some(MotivoCancelamento::Transferencia)).unwrap();

        assert_eq!(matricula.status(), StatusMatricula::Cancelada);
    }

    #[test]
    fn test_cancelar_after_concluir_always_fails() {
        for motivo in [
            MotivoCancelamento::Desistencia,
            MotivoCancelamento::Transferencia,
            MotivoCancelamento::Inadimplencia,
            MotivoCancelamento::ProblemasDeSaude,
            MotivoCancelamento::Outros,
        ] {
            let mut matricula = matricula();
            matricula.concluir(Some(10.0)).unwrap();

            let err = matricula.cancelar(Some(motivo)).unwrap_err();
            assert_eq!(err.mensagem(), "Matricula concluída não pode ser cancelada");
            assert_eq!(matricula.status(), StatusMatricula::Concluida);
            assert_eq!(matricula.motivo_cancelamento(), None);
        }
    }

    #[test]
    fn test_inconsistent_dates_block_every_transition() {
        let corrompida = Matricula::from_persistence(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            date(2025, 3, 10),
            Some(date(2025, 3, 1)),
            None,
            StatusMatricula::Ativa,
            None,
        );
        let mensagem = "Data de conclusão não pode ser anterior à data da matrícula";

        assert_eq!(corrompida.clone().trancar().unwrap_err().mensagem(), mensagem);
        assert_eq!(
            corrompida.clone().concluir(Some(9.0)).unwrap_err().mensagem(),
            mensagem
        );
        assert_eq!(corrompida.clone().reativar().unwrap_err().mensagem(), mensagem);
        assert_eq!(
            corrompida
                .clone()
                .cancelar(Some(MotivoCancelamento::Outros))
                .unwrap_err()
                .mensagem(),
            mensagem
        );
    }

    #[test]
    fn test_is_vigente() {
        let mut matricula = matricula();
        assert!(matricula.is_vigente());
        matricula.trancar().unwrap();
        assert!(matricula.is_vigente());
        matricula.cancelar(Some(MotivoCancelamento::Outros)).unwrap();
        assert!(!matricula.is_vigente());
    }

    #[test]
    fn test_motivo_wire_names() {
        assert_eq!(
            serde_json::to_string(&MotivoCancelamento::ProblemasDeSaude).unwrap(),
            "\"PROBLEMAS_DE_SAUDE\""
        );
        assert_eq!(StatusMatricula::Trancada.as_ref(), "TRANCADA");
    }
}

use crate::{
    curso::Curso,
    error::{ValidationError, ValidationResult},
    hoje,
    modalidade::Modalidade,
    professor::Professor,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use uuid::Uuid;

/// Lifecycle of a class section:
/// `ABERTA -> EM_ANDAMENTO -> CONCLUIDA`, and `ABERTA | EM_ANDAMENTO -> CANCELADA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusTurma {
    #[cfg_attr(feature = "database", sea_orm(string_value = "ABERTA"))]
    Aberta,
    #[cfg_attr(feature = "database", sea_orm(string_value = "EM_ANDAMENTO"))]
    EmAndamento,
    #[cfg_attr(feature = "database", sea_orm(string_value = "CONCLUIDA"))]
    Concluida,
    #[cfg_attr(feature = "database", sea_orm(string_value = "CANCELADA"))]
    Cancelada,
}

/// A scheduled offering (class section) of a course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turma {
    id: Uuid,
    codigo: String,
    data_inicio: NaiveDate,
    data_fim: NaiveDate,
    horario_inicio: NaiveTime,
    horario_fim: NaiveTime,
    vagas_totais: i32,
    modalidade: Modalidade,
    status: StatusTurma,
    professor_id: Option<Uuid>,
    curso_id: Option<Uuid>,
    matriculas: Vec<Uuid>,
}

impl Turma {
    pub fn new(
        codigo: String,
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
        horario_inicio: NaiveTime,
        horario_fim: NaiveTime,
        vagas_totais: i32,
        modalidade: Modalidade,
    ) -> ValidationResult<Self> {
        Self::validar(data_inicio, data_fim, horario_inicio, horario_fim, vagas_totais)?;

        Ok(Self {
            id: Uuid::new_v4(),
            codigo,
            data_inicio,
            data_fim,
            horario_inicio,
            horario_fim,
            vagas_totais,
            modalidade,
            status: StatusTurma::Aberta,
            professor_id: None,
            curso_id: None,
            matriculas: Vec::new(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        codigo: String,
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
        horario_inicio: NaiveTime,
        horario_fim: NaiveTime,
        vagas_totais: i32,
        modalidade: Modalidade,
        status: StatusTurma,
        professor_id: Option<Uuid>,
        curso_id: Option<Uuid>,
        matriculas: Vec<Uuid>,
    ) -> Self {
        Self {
            id,
            codigo,
            data_inicio,
            data_fim,
            horario_inicio,
            horario_fim,
            vagas_totais,
            modalidade,
            status,
            professor_id,
            curso_id,
            matriculas,
        }
    }

    /// Partial update. Dates, times and seats are checked against the merged
    /// state before any field is written, so a rejected update changes nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn atualizar(
        &mut self,
        codigo: Option<String>,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
        horario_inicio: Option<NaiveTime>,
        horario_fim: Option<NaiveTime>,
        vagas_totais: Option<i32>,
        modalidade: Option<Modalidade>,
    ) -> ValidationResult<()> {
        let data_inicio = data_inicio.unwrap_or(self.data_inicio);
        let data_fim = data_fim.unwrap_or(self.data_fim);
        let horario_inicio = horario_inicio.unwrap_or(self.horario_inicio);
        let horario_fim = horario_fim.unwrap_or(self.horario_fim);
        let vagas_totais = vagas_totais.unwrap_or(self.vagas_totais);

        Self::validar(data_inicio, data_fim, horario_inicio, horario_fim, vagas_totais)?;
        if vagas_totais < self.matriculas.len() as i32 {
            return Err(ValidationError::new(format!(
                "A turma já possui {} matrículas, vagas insuficientes",
                self.matriculas.len()
            )));
        }

        if let Some(codigo) = codigo {
            self.codigo = codigo;
        }
        if let Some(modalidade) = modalidade {
            self.modalidade = modalidade;
        }
        self.data_inicio = data_inicio;
        self.data_fim = data_fim;
        self.horario_inicio = horario_inicio;
        self.horario_fim = horario_fim;
        self.vagas_totais = vagas_totais;

        Ok(())
    }

    pub fn iniciar(&mut self) -> ValidationResult<()> {
        self.iniciar_em(hoje())
    }

    /// Starts the section as of `hoje`
    pub fn iniciar_em(&mut self, hoje: NaiveDate) -> ValidationResult<()> {
        if self.status != StatusTurma::Aberta {
            return Err(ValidationError::new("Apenas turmas abertas podem ser iniciadas"));
        }
        if hoje < self.data_inicio {
            return Err(ValidationError::new(
                "A turma não pode ser iniciada antes da data de início",
            ));
        }

        self.status = StatusTurma::EmAndamento;
        Ok(())
    }

    pub fn concluir(&mut self) -> ValidationResult<()> {
        self.concluir_em(hoje())
    }

    /// Finishes the section as of `hoje`
    pub fn concluir_em(&mut self, hoje: NaiveDate) -> ValidationResult<()> {
        if self.status != StatusTurma::EmAndamento {
            return Err(ValidationError::new(
                "Apenas turmas em andamento podem ser concluídas",
            ));
        }
        if hoje < self.data_fim {
            return Err(ValidationError::new(
                "A turma não pode ser concluída antes da data de término",
            ));
        }

        self.status = StatusTurma::Concluida;
        Ok(())
    }

    pub fn cancelar(&mut self) -> ValidationResult<()> {
        match self.status {
            StatusTurma::Aberta | StatusTurma::EmAndamento => {
                self.status = StatusTurma::Cancelada;
                Ok(())
            }
            StatusTurma::Concluida | StatusTurma::Cancelada => Err(ValidationError::new(
                "Turma concluída ou cancelada não pode ser cancelada",
            )),
        }
    }

    pub fn vincular_professor(&mut self, professor: &Professor) {
        self.professor_id = Some(professor.id());
    }

    pub fn desvincular_professor(&mut self) {
        self.professor_id = None;
    }

    pub fn vincular_curso(&mut self, curso: &Curso) {
        self.curso_id = Some(curso.id());
    }

    pub fn desvincular_curso(&mut self) {
        self.curso_id = None;
    }

    /// Records an enrollment in this section. Recording the same one twice is a no-op.
    pub fn adicionar_matricula(&mut self, matricula_id: Uuid) {
        if !self.matriculas.contains(&matricula_id) {
            self.matriculas.push(matricula_id);
        }
    }

    /// Total seats minus the enrollments recorded so far
    pub fn vagas_disponiveis(&self) -> i32 {
        self.vagas_totais - self.matriculas.len() as i32
    }

    pub fn aceita_matriculas(&self) -> bool {
        matches!(self.status, StatusTurma::Aberta | StatusTurma::EmAndamento)
    }

    fn validar(
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
        horario_inicio: NaiveTime,
        horario_fim: NaiveTime,
        vagas_totais: i32,
    ) -> ValidationResult<()> {
        if data_inicio >= data_fim {
            return Err(ValidationError::new(
                "Data de início deve ser anterior à data de término",
            ));
        }
        if horario_inicio >= horario_fim {
            return Err(ValidationError::new(
                "Horário de início deve ser anterior ao horário de término",
            ));
        }
        if vagas_totais < 1 {
            return Err(ValidationError::new("A turma deve possuir ao menos uma vaga"));
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn codigo(&self) -> &str {
        &self.codigo
    }

    pub fn data_inicio(&self) -> NaiveDate {
        self.data_inicio
    }

    pub fn data_fim(&self) -> NaiveDate {
        self.data_fim
    }

    pub fn horario_inicio(&self) -> NaiveTime {
        self.horario_inicio
    }

    pub fn horario_fim(&self) -> NaiveTime {
        self.horario_fim
    }

    pub fn vagas_totais(&self) -> i32 {
        self.vagas_totais
    }

    pub fn modalidade(&self) -> Modalidade {
        self.modalidade
    }

    pub fn status(&self) -> StatusTurma {
        self.status
    }

    pub fn professor_id(&self) -> Option<Uuid> {
        self.professor_id
    }

    pub fn curso_id(&self) -> Option<Uuid> {
        self.curso_id
    }

    pub fn matriculas(&self) -> &[Uuid] {
        &self.matriculas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curso::{CategoriaCurso, NivelCurso};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// Section that started five days ago and ends in thirty
    fn turma_em_curso() -> Turma {
        let hoje = hoje();
        Turma::new(
            "TURMA001".to_string(),
            hoje - Duration::days(5),
            hoje + Duration::days(30),
            time(9, 0),
            time(12, 0),
            20,
            Modalidade::Ead,
        )
        .unwrap()
    }

    #[test]
    fn test_new_turma_is_open() {
        let turma = turma_em_curso();
        assert_eq!(turma.codigo(), "TURMA001");
        assert_eq!(turma.status(), StatusTurma::Aberta);
        assert_eq!(turma.modalidade(), Modalidade::Ead);
        assert_eq!(turma.vagas_totais(), 20);
        assert_eq!(turma.vagas_disponiveis(), 20);
    }

    #[test]
    fn test_new_rejects_invalid_schedule() {
        let err = Turma::new(
            "TURMA002".to_string(),
            date(2025, 5, 20),
            date(2025, 5, 15),
            time(9, 0),
            time(12, 0),
            10,
            Modalidade::Hibrido,
        )
        .unwrap_err();
        assert_eq!(err.mensagem(), "Data de início deve ser anterior à data de término");

        // same day start and end is not a valid range either
        assert!(
            Turma::new(
                "TURMA002".to_string(),
                date(2025, 5, 20),
                date(2025, 5, 20),
                time(9, 0),
                time(12, 0),
                10,
                Modalidade::Hibrido,
            )
            .is_err()
        );

        let err = Turma::new(
            "TURMA003".to_string(),
            date(2025, 5, 20),
            date(2025, 5, 21),
            time(14, 0),
            time(14, 0),
            15,
            Modalidade::Presencial,
        )
        .unwrap_err();
        assert_eq!(
            err.mensagem(),
            "Horário de início deve ser anterior ao horário de término"
        );

        let err = Turma::new(
            "TURMA004".to_string(),
            date(2025, 5, 20),
            date(2025, 6, 20),
            time(14, 0),
            time(15, 0),
            0,
            Modalidade::Ead,
        )
        .unwrap_err();
        assert_eq!(err.mensagem(), "A turma deve possuir ao menos uma vaga");
    }

    #[test]
    fn test_atualizar_only_seats_keeps_everything_else() {
        let mut turma = Turma::new(
            "TURMA-2025-05".to_string(),
            date(2025, 5, 20),
            date(2025, 7, 20),
            time(8, 0),
            time(9, 30),
            15,
            Modalidade::Ead,
        )
        .unwrap();

        turma
            .atualizar(None, None, None, None, None, Some(50), None)
            .unwrap();

        assert_eq!(turma.vagas_totais(), 50);
        assert_eq!(turma.codigo(), "TURMA-2025-05");
        assert_eq!(turma.data_inicio(), date(2025, 5, 20));
        assert_eq!(turma.data_fim(), date(2025, 7, 20));
        assert_eq!(turma.horario_inicio(), time(8, 0));
        assert_eq!(turma.horario_fim(), time(9, 30));
        assert_eq!(turma.modalidade(), Modalidade::Ead);
    }

    #[test]
    fn test_atualizar_validates_merged_state() {
        let mut turma = turma_em_curso();
        let before = turma.clone();

        // new end date before the unchanged start date
        let err = turma
            .atualizar(
                Some("OUTRO".to_string()),
                None,
                Some(turma.data_inicio() - Duration::days(1)),
                None,
                None,
                None,
                None,
            )
            .unwrap_err();

        assert_eq!(err.mensagem(), "Data de início deve ser anterior à data de término");
        assert_eq!(turma, before);
    }

    #[test]
    fn test_iniciar_from_open_after_start_date() {
        let mut turma = turma_em_curso();

        turma.iniciar().unwrap();
        assert_eq!(turma.status(), StatusTurma::EmAndamento);

        let err = turma.iniciar().unwrap_err();
        assert_eq!(err.mensagem(), "Apenas turmas abertas podem ser iniciadas");
    }

    #[test]
    fn test_iniciar_before_start_date_fails() {
        let hoje = hoje();
        let mut futura = Turma::new(
            "FUTURA".to_string(),
            hoje + Duration::days(1),
            hoje + Duration::days(5),
            time(8, 0),
            time(11, 0),
            15,
            Modalidade::Ead,
        )
        .unwrap();

        let err = futura.iniciar().unwrap_err();
        assert_eq!(
            err.mensagem(),
            "A turma não pode ser iniciada antes da data de início"
        );
        assert_eq!(futura.status(), StatusTurma::Aberta);
    }

    #[test]
    fn test_concluir_requires_running_and_end_date() {
        let mut turma = turma_em_curso();
        assert_eq!(
            turma.concluir().unwrap_err().mensagem(),
            "Apenas turmas em andamento podem ser concluídas"
        );

        turma.iniciar().unwrap();
        assert_eq!(
            turma.concluir().unwrap_err().mensagem(),
            "A turma não pode ser concluída antes da data de término"
        );

        turma
            .atualizar(None, None, Some(hoje() - Duration::days(1)), None, None, None, None)
            .unwrap();
        turma.concluir().unwrap();
        assert_eq!(turma.status(), StatusTurma::Concluida);
    }

    #[test]
    fn test_explicit_dates_drive_transitions() {
        let mut turma = Turma::new(
            "TURMA-2025-05".to_string(),
            date(2025, 5, 20),
            date(2025, 7, 20),
            time(8, 0),
            time(9, 30),
            15,
            Modalidade::Ead,
        )
        .unwrap();

        assert!(turma.iniciar_em(date(2025, 5, 19)).is_err());
        turma.iniciar_em(date(2025, 5, 20)).unwrap();
        assert!(turma.concluir_em(date(2025, 7, 19)).is_err());
        turma.concluir_em(date(2025, 7, 20)).unwrap();
        assert_eq!(turma.status(), StatusTurma::Concluida);
    }

    #[test]
    fn test_cancelar_only_open_or_running() {
        let mut turma = turma_em_curso();
        turma.cancelar().unwrap();
        assert_eq!(turma.status(), StatusTurma::Cancelada);
        assert!(turma.cancelar().is_err());

        let hoje = hoje();
        let mut concluida = Turma::new(
            "TURMA_CONCLUIDA".to_string(),
            hoje - Duration::days(10),
            hoje - Duration::days(1),
            time(8, 0),
            time(11, 0),
            10,
            Modalidade::Hibrido,
        )
        .unwrap();
        concluida.iniciar().unwrap();
        concluida.concluir().unwrap();

        let err = concluida.cancelar().unwrap_err();
        assert_eq!(err.mensagem(), "Turma concluída ou cancelada não pode ser cancelada");
    }

    #[test]
    fn test_vagas_disponiveis_counts_enrollments() {
        let mut turma = turma_em_curso();
        turma.adicionar_matricula(Uuid::new_v4());
        turma.adicionar_matricula(Uuid::new_v4());

        assert_eq!(turma.vagas_disponiveis(), 18);
    }

    #[test]
    fn test_atualizar_cannot_drop_seats_below_enrollments() {
        let mut turma = turma_em_curso();
        for _ in 0..5 {
            turma.adicionar_matricula(Uuid::new_v4());
        }

        let err = turma
            .atualizar(None, None, None, None, None, Some(1), None)
            .unwrap_err();
        assert_eq!(err.mensagem(), "A turma já possui 5 matrículas, vagas insuficientes");
        assert_eq!(turma.vagas_totais(), 20);
        assert_eq!(turma.vagas_disponiveis(), 15);

        turma
            .atualizar(None, None, None, None, None, Some(5), None)
            .unwrap();
        assert_eq!(turma.vagas_disponiveis(), 0);
    }

    #[test]
    fn test_vincular_and_desvincular_references() {
        let mut turma = turma_em_curso();
        let professor = Professor::new(
            "Carlos".to_string(),
            "carlos@email.com".to_string(),
            date(1980, 1, 1),
            "11999998888".to_string(),
            "12345678900".to_string(),
            Modalidade::Ead,
            None,
        );
        let curso = Curso::new(
            "Web".to_string(),
            "Desenvolvimento web".to_string(),
            240,
            6,
            Some(NivelCurso::Intermediario),
            CategoriaCurso::Programacao,
        )
        .unwrap();

        turma.vincular_professor(&professor);
        turma.vincular_curso(&curso);
        assert_eq!(turma.professor_id(), Some(professor.id()));
        assert_eq!(turma.curso_id(), Some(curso.id()));

        turma.desvincular_professor();
        turma.desvincular_curso();
        assert_eq!(turma.professor_id(), None);
        assert_eq!(turma.curso_id(), None);
    }
}

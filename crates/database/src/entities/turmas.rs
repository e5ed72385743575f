use models::{Modalidade, StatusTurma, Turma};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "turmas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub codigo: String,
    pub data_inicio: Date,
    pub data_fim: Date,
    pub horario_inicio: Time,
    pub horario_fim: Time,
    pub vagas_totais: i32,
    pub modalidade: Modalidade,
    pub status: StatusTurma,
    pub professor_id: Option<Uuid>,
    pub curso_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::professores::Entity",
        from = "Column::ProfessorId",
        to = "super::professores::Column::Id"
    )]
    Professor,
    #[sea_orm(
        belongs_to = "super::cursos::Entity",
        from = "Column::CursoId",
        to = "super::cursos::Column::Id"
    )]
    Curso,
    #[sea_orm(has_many = "super::matriculas::Entity")]
    Matriculas,
}

impl Related<super::professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::cursos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curso.def()
    }
}

impl Related<super::matriculas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matriculas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rebuilds the domain section with the ids of the enrollments pointing at it
    pub fn into_turma(self, matriculas: Vec<Uuid>) -> Turma {
        Turma::from_persistence(
            self.id,
            self.codigo,
            self.data_inicio,
            self.data_fim,
            self.horario_inicio,
            self.horario_fim,
            self.vagas_totais,
            self.modalidade,
            self.status,
            self.professor_id,
            self.curso_id,
            matriculas,
        )
    }
}

impl From<&Turma> for ActiveModel {
    fn from(turma: &Turma) -> Self {
        Self {
            id: Set(turma.id()),
            codigo: Set(turma.codigo().to_owned()),
            data_inicio: Set(turma.data_inicio()),
            data_fim: Set(turma.data_fim()),
            horario_inicio: Set(turma.horario_inicio()),
            horario_fim: Set(turma.horario_fim()),
            vagas_totais: Set(turma.vagas_totais()),
            modalidade: Set(turma.modalidade()),
            status: Set(turma.status()),
            professor_id: Set(turma.professor_id()),
            curso_id: Set(turma.curso_id()),
        }
    }
}

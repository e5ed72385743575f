use models::{Matricula, MotivoCancelamento, StatusMatricula};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matriculas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub aluno_id: Uuid,
    pub curso_id: Uuid,
    pub turma_id: Option<Uuid>,
    pub data_matricula: Date,
    pub data_conclusao: Option<Date>,
    pub nota_final: Option<f64>,
    pub status: StatusMatricula,
    pub motivo_cancelamento: Option<MotivoCancelamento>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::alunos::Entity",
        from = "Column::AlunoId",
        to = "super::alunos::Column::Id"
    )]
    Aluno,
    #[sea_orm(
        belongs_to = "super::cursos::Entity",
        from = "Column::CursoId",
        to = "super::cursos::Column::Id"
    )]
    Curso,
    #[sea_orm(
        belongs_to = "super::turmas::Entity",
        from = "Column::TurmaId",
        to = "super::turmas::Column::Id"
    )]
    Turma,
}

impl Related<super::alunos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aluno.def()
    }
}

impl Related<super::cursos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curso.def()
    }
}

impl Related<super::turmas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turma.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Matricula {
    fn from(model: Model) -> Self {
        Matricula::from_persistence(
            model.id,
            model.aluno_id,
            model.curso_id,
            model.turma_id,
            model.data_matricula,
            model.data_conclusao,
            model.nota_final,
            model.status,
            model.motivo_cancelamento,
        )
    }
}

impl From<&Matricula> for ActiveModel {
    fn from(matricula: &Matricula) -> Self {
        Self {
            id: Set(matricula.id()),
            aluno_id: Set(matricula.aluno_id()),
            curso_id: Set(matricula.curso_id()),
            turma_id: Set(matricula.turma_id()),
            data_matricula: Set(matricula.data_matricula()),
            data_conclusao: Set(matricula.data_conclusao()),
            nota_final: Set(matricula.nota_final()),
            status: Set(matricula.status()),
            motivo_cancelamento: Set(matricula.motivo_cancelamento()),
        }
    }
}

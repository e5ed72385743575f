use models::{CategoriaCurso, Curso, NivelCurso, StatusCurso};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cursos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub nome: String,
    #[sea_orm(column_type = "Text")]
    pub descricao: String,
    pub carga_horaria_total: i32,
    pub duracao_meses: i32,
    pub nivel: NivelCurso,
    pub categoria: CategoriaCurso,
    pub status: StatusCurso,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::turmas::Entity")]
    Turmas,
    #[sea_orm(has_many = "super::matriculas::Entity")]
    Matriculas,
    #[sea_orm(has_many = "super::curso_professores::Entity")]
    CursoProfessores,
}

impl Related<super::turmas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turmas.def()
    }
}

impl Related<super::matriculas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matriculas.def()
    }
}

impl Related<super::professores::Entity> for Entity {
    fn to() -> RelationDef {
        super::curso_professores::Relation::Professor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::curso_professores::Relation::Curso.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rebuilds the domain course with the ids read from `curso_professores`
    pub fn into_curso(self, professores: Vec<Uuid>) -> Curso {
        Curso::from_persistence(
            self.id,
            self.nome,
            self.descricao,
            self.carga_horaria_total,
            self.duracao_meses,
            self.nivel,
            self.categoria,
            self.status,
            professores,
        )
    }
}

impl From<&Curso> for ActiveModel {
    fn from(curso: &Curso) -> Self {
        Self {
            id: Set(curso.id()),
            nome: Set(curso.nome().to_owned()),
            descricao: Set(curso.descricao().to_owned()),
            carga_horaria_total: Set(curso.carga_horaria_total()),
            duracao_meses: Set(curso.duracao_meses()),
            nivel: Set(curso.nivel()),
            categoria: Set(curso.categoria()),
            status: Set(curso.status()),
        }
    }
}

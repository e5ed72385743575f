use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table for the many-to-many link between courses and professors
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "curso_professores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub curso_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub professor_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cursos::Entity",
        from = "Column::CursoId",
        to = "super::cursos::Column::Id"
    )]
    Curso,
    #[sea_orm(
        belongs_to = "super::professores::Entity",
        from = "Column::ProfessorId",
        to = "super::professores::Column::Id"
    )]
    Professor,
}

impl Related<super::cursos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curso.def()
    }
}

impl Related<super::professores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

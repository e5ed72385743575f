use super::alunos::endereco_columns;
use models::{Endereco, Modalidade, Professor, StatusProfessor};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "professores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nome: String,
    #[sea_orm(unique)]
    pub email: String,
    pub data_nascimento: Date,
    pub telefone: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub modalidade: Modalidade,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
    pub status: StatusProfessor,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::turmas::Entity")]
    Turmas,
    #[sea_orm(has_many = "super::curso_professores::Entity")]
    CursoProfessores,
}

impl Related<super::turmas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turmas.def()
    }
}

impl Related<super::cursos::Entity> for Entity {
    fn to() -> RelationDef {
        super::curso_professores::Relation::Curso.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::curso_professores::Relation::Professor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Professor {
    fn from(model: Model) -> Self {
        let endereco = model.logradouro.map(|logradouro| Endereco {
            logradouro,
            bairro: model.bairro.unwrap_or_default(),
            cep: model.cep.unwrap_or_default(),
            numero: model.numero.unwrap_or_default(),
            complemento: model.complemento,
            cidade: model.cidade.unwrap_or_default(),
            uf: model.uf.unwrap_or_default(),
        });

        Professor::from_persistence(
            model.id,
            model.nome,
            model.email,
            model.data_nascimento,
            model.telefone,
            model.cpf,
            model.modalidade,
            endereco,
            model.status,
        )
    }
}

impl From<&Professor> for ActiveModel {
    fn from(professor: &Professor) -> Self {
        let [logradouro, bairro, cep, numero, complemento, cidade, uf] =
            endereco_columns(professor.endereco());

        Self {
            id: Set(professor.id()),
            nome: Set(professor.nome().to_owned()),
            email: Set(professor.email().to_owned()),
            data_nascimento: Set(professor.data_nascimento()),
            telefone: Set(professor.telefone().to_owned()),
            cpf: Set(professor.cpf().to_owned()),
            modalidade: Set(professor.modalidade()),
            logradouro: Set(logradouro),
            bairro: Set(bairro),
            cep: Set(cep),
            numero: Set(numero),
            complemento: Set(complemento),
            cidade: Set(cidade),
            uf: Set(uf),
            status: Set(professor.status()),
        }
    }
}

use models::{Aluno, Endereco, StatusAluno};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "alunos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nome: String,
    #[sea_orm(unique)]
    pub email: String,
    pub telefone: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub data_nascimento: Date,
    // Address columns, all null when the student has no address
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
    pub status: StatusAluno,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::matriculas::Entity")]
    Matriculas,
}

impl Related<super::matriculas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matriculas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    fn endereco(&self) -> Option<Endereco> {
        let logradouro = self.logradouro.clone()?;
        Some(Endereco {
            logradouro,
            bairro: self.bairro.clone().unwrap_or_default(),
            cep: self.cep.clone().unwrap_or_default(),
            numero: self.numero.clone().unwrap_or_default(),
            complemento: self.complemento.clone(),
            cidade: self.cidade.clone().unwrap_or_default(),
            uf: self.uf.clone().unwrap_or_default(),
        })
    }
}

impl From<Model> for Aluno {
    fn from(model: Model) -> Self {
        let endereco = model.endereco();
        Aluno::from_persistence(
            model.id,
            model.nome,
            model.email,
            model.telefone,
            model.cpf,
            model.data_nascimento,
            endereco,
            model.status,
        )
    }
}

impl From<&Aluno> for ActiveModel {
    fn from(aluno: &Aluno) -> Self {
        let [logradouro, bairro, cep, numero, complemento, cidade, uf] =
            endereco_columns(aluno.endereco());

        Self {
            id: Set(aluno.id()),
            nome: Set(aluno.nome().to_owned()),
            email: Set(aluno.email().to_owned()),
            telefone: Set(aluno.telefone().to_owned()),
            cpf: Set(aluno.cpf().to_owned()),
            data_nascimento: Set(aluno.data_nascimento()),
            logradouro: Set(logradouro),
            bairro: Set(bairro),
            cep: Set(cep),
            numero: Set(numero),
            complemento: Set(complemento),
            cidade: Set(cidade),
            uf: Set(uf),
            status: Set(aluno.status()),
        }
    }
}

/// Splits an optional address into its nullable columns
pub(crate) fn endereco_columns(endereco: Option<&Endereco>) -> [Option<String>; 7] {
    match endereco {
        Some(e) => [
            Some(e.logradouro.clone()),
            Some(e.bairro.clone()),
            Some(e.cep.clone()),
            Some(e.numero.clone()),
            e.complemento.clone(),
            Some(e.cidade.clone()),
            Some(e.uf.clone()),
        ],
        None => Default::default(),
    }
}

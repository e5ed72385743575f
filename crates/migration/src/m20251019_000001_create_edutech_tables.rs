use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alunos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Alunos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Alunos::Nome).string().not_null())
                    .col(ColumnDef::new(Alunos::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Alunos::Telefone).string().not_null())
                    .col(ColumnDef::new(Alunos::Cpf).string().not_null().unique_key())
                    .col(ColumnDef::new(Alunos::DataNascimento).date().not_null())
                    .col(ColumnDef::new(Alunos::Logradouro).string())
                    .col(ColumnDef::new(Alunos::Bairro).string())
                    .col(ColumnDef::new(Alunos::Cep).string())
                    .col(ColumnDef::new(Alunos::Numero).string())
                    .col(ColumnDef::new(Alunos::Complemento).string())
                    .col(ColumnDef::new(Alunos::Cidade).string())
                    .col(ColumnDef::new(Alunos::Uf).string())
                    .col(ColumnDef::new(Alunos::Status).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Professores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professores::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professores::Nome).string().not_null())
                    .col(
                        ColumnDef::new(Professores::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professores::DataNascimento).date().not_null())
                    .col(ColumnDef::new(Professores::Telefone).string().not_null())
                    .col(
                        ColumnDef::new(Professores::Cpf)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professores::Modalidade).text().not_null())
                    .col(ColumnDef::new(Professores::Logradouro).string())
                    .col(ColumnDef::new(Professores::Bairro).string())
                    .col(ColumnDef::new(Professores::Cep).string())
                    .col(ColumnDef::new(Professores::Numero).string())
                    .col(ColumnDef::new(Professores::Complemento).string())
                    .col(ColumnDef::new(Professores::Cidade).string())
                    .col(ColumnDef::new(Professores::Uf).string())
                    .col(ColumnDef::new(Professores::Status).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cursos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cursos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cursos::Nome).string().not_null().unique_key())
                    .col(ColumnDef::new(Cursos::Descricao).text().not_null())
                    .col(
                        ColumnDef::new(Cursos::CargaHorariaTotal)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Cursos::DuracaoMeses).integer().not_null())
                    .col(ColumnDef::new(Cursos::Nivel).text().not_null())
                    .col(ColumnDef::new(Cursos::Categoria).text().not_null())
                    .col(ColumnDef::new(Cursos::Status).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Many-to-many between courses and professors
        manager
            .create_table(
                Table::create()
                    .table(CursoProfessores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CursoProfessores::CursoId).uuid().not_null())
                    .col(
                        ColumnDef::new(CursoProfessores::ProfessorId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CursoProfessores::CursoId)
                            .col(CursoProfessores::ProfessorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curso_professores-curso_id")
                            .from(CursoProfessores::Table, CursoProfessores::CursoId)
                            .to(Cursos::Table, Cursos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-curso_professores-professor_id")
                            .from(CursoProfessores::Table, CursoProfessores::ProfessorId)
                            .to(Professores::Table, Professores::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Turmas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Turmas::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Turmas::Codigo).string().not_null().unique_key())
                    .col(ColumnDef::new(Turmas::DataInicio).date().not_null())
                    .col(ColumnDef::new(Turmas::DataFim).date().not_null())
                    .col(ColumnDef::new(Turmas::HorarioInicio).time().not_null())
                    .col(ColumnDef::new(Turmas::HorarioFim).time().not_null())
                    .col(ColumnDef::new(Turmas::VagasTotais).integer().not_null())
                    .col(ColumnDef::new(Turmas::Modalidade).text().not_null())
                    .col(ColumnDef::new(Turmas::Status).text().not_null())
                    .col(ColumnDef::new(Turmas::ProfessorId).uuid())
                    .col(ColumnDef::new(Turmas::CursoId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-turmas-professor_id")
                            .from(Turmas::Table, Turmas::ProfessorId)
                            .to(Professores::Table, Professores::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-turmas-curso_id")
                            .from(Turmas::Table, Turmas::CursoId)
                            .to(Cursos::Table, Cursos::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Matriculas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matriculas::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Matriculas::AlunoId).uuid().not_null())
                    .col(ColumnDef::new(Matriculas::CursoId).uuid().not_null())
                    .col(ColumnDef::new(Matriculas::TurmaId).uuid())
                    .col(ColumnDef::new(Matriculas::DataMatricula).date().not_null())
                    .col(ColumnDef::new(Matriculas::DataConclusao).date())
                    .col(ColumnDef::new(Matriculas::NotaFinal).double())
                    .col(ColumnDef::new(Matriculas::Status).text().not_null())
                    .col(ColumnDef::new(Matriculas::MotivoCancelamento).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-matriculas-aluno_id")
                            .from(Matriculas::Table, Matriculas::AlunoId)
                            .to(Alunos::Table, Alunos::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-matriculas-curso_id")
                            .from(Matriculas::Table, Matriculas::CursoId)
                            .to(Cursos::Table, Cursos::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-matriculas-turma_id")
                            .from(Matriculas::Table, Matriculas::TurmaId)
                            .to(Turmas::Table, Turmas::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matriculas::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Turmas::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CursoProfessores::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Cursos::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Professores::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Alunos::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Alunos {
    Table,
    Id,
    Nome,
    Email,
    Telefone,
    Cpf,
    DataNascimento,
    Logradouro,
    Bairro,
    Cep,
    Numero,
    Complemento,
    Cidade,
    Uf,
    Status,
}

#[derive(Iden)]
enum Professores {
    Table,
    Id,
    Nome,
    Email,
    DataNascimento,
    Telefone,
    Cpf,
    Modalidade,
    Logradouro,
    Bairro,
    Cep,
    Numero,
    Complemento,
    Cidade,
    Uf,
    Status,
}

#[derive(Iden)]
enum Cursos {
    Table,
    Id,
    Nome,
    Descricao,
    CargaHorariaTotal,
    DuracaoMeses,
    Nivel,
    Categoria,
    Status,
}

#[derive(Iden)]
enum CursoProfessores {
    Table,
    CursoId,
    ProfessorId,
}

#[derive(Iden)]
enum Turmas {
    Table,
    Id,
    Codigo,
    DataInicio,
    DataFim,
    HorarioInicio,
    HorarioFim,
    VagasTotais,
    Modalidade,
    Status,
    ProfessorId,
    CursoId,
}

#[derive(Iden)]
enum Matriculas {
    Table,
    Id,
    AlunoId,
    CursoId,
    TurmaId,
    DataMatricula,
    DataConclusao,
    NotaFinal,
    Status,
    MotivoCancelamento,
}

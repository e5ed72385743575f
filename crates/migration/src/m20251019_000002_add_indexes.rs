use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Name lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_alunos_nome")
                    .table(Alunos::Table)
                    .col(Alunos::Nome)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_professores_nome")
                    .table(Professores::Table)
                    .col(Professores::Nome)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cursos_nivel")
                    .table(Cursos::Table)
                    .col(Cursos::Nivel)
                    .to_owned(),
            )
            .await?;

        // Reverse side of the course/professor link
        manager
            .create_index(
                Index::create()
                    .name("idx_curso_professores_professor_id")
                    .table(CursoProfessores::Table)
                    .col(CursoProfessores::ProfessorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matriculas_aluno_id")
                    .table(Matriculas::Table)
                    .col(Matriculas::AlunoId)
                    .to_owned(),
            )
            .await?;

        // Seat counting per section
        manager
            .create_index(
                Index::create()
                    .name("idx_matriculas_turma_id")
                    .table(Matriculas::Table)
                    .col(Matriculas::TurmaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("idx_matriculas_turma_id", Matriculas::Table.into_iden()),
            ("idx_matriculas_aluno_id", Matriculas::Table.into_iden()),
            (
                "idx_curso_professores_professor_id",
                CursoProfessores::Table.into_iden(),
            ),
            ("idx_cursos_nivel", Cursos::Table.into_iden()),
            ("idx_professores_nome", Professores::Table.into_iden()),
            ("idx_alunos_nome", Alunos::Table.into_iden()),
        ] {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Alunos {
    Table,
    Nome,
}

#[derive(Iden)]
enum Professores {
    Table,
    Nome,
}

#[derive(Iden)]
enum Cursos {
    Table,
    Nivel,
}

#[derive(Iden)]
enum CursoProfessores {
    Table,
    ProfessorId,
}

#[derive(Iden)]
enum Matriculas {
    Table,
    AlunoId,
    TurmaId,
}

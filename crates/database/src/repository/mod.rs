//! Persistence collaborator used by the services.
//!
//! Every `save_*` is an insert-or-update keyed by the entity id. Paginated
//! listings take a 1-based `page` and return the page items together with the
//! total number of matching rows.

#[cfg(any(test, feature = "memory"))]
mod memory;
mod postgres;

#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryRepository;
pub use postgres::SeaOrmRepository;

use async_trait::async_trait;
use models::{
    Aluno, Curso, Matricula, Modalidade, NivelCurso, Professor, StatusAluno, Turma,
};
use sea_orm::DbErr;
use uuid::Uuid;

/// One page of results plus the total item count
pub type Page<T> = (Vec<T>, u64);

#[async_trait]
pub trait Repository: Send + Sync {
    async fn find_aluno(&self, id: Uuid) -> Result<Option<Aluno>, DbErr>;
    async fn save_aluno(&self, aluno: &Aluno) -> Result<Aluno, DbErr>;
    /// Case-insensitive substring match on the name
    async fn find_alunos_by_nome(&self, nome: &str) -> Result<Vec<Aluno>, DbErr>;
    async fn find_alunos(
        &self,
        status: Option<StatusAluno>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Aluno>, DbErr>;
    async fn exists_aluno_email(&self, email: &str) -> Result<bool, DbErr>;
    async fn exists_aluno_cpf(&self, cpf: &str) -> Result<bool, DbErr>;

    async fn find_professor(&self, id: Uuid) -> Result<Option<Professor>, DbErr>;
    async fn save_professor(&self, professor: &Professor) -> Result<Professor, DbErr>;
    async fn find_professores_by_nome(&self, nome: &str) -> Result<Vec<Professor>, DbErr>;
    async fn find_professores_by_modalidade(
        &self,
        modalidade: Modalidade,
    ) -> Result<Vec<Professor>, DbErr>;
    async fn find_professores(&self, page: u64, per_page: u64) -> Result<Page<Professor>, DbErr>;
    async fn exists_professor_email(&self, email: &str) -> Result<bool, DbErr>;
    async fn exists_professor_cpf(&self, cpf: &str) -> Result<bool, DbErr>;

    async fn find_curso(&self, id: Uuid) -> Result<Option<Curso>, DbErr>;
    /// Also rewrites the course's professor links
    async fn save_curso(&self, curso: &Curso) -> Result<Curso, DbErr>;
    /// Exact name match
    async fn find_curso_by_nome(&self, nome: &str) -> Result<Option<Curso>, DbErr>;
    async fn find_cursos_by_nivel(&self, nivel: NivelCurso) -> Result<Vec<Curso>, DbErr>;
    /// Courses whose total workload lies in `min..=max`
    async fn find_cursos_by_carga_horaria(&self, min: i32, max: i32)
    -> Result<Vec<Curso>, DbErr>;
    async fn find_cursos(&self, page: u64, per_page: u64) -> Result<Page<Curso>, DbErr>;
    async fn find_cursos_by_professor(&self, professor_id: Uuid) -> Result<Vec<Curso>, DbErr>;

    /// Loads the section together with the ids of its enrollments
    async fn find_turma(&self, id: Uuid) -> Result<Option<Turma>, DbErr>;
    async fn save_turma(&self, turma: &Turma) -> Result<Turma, DbErr>;
    async fn find_turma_by_codigo(&self, codigo: &str) -> Result<Option<Turma>, DbErr>;
    async fn find_turmas(&self, page: u64, per_page: u64) -> Result<Page<Turma>, DbErr>;

    async fn find_matricula(&self, id: Uuid) -> Result<Option<Matricula>, DbErr>;
    async fn save_matricula(&self, matricula: &Matricula) -> Result<Matricula, DbErr>;
    async fn find_matriculas_by_aluno(&self, aluno_id: Uuid) -> Result<Vec<Matricula>, DbErr>;
    /// Enrollments of every student whose name contains `nome`, ignoring case
    async fn find_matriculas_by_aluno_nome(&self, nome: &str) -> Result<Vec<Matricula>, DbErr>;
    async fn find_matriculas(&self, page: u64, per_page: u64) -> Result<Page<Matricula>, DbErr>;
}

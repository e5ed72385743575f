//! Application services.
//!
//! Each service is a stateless unit struct whose associated functions take
//! the [`Repository`](crate::Repository) as their first argument. Every
//! validation runs before the first write, so a rejected operation leaves
//! the store untouched.

pub mod aluno;
pub mod curso;
pub mod matricula;
pub mod professor;
pub mod turma;
pub mod validadores;

pub use aluno::{AlunoService, AtualizacaoAluno, NovoAluno};
pub use curso::{AtualizacaoCurso, CursoService, NovoCurso};
pub use matricula::{MatriculaCompleta, MatriculaService, NovaMatricula};
pub use professor::{AtualizacaoProfessor, NovoProfessor, ProfessorService};
pub use turma::{AtualizacaoTurma, NovaTurma, TurmaService};

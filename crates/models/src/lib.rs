//! Domain entities of the EduTech API.
//!
//! Every entity owns its invariants: fields are private, state only changes
//! through the entity's own methods, and every rule violation surfaces as a
//! [`ValidationError`]. Nothing in this crate performs I/O.

pub mod aluno;
pub mod curso;
pub mod endereco;
pub mod error;
pub mod matricula;
pub mod modalidade;
pub mod professor;
pub mod turma;

pub use aluno::{Aluno, StatusAluno};
pub use curso::{CategoriaCurso, Curso, NivelCurso, StatusCurso};
pub use endereco::Endereco;
pub use error::{ValidationError, ValidationResult};
pub use matricula::{Matricula, MotivoCancelamento, StatusMatricula};
pub use modalidade::Modalidade;
pub use professor::{Professor, StatusProfessor};
pub use turma::{StatusTurma, Turma};

use chrono::{Local, NaiveDate};

/// Current calendar date in the server's local time zone
pub fn hoje() -> NaiveDate {
    Local::now().date_naive()
}

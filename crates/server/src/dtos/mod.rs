pub mod aluno;
pub mod common;
pub mod curso;
pub mod matricula;
pub mod professor;
pub mod turma;

pub mod alunos;
pub mod auth;
pub mod cursos;
pub mod health;
pub mod matriculas;
pub mod professores;
pub mod turmas;

pub mod alunos;
pub mod curso_professores;
pub mod cursos;
pub mod matriculas;
pub mod professores;
pub mod turmas;

use crate::routes::{alunos, auth, cursos, health, matriculas, professores, turmas};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::me,
        alunos::create_aluno,
        alunos::get_alunos,
        alunos::search_alunos,
        alunos::get_aluno_by_id,
        alunos::update_aluno,
        alunos::delete_aluno,
        professores::create_professor,
        professores::get_professores,
        professores::search_professores,
        professores::get_professores_by_modalidade,
        professores::get_professor_by_id,
        professores::update_professor,
        professores::delete_professor,
        professores::get_cursos_do_professor,
        cursos::create_curso,
        cursos::get_cursos,
        cursos::get_curso_by_nome,
        cursos::get_cursos_by_nivel,
        cursos::get_cursos_by_carga_horaria,
        cursos::get_curso_by_id,
        cursos::update_curso,
        cursos::ativar_curso,
        cursos::inativar_curso,
        cursos::vincular_professor,
        cursos::desvincular_professor,
        turmas::create_turma,
        turmas::get_turmas,
        turmas::get_turma_by_codigo,
        turmas::get_turma_by_id,
        turmas::update_turma,
        turmas::iniciar_turma,
        turmas::concluir_turma,
        turmas::cancelar_turma,
        turmas::vincular_professor,
        turmas::desvincular_professor,
        turmas::vincular_curso,
        turmas::desvincular_curso,
        matriculas::create_matricula,
        matriculas::get_matriculas,
        matriculas::search_matriculas,
        matriculas::get_matricula_by_id,
        matriculas::concluir_matricula,
        matriculas::trancar_matricula,
        matriculas::reativar_matricula,
        matriculas::cancelar_matricula
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Alunos", description = "Student registry"),
        (name = "Professores", description = "Professor registry"),
        (name = "Cursos", description = "Course catalog and professor links"),
        (name = "Turmas", description = "Sections and their lifecycle"),
        (name = "Matriculas", description = "Enrollments and their lifecycle"),
    ),
    info(
        title = "EduTech API",
        version = "1.0.0",
        description = "Student, course, section and enrollment management",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

use crate::{
    dtos::{
        common::{NomeQuery, PageParams, PaginationMeta, pagina},
        curso::CursoResponse,
        professor::{
            PaginatedProfessoresResponse, ProfessorCreateRequest, ProfessorResponse,
            ProfessorUpdateRequest,
        },
    },
    error::{ApiError, ErrorResponse},
    extract::Payload,
    state::AppState,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use database::services::{CursoService, ProfessorService};
use models::Modalidade;
use uuid::Uuid;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/professores", get(get_professores).post(create_professor))
        .route("/professores/busca", get(search_professores))
        .route(
            "/professores/modalidade/{modalidade}",
            get(get_professores_by_modalidade),
        )
        .route(
            "/professores/{id}",
            get(get_professor_by_id)
                .put(update_professor)
                .delete(delete_professor),
        )
        .route("/professores/{id}/cursos", get(get_cursos_do_professor))
}

#[utoipa::path(
    post,
    path = "/professores",
    request_body = ProfessorCreateRequest,
    responses(
        (status = 201, description = "Professor created", body = ProfessorResponse),
        (status = 400, description = "Invalid data or duplicated e-mail/CPF", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Professores"
)]
pub async fn create_professor(
    State(state): State<AppState>,
    Payload(req): Payload<ProfessorCreateRequest>,
) -> Result<(StatusCode, Json<ProfessorResponse>), ApiError> {
    let professor = ProfessorService::cadastrar(state.repo.as_ref(), req.into()).await?;
    Ok((StatusCode::CREATED, Json(professor.into())))
}

#[utoipa::path(
    get,
    path = "/professores",
    params(PageParams),
    responses(
        (status = 200, description = "Professors retrieved", body = PaginatedProfessoresResponse)
    ),
    security(("jwt" = [])),
    tag = "Professores"
)]
pub async fn get_professores(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PaginatedProfessoresResponse>, ApiError> {
    let (page, per_page) = pagina(params.page, params.per_page);
    let (professores, total) =
        ProfessorService::buscar_todos(state.repo.as_ref(), page, per_page).await?;

    Ok(Json(PaginatedProfessoresResponse {
        items: professores.into_iter().map(Into::into).collect(),
        pagination: PaginationMeta::new(page, per_page, total),
    }))
}

#[utoipa::path(
    get,
    path = "/professores/busca",
    params(NomeQuery),
    responses(
        (status = 200, description = "Matching professors", body = Vec<ProfessorResponse>),
        (status = 400, description = "Blank name or no match", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Professores"
)]
pub async fn search_professores(
    State(state): State<AppState>,
    Query(query): Query<NomeQuery>,
) -> Result<Json<Vec<ProfessorResponse>>, ApiError> {
    let professores = ProfessorService::buscar_por_nome(state.repo.as_ref(), &query.nome).await?;
    Ok(Json(professores.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/professores/modalidade/{modalidade}",
    params(("modalidade" = String, Path, description = "PRESENCIAL, EAD or HIBRIDO")),
    responses(
        (status = 200, description = "Professors teaching in the given mode", body = Vec<ProfessorResponse>)
    ),
    security(("jwt" = [])),
    tag = "Professores"
)]
pub async fn get_professores_by_modalidade(
    State(state): State<AppState>,
    Path(modalidade): Path<Modalidade>,
) -> Result<Json<Vec<ProfessorResponse>>, ApiError> {
    let professores =
        ProfessorService::buscar_por_modalidade(state.repo.as_ref(), modalidade).await?;
    Ok(Json(professores.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/professores/{id}",
    params(("id" = Uuid, Path, description = "Professor id")),
    responses(
        (status = 200, description = "Professor found", body = ProfessorResponse),
        (status = 400, description = "Professor not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Professores"
)]
pub async fn get_professor_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfessorResponse>, ApiError> {
    let professor = ProfessorService::buscar_por_id(state.repo.as_ref(), id).await?;
    Ok(Json(professor.into()))
}

#[utoipa::path(
    put,
    path = "/professores/{id}",
    params(("id" = Uuid, Path, description = "Professor id")),
    request_body = ProfessorUpdateRequest,
    responses(
        (status = 200, description = "Professor updated", body = ProfessorResponse),
        (status = 400, description = "Invalid data or professor not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Professores"
)]
pub async fn update_professor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Payload(req): Payload<ProfessorUpdateRequest>,
) -> Result<Json<ProfessorResponse>, ApiError> {
    let professor = ProfessorService::atualizar(state.repo.as_ref(), id, req.into()).await?;
    Ok(Json(professor.into()))
}

/// Soft delete: the professor is kept with status INATIVO
#[utoipa::path(
    delete,
    path = "/professores/{id}",
    params(("id" = Uuid, Path, description = "Professor id")),
    responses(
        (status = 204, description = "Professor deactivated"),
        (status = 400, description = "Professor not found, on leave or inactive", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Professores"
)]
pub async fn delete_professor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ProfessorService::excluir(state.repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/professores/{id}/cursos",
    params(("id" = Uuid, Path, description = "Professor id")),
    responses(
        (status = 200, description = "Courses the professor is linked to", body = Vec<CursoResponse>),
        (status = 400, description = "Professor not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Professores"
)]
pub async fn get_cursos_do_professor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CursoResponse>>, ApiError> {
    let cursos = CursoService::listar_cursos_do_professor(state.repo.as_ref(), id).await?;
    Ok(Json(cursos.into_iter().map(Into::into).collect()))
}

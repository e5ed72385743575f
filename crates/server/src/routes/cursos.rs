use crate::{
    dtos::{
        common::{NomeQuery, PageParams, PaginationMeta, pagina},
        curso::{
            CargaHorariaQuery, CursoCreateRequest, CursoResponse, CursoUpdateRequest,
            PaginatedCursosResponse,
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
    routing::{get, patch, post},
};
use database::services::CursoService;
use models::NivelCurso;
use uuid::Uuid;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cursos", get(get_cursos).post(create_curso))
        .route("/cursos/busca", get(get_curso_by_nome))
        .route("/cursos/nivel/{nivel}", get(get_cursos_by_nivel))
        .route("/cursos/carga-horaria", get(get_cursos_by_carga_horaria))
        .route("/cursos/{id}", get(get_curso_by_id).put(update_curso))
        .route("/cursos/{id}/ativar", patch(ativar_curso))
        .route("/cursos/{id}/inativar", patch(inativar_curso))
        .route(
            "/cursos/{id}/professores/{professor_id}",
            post(vincular_professor).delete(desvincular_professor),
        )
}

#[utoipa::path(
    post,
    path = "/cursos",
    request_body = CursoCreateRequest,
    responses(
        (status = 201, description = "Course created", body = CursoResponse),
        (status = 400, description = "Invalid data or duplicated name", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn create_curso(
    State(state): State<AppState>,
    Payload(req): Payload<CursoCreateRequest>,
) -> Result<(StatusCode, Json<CursoResponse>), ApiError> {
    let curso = CursoService::cadastrar(state.repo.as_ref(), req.into()).await?;
    Ok((StatusCode::CREATED, Json(curso.into())))
}

#[utoipa::path(
    get,
    path = "/cursos",
    params(PageParams),
    responses(
        (status = 200, description = "Courses retrieved", body = PaginatedCursosResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn get_cursos(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PaginatedCursosResponse>, ApiError> {
    let (page, per_page) = pagina(params.page, params.per_page);
    let (cursos, total) =
        CursoService::buscar_todos(state.repo.as_ref(), page, per_page).await?;

    Ok(Json(PaginatedCursosResponse {
        items: cursos.into_iter().map(Into::into).collect(),
        pagination: PaginationMeta::new(page, per_page, total),
    }))
}

/// Find a course by its exact name
#[utoipa::path(
    get,
    path = "/cursos/busca",
    params(NomeQuery),
    responses(
        (status = 200, description = "Course found", body = CursoResponse),
        (status = 400, description = "Course not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn get_curso_by_nome(
    State(state): State<AppState>,
    Query(query): Query<NomeQuery>,
) -> Result<Json<CursoResponse>, ApiError> {
    let curso = CursoService::buscar_por_nome(state.repo.as_ref(), &query.nome).await?;
    Ok(Json(curso.into()))
}

#[utoipa::path(
    get,
    path = "/cursos/nivel/{nivel}",
    params(("nivel" = String, Path, description = "BASICO, INTERMEDIARIO or AVANCADO")),
    responses(
        (status = 200, description = "Courses at the given level", body = Vec<CursoResponse>)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn get_cursos_by_nivel(
    State(state): State<AppState>,
    Path(nivel): Path<NivelCurso>,
) -> Result<Json<Vec<CursoResponse>>, ApiError> {
    let cursos = CursoService::buscar_por_nivel(state.repo.as_ref(), Some(nivel)).await?;
    Ok(Json(cursos.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/cursos/carga-horaria",
    params(CargaHorariaQuery),
    responses(
        (status = 200, description = "Courses within the workload range", body = Vec<CursoResponse>),
        (status = 400, description = "Minimum greater than maximum", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn get_cursos_by_carga_horaria(
    State(state): State<AppState>,
    Query(query): Query<CargaHorariaQuery>,
) -> Result<Json<Vec<CursoResponse>>, ApiError> {
    let cursos =
        CursoService::buscar_por_carga_horaria(state.repo.as_ref(), query.min, query.max).await?;
    Ok(Json(cursos.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/cursos/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = CursoResponse),
        (status = 400, description = "Course not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn get_curso_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CursoResponse>, ApiError> {
    let curso = CursoService::buscar_por_id(state.repo.as_ref(), id).await?;
    Ok(Json(curso.into()))
}

#[utoipa::path(
    put,
    path = "/cursos/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = CursoUpdateRequest,
    responses(
        (status = 200, description = "Course updated", body = CursoResponse),
        (status = 400, description = "Invalid data or course not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn update_curso(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Payload(req): Payload<CursoUpdateRequest>,
) -> Result<Json<CursoResponse>, ApiError> {
    let curso = CursoService::atualizar(state.repo.as_ref(), id, req.into()).await?;
    Ok(Json(curso.into()))
}

#[utoipa::path(
    patch,
    path = "/cursos/{id}/ativar",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course activated", body = CursoResponse),
        (status = 400, description = "Course not found or already active", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn ativar_curso(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CursoResponse>, ApiError> {
    let curso = CursoService::ativar(state.repo.as_ref(), id).await?;
    Ok(Json(curso.into()))
}

#[utoipa::path(
    patch,
    path = "/cursos/{id}/inativar",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deactivated", body = CursoResponse),
        (status = 400, description = "Course not found or already inactive", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn inativar_curso(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CursoResponse>, ApiError> {
    let curso = CursoService::inativar(state.repo.as_ref(), id).await?;
    Ok(Json(curso.into()))
}

#[utoipa::path(
    post,
    path = "/cursos/{id}/professores/{professor_id}",
    params(
        ("id" = Uuid, Path, description = "Course id"),
        ("professor_id" = Uuid, Path, description = "Professor id")
    ),
    responses(
        (status = 200, description = "Professor linked to the course", body = CursoResponse),
        (status = 400, description = "Course or professor not found, or professor not active", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn vincular_professor(
    State(state): State<AppState>,
    Path((id, professor_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<CursoResponse>, ApiError> {
    let curso = CursoService::vincular_professor(state.repo.as_ref(), id, professor_id).await?;
    Ok(Json(curso.into()))
}

#[utoipa::path(
    delete,
    path = "/cursos/{id}/professores/{professor_id}",
    params(
        ("id" = Uuid, Path, description = "Course id"),
        ("professor_id" = Uuid, Path, description = "Professor id")
    ),
    responses(
        (status = 200, description = "Professor unlinked from the course", body = CursoResponse),
        (status = 400, description = "Course not found or professor not linked", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Cursos"
)]
pub async fn desvincular_professor(
    State(state): State<AppState>,
    Path((id, professor_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<CursoResponse>, ApiError> {
    let curso = CursoService::desvincular_professor(state.repo.as_ref(), id, professor_id).await?;
    Ok(Json(curso.into()))
}

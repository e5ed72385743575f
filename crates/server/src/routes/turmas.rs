use crate::{
    dtos::{
        common::{PageParams, PaginationMeta, pagina},
        turma::{PaginatedTurmasResponse, TurmaCreateRequest, TurmaResponse, TurmaUpdateRequest},
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
use database::services::TurmaService;
use uuid::Uuid;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/turmas", get(get_turmas).post(create_turma))
        .route("/turmas/codigo/{codigo}", get(get_turma_by_codigo))
        .route("/turmas/{id}", get(get_turma_by_id).put(update_turma))
        .route("/turmas/{id}/iniciar", patch(iniciar_turma))
        .route("/turmas/{id}/concluir", patch(concluir_turma))
        .route("/turmas/{id}/cancelar", patch(cancelar_turma))
        .route(
            "/turmas/{id}/professor/{professor_id}",
            post(vincular_professor).delete(desvincular_professor),
        )
        .route(
            "/turmas/{id}/curso/{curso_id}",
            post(vincular_curso).delete(desvincular_curso),
        )
}

#[utoipa::path(
    post,
    path = "/turmas",
    request_body = TurmaCreateRequest,
    responses(
        (status = 201, description = "Section created", body = TurmaResponse),
        (status = 400, description = "Invalid data, duplicated code or inactive professor", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn create_turma(
    State(state): State<AppState>,
    Payload(req): Payload<TurmaCreateRequest>,
) -> Result<(StatusCode, Json<TurmaResponse>), ApiError> {
    let turma = TurmaService::cadastrar(state.repo.as_ref(), req.into()).await?;
    Ok((StatusCode::CREATED, Json(turma.into())))
}

#[utoipa::path(
    get,
    path = "/turmas",
    params(PageParams),
    responses(
        (status = 200, description = "Sections retrieved", body = PaginatedTurmasResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn get_turmas(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PaginatedTurmasResponse>, ApiError> {
    let (page, per_page) = pagina(params.page, params.per_page);
    let (turmas, total) =
        TurmaService::buscar_todas(state.repo.as_ref(), page, per_page).await?;

    Ok(Json(PaginatedTurmasResponse {
        items: turmas.into_iter().map(Into::into).collect(),
        pagination: PaginationMeta::new(page, per_page, total),
    }))
}

#[utoipa::path(
    get,
    path = "/turmas/codigo/{codigo}",
    params(("codigo" = String, Path, description = "Section code")),
    responses(
        (status = 200, description = "Section found", body = TurmaResponse),
        (status = 400, description = "Section not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn get_turma_by_codigo(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::buscar_por_codigo(state.repo.as_ref(), &codigo).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    get,
    path = "/turmas/{id}",
    params(("id" = Uuid, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section found", body = TurmaResponse),
        (status = 400, description = "Section not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn get_turma_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::buscar_por_id(state.repo.as_ref(), id).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    put,
    path = "/turmas/{id}",
    params(("id" = Uuid, Path, description = "Section id")),
    request_body = TurmaUpdateRequest,
    responses(
        (status = 200, description = "Section updated", body = TurmaResponse),
        (status = 400, description = "Invalid data or section not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn update_turma(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Payload(req): Payload<TurmaUpdateRequest>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::atualizar(state.repo.as_ref(), id, req.into()).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    patch,
    path = "/turmas/{id}/iniciar",
    params(("id" = Uuid, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section started", body = TurmaResponse),
        (status = 400, description = "Section not open or start date not reached", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn iniciar_turma(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::iniciar(state.repo.as_ref(), id).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    patch,
    path = "/turmas/{id}/concluir",
    params(("id" = Uuid, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section concluded", body = TurmaResponse),
        (status = 400, description = "Section not in progress or end date not reached", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn concluir_turma(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::concluir(state.repo.as_ref(), id).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    patch,
    path = "/turmas/{id}/cancelar",
    params(("id" = Uuid, Path, description = "Section id")),
    responses(
        (status = 200, description = "Section cancelled", body = TurmaResponse),
        (status = 400, description = "Section already concluded or cancelled", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn cancelar_turma(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::cancelar(state.repo.as_ref(), id).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    post,
    path = "/turmas/{id}/professor/{professor_id}",
    params(
        ("id" = Uuid, Path, description = "Section id"),
        ("professor_id" = Uuid, Path, description = "Professor id")
    ),
    responses(
        (status = 200, description = "Professor assigned", body = TurmaResponse),
        (status = 400, description = "Section or professor not found, or professor not active", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn vincular_professor(
    State(state): State<AppState>,
    Path((id, professor_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::vincular_professor(state.repo.as_ref(), id, professor_id).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    delete,
    path = "/turmas/{id}/professor/{professor_id}",
    params(
        ("id" = Uuid, Path, description = "Section id"),
        ("professor_id" = Uuid, Path, description = "Professor id")
    ),
    responses(
        (status = 200, description = "Professor unassigned", body = TurmaResponse),
        (status = 400, description = "Professor not assigned to the section", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn desvincular_professor(
    State(state): State<AppState>,
    Path((id, professor_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::desvincular_professor(state.repo.as_ref(), id, professor_id).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    post,
    path = "/turmas/{id}/curso/{curso_id}",
    params(
        ("id" = Uuid, Path, description = "Section id"),
        ("curso_id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course assigned", body = TurmaResponse),
        (status = 400, description = "Section or course not found, or course not active", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn vincular_curso(
    State(state): State<AppState>,
    Path((id, curso_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::vincular_curso(state.repo.as_ref(), id, curso_id).await?;
    Ok(Json(turma.into()))
}

#[utoipa::path(
    delete,
    path = "/turmas/{id}/curso/{curso_id}",
    params(
        ("id" = Uuid, Path, description = "Section id"),
        ("curso_id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course unassigned", body = TurmaResponse),
        (status = 400, description = "Course not assigned to the section", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Turmas"
)]
pub async fn desvincular_curso(
    State(state): State<AppState>,
    Path((id, curso_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TurmaResponse>, ApiError> {
    let turma = TurmaService::desvincular_curso(state.repo.as_ref(), id, curso_id).await?;
    Ok(Json(turma.into()))
}

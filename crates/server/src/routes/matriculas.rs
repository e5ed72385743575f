use crate::{
    dtos::{
        common::{PageParams, PaginationMeta, pagina},
        matricula::{
            CancelarMatriculaRequest, ConcluirMatriculaRequest, MatriculaBuscaQuery,
            MatriculaCreateRequest, MatriculaResponse, PaginatedMatriculasResponse,
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
    routing::{get, patch},
};
use database::services::MatriculaService;
use uuid::Uuid;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/matriculas", get(get_matriculas).post(create_matricula))
        .route("/matriculas/busca", get(search_matriculas))
        .route("/matriculas/{id}", get(get_matricula_by_id))
        .route("/matriculas/{id}/concluir", patch(concluir_matricula))
        .route("/matriculas/{id}/trancar", patch(trancar_matricula))
        .route("/matriculas/{id}/reativar", patch(reativar_matricula))
        .route("/matriculas/{id}/cancelar", patch(cancelar_matricula))
}

/// Enroll a student after running every enrollment rule
#[utoipa::path(
    post,
    path = "/matriculas",
    request_body = MatriculaCreateRequest,
    responses(
        (status = 201, description = "Enrollment created", body = MatriculaResponse),
        (status = 400, description = "An enrollment rule was violated", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Matriculas"
)]
pub async fn create_matricula(
    State(state): State<AppState>,
    Payload(req): Payload<MatriculaCreateRequest>,
) -> Result<(StatusCode, Json<MatriculaResponse>), ApiError> {
    let matricula = MatriculaService::cadastrar(state.repo.as_ref(), req.into()).await?;
    Ok((StatusCode::CREATED, Json(matricula.into())))
}

#[utoipa::path(
    get,
    path = "/matriculas",
    params(PageParams),
    responses(
        (status = 200, description = "Enrollments retrieved", body = PaginatedMatriculasResponse)
    ),
    security(("jwt" = [])),
    tag = "Matriculas"
)]
pub async fn get_matriculas(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PaginatedMatriculasResponse>, ApiError> {
    let (page, per_page) = pagina(params.page, params.per_page);
    let (matriculas, total) =
        MatriculaService::buscar_todas(state.repo.as_ref(), page, per_page).await?;

    Ok(Json(PaginatedMatriculasResponse {
        items: matriculas.into_iter().map(Into::into).collect(),
        pagination: PaginationMeta::new(page, per_page, total),
    }))
}

#[utoipa::path(
    get,
    path = "/matriculas/busca",
    params(MatriculaBuscaQuery),
    responses(
        (status = 200, description = "Enrollments of matching students", body = Vec<MatriculaResponse>),
        (status = 400, description = "No enrollment for the given name", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Matriculas"
)]
pub async fn search_matriculas(
    State(state): State<AppState>,
    Query(query): Query<MatriculaBuscaQuery>,
) -> Result<Json<Vec<MatriculaResponse>>, ApiError> {
    let matriculas =
        MatriculaService::buscar_por_nome_do_aluno(state.repo.as_ref(), &query.nome_aluno).await?;
    Ok(Json(matriculas.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/matriculas/{id}",
    params(("id" = Uuid, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Enrollment found", body = MatriculaResponse),
        (status = 400, description = "Enrollment not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Matriculas"
)]
pub async fn get_matricula_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatriculaResponse>, ApiError> {
    let matricula = MatriculaService::buscar_por_id(state.repo.as_ref(), id).await?;
    Ok(Json(matricula.into()))
}

#[utoipa::path(
    patch,
    path = "/matriculas/{id}/concluir",
    params(("id" = Uuid, Path, description = "Enrollment id")),
    request_body = ConcluirMatriculaRequest,
    responses(
        (status = 200, description = "Enrollment concluded", body = MatriculaResponse),
        (status = 400, description = "Not active, missing grade or grade below passing", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Matriculas"
)]
pub async fn concluir_matricula(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Payload(req): Payload<ConcluirMatriculaRequest>,
) -> Result<Json<MatriculaResponse>, ApiError> {
    let matricula = MatriculaService::concluir(state.repo.as_ref(), id, req.nota_final).await?;
    Ok(Json(matricula.into()))
}

#[utoipa::path(
    patch,
    path = "/matriculas/{id}/trancar",
    params(("id" = Uuid, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Enrollment suspended", body = MatriculaResponse),
        (status = 400, description = "Enrollment not active", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Matriculas"
)]
pub async fn trancar_matricula(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatriculaResponse>, ApiError> {
    let matricula = MatriculaService::trancar(state.repo.as_ref(), id).await?;
    Ok(Json(matricula.into()))
}

#[utoipa::path(
    patch,
    path = "/matriculas/{id}/reativar",
    params(("id" = Uuid, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Enrollment reactivated", body = MatriculaResponse),
        (status = 400, description = "Enrollment not suspended", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Matriculas"
)]
pub async fn reativar_matricula(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatriculaResponse>, ApiError> {
    let matricula = MatriculaService::reativar(state.repo.as_ref(), id).await?;
    Ok(Json(matricula.into()))
}

#[utoipa::path(
    patch,
    path = "/matriculas/{id}/cancelar",
    params(("id" = Uuid, Path, description = "Enrollment id")),
    request_body = CancelarMatriculaRequest,
    responses(
        (status = 200, description = "Enrollment cancelled", body = MatriculaResponse),
        (status = 400, description = "Missing reason or enrollment already concluded", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Matriculas"
)]
pub async fn cancelar_matricula(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Payload(req): Payload<CancelarMatriculaRequest>,
) -> Result<Json<MatriculaResponse>, ApiError> {
    let matricula = MatriculaService::cancelar(state.repo.as_ref(), id, req.motivo).await?;
    Ok(Json(matricula.into()))
}

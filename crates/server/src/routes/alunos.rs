use crate::{
    dtos::{
        aluno::{
            AlunoCreateRequest, AlunoQueryParams, AlunoResponse, AlunoUpdateRequest,
            PaginatedAlunosResponse,
        },
        common::{NomeQuery, PaginationMeta, pagina},
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
use database::services::AlunoService;
use uuid::Uuid;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/alunos", get(get_alunos).post(create_aluno))
        .route("/alunos/busca", get(search_alunos))
        .route(
            "/alunos/{id}",
            get(get_aluno_by_id).put(update_aluno).delete(delete_aluno),
        )
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/alunos",
    request_body = AlunoCreateRequest,
    responses(
        (status = 201, description = "Student created", body = AlunoResponse),
        (status = 400, description = "Invalid data or duplicated e-mail/CPF", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Alunos"
)]
pub async fn create_aluno(
    State(state): State<AppState>,
    Payload(req): Payload<AlunoCreateRequest>,
) -> Result<(StatusCode, Json<AlunoResponse>), ApiError> {
    let aluno = AlunoService::cadastrar(state.repo.as_ref(), req.into()).await?;
    Ok((StatusCode::CREATED, Json(aluno.into())))
}

/// Get paginated list of students, optionally filtered by status
#[utoipa::path(
    get,
    path = "/alunos",
    params(AlunoQueryParams),
    responses(
        (status = 200, description = "Students retrieved", body = PaginatedAlunosResponse)
    ),
    security(("jwt" = [])),
    tag = "Alunos"
)]
pub async fn get_alunos(
    State(state): State<AppState>,
    Query(params): Query<AlunoQueryParams>,
) -> Result<Json<PaginatedAlunosResponse>, ApiError> {
    let (page, per_page) = pagina(params.page, params.per_page);
    let repo = state.repo.as_ref();
    let (alunos, total) = match params.status {
        Some(status) => {
            AlunoService::buscar_por_status(repo, status, page, per_page).await?
        }
        None => AlunoService::buscar_todos(repo, page, per_page).await?,
    };

    Ok(Json(PaginatedAlunosResponse {
        items: alunos.into_iter().map(Into::into).collect(),
        pagination: PaginationMeta::new(page, per_page, total),
    }))
}

/// Search students by partial name
#[utoipa::path(
    get,
    path = "/alunos/busca",
    params(NomeQuery),
    responses(
        (status = 200, description = "Matching students", body = Vec<AlunoResponse>),
        (status = 400, description = "Blank name or no match", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Alunos"
)]
pub async fn search_alunos(
    State(state): State<AppState>,
    Query(query): Query<NomeQuery>,
) -> Result<Json<Vec<AlunoResponse>>, ApiError> {
    let alunos = AlunoService::buscar_por_nome(state.repo.as_ref(), &query.nome).await?;
    Ok(Json(alunos.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/alunos/{id}",
    params(("id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = AlunoResponse),
        (status = 400, description = "Student not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Alunos"
)]
pub async fn get_aluno_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AlunoResponse>, ApiError> {
    let aluno = AlunoService::buscar_por_id(state.repo.as_ref(), id).await?;
    Ok(Json(aluno.into()))
}

#[utoipa::path(
    put,
    path = "/alunos/{id}",
    params(("id" = Uuid, Path, description = "Student id")),
    request_body = AlunoUpdateRequest,
    responses(
        (status = 200, description = "Student updated", body = AlunoResponse),
        (status = 400, description = "Invalid data or student not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Alunos"
)]
pub async fn update_aluno(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Payload(req): Payload<AlunoUpdateRequest>,
) -> Result<Json<AlunoResponse>, ApiError> {
    let aluno = AlunoService::atualizar(state.repo.as_ref(), id, req.into()).await?;
    Ok(Json(aluno.into()))
}

/// Soft delete: the student is kept with status INATIVO
#[utoipa::path(
    delete,
    path = "/alunos/{id}",
    params(("id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deactivated"),
        (status = 400, description = "Student not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Alunos"
)]
pub async fn delete_aluno(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    AlunoService::excluir(state.repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

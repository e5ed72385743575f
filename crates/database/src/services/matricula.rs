use crate::{
    Page, Repository, ServiceError, ServiceResult,
    services::{
        AlunoService, CursoService, TurmaService,
        validadores::{self, ContextoMatricula},
    },
};
use chrono::NaiveDate;
use log::{debug, info};
use models::{Aluno, Curso, Matricula, MotivoCancelamento, Turma};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NovaMatricula {
    pub aluno_id: Uuid,
    pub curso_id: Uuid,
    pub turma_id: Option<Uuid>,
    pub data_matricula: Option<NaiveDate>,
}

/// An enrollment with the student, course and section it refers to
pub type MatriculaCompleta = (Matricula, Aluno, Curso, Option<Turma>);

pub struct MatriculaService;

impl MatriculaService {
    /// Runs the validator chain, then creates the enrollment and reserves
    /// its seat in the section
    pub async fn cadastrar<R: Repository + ?Sized>(
        repo: &R,
        dados: NovaMatricula,
    ) -> ServiceResult<MatriculaCompleta> {
        let aluno = repo.find_aluno(dados.aluno_id).await?;
        let curso = repo.find_curso(dados.curso_id).await?;
        let turma = match dados.turma_id {
            Some(turma_id) => repo.find_turma(turma_id).await?,
            None => None,
        };
        let matriculas_do_aluno = repo.find_matriculas_by_aluno(dados.aluno_id).await?;

        let contexto = ContextoMatricula {
            dados,
            aluno,
            curso,
            turma,
            matriculas_do_aluno,
        };
        if let Err(e) = validadores::validar(&contexto) {
            debug!(
                "Enrollment of student {} rejected: {e}",
                contexto.dados.aluno_id
            );
            return Err(e.into());
        }

        let ContextoMatricula {
            dados,
            aluno,
            curso,
            mut turma,
            ..
        } = contexto;
        let matricula = Matricula::new(
            aluno.as_ref(),
            curso.as_ref(),
            turma.as_ref(),
            dados.data_matricula,
        )?;
        let (Some(aluno), Some(curso)) = (aluno, curso) else {
            return Err(ServiceError::validacao("Aluno e curso são obrigatórios"));
        };

        let matricula = repo.save_matricula(&matricula).await?;
        if let Some(turma) = turma.as_mut() {
            turma.adicionar_matricula(matricula.id());
        }

        info!(
            "Student {} enrolled in course {} ({})",
            aluno.id(),
            curso.id(),
            matricula.id()
        );
        Ok((matricula, aluno, curso, turma))
    }

    pub async fn buscar_por_id<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
    ) -> ServiceResult<MatriculaCompleta> {
        let matricula = Self::carregar(repo, id).await?;
        Self::completar(repo, matricula).await
    }

    pub async fn buscar_por_nome_do_aluno<R: Repository + ?Sized>(
        repo: &R,
        nome: &str,
    ) -> ServiceResult<Vec<MatriculaCompleta>> {
        let nome = nome.trim();
        if nome.is_empty() {
            return Err(ServiceError::validacao("Nome do aluno é obrigatório."));
        }

        let matriculas = repo.find_matriculas_by_aluno_nome(nome).await?;
        if matriculas.is_empty() {
            return Err(ServiceError::validacao(format!(
                "Aluno não possui matricula cadastrada: '{nome}'"
            )));
        }

        let mut completas = Vec::with_capacity(matriculas.len());
        for matricula in matriculas {
            completas.push(Self::completar(repo, matricula).await?);
        }
        Ok(completas)
    }

    pub async fn buscar_todas<R: Repository + ?Sized>(
        repo: &R,
        page: u64,
        per_page: u64,
    ) -> ServiceResult<Page<MatriculaCompleta>> {
        let (matriculas, total_items) = repo.find_matriculas(page, per_page).await?;

        let mut completas = Vec::with_capacity(matriculas.len());
        for matricula in matriculas {
            completas.push(Self::completar(repo, matricula).await?);
        }
        Ok((completas, total_items))
    }

    pub async fn concluir<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
        nota_final: Option<f64>,
    ) -> ServiceResult<MatriculaCompleta> {
        let mut matricula = Self::carregar(repo, id).await?;
        matricula.concluir(nota_final)?;
        let matricula = repo.save_matricula(&matricula).await?;

        info!("Enrollment {id} completed");
        Self::completar(repo, matricula).await
    }

    pub async fn trancar<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
    ) -> ServiceResult<MatriculaCompleta> {
        let mut matricula = Self::carregar(repo, id).await?;
        matricula.trancar()?;
        let matricula = repo.save_matricula(&matricula).await?;

        info!("Enrollment {id} suspended");
        Self::completar(repo, matricula).await
    }

    pub async fn reativar<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
    ) -> ServiceResult<MatriculaCompleta> {
        let mut matricula = Self::carregar(repo, id).await?;
        matricula.reativar()?;
        let matricula = repo.save_matricula(&matricula).await?;

        info!("Enrollment {id} reactivated");
        Self::completar(repo, matricula).await
    }

    pub async fn cancelar<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
        motivo: Option<MotivoCancelamento>,
    ) -> ServiceResult<MatriculaCompleta> {
        let mut matricula = Self::carregar(repo, id).await?;
        matricula.cancelar(motivo)?;
        let matricula = repo.save_matricula(&matricula).await?;

        info!("Enrollment {id} cancelled ({:?})", matricula.motivo_cancelamento());
        Self::completar(repo, matricula).await
    }

    async fn carregar<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Matricula> {
        repo.find_matricula(id).await?.ok_or_else(|| {
            ServiceError::validacao(format!("Matricula com ID {id} não encontrada"))
        })
    }

    async fn completar<R: Repository + ?Sized>(
        repo: &R,
        matricula: Matricula,
    ) -> ServiceResult<MatriculaCompleta> {
        let aluno = AlunoService::buscar_por_id(repo, matricula.aluno_id()).await?;
        let curso = CursoService::buscar_por_id(repo, matricula.curso_id()).await?;
        let turma = match matricula.turma_id() {
            Some(turma_id) => Some(TurmaService::buscar_por_id(repo, turma_id).await?),
            None => None,
        };

        Ok((matricula, aluno, curso, turma))
    }
}

use crate::{
    Page, Repository, ServiceError, ServiceResult,
    services::{CursoService, ProfessorService},
};
use chrono::{NaiveDate, NaiveTime};
use log::{info, warn};
use models::{Modalidade, Turma};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NovaTurma {
    pub codigo: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub horario_inicio: NaiveTime,
    pub horario_fim: NaiveTime,
    pub vagas_totais: i32,
    pub modalidade: Modalidade,
    pub professor_id: Option<Uuid>,
    pub curso_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct AtualizacaoTurma {
    pub codigo: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub horario_inicio: Option<NaiveTime>,
    pub horario_fim: Option<NaiveTime>,
    pub vagas_totais: Option<i32>,
    pub modalidade: Option<Modalidade>,
}

pub struct TurmaService;

impl TurmaService {
    pub async fn cadastrar<R: Repository + ?Sized>(
        repo: &R,
        dados: NovaTurma,
    ) -> ServiceResult<Turma> {
        Self::verificar_codigo_livre(repo, &dados.codigo).await?;

        let mut turma = Turma::new(
            dados.codigo,
            dados.data_inicio,
            dados.data_fim,
            dados.horario_inicio,
            dados.horario_fim,
            dados.vagas_totais,
            dados.modalidade,
        )?;

        if let Some(professor_id) = dados.professor_id {
            let professor = ProfessorService::buscar_por_id(repo, professor_id).await?;
            if !professor.is_ativo() {
                return Err(ServiceError::validacao(
                    "Apenas professores ativos podem ser vinculados à turma",
                ));
            }
            turma.vincular_professor(&professor);
        }
        if let Some(curso_id) = dados.curso_id {
            let curso = CursoService::buscar_por_id(repo, curso_id).await?;
            turma.vincular_curso(&curso);
        }

        let turma = repo.save_turma(&turma).await?;

        info!("Registered class section {} ({})", turma.codigo(), turma.id());
        Ok(turma)
    }

    pub async fn atualizar<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
        dados: AtualizacaoTurma,
    ) -> ServiceResult<Turma> {
        let mut turma = Self::buscar_por_id(repo, id).await?;

        if let Some(codigo) = &dados.codigo
            && codigo != turma.codigo()
        {
            Self::verificar_codigo_livre(repo, codigo).await?;
        }

        turma.atualizar(
            dados.codigo,
            dados.data_inicio,
            dados.data_fim,
            dados.horario_inicio,
            dados.horario_fim,
            dados.vagas_totais,
            dados.modalidade,
        )?;

        Ok(repo.save_turma(&turma).await?)
    }

    pub async fn buscar_por_id<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Turma> {
        repo.find_turma(id)
            .await?
            .ok_or_else(|| ServiceError::validacao(format!("Turma com ID {id} não encontrada")))
    }

    pub async fn buscar_por_codigo<R: Repository + ?Sized>(
        repo: &R,
        codigo: &str,
    ) -> ServiceResult<Turma> {
        repo.find_turma_by_codigo(codigo).await?.ok_or_else(|| {
            ServiceError::validacao(format!("Turma com código '{codigo}' não encontrada"))
        })
    }

    pub async fn buscar_todas<R: Repository + ?Sized>(
        repo: &R,
        page: u64,
        per_page: u64,
    ) -> ServiceResult<Page<Turma>> {
        Ok(repo.find_turmas(page, per_page).await?)
    }

    pub async fn iniciar<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Turma> {
        let mut turma = Self::buscar_por_id(repo, id).await?;
        turma.iniciar()?;
        let turma = repo.save_turma(&turma).await?;

        info!("Class section {} started", turma.codigo());
        Ok(turma)
    }

    pub async fn concluir<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Turma> {
        let mut turma = Self::buscar_por_id(repo, id).await?;
        turma.concluir()?;
        let turma = repo.save_turma(&turma).await?;

        info!("Class section {} finished", turma.codigo());
        Ok(turma)
    }

    pub async fn cancelar<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Turma> {
        let mut turma = Self::buscar_por_id(repo, id).await?;
        turma.cancelar()?;
        let turma = repo.save_turma(&turma).await?;

        warn!("Class section {} cancelled", turma.codigo());
        Ok(turma)
    }

    pub async fn vincular_professor<R: Repository + ?Sized>(
        repo: &R,
        turma_id: Uuid,
        professor_id: Uuid,
    ) -> ServiceResult<Turma> {
        let mut turma = Self::buscar_por_id(repo, turma_id).await?;
        let professor = ProfessorService::buscar_por_id(repo, professor_id).await?;

        if !professor.is_ativo() {
            return Err(ServiceError::validacao(
                "Apenas professores ativos podem ser vinculados à turma",
            ));
        }
        turma.vincular_professor(&professor);

        Ok(repo.save_turma(&turma).await?)
    }

    pub async fn desvincular_professor<R: Repository + ?Sized>(
        repo: &R,
        turma_id: Uuid,
        professor_id: Uuid,
    ) -> ServiceResult<Turma> {
        let mut turma = Self::buscar_por_id(repo, turma_id).await?;

        if turma.professor_id() != Some(professor_id) {
            return Err(ServiceError::validacao(
                "Este professor não está vinculado à turma",
            ));
        }
        turma.desvincular_professor();

        Ok(repo.save_turma(&turma).await?)
    }

    pub async fn vincular_curso<R: Repository + ?Sized>(
        repo: &R,
        turma_id: Uuid,
        curso_id: Uuid,
    ) -> ServiceResult<Turma> {
        let mut turma = Self::buscar_por_id(repo, turma_id).await?;
        let curso = CursoService::buscar_por_id(repo, curso_id).await?;

        turma.vincular_curso(&curso);

        Ok(repo.save_turma(&turma).await?)
    }

    pub async fn desvincular_curso<R: Repository + ?Sized>(
        repo: &R,
        turma_id: Uuid,
        curso_id: Uuid,
    ) -> ServiceResult<Turma> {
        let mut turma = Self::buscar_por_id(repo, turma_id).await?;

        if turma.curso_id() != Some(curso_id) {
            return Err(ServiceError::validacao("Este curso não está vinculado à turma"));
        }
        turma.desvincular_curso();

        Ok(repo.save_turma(&turma).await?)
    }

    async fn verificar_codigo_livre<R: Repository + ?Sized>(
        repo: &R,
        codigo: &str,
    ) -> ServiceResult<()> {
        if repo.find_turma_by_codigo(codigo).await?.is_some() {
            return Err(ServiceError::validacao(format!(
                "Já existe uma turma com o código {codigo}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MemoryRepository,
        services::{AtualizacaoProfessor, NovoCurso, NovoProfessor},
    };
    use chrono::Duration;
    use models::{CategoriaCurso, NivelCurso, StatusProfessor, StatusTurma, hoje};

    fn nova_turma(codigo: &str) -> NovaTurma {
        let hoje = hoje();
        NovaTurma {
            codigo: codigo.to_string(),
            data_inicio: hoje - Duration::days(1),
            data_fim: hoje + Duration::days(60),
            horario_inicio: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            horario_fim: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            vagas_totais: 30,
            modalidade: Modalidade::Presencial,
            professor_id: None,
            curso_id: None,
        }
    }

    async fn professor(repo: &MemoryRepository) -> Uuid {
        ProfessorService::cadastrar(
            repo,
            NovoProfessor {
                nome: "Carlos".to_string(),
                email: "carlos@email.com".to_string(),
                data_nascimento: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                telefone: "(21)98765-1234".to_string(),
                cpf: "11122233344".to_string(),
                modalidade: Modalidade::Presencial,
                endereco: None,
            },
        )
        .await
        .unwrap()
        .id()
    }

    #[tokio::test]
    async fn test_cadastrar_with_links() {
        let repo = MemoryRepository::new();
        let professor_id = professor(&repo).await;
        let curso = CursoService::cadastrar(
            &repo,
            NovoCurso {
                nome: "Python".to_string(),
                descricao: "Python do zero".to_string(),
                carga_horaria_total: 60,
                duracao_meses: 3,
                nivel: Some(NivelCurso::Basico),
                categoria: CategoriaCurso::Programacao,
            },
        )
        .await
        .unwrap();

        let turma = TurmaService::cadastrar(
            &repo,
            NovaTurma {
                professor_id: Some(professor_id),
                curso_id: Some(curso.id()),
                ..nova_turma("TURMA-2024-02")
            },
        )
        .await
        .unwrap();

        let salva = TurmaService::buscar_por_codigo(&repo, "TURMA-2024-02")
            .await
            .unwrap();
        assert_eq!(salva.id(), turma.id());
        assert_eq!(salva.professor_id(), Some(professor_id));
        assert_eq!(salva.curso_id(), Some(curso.id()));
        assert_eq!(salva.status(), StatusTurma::Aberta);
    }

    #[tokio::test]
    async fn test_cadastrar_rejects_duplicated_code() {
        let repo = MemoryRepository::new();
        TurmaService::cadastrar(&repo, nova_turma("T1")).await.unwrap();

        let err = TurmaService::cadastrar(&repo, nova_turma("T1"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Já existe uma turma com o código T1");
    }

    #[tokio::test]
    async fn test_atualizar_codigo() {
        let repo = MemoryRepository::new();
        let turma = TurmaService::cadastrar(&repo, nova_turma("TURMA-OLD")).await.unwrap();

        let atualizada = TurmaService::atualizar(
            &repo,
            turma.id(),
            AtualizacaoTurma {
                codigo: Some("TURMA-NEW".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(atualizada.codigo(), "TURMA-NEW");
        assert_eq!(atualizada.vagas_totais(), 30);
    }

    #[tokio::test]
    async fn test_lifecycle_through_service() {
        let repo = MemoryRepository::new();
        let turma = TurmaService::cadastrar(&repo, nova_turma("T1")).await.unwrap();

        let iniciada = TurmaService::iniciar(&repo, turma.id()).await.unwrap();
        assert_eq!(iniciada.status(), StatusTurma::EmAndamento);

        // data_fim is still in the future
        assert!(TurmaService::concluir(&repo, turma.id()).await.is_err());

        let cancelada = TurmaService::cancelar(&repo, turma.id()).await.unwrap();
        assert_eq!(cancelada.status(), StatusTurma::Cancelada);
    }

    #[tokio::test]
    async fn test_buscar_por_id_unknown() {
        let repo = MemoryRepository::new();
        let id = Uuid::new_v4();

        let err = TurmaService::buscar_por_id(&repo, id).await.unwrap_err();

        assert_eq!(err.to_string(), format!("Turma com ID {id} não encontrada"));
    }

    #[tokio::test]
    async fn test_professor_links() {
        let repo = MemoryRepository::new();
        let turma = TurmaService::cadastrar(&repo, nova_turma("T1")).await.unwrap();
        let professor_id = professor(&repo).await;

        TurmaService::vincular_professor(&repo, turma.id(), professor_id)
            .await
            .unwrap();
        assert!(
            TurmaService::desvincular_professor(&repo, turma.id(), Uuid::new_v4())
                .await
                .is_err()
        );
        let turma = TurmaService::desvincular_professor(&repo, turma.id(), professor_id)
            .await
            .unwrap();
        assert_eq!(turma.professor_id(), None);

        ProfessorService::atualizar(
            &repo,
            professor_id,
            AtualizacaoProfessor {
                status: Some(StatusProfessor::Afastado),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let err = TurmaService::vincular_professor(&repo, turma.id(), professor_id)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Apenas professores ativos podem ser vinculados à turma"
        );
    }
}

use crate::{Page, Repository, ServiceError, ServiceResult, services::ProfessorService};
use log::{debug, info};
use models::{CategoriaCurso, Curso, NivelCurso};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NovoCurso {
    pub nome: String,
    pub descricao: String,
    pub carga_horaria_total: i32,
    pub duracao_meses: i32,
    pub nivel: Option<NivelCurso>,
    pub categoria: CategoriaCurso,
}

#[derive(Debug, Clone, Default)]
pub struct AtualizacaoCurso {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub carga_horaria_total: Option<i32>,
    pub duracao_meses: Option<i32>,
    pub nivel: Option<NivelCurso>,
    pub categoria: Option<CategoriaCurso>,
}

pub struct CursoService;

impl CursoService {
    pub async fn cadastrar<R: Repository + ?Sized>(
        repo: &R,
        dados: NovoCurso,
    ) -> ServiceResult<Curso> {
        if repo.find_curso_by_nome(&dados.nome).await?.is_some() {
            return Err(ServiceError::validacao("Já existe um curso com esse nome"));
        }

        let curso = Curso::new(
            dados.nome,
            dados.descricao,
            dados.carga_horaria_total,
            dados.duracao_meses,
            dados.nivel,
            dados.categoria,
        )?;
        let curso = repo.save_curso(&curso).await?;

        info!("Registered course {} ({})", curso.nome(), curso.id());
        Ok(curso)
    }

    pub async fn atualizar<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
        dados: AtualizacaoCurso,
    ) -> ServiceResult<Curso> {
        let mut curso = Self::buscar_por_id(repo, id).await?;

        if let Some(nome) = &dados.nome
            && nome != curso.nome()
            && repo.find_curso_by_nome(nome).await?.is_some()
        {
            return Err(ServiceError::validacao("Já existe um curso com esse nome"));
        }

        curso.atualizar(
            dados.nome,
            dados.descricao,
            dados.carga_horaria_total,
            dados.duracao_meses,
            dados.nivel,
            dados.categoria,
        )?;

        Ok(repo.save_curso(&curso).await?)
    }

    pub async fn buscar_por_id<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Curso> {
        repo.find_curso(id)
            .await?
            .ok_or_else(|| ServiceError::validacao(format!("Curso com ID {id} não encontrado")))
    }

    pub async fn buscar_todos<R: Repository + ?Sized>(
        repo: &R,
        page: u64,
        per_page: u64,
    ) -> ServiceResult<Page<Curso>> {
        Ok(repo.find_cursos(page, per_page).await?)
    }

    pub async fn buscar_por_nome<R: Repository + ?Sized>(
        repo: &R,
        nome: &str,
    ) -> ServiceResult<Curso> {
        repo.find_curso_by_nome(nome).await?.ok_or_else(|| {
            ServiceError::validacao(format!("Curso com nome '{nome}' não encontrado"))
        })
    }

    pub async fn buscar_por_nivel<R: Repository + ?Sized>(
        repo: &R,
        nivel: Option<NivelCurso>,
    ) -> ServiceResult<Vec<Curso>> {
        let nivel =
            nivel.ok_or_else(|| ServiceError::validacao("Nivel do curso deve ser informado"))?;
        Ok(repo.find_cursos_by_nivel(nivel).await?)
    }

    pub async fn buscar_por_carga_horaria<R: Repository + ?Sized>(
        repo: &R,
        min: i32,
        max: i32,
    ) -> ServiceResult<Vec<Curso>> {
        if min > max {
            return Err(ServiceError::validacao(
                "Carga horária mínima não pode ser maior que a máxima",
            ));
        }
        Ok(repo.find_cursos_by_carga_horaria(min, max).await?)
    }

    pub async fn ativar<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Curso> {
        let mut curso = Self::buscar_por_id(repo, id).await?;
        curso.ativar()?;
        let curso = repo.save_curso(&curso).await?;

        info!("Activated course {id}");
        Ok(curso)
    }

    pub async fn inativar<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Curso> {
        let mut curso = Self::buscar_por_id(repo, id).await?;
        curso.inativar()?;
        let curso = repo.save_curso(&curso).await?;

        info!("Deactivated course {id}");
        Ok(curso)
    }

    pub async fn vincular_professor<R: Repository + ?Sized>(
        repo: &R,
        curso_id: Uuid,
        professor_id: Uuid,
    ) -> ServiceResult<Curso> {
        let mut curso = Self::buscar_por_id(repo, curso_id).await?;
        let professor = ProfessorService::buscar_por_id(repo, professor_id).await?;

        if let Err(e) = curso.vincular_professor(&professor) {
            debug!("Professor {professor_id} not linked to course {curso_id}: {e}");
            return Err(e.into());
        }
        let curso = repo.save_curso(&curso).await?;

        info!("Linked professor {professor_id} to course {curso_id}");
        Ok(curso)
    }

    pub async fn desvincular_professor<R: Repository + ?Sized>(
        repo: &R,
        curso_id: Uuid,
        professor_id: Uuid,
    ) -> ServiceResult<Curso> {
        let mut curso = Self::buscar_por_id(repo, curso_id).await?;
        ProfessorService::buscar_por_id(repo, professor_id).await?;

        curso.desvincular_professor(professor_id)?;
        let curso = repo.save_curso(&curso).await?;

        info!("Unlinked professor {professor_id} from course {curso_id}");
        Ok(curso)
    }

    pub async fn listar_cursos_do_professor<R: Repository + ?Sized>(
        repo: &R,
        professor_id: Uuid,
    ) -> ServiceResult<Vec<Curso>> {
        ProfessorService::buscar_por_id(repo, professor_id).await?;
        Ok(repo.find_cursos_by_professor(professor_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        MemoryRepository,
        services::{AtualizacaoProfessor, NovoProfessor},
    };
    use chrono::NaiveDate;
    use models::{Modalidade, StatusCurso, StatusProfessor};

    fn java_fundamentals() -> NovoCurso {
        NovoCurso {
            nome: "Java Fundamentals".to_string(),
            descricao: "Curso básico de Java".to_string(),
            carga_horaria_total: 40,
            duracao_meses: 2,
            nivel: Some(NivelCurso::Basico),
            categoria: CategoriaCurso::Programacao,
        }
    }

    async fn professor(repo: &MemoryRepository) -> Uuid {
        ProfessorService::cadastrar(
            repo,
            NovoProfessor {
                nome: "Ana Carolina Souza".to_string(),
                email: "ana.souza@academia.com.br".to_string(),
                data_nascimento: NaiveDate::from_ymd_opt(1982, 7, 1).unwrap(),
                telefone: "(41)99999-0000".to_string(),
                cpf: "98765432100".to_string(),
                modalidade: Modalidade::Presencial,
                endereco: None,
            },
        )
        .await
        .unwrap()
        .id()
    }

    #[tokio::test]
    async fn test_cadastrar_course() {
        let repo = MemoryRepository::new();

        let curso = CursoService::cadastrar(&repo, java_fundamentals()).await.unwrap();

        assert_eq!(curso.status(), StatusCurso::Ativo);
        let salvo = CursoService::buscar_por_nome(&repo, "Java Fundamentals")
            .await
            .unwrap();
        assert_eq!(salvo.descricao(), "Curso básico de Java");
    }

    #[tokio::test]
    async fn test_cadastrar_rejects_duplicated_name_and_short_advanced() {
        let repo = MemoryRepository::new();
        CursoService::cadastrar(&repo, java_fundamentals()).await.unwrap();

        let err = CursoService::cadastrar(&repo, java_fundamentals())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Já existe um curso com esse nome");

        let err = CursoService::cadastrar(
            &repo,
            NovoCurso {
                nome: "Java Advanced".to_string(),
                carga_horaria_total: 99,
                nivel: Some(NivelCurso::Avancado),
                ..java_fundamentals()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cursos avançados ou de especialização devem ter 100+ horas"
        );
    }

    #[tokio::test]
    async fn test_buscar_por_nome_and_nivel_errors() {
        let repo = MemoryRepository::new();

        let err = CursoService::buscar_por_nome(&repo, "Python").await.unwrap_err();
        assert_eq!(err.to_string(), "Curso com nome 'Python' não encontrado");

        let err = CursoService::buscar_por_nivel(&repo, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Nivel do curso deve ser informado");
    }

    #[tokio::test]
    async fn test_buscar_por_carga_horaria() {
        let repo = MemoryRepository::new();
        CursoService::cadastrar(&repo, java_fundamentals()).await.unwrap();

        let encontrados = CursoService::buscar_por_carga_horaria(&repo, 30, 50)
            .await
            .unwrap();
        assert_eq!(encontrados.len(), 1);

        assert!(
            CursoService::buscar_por_carga_horaria(&repo, 50, 30)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_ativar_inativar_twice_fails() {
        let repo = MemoryRepository::new();
        let curso = CursoService::cadastrar(&repo, java_fundamentals()).await.unwrap();

        CursoService::inativar(&repo, curso.id()).await.unwrap();
        let err = CursoService::inativar(&repo, curso.id()).await.unwrap_err();
        assert_eq!(err.to_string(), "Curso já está inativo.");

        CursoService::ativar(&repo, curso.id()).await.unwrap();
        let err = CursoService::ativar(&repo, curso.id()).await.unwrap_err();
        assert_eq!(err.to_string(), "Curso já está ativo.");
    }

    #[tokio::test]
    async fn test_vincular_and_listar_cursos_do_professor() {
        let repo = MemoryRepository::new();
        let curso = CursoService::cadastrar(&repo, java_fundamentals()).await.unwrap();
        let professor_id = professor(&repo).await;

        CursoService::vincular_professor(&repo, curso.id(), professor_id)
            .await
            .unwrap();

        let cursos = CursoService::listar_cursos_do_professor(&repo, professor_id)
            .await
            .unwrap();
        assert_eq!(cursos.len(), 1);
        assert_eq!(cursos[0].nome(), "Java Fundamentals");

        CursoService::desvincular_professor(&repo, curso.id(), professor_id)
            .await
            .unwrap();
        let err = CursoService::desvincular_professor(&repo, curso.id(), professor_id)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Este professor não esta vinculado ao curso");
    }

    #[tokio::test]
    async fn test_vincular_inactive_professor_fails() {
        let repo = MemoryRepository::new();
        let curso = CursoService::cadastrar(&repo, java_fundamentals()).await.unwrap();
        let professor_id = professor(&repo).await;
        ProfessorService::atualizar(
            &repo,
            professor_id,
            AtualizacaoProfessor {
                status: Some(StatusProfessor::Inativo),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let err = CursoService::vincular_professor(&repo, curso.id(), professor_id)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Não é possível vincular um professor com status diferente de ATIVO ao curso."
        );
        let salvo = repo.find_curso(curso.id()).await.unwrap().unwrap();
        assert!(salvo.professores().is_empty());
    }
}

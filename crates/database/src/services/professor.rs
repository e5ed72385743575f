use crate::{Page, Repository, ServiceError, ServiceResult};
use chrono::NaiveDate;
use log::{debug, info, warn};
use models::{Endereco, Modalidade, Professor, StatusProfessor};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NovoProfessor {
    pub nome: String,
    pub email: String,
    pub data_nascimento: NaiveDate,
    pub telefone: String,
    pub cpf: String,
    pub modalidade: Modalidade,
    pub endereco: Option<Endereco>,
}

#[derive(Debug, Clone, Default)]
pub struct AtualizacaoProfessor {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub telefone: Option<String>,
    pub status: Option<StatusProfessor>,
    pub modalidade: Option<Modalidade>,
    pub endereco: Option<Endereco>,
}

pub struct ProfessorService;

impl ProfessorService {
    pub async fn cadastrar<R: Repository + ?Sized>(
        repo: &R,
        dados: NovoProfessor,
    ) -> ServiceResult<Professor> {
        if repo.exists_professor_cpf(&dados.cpf).await? {
            debug!("Rejecting professor with duplicated CPF");
            return Err(ServiceError::validacao("CPF já cadastrado"));
        }
        if repo.exists_professor_email(&dados.email).await? {
            debug!("Rejecting professor with duplicated e-mail {}", dados.email);
            return Err(ServiceError::validacao("E-mail já cadastrado"));
        }

        let professor = Professor::new(
            dados.nome,
            dados.email,
            dados.data_nascimento,
            dados.telefone,
            dados.cpf,
            dados.modalidade,
            dados.endereco,
        );
        let professor = repo.save_professor(&professor).await?;

        info!("Registered professor {}", professor.id());
        Ok(professor)
    }

    pub async fn atualizar<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
        dados: AtualizacaoProfessor,
    ) -> ServiceResult<Professor> {
        let mut professor = Self::buscar_por_id(repo, id).await?;

        if let Some(email) = &dados.email
            && email != professor.email()
            && repo.exists_professor_email(email).await?
        {
            return Err(ServiceError::validacao("E-mail já cadastrado"));
        }

        professor.atualizar(
            dados.nome,
            dados.email,
            dados.data_nascimento,
            dados.telefone,
            dados.status,
            dados.modalidade,
            dados.endereco,
        );

        Ok(repo.save_professor(&professor).await?)
    }

    pub async fn buscar_por_id<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
    ) -> ServiceResult<Professor> {
        repo.find_professor(id).await?.ok_or_else(|| {
            ServiceError::validacao(format!("Professor com ID {id} não encontrado"))
        })
    }

    pub async fn buscar_por_nome<R: Repository + ?Sized>(
        repo: &R,
        nome: &str,
    ) -> ServiceResult<Vec<Professor>> {
        let nome = nome.trim();
        if nome.is_empty() {
            return Err(ServiceError::validacao("Nome do professor é obrigatório."));
        }

        let professores = repo.find_professores_by_nome(nome).await?;
        if professores.is_empty() {
            return Err(ServiceError::validacao(format!(
                "Nenhum professor encontrado com o nome '{nome}'"
            )));
        }
        Ok(professores)
    }

    pub async fn buscar_por_modalidade<R: Repository + ?Sized>(
        repo: &R,
        modalidade: Modalidade,
    ) -> ServiceResult<Vec<Professor>> {
        Ok(repo.find_professores_by_modalidade(modalidade).await?)
    }

    pub async fn buscar_todos<R: Repository + ?Sized>(
        repo: &R,
        page: u64,
        per_page: u64,
    ) -> ServiceResult<Page<Professor>> {
        Ok(repo.find_professores(page, per_page).await?)
    }

    pub async fn excluir<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<()> {
        let mut professor = Self::buscar_por_id(repo, id).await?;

        if let Err(e) = professor.excluir() {
            warn!("Refusing to deactivate professor {id}: {e}");
            return Err(e.into());
        }
        repo.save_professor(&professor).await?;

        info!("Deactivated professor {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryRepository;

    fn novo_professor(nome: &str, email: &str, cpf: &str, modalidade: Modalidade) -> NovoProfessor {
        NovoProfessor {
            nome: nome.to_string(),
            email: email.to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            telefone: "(11)98765-4321".to_string(),
            cpf: cpf.to_string(),
            modalidade,
            endereco: None,
        }
    }

    #[tokio::test]
    async fn test_cadastrar_and_buscar() {
        let repo = MemoryRepository::new();
        let professor = ProfessorService::cadastrar(
            &repo,
            novo_professor("João da Silva", "joao.silva@example.com", "12345678901", Modalidade::Ead),
        )
        .await
        .unwrap();

        let encontrado = ProfessorService::buscar_por_id(&repo, professor.id())
            .await
            .unwrap();
        assert_eq!(encontrado.nome(), "João da Silva");
        assert_eq!(encontrado.status(), StatusProfessor::Ativo);

        let por_nome = ProfessorService::buscar_por_nome(&repo, "silva").await.unwrap();
        assert_eq!(por_nome.len(), 1);
    }

    #[tokio::test]
    async fn test_cadastrar_rejects_duplicated_cpf() {
        let repo = MemoryRepository::new();
        ProfessorService::cadastrar(&repo, novo_professor("A", "a@x.com", "1", Modalidade::Ead))
            .await
            .unwrap();

        let err = ProfessorService::cadastrar(&repo, novo_professor("B", "b@x.com", "1", Modalidade::Ead))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "CPF já cadastrado");
    }

    #[tokio::test]
    async fn test_buscar_por_modalidade() {
        let repo = MemoryRepository::new();
        ProfessorService::cadastrar(&repo, novo_professor("A", "a@x.com", "1", Modalidade::Ead))
            .await
            .unwrap();
        ProfessorService::cadastrar(&repo, novo_professor("B", "b@x.com", "2", Modalidade::Presencial))
            .await
            .unwrap();

        let ead = ProfessorService::buscar_por_modalidade(&repo, Modalidade::Ead)
            .await
            .unwrap();

        assert_eq!(ead.len(), 1);
        assert_eq!(ead[0].nome(), "A");
    }

    #[tokio::test]
    async fn test_excluir_on_leave_is_rejected() {
        let repo = MemoryRepository::new();
        let professor = ProfessorService::cadastrar(
            &repo,
            novo_professor("Carlos Eduardo", "carlos@email.com", "3", Modalidade::Hibrido),
        )
        .await
        .unwrap();
        ProfessorService::atualizar(
            &repo,
            professor.id(),
            AtualizacaoProfessor {
                status: Some(StatusProfessor::Afastado),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let err = ProfessorService::excluir(&repo, professor.id()).await.unwrap_err();

        assert_eq!(err.to_string(), "Professor afastado ou inativo não pode ser cancelado");
        let salvo = repo.find_professor(professor.id()).await.unwrap().unwrap();
        assert_eq!(salvo.status(), StatusProfessor::Afastado);
    }
}

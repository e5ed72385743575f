use crate::{Page, Repository, ServiceError, ServiceResult};
use chrono::NaiveDate;
use log::{debug, info};
use models::{Aluno, Endereco, StatusAluno};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NovoAluno {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub endereco: Option<Endereco>,
}

/// Fields left as `None` keep their current value
#[derive(Debug, Clone, Default)]
pub struct AtualizacaoAluno {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub status: Option<StatusAluno>,
    pub endereco: Option<Endereco>,
}

pub struct AlunoService;

impl AlunoService {
    pub async fn cadastrar<R: Repository + ?Sized>(
        repo: &R,
        dados: NovoAluno,
    ) -> ServiceResult<Aluno> {
        if repo.exists_aluno_email(&dados.email).await? {
            debug!("Rejecting student with duplicated e-mail {}", dados.email);
            return Err(ServiceError::validacao("E-mail já cadastrado"));
        }
        if repo.exists_aluno_cpf(&dados.cpf).await? {
            debug!("Rejecting student with duplicated CPF");
            return Err(ServiceError::validacao("CPF já cadastrado"));
        }

        let aluno = Aluno::new(
            dados.nome,
            dados.email,
            dados.telefone,
            dados.cpf,
            dados.data_nascimento,
            dados.endereco,
        );
        let aluno = repo.save_aluno(&aluno).await?;

        info!("Registered student {}", aluno.id());
        Ok(aluno)
    }

    pub async fn atualizar<R: Repository + ?Sized>(
        repo: &R,
        id: Uuid,
        dados: AtualizacaoAluno,
    ) -> ServiceResult<Aluno> {
        let mut aluno = Self::buscar_por_id(repo, id).await?;

        if let Some(email) = &dados.email
            && email != aluno.email()
            && repo.exists_aluno_email(email).await?
        {
            return Err(ServiceError::validacao("E-mail já cadastrado"));
        }

        aluno.atualizar(
            dados.nome,
            dados.email,
            dados.telefone,
            dados.data_nascimento,
            dados.status,
            dados.endereco,
        );

        Ok(repo.save_aluno(&aluno).await?)
    }

    pub async fn buscar_por_id<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<Aluno> {
        repo.find_aluno(id)
            .await?
            .ok_or_else(|| ServiceError::validacao(format!("Aluno com ID {id} não encontrado")))
    }

    pub async fn buscar_por_nome<R: Repository + ?Sized>(
        repo: &R,
        nome: &str,
    ) -> ServiceResult<Vec<Aluno>> {
        let nome = nome.trim();
        if nome.is_empty() {
            return Err(ServiceError::validacao("Nome do aluno é obrigatório."));
        }

        let alunos = repo.find_alunos_by_nome(nome).await?;
        if alunos.is_empty() {
            return Err(ServiceError::validacao(format!(
                "Nenhum aluno encontrado com o nome '{nome}'"
            )));
        }
        Ok(alunos)
    }

    pub async fn buscar_por_status<R: Repository + ?Sized>(
        repo: &R,
        status: StatusAluno,
        page: u64,
        per_page: u64,
    ) -> ServiceResult<Page<Aluno>> {
        Ok(repo.find_alunos(Some(status), page, per_page).await?)
    }

    pub async fn buscar_todos<R: Repository + ?Sized>(
        repo: &R,
        page: u64,
        per_page: u64,
    ) -> ServiceResult<Page<Aluno>> {
        Ok(repo.find_alunos(None, page, per_page).await?)
    }

    /// Soft delete, the row stays with status INATIVO
    pub async fn excluir<R: Repository + ?Sized>(repo: &R, id: Uuid) -> ServiceResult<()> {
        let mut aluno = Self::buscar_por_id(repo, id).await?;
        aluno.excluir();
        repo.save_aluno(&aluno).await?;

        info!("Deactivated student {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryRepository;

    fn novo_aluno(nome: &str, email: &str, cpf: &str) -> NovoAluno {
        NovoAluno {
            nome: nome.to_string(),
            email: email.to_string(),
            telefone: "999999999".to_string(),
            cpf: cpf.to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(2000, 5, 10).unwrap(),
            endereco: Some(Endereco {
                logradouro: "Rua A".to_string(),
                bairro: "Centro".to_string(),
                cep: "12345678".to_string(),
                numero: "100".to_string(),
                complemento: None,
                cidade: "Curitiba".to_string(),
                uf: "PR".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_cadastrar_persists_active_student() {
        let repo = MemoryRepository::new();

        let aluno = AlunoService::cadastrar(&repo, novo_aluno("Lucas", "lucas@email.com", "12345678900"))
            .await
            .unwrap();

        let salvo = repo.find_aluno(aluno.id()).await.unwrap().unwrap();
        assert_eq!(salvo.nome(), "Lucas");
        assert_eq!(salvo.email(), "lucas@email.com");
        assert_eq!(salvo.status(), StatusAluno::Ativo);
        assert_eq!(salvo.endereco().unwrap().bairro, "Centro");
    }

    #[tokio::test]
    async fn test_cadastrar_rejects_duplicates() {
        let repo = MemoryRepository::new();
        AlunoService::cadastrar(&repo, novo_aluno("Lucas", "lucas@email.com", "12345678900"))
            .await
            .unwrap();

        let err = AlunoService::cadastrar(&repo, novo_aluno("Outro", "lucas@email.com", "000"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "E-mail já cadastrado");

        let err = AlunoService::cadastrar(&repo, novo_aluno("Outro", "outro@email.com", "12345678900"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "CPF já cadastrado");

        let (_, total) = repo.find_alunos(None, 1, 20).await.unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_atualizar_changes_only_given_fields() {
        let repo = MemoryRepository::new();
        let aluno = AlunoService::cadastrar(&repo, novo_aluno("Lucas", "lucas@email.com", "12345678900"))
            .await
            .unwrap();

        let atualizado = AlunoService::atualizar(
            &repo,
            aluno.id(),
            AtualizacaoAluno {
                nome: Some("Novo Nome".to_string()),
                email: Some("novo@email.com".to_string()),
                telefone: Some("888888888".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(atualizado.nome(), "Novo Nome");
        assert_eq!(atualizado.email(), "novo@email.com");
        assert_eq!(atualizado.telefone(), "888888888");
        assert_eq!(atualizado.cpf(), "12345678900");
    }

    #[tokio::test]
    async fn test_buscar_por_id_unknown() {
        let repo = MemoryRepository::new();
        let id = Uuid::new_v4();

        let err = AlunoService::buscar_por_id(&repo, id).await.unwrap_err();

        assert_eq!(err.to_string(), format!("Aluno com ID {id} não encontrado"));
    }

    #[tokio::test]
    async fn test_buscar_por_nome() {
        let repo = MemoryRepository::new();
        AlunoService::cadastrar(&repo, novo_aluno("Maria Oliveira", "maria@email.com", "1"))
            .await
            .unwrap();

        let encontrados = AlunoService::buscar_por_nome(&repo, "maria").await.unwrap();
        assert_eq!(encontrados.len(), 1);

        let err = AlunoService::buscar_por_nome(&repo, "   ").await.unwrap_err();
        assert_eq!(err.to_string(), "Nome do aluno é obrigatório.");

        let err = AlunoService::buscar_por_nome(&repo, "Pedro").await.unwrap_err();
        assert_eq!(err.to_string(), "Nenhum aluno encontrado com o nome 'Pedro'");
    }

    #[tokio::test]
    async fn test_excluir_and_filter_by_status() {
        let repo = MemoryRepository::new();
        let lucas = AlunoService::cadastrar(&repo, novo_aluno("Lucas", "lucas@email.com", "1"))
            .await
            .unwrap();
        AlunoService::cadastrar(&repo, novo_aluno("Maria", "maria@email.com", "2"))
            .await
            .unwrap();

        AlunoService::excluir(&repo, lucas.id()).await.unwrap();

        let (inativos, total) = AlunoService::buscar_por_status(&repo, StatusAluno::Inativo, 1, 20)
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(inativos[0].id(), lucas.id());

        let (_, total) = AlunoService::buscar_todos(&repo, 1, 20).await.unwrap();
        assert_eq!(total, 2);
    }
}

use super::{Page, Repository};
use async_trait::async_trait;
use models::{
    Aluno, Curso, Matricula, Modalidade, NivelCurso, Professor, StatusAluno, Turma,
};
use sea_orm::DbErr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

#[derive(Default)]
struct Store {
    alunos: Vec<Aluno>,
    professores: Vec<Professor>,
    cursos: Vec<Curso>,
    turmas: Vec<Turma>,
    matriculas: Vec<Matricula>,
}

impl Store {
    /// A stored section with its enrollment ids recomputed from `matriculas`,
    /// the same way the database derives them from `matriculas.turma_id`
    fn hydrate(&self, turma: &Turma) -> Turma {
        let matriculas = self
            .matriculas
            .iter()
            .filter(|m| m.turma_id() == Some(turma.id()))
            .map(Matricula::id)
            .collect();

        Turma::from_persistence(
            turma.id(),
            turma.codigo().to_owned(),
            turma.data_inicio(),
            turma.data_fim(),
            turma.horario_inicio(),
            turma.horario_fim(),
            turma.vagas_totais(),
            turma.modalidade(),
            turma.status(),
            turma.professor_id(),
            turma.curso_id(),
            matriculas,
        )
    }
}

/// [`Repository`] holding everything in process memory
#[derive(Default)]
pub struct MemoryRepository {
    store: Mutex<Store>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn upsert<T: Clone>(items: &mut Vec<T>, item: &T, id: impl Fn(&T) -> Uuid) {
    let key = id(item);
    match items.iter_mut().find(|existing| id(existing) == key) {
        Some(existing) => *existing = item.clone(),
        None => items.push(item.clone()),
    }
}

fn paginate<T>(items: Vec<T>, page: u64, per_page: u64) -> Page<T> {
    let total_items = items.len() as u64;
    let per_page = per_page.max(1);
    let skip = page.saturating_sub(1).saturating_mul(per_page);

    let page_items = items
        .into_iter()
        .skip(skip as usize)
        .take(per_page as usize)
        .collect();
    (page_items, total_items)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn find_aluno(&self, id: Uuid) -> Result<Option<Aluno>, DbErr> {
        Ok(self.store().alunos.iter().find(|a| a.id() == id).cloned())
    }

    async fn save_aluno(&self, aluno: &Aluno) -> Result<Aluno, DbErr> {
        upsert(&mut self.store().alunos, aluno, Aluno::id);
        Ok(aluno.clone())
    }

    async fn find_alunos_by_nome(&self, nome: &str) -> Result<Vec<Aluno>, DbErr> {
        let mut alunos: Vec<Aluno> = self
            .store()
            .alunos
            .iter()
            .filter(|a| contains_ignore_case(a.nome(), nome))
            .cloned()
            .collect();
        alunos.sort_by(|a, b| a.nome().cmp(b.nome()));
        Ok(alunos)
    }

    async fn find_alunos(
        &self,
        status: Option<StatusAluno>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Aluno>, DbErr> {
        let mut alunos: Vec<Aluno> = self
            .store()
            .alunos
            .iter()
            .filter(|a| status.is_none_or(|s| a.status() == s))
            .cloned()
            .collect();
        alunos.sort_by(|a, b| a.nome().cmp(b.nome()));
        Ok(paginate(alunos, page, per_page))
    }

    async fn exists_aluno_email(&self, email: &str) -> Result<bool, DbErr> {
        Ok(self.store().alunos.iter().any(|a| a.email() == email))
    }

    async fn exists_aluno_cpf(&self, cpf: &str) -> Result<bool, DbErr> {
        Ok(self.store().alunos.iter().any(|a| a.cpf() == cpf))
    }

    async fn find_professor(&self, id: Uuid) -> Result<Option<Professor>, DbErr> {
        Ok(self
            .store()
            .professores
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn save_professor(&self, professor: &Professor) -> Result<Professor, DbErr> {
        upsert(&mut self.store().professores, professor, Professor::id);
        Ok(professor.clone())
    }

    async fn find_professores_by_nome(&self, nome: &str) -> Result<Vec<Professor>, DbErr> {
        let mut professores: Vec<Professor> = self
            .store()
            .professores
            .iter()
            .filter(|p| contains_ignore_case(p.nome(), nome))
            .cloned()
            .collect();
        professores.sort_by(|a, b| a.nome().cmp(b.nome()));
        Ok(professores)
    }

    async fn find_professores_by_modalidade(
        &self,
        modalidade: Modalidade,
    ) -> Result<Vec<Professor>, DbErr> {
        Ok(self
            .store()
            .professores
            .iter()
            .filter(|p| p.modalidade() == modalidade)
            .cloned()
            .collect())
    }

    async fn find_professores(&self, page: u64, per_page: u64) -> Result<Page<Professor>, DbErr> {
        let mut professores = self.store().professores.clone();
        professores.sort_by(|a, b| a.nome().cmp(b.nome()));
        Ok(paginate(professores, page, per_page))
    }

    async fn exists_professor_email(&self, email: &str) -> Result<bool, DbErr> {
        Ok(self.store().professores.iter().any(|p| p.email() == email))
    }

    async fn exists_professor_cpf(&self, cpf: &str) -> Result<bool, DbErr> {
        Ok(self.store().professores.iter().any(|p| p.cpf() == cpf))
    }

    async fn find_curso(&self, id: Uuid) -> Result<Option<Curso>, DbErr> {
        Ok(self.store().cursos.iter().find(|c| c.id() == id).cloned())
    }

    async fn save_curso(&self, curso: &Curso) -> Result<Curso, DbErr> {
        upsert(&mut self.store().cursos, curso, Curso::id);
        Ok(curso.clone())
    }

    async fn find_curso_by_nome(&self, nome: &str) -> Result<Option<Curso>, DbErr> {
        Ok(self
            .store()
            .cursos
            .iter()
            .find(|c| c.nome() == nome)
            .cloned())
    }

    async fn find_cursos_by_nivel(&self, nivel: NivelCurso) -> Result<Vec<Curso>, DbErr> {
        Ok(self
            .store()
            .cursos
            .iter()
            .filter(|c| c.nivel() == nivel)
            .cloned()
            .collect())
    }

    async fn find_cursos_by_carga_horaria(
        &self,
        min: i32,
        max: i32,
    ) -> Result<Vec<Curso>, DbErr> {
        let mut cursos: Vec<Curso> = self
            .store()
            .cursos
            .iter()
            .filter(|c| (min..=max).contains(&c.carga_horaria_total()))
            .cloned()
            .collect();
        cursos.sort_by_key(Curso::carga_horaria_total);
        Ok(cursos)
    }

    async fn find_cursos(&self, page: u64, per_page: u64) -> Result<Page<Curso>, DbErr> {
        let mut cursos = self.store().cursos.clone();
        cursos.sort_by(|a, b| a.nome().cmp(b.nome()));
        Ok(paginate(cursos, page, per_page))
    }

    async fn find_cursos_by_professor(&self, professor_id: Uuid) -> Result<Vec<Curso>, DbErr> {
        Ok(self
            .store()
            .cursos
            .iter()
            .filter(|c| c.possui_professor(professor_id))
            .cloned()
            .collect())
    }

    async fn find_turma(&self, id: Uuid) -> Result<Option<Turma>, DbErr> {
        let store = self.store();
        Ok(store
            .turmas
            .iter()
            .find(|t| t.id() == id)
            .map(|t| store.hydrate(t)))
    }

    async fn save_turma(&self, turma: &Turma) -> Result<Turma, DbErr> {
        upsert(&mut self.store().turmas, turma, Turma::id);
        Ok(turma.clone())
    }

    async fn find_turma_by_codigo(&self, codigo: &str) -> Result<Option<Turma>, DbErr> {
        let store = self.store();
        Ok(store
            .turmas
            .iter()
            .find(|t| t.codigo() == codigo)
            .map(|t| store.hydrate(t)))
    }

    async fn find_turmas(&self, page: u64, per_page: u64) -> Result<Page<Turma>, DbErr> {
        let store = self.store();
        let mut turmas: Vec<Turma> = store.turmas.iter().map(|t| store.hydrate(t)).collect();
        turmas.sort_by_key(Turma::data_inicio);
        Ok(paginate(turmas, page, per_page))
    }

    async fn find_matricula(&self, id: Uuid) -> Result<Option<Matricula>, DbErr> {
        Ok(self
            .store()
            .matriculas
            .iter()
            .find(|m| m.id() == id)
            .cloned())
    }

    async fn save_matricula(&self, matricula: &Matricula) -> Result<Matricula, DbErr> {
        upsert(&mut self.store().matriculas, matricula, Matricula::id);
        Ok(matricula.clone())
    }

    async fn find_matriculas_by_aluno(&self, aluno_id: Uuid) -> Result<Vec<Matricula>, DbErr> {
        Ok(self
            .store()
            .matriculas
            .iter()
            .filter(|m| m.aluno_id() == aluno_id)
            .cloned()
            .collect())
    }

    async fn find_matriculas_by_aluno_nome(&self, nome: &str) -> Result<Vec<Matricula>, DbErr> {
        let store = self.store();
        let alunos: Vec<Uuid> = store
            .alunos
            .iter()
            .filter(|a| contains_ignore_case(a.nome(), nome))
            .map(Aluno::id)
            .collect();

        Ok(store
            .matriculas
            .iter()
            .filter(|m| alunos.contains(&m.aluno_id()))
            .cloned()
            .collect())
    }

    async fn find_matriculas(&self, page: u64, per_page: u64) -> Result<Page<Matricula>, DbErr> {
        let mut matriculas = self.store().matriculas.clone();
        matriculas.sort_by_key(|m| std::cmp::Reverse(m.data_matricula()));
        Ok(paginate(matriculas, page, per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aluno(nome: &str) -> Aluno {
        Aluno::new(
            nome.to_string(),
            format!("{}@email.com", nome.to_lowercase()),
            "999999999".to_string(),
            Uuid::new_v4().simple().to_string(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            None,
        )
    }

    #[tokio::test]
    async fn test_save_is_insert_or_update() {
        let repo = MemoryRepository::new();
        let mut maria = aluno("Maria");
        repo.save_aluno(&maria).await.unwrap();

        maria.excluir();
        repo.save_aluno(&maria).await.unwrap();

        let (alunos, total) = repo.find_alunos(None, 1, 20).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(alunos[0].status(), StatusAluno::Inativo);
    }

    #[tokio::test]
    async fn test_pages_are_one_based() {
        let repo = MemoryRepository::new();
        for nome in ["Ana", "Bruno", "Carla"] {
            repo.save_aluno(&aluno(nome)).await.unwrap();
        }

        let (primeira, total) = repo.find_alunos(None, 1, 2).await.unwrap();
        let (segunda, _) = repo.find_alunos(None, 2, 2).await.unwrap();

        assert_eq!(total, 3);
        assert_eq!(primeira.len(), 2);
        assert_eq!(segunda.len(), 1);
        assert_eq!(segunda[0].nome(), "Carla");
    }

    #[tokio::test]
    async fn test_name_search_ignores_case() {
        let repo = MemoryRepository::new();
        repo.save_aluno(&aluno("Maria Oliveira")).await.unwrap();
        repo.save_aluno(&aluno("João")).await.unwrap();

        let encontrados = repo.find_alunos_by_nome("oliv").await.unwrap();

        assert_eq!(encontrados.len(), 1);
        assert_eq!(encontrados[0].nome(), "Maria Oliveira");
    }

    #[tokio::test]
    async fn test_name_search_matches_wildcards_literally() {
        let repo = MemoryRepository::new();
        repo.save_aluno(&aluno("Maria Oliveira")).await.unwrap();

        assert!(repo.find_alunos_by_nome("%").await.unwrap().is_empty());
        assert!(repo.find_alunos_by_nome("m_ria").await.unwrap().is_empty());
    }
}

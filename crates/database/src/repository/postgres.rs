use super::{Page, Repository};
use crate::entities::{alunos, curso_professores, cursos, matriculas, professores, turmas};
use async_trait::async_trait;
use models::{
    Aluno, Curso, Matricula, Modalidade, NivelCurso, Professor, StatusAluno, Turma,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    TransactionTrait,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};
use std::collections::HashMap;
use uuid::Uuid;

/// [`Repository`] backed by PostgreSQL through sea-orm
#[derive(Clone)]
pub struct SeaOrmRepository {
    db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Fetches one page of `query`, SeaORM pages being 0-based
    async fn fetch_page<E>(
        &self,
        query: Select<E>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<E::Model>, DbErr>
    where
        E: EntityTrait,
        E::Model: Sync,
    {
        let total_items = query.clone().count(&self.db).await?;
        let paginator = query.paginate(&self.db, per_page.max(1));
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((items, total_items))
    }

    /// Attaches the linked professor ids to each course in one batch query
    async fn load_cursos(&self, models: Vec<cursos::Model>) -> Result<Vec<Curso>, DbErr> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = models.iter().map(|c| c.id).collect();
        let links = curso_professores::Entity::find()
            .filter(curso_professores::Column::CursoId.is_in(ids))
            .all(&self.db)
            .await?;

        let mut professores_by_curso: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for link in links {
            professores_by_curso
                .entry(link.curso_id)
                .or_default()
                .push(link.professor_id);
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let professores = professores_by_curso.remove(&model.id).unwrap_or_default();
                model.into_curso(professores)
            })
            .collect())
    }

    /// Attaches the enrollment ids to each section in one batch query
    async fn load_turmas(&self, models: Vec<turmas::Model>) -> Result<Vec<Turma>, DbErr> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = models.iter().map(|t| t.id).collect();
        let rows: Vec<(Uuid, Option<Uuid>)> = matriculas::Entity::find()
            .select_only()
            .column(matriculas::Column::Id)
            .column(matriculas::Column::TurmaId)
            .filter(matriculas::Column::TurmaId.is_in(ids))
            .order_by_asc(matriculas::Column::DataMatricula)
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut matriculas_by_turma: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (matricula_id, turma_id) in rows {
            if let Some(turma_id) = turma_id {
                matriculas_by_turma
                    .entry(turma_id)
                    .or_default()
                    .push(matricula_id);
            }
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let matriculas = matriculas_by_turma.remove(&model.id).unwrap_or_default();
                model.into_turma(matriculas)
            })
            .collect())
    }

    async fn load_turma(&self, model: Option<turmas::Model>) -> Result<Option<Turma>, DbErr> {
        match model {
            Some(model) => Ok(self.load_turmas(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }
}

/// `lower(column) LIKE '%term%' ESCAPE '\'`, with wildcards in `term` matched literally
fn contains_ignore_case<C>(column: C, term: &str) -> SimpleExpr
where
    C: sea_orm::sea_query::IntoColumnRef,
{
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(contains_pattern(term)).escape('\\'))
}

fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Inserts `model` when no row with its id exists yet, updates it otherwise
async fn upsert<A, C>(db: &C, model: A, exists: bool) -> Result<(), DbErr>
where
    A: ActiveModelTrait + sea_orm::ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    if exists {
        model.update(db).await?;
    } else {
        model.insert(db).await?;
    }
    Ok(())
}

#[async_trait]
impl Repository for SeaOrmRepository {
    async fn find_aluno(&self, id: Uuid) -> Result<Option<Aluno>, DbErr> {
        Ok(alunos::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Aluno::from))
    }

    async fn save_aluno(&self, aluno: &Aluno) -> Result<Aluno, DbErr> {
        let exists = alunos::Entity::find_by_id(aluno.id())
            .one(&self.db)
            .await?
            .is_some();
        upsert(&self.db, alunos::ActiveModel::from(aluno), exists).await?;
        Ok(aluno.clone())
    }

    async fn find_alunos_by_nome(&self, nome: &str) -> Result<Vec<Aluno>, DbErr> {
        let alunos = alunos::Entity::find()
            .filter(contains_ignore_case(alunos::Column::Nome, nome))
            .order_by_asc(alunos::Column::Nome)
            .all(&self.db)
            .await?;
        Ok(alunos.into_iter().map(Aluno::from).collect())
    }

    async fn find_alunos(
        &self,
        status: Option<StatusAluno>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Aluno>, DbErr> {
        let mut query = alunos::Entity::find().order_by_asc(alunos::Column::Nome);
        if let Some(status) = status {
            query = query.filter(alunos::Column::Status.eq(status));
        }

        let (alunos, total_items) = self.fetch_page(query, page, per_page).await?;
        Ok((alunos.into_iter().map(Aluno::from).collect(), total_items))
    }

    async fn exists_aluno_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = alunos::Entity::find()
            .filter(alunos::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn exists_aluno_cpf(&self, cpf: &str) -> Result<bool, DbErr> {
        let count = alunos::Entity::find()
            .filter(alunos::Column::Cpf.eq(cpf))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn find_professor(&self, id: Uuid) -> Result<Option<Professor>, DbErr> {
        Ok(professores::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Professor::from))
    }

    async fn save_professor(&self, professor: &Professor) -> Result<Professor, DbErr> {
        let exists = professores::Entity::find_by_id(professor.id())
            .one(&self.db)
            .await?
            .is_some();
        upsert(&self.db, professores::ActiveModel::from(professor), exists).await?;
        Ok(professor.clone())
    }

    async fn find_professores_by_nome(&self, nome: &str) -> Result<Vec<Professor>, DbErr> {
        let professores = professores::Entity::find()
            .filter(contains_ignore_case(professores::Column::Nome, nome))
            .order_by_asc(professores::Column::Nome)
            .all(&self.db)
            .await?;
        Ok(professores.into_iter().map(Professor::from).collect())
    }

    async fn find_professores_by_modalidade(
        &self,
        modalidade: Modalidade,
    ) -> Result<Vec<Professor>, DbErr> {
        let professores = professores::Entity::find()
            .filter(professores::Column::Modalidade.eq(modalidade))
            .order_by_asc(professores::Column::Nome)
            .all(&self.db)
            .await?;
        Ok(professores.into_iter().map(Professor::from).collect())
    }

    async fn find_professores(&self, page: u64, per_page: u64) -> Result<Page<Professor>, DbErr> {
        let query = professores::Entity::find().order_by_asc(professores::Column::Nome);
        let (professores, total_items) = self.fetch_page(query, page, per_page).await?;
        Ok((
            professores.into_iter().map(Professor::from).collect(),
            total_items,
        ))
    }

    async fn exists_professor_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = professores::Entity::find()
            .filter(professores::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn exists_professor_cpf(&self, cpf: &str) -> Result<bool, DbErr> {
        let count = professores::Entity::find()
            .filter(professores::Column::Cpf.eq(cpf))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn find_curso(&self, id: Uuid) -> Result<Option<Curso>, DbErr> {
        let Some(model) = cursos::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(self.load_cursos(vec![model]).await?.pop())
    }

    async fn save_curso(&self, curso: &Curso) -> Result<Curso, DbErr> {
        let txn = self.db.begin().await?;

        let exists = cursos::Entity::find_by_id(curso.id())
            .one(&txn)
            .await?
            .is_some();
        upsert(&txn, cursos::ActiveModel::from(curso), exists).await?;

        // Links are rewritten wholesale
        curso_professores::Entity::delete_many()
            .filter(curso_professores::Column::CursoId.eq(curso.id()))
            .exec(&txn)
            .await?;

        let links: Vec<curso_professores::ActiveModel> = curso
            .professores()
            .iter()
            .map(|&professor_id| curso_professores::ActiveModel {
                curso_id: sea_orm::ActiveValue::Set(curso.id()),
                professor_id: sea_orm::ActiveValue::Set(professor_id),
            })
            .collect();
        if !links.is_empty() {
            curso_professores::Entity::insert_many(links)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(curso.clone())
    }

    async fn find_curso_by_nome(&self, nome: &str) -> Result<Option<Curso>, DbErr> {
        let Some(model) = cursos::Entity::find()
            .filter(cursos::Column::Nome.eq(nome))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        Ok(self.load_cursos(vec![model]).await?.pop())
    }

    async fn find_cursos_by_nivel(&self, nivel: NivelCurso) -> Result<Vec<Curso>, DbErr> {
        let models = cursos::Entity::find()
            .filter(cursos::Column::Nivel.eq(nivel))
            .order_by_asc(cursos::Column::Nome)
            .all(&self.db)
            .await?;
        self.load_cursos(models).await
    }

    async fn find_cursos_by_carga_horaria(
        &self,
        min: i32,
        max: i32,
    ) -> Result<Vec<Curso>, DbErr> {
        let models = cursos::Entity::find()
            .filter(cursos::Column::CargaHorariaTotal.between(min, max))
            .order_by_asc(cursos::Column::CargaHorariaTotal)
            .all(&self.db)
            .await?;
        self.load_cursos(models).await
    }

    async fn find_cursos(&self, page: u64, per_page: u64) -> Result<Page<Curso>, DbErr> {
        let query = cursos::Entity::find().order_by_asc(cursos::Column::Nome);
        let (models, total_items) = self.fetch_page(query, page, per_page).await?;
        Ok((self.load_cursos(models).await?, total_items))
    }

    async fn find_cursos_by_professor(&self, professor_id: Uuid) -> Result<Vec<Curso>, DbErr> {
        let models = cursos::Entity::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                cursos::Relation::CursoProfessores.def(),
            )
            .filter(curso_professores::Column::ProfessorId.eq(professor_id))
            .order_by_asc(cursos::Column::Nome)
            .all(&self.db)
            .await?;
        self.load_cursos(models).await
    }

    async fn find_turma(&self, id: Uuid) -> Result<Option<Turma>, DbErr> {
        let model = turmas::Entity::find_by_id(id).one(&self.db).await?;
        self.load_turma(model).await
    }

    async fn save_turma(&self, turma: &Turma) -> Result<Turma, DbErr> {
        let exists = turmas::Entity::find_by_id(turma.id())
            .one(&self.db)
            .await?
            .is_some();
        upsert(&self.db, turmas::ActiveModel::from(turma), exists).await?;
        Ok(turma.clone())
    }

    async fn find_turma_by_codigo(&self, codigo: &str) -> Result<Option<Turma>, DbErr> {
        let model = turmas::Entity::find()
            .filter(turmas::Column::Codigo.eq(codigo))
            .one(&self.db)
            .await?;
        self.load_turma(model).await
    }

    async fn find_turmas(&self, page: u64, per_page: u64) -> Result<Page<Turma>, DbErr> {
        let query = turmas::Entity::find().order_by_asc(turmas::Column::DataInicio);
        let (models, total_items) = self.fetch_page(query, page, per_page).await?;
        Ok((self.load_turmas(models).await?, total_items))
    }

    async fn find_matricula(&self, id: Uuid) -> Result<Option<Matricula>, DbErr> {
        Ok(matriculas::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Matricula::from))
    }

    async fn save_matricula(&self, matricula: &Matricula) -> Result<Matricula, DbErr> {
        let exists = matriculas::Entity::find_by_id(matricula.id())
            .one(&self.db)
            .await?
            .is_some();
        upsert(&self.db, matriculas::ActiveModel::from(matricula), exists).await?;
        Ok(matricula.clone())
    }

    async fn find_matriculas_by_aluno(&self, aluno_id: Uuid) -> Result<Vec<Matricula>, DbErr> {
        let matriculas = matriculas::Entity::find()
            .filter(matriculas::Column::AlunoId.eq(aluno_id))
            .order_by_asc(matriculas::Column::DataMatricula)
            .all(&self.db)
            .await?;
        Ok(matriculas.into_iter().map(Matricula::from).collect())
    }

    async fn find_matriculas_by_aluno_nome(&self, nome: &str) -> Result<Vec<Matricula>, DbErr> {
        let matriculas = matriculas::Entity::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                matriculas::Relation::Aluno.def(),
            )
            .filter(contains_ignore_case(
                (alunos::Entity, alunos::Column::Nome),
                nome,
            ))
            .order_by_asc(matriculas::Column::DataMatricula)
            .all(&self.db)
            .await?;
        Ok(matriculas.into_iter().map(Matricula::from).collect())
    }

    async fn find_matriculas(&self, page: u64, per_page: u64) -> Result<Page<Matricula>, DbErr> {
        let query = matriculas::Entity::find().order_by_desc(matriculas::Column::DataMatricula);
        let (matriculas, total_items) = self.fetch_page(query, page, per_page).await?;
        Ok((
            matriculas.into_iter().map(Matricula::from).collect(),
            total_items,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Maria"), "%maria%");
        assert_eq!(contains_pattern("%"), "%\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\x"), "%c:\\\\x%");
    }

    #[test]
    fn test_name_search_uses_escape_clause() {
        let sql = alunos::Entity::find()
            .filter(contains_ignore_case(alunos::Column::Nome, "100%"))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("LIKE"), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
    }
}

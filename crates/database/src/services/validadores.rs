//! Checks run in order before an enrollment is created.
//!
//! Each validator is a plain function over the [`ContextoMatricula`] the
//! service assembled. The first failure aborts the whole chain.

use crate::services::NovaMatricula;
use models::{Aluno, Curso, Matricula, Turma, ValidationError, ValidationResult};

/// The creation request together with everything it references
#[derive(Debug, Clone)]
pub struct ContextoMatricula {
    pub dados: NovaMatricula,
    pub aluno: Option<Aluno>,
    pub curso: Option<Curso>,
    pub turma: Option<Turma>,
    pub matriculas_do_aluno: Vec<Matricula>,
}

pub type Validador = fn(&ContextoMatricula) -> ValidationResult<()>;

pub const VALIDADORES: &[Validador] = &[
    aluno_existente_ativo,
    curso_existente_ativo,
    turma_pertence_ao_curso,
    turma_aceitando_matriculas,
    turma_com_vagas,
    matricula_nao_duplicada,
];

pub fn validar(contexto: &ContextoMatricula) -> ValidationResult<()> {
    VALIDADORES
        .iter()
        .try_for_each(|validador| validador(contexto))
}

pub fn aluno_existente_ativo(contexto: &ContextoMatricula) -> ValidationResult<()> {
    let aluno = contexto.aluno.as_ref().ok_or_else(|| {
        ValidationError::new(format!(
            "Aluno com ID {} não encontrado",
            contexto.dados.aluno_id
        ))
    })?;

    if !aluno.is_ativo() {
        return Err(ValidationError::new("Aluno inativo não pode ser matriculado"));
    }
    Ok(())
}

pub fn curso_existente_ativo(contexto: &ContextoMatricula) -> ValidationResult<()> {
    let curso = contexto.curso.as_ref().ok_or_else(|| {
        ValidationError::new(format!(
            "Curso com ID {} não encontrado",
            contexto.dados.curso_id
        ))
    })?;

    if !curso.is_ativo() {
        return Err(ValidationError::new("Curso inativo para novas matriculas"));
    }
    Ok(())
}

pub fn turma_pertence_ao_curso(contexto: &ContextoMatricula) -> ValidationResult<()> {
    let Some(turma_id) = contexto.dados.turma_id else {
        return Ok(());
    };
    let turma = contexto.turma.as_ref().ok_or_else(|| {
        ValidationError::new(format!("Turma com ID {turma_id} não encontrada"))
    })?;

    if turma.curso_id() != Some(contexto.dados.curso_id) {
        return Err(ValidationError::new(format!(
            "A turma {} não pertence ao curso {}",
            turma.codigo(),
            contexto.dados.curso_id
        )));
    }
    Ok(())
}

pub fn turma_aceitando_matriculas(contexto: &ContextoMatricula) -> ValidationResult<()> {
    match &contexto.turma {
        Some(turma) if !turma.aceita_matriculas() => Err(ValidationError::new(format!(
            "A turma {} não está aceitando matrículas",
            turma.codigo()
        ))),
        _ => Ok(()),
    }
}

pub fn turma_com_vagas(contexto: &ContextoMatricula) -> ValidationResult<()> {
    match &contexto.turma {
        Some(turma) if turma.vagas_disponiveis() <= 0 => Err(ValidationError::new(format!(
            "A turma {} não possui vagas disponíveis",
            turma.codigo()
        ))),
        _ => Ok(()),
    }
}

/// An ATIVA or TRANCADA enrollment in the same section, or in the same
/// course when no section is requested, blocks a new one
pub fn matricula_nao_duplicada(contexto: &ContextoMatricula) -> ValidationResult<()> {
    let dados = &contexto.dados;
    let duplicada = contexto
        .matriculas_do_aluno
        .iter()
        .filter(|m| m.is_vigente())
        .any(|m| match dados.turma_id {
            Some(turma_id) => m.turma_id() == Some(turma_id),
            None => m.curso_id() == dados.curso_id,
        });

    if duplicada {
        return Err(ValidationError::new("Aluno já matriculado nesta turma"));
    }
    Ok(())
}

use models::Endereco;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(per_page.max(1));
        Self {
            page,
            per_page,
            total_pages,
            total_items,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

pub(crate) fn default_page() -> u64 {
    1
}

pub(crate) fn default_per_page() -> u64 {
    20
}

pub const MAX_PER_PAGE: u64 = 100;

/// Clamps the requested page into `1..` and `per_page` into `1..=MAX_PER_PAGE`,
/// keeping the resulting row offset within `i64`
pub fn pagina(page: u64, per_page: u64) -> (u64, u64) {
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let page = page.clamp(1, i64::MAX as u64 / per_page);
    (page, per_page)
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NomeQuery {
    /// Part of the name, case-insensitive
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnderecoDto {
    pub logradouro: String,
    pub bairro: String,
    pub cep: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub cidade: String,
    pub uf: String,
}

impl From<EnderecoDto> for Endereco {
    fn from(dto: EnderecoDto) -> Self {
        Endereco {
            logradouro: dto.logradouro,
            bairro: dto.bairro,
            cep: dto.cep,
            numero: dto.numero,
            complemento: dto.complemento,
            cidade: dto.cidade,
            uf: dto.uf,
        }
    }
}

impl From<&Endereco> for EnderecoDto {
    fn from(endereco: &Endereco) -> Self {
        Self {
            logradouro: endereco.logradouro.clone(),
            bairro: endereco.bairro.clone(),
            cep: endereco.cep.clone(),
            numero: endereco.numero.clone(),
            complemento: endereco.complemento.clone(),
            cidade: endereco.cidade.clone(),
            uf: endereco.uf.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(2, 20, 45);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(meta.has_prev);

        let vazio = PaginationMeta::new(1, 20, 0);
        assert_eq!(vazio.total_pages, 0);
        assert!(!vazio.has_next);
        assert!(!vazio.has_prev);
    }

    #[test]
    fn test_pagina_clamps_requested_values() {
        assert_eq!(pagina(2, 20), (2, 20));
        assert_eq!(pagina(0, 0), (1, 1));
        assert_eq!(pagina(1, u64::MAX), (1, MAX_PER_PAGE));

        let (page, per_page) = pagina(u64::MAX, 50);
        assert!((page - 1).checked_mul(per_page).is_some_and(|offset| offset <= i64::MAX as u64));
    }
}

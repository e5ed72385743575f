use serde::{Deserialize, Serialize};

/// Postal address embedded in students and professors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endereco {
    pub logradouro: String,
    pub bairro: String,
    pub cep: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub cidade: String,
    pub uf: String, // two-letter state code, e.g. "SP"
}

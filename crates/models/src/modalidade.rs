use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// How a class section is delivered, or how a professor prefers to teach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[cfg_attr(feature = "database", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(feature = "database", sea_orm(rs_type = "String", db_type = "Text"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Modalidade {
    /// Distance learning
    #[cfg_attr(feature = "database", sea_orm(string_value = "EAD"))]
    Ead,
    #[cfg_attr(feature = "database", sea_orm(string_value = "PRESENCIAL"))]
    Presencial,
    #[cfg_attr(feature = "database", sea_orm(string_value = "HIBRIDO"))]
    Hibrido,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Modalidade::Ead).unwrap(), "\"EAD\"");
        assert_eq!(
            serde_json::from_str::<Modalidade>("\"HIBRIDO\"").unwrap(),
            Modalidade::Hibrido
        );
        assert_eq!(Modalidade::Presencial.as_ref(), "PRESENCIAL");
    }
}

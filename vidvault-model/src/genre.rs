use crate::catalog::CatalogEntity;
use crate::ids::GenreId;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Genre {
    pub id: GenreId,
    pub genre_type: String,
}

impl CatalogEntity for Genre {
    type Id = GenreId;

    fn id(&self) -> GenreId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewGenre {
    pub genre_type: String,
}

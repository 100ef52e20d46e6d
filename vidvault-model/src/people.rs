use crate::catalog::CatalogEntity;
use crate::ids::ActorId;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Actor {
    pub id: ActorId,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl CatalogEntity for Actor {
    type Id = ActorId;

    fn id(&self) -> ActorId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewActor {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewActor {
    /// Splits `full_name` on its first space into first and last name.
    pub fn from_full_name(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let (first, last) = full_name
            .split_once(' ')
            .map(|(first, last)| (first.to_string(), last.to_string()))
            .unwrap_or_else(|| (full_name.clone(), String::new()));
        Self {
            full_name,
            first_name: first,
            last_name: last,
        }
    }

    pub fn into_actor(self, id: ActorId) -> Actor {
        Actor {
            id,
            full_name: self.full_name,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_splits_on_first_space() {
        let actor = NewActor::from_full_name("Helena Bonham Carter");
        assert_eq!(actor.first_name, "Helena");
        assert_eq!(actor.last_name, "Bonham Carter");

        let mononym = NewActor::from_full_name("Zendaya");
        assert_eq!(mononym.first_name, "Zendaya");
        assert!(mononym.last_name.is_empty());
    }
}

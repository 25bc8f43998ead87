use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an id that was assigned elsewhere, e.g. by a durable store.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a [`Course`](crate::domain::Course).
    CourseId
);
entity_id!(
    /// Identity of a [`Module`](crate::domain::Module).
    ModuleId
);
entity_id!(
    /// Identity of a [`Repository`](crate::core::repository::Repository).
    RepositoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(CourseId::new(), CourseId::new());
        assert_ne!(ModuleId::default(), ModuleId::default());
    }

    #[test]
    fn test_from_uuid_round_trips() {
        let uuid = Uuid::new_v4();
        let id = RepositoryId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}

use derive_more::{Display, From, FromStr};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, FromStr,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Allocates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`Article`](super::Article).
    ArticleId
);
entity_id!(
    /// Identifier of a [`Category`](super::Category).
    CategoryId
);
entity_id!(
    /// Identifier of a [`User`](super::User), also used as an article author.
    UserId
);

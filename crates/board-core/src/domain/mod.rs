//! Domain entities - the core business objects.

mod update;

pub use update::{MediaType, Update, UpdateDraft};

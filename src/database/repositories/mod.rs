pub mod admins;
pub mod houses;
pub mod spell_types;
pub mod spells;
pub mod usage;
pub mod users;

pub use admins::AdminRepository;
pub use houses::{HousePatch, HouseRepository};
pub use spell_types::{SpellTypePatch, SpellTypeRepository};
pub use spells::{SpellPatch, SpellRepository};
pub use usage::UsageRepository;
pub use users::UserRepository;

use crate::types::Pagination;

/// LIMIT/OFFSET fragment for a list query. Values are clamped integers, so
/// interpolation is safe.
pub(crate) fn page_sql(pagination: Option<&Pagination>) -> String {
    match pagination {
        Some(p) => match p.offset {
            Some(offset) => format!(" LIMIT {} OFFSET {}", p.take, offset),
            None => format!(" LIMIT {}", p.take),
        },
        None => String::new(),
    }
}

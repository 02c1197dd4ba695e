pub mod admin;
pub mod house;
pub mod spell;
pub mod spell_type;
pub mod usage_event;
pub mod user;

pub use admin::Admin;
pub use house::House;
pub use spell::{Spell, SpellDetail};
pub use spell_type::SpellType;
pub use usage_event::UsageEvent;
pub use user::User;

pub mod admins;
pub mod health;
pub mod houses;
pub mod spell_types;
pub mod spells;
pub mod users;

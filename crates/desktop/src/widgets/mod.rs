pub mod drop_zone;
pub mod verdict_card;

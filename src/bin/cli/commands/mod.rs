pub mod cards;
pub mod quiz;

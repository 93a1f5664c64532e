pub mod icons;
pub mod output;

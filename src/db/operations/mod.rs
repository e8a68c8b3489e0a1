pub mod achievements;
pub mod practice;
pub mod progress;
pub mod quiz;
pub mod user;

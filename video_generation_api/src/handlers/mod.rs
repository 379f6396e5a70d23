pub mod generate_video;
pub mod health;
pub mod models;

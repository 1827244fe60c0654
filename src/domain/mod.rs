pub mod model;
pub mod recommend;
pub mod repository;

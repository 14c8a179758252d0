pub mod profile_mapper;
pub mod repository_mapper;

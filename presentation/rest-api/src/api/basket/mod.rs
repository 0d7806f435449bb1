pub mod dto;
pub mod error_mapper;
pub mod params;
pub mod routes;

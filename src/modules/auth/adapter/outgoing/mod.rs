pub mod jwt;
pub mod security;
pub mod sea_orm_entity;
pub mod user_query_postgres;
pub mod user_repository_postgres;

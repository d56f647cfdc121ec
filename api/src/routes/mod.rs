pub mod ask;
pub mod health_route;
pub mod index_route;
pub mod upload;

//! Business logic services

pub mod crud;

pub use crud::CrudService;

//! Core library exports for the Inkpost blog service.
//!
//! This crate exposes domain entities, Diesel models, repositories, request
//! forms, DTOs, routes and service layers used by the Inkpost web application.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

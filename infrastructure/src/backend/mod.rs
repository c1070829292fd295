//! Backend API adapters

pub mod dto;
pub mod http;

//! SeaORM entities

pub mod vendor;

//! SeaORM row models.

pub mod post;

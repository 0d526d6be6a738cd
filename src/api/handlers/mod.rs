// HTTP handlers, one module per resource

pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;
pub mod vehicles;

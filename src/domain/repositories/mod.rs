// Repository contracts (ports) and the records they persist
// Implementations live in infrastructure::repositories

pub mod favorite_repository;
pub mod people_repository;
pub mod planet_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use favorite_repository::{Favorite, FavoriteRepository, NewFavorite};
pub use people_repository::{NewPeople, People, PeopleChanges, PeopleRepository};
pub use planet_repository::{NewPlanet, Planet, PlanetChanges, PlanetRepository};
pub use user_repository::{NewUser, User, UserChanges, UserRepository};
pub use vehicle_repository::{NewVehicle, Vehicle, VehicleChanges, VehicleRepository};

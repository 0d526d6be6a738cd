//! Integration tests for repository layer
//!
//! These tests verify that the SQLite repository implementations handle
//! CRUD operations, uniqueness, foreign keys and cascading deletes. Every
//! test runs against its own in-memory database.

use sqlx::SqlitePool;
use starwars_api::domain::errors::RepositoryError;
use starwars_api::domain::repositories::{
    FavoriteRepository, NewFavorite, NewPeople, NewPlanet, NewUser, NewVehicle, PeopleChanges,
    PeopleRepository, PlanetChanges, PlanetRepository, UserChanges, UserRepository,
    VehicleChanges, VehicleRepository,
};
use starwars_api::infrastructure::database::connect_in_memory;
use starwars_api::infrastructure::repositories::{
    SqliteFavoriteRepository, SqlitePeopleRepository, SqlitePlanetRepository,
    SqliteUserRepository, SqliteVehicleRepository,
};

/// Set up an isolated database with the schema applied
async fn setup_test_db() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to open in-memory database")
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password_hash: "$2b$04$not-a-real-hash".to_string(),
        name: None,
        is_active: true,
    }
}

fn tatooine() -> NewPlanet {
    NewPlanet {
        name: "Tatooine".to_string(),
        diameter: Some("10465".to_string()),
        gravity: "1".to_string(),
        climate: "arid".to_string(),
        poblation: 200000,
        rotation_period: 23,
    }
}

fn luke() -> NewPeople {
    NewPeople {
        name: "Luke Skywalker".to_string(),
        gender: Some("male".to_string()),
        eye_color: "blue".to_string(),
        hair_color: "blond".to_string(),
    }
}

fn speeder() -> NewVehicle {
    NewVehicle {
        name: "X-34 landspeeder".to_string(),
        created: "2014-12-10".to_string(),
        producer: "SoroSuub Corporation".to_string(),
        title: "repulsorcraft".to_string(),
        color: None,
        model: Some("X-34".to_string()),
        pilots: None,
    }
}

#[tokio::test]
async fn test_user_repository_create_and_find() {
    let pool = setup_test_db().await;
    let user_repo = SqliteUserRepository::new(pool.clone());

    let created = user_repo
        .create(NewUser {
            name: Some("Leia".to_string()),
            ..new_user("leia@alderaan.org")
        })
        .await
        .expect("Failed to create user");

    assert!(created.id > 0, "ID should be assigned");
    assert_eq!(created.email, "leia@alderaan.org");
    assert_eq!(created.name.as_deref(), Some("Leia"));
    assert!(created.is_active);

    let by_id = user_repo
        .find_by_id(created.id)
        .await
        .expect("Failed to find user by id");
    assert_eq!(by_id, Some(created.clone()));

    let by_email = user_repo
        .find_by_email("leia@alderaan.org")
        .await
        .expect("Failed to find user by email");
    assert_eq!(by_email, Some(created));
}

#[tokio::test]
async fn test_user_repository_duplicate_email_conflicts() {
    let pool = setup_test_db().await;
    let user_repo = SqliteUserRepository::new(pool);

    user_repo
        .create(new_user("duplicate@example.com"))
        .await
        .expect("First user creation should succeed");

    let result = user_repo.create(new_user("duplicate@example.com")).await;

    assert!(
        matches!(result, Err(RepositoryError::Conflict(_))),
        "Creating user with duplicate email should conflict: {:?}",
        result
    );

    let users = user_repo.find_all().await.expect("Failed to list users");
    assert_eq!(users.len(), 1, "Failed insert must not leave a row behind");
}

#[tokio::test]
async fn test_user_repository_update_overwrites_only_given_fields() {
    let pool = setup_test_db().await;
    let user_repo = SqliteUserRepository::new(pool);

    let user = user_repo
        .create(new_user("han@falcon.io"))
        .await
        .expect("Failed to create user");

    let updated = user_repo
        .update(
            user.id,
            UserChanges {
                is_active: Some(false),
                name: Some("Han Solo".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update user")
        .expect("User should exist");

    assert_eq!(updated.id, user.id, "ID must never change");
    assert_eq!(updated.email, "han@falcon.io");
    assert_eq!(updated.password_hash, user.password_hash);
    assert_eq!(updated.name.as_deref(), Some("Han Solo"));
    assert!(!updated.is_active);
}

#[tokio::test]
async fn test_user_repository_update_to_taken_email_conflicts() {
    let pool = setup_test_db().await;
    let user_repo = SqliteUserRepository::new(pool);

    user_repo.create(new_user("a@example.com")).await.unwrap();
    let second = user_repo.create(new_user("b@example.com")).await.unwrap();

    let result = user_repo
        .update(
            second.id,
            UserChanges {
                email: Some("a@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));

    let unchanged = user_repo.find_by_id(second.id).await.unwrap().unwrap();
    assert_eq!(unchanged.email, "b@example.com", "Rolled back update must not apply");
}

#[tokio::test]
async fn test_user_repository_update_and_delete_missing() {
    let pool = setup_test_db().await;
    let user_repo = SqliteUserRepository::new(pool);

    let updated = user_repo
        .update(42, UserChanges::default())
        .await
        .expect("Update of missing user is not an error");
    assert!(updated.is_none());

    let deleted = user_repo.delete(42).await.expect("Delete should not fail");
    assert!(!deleted);
}

#[tokio::test]
async fn test_people_repository_crud() {
    let pool = setup_test_db().await;
    let people_repo = SqlitePeopleRepository::new(pool);

    assert!(people_repo.find_all().await.unwrap().is_empty());

    let created = people_repo.create(luke()).await.expect("Failed to create people");
    assert_eq!(created.name, "Luke Skywalker");
    assert_eq!(created.gender.as_deref(), Some("male"));

    let updated = people_repo
        .update(
            created.id,
            PeopleChanges {
                hair_color: Some("grey".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.hair_color, "grey");
    assert_eq!(updated.eye_color, "blue");

    let all = people_repo.find_all().await.unwrap();
    assert_eq!(all, vec![updated]);

    assert!(people_repo.delete(created.id).await.unwrap());
    assert!(people_repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_people_repository_duplicate_name_conflicts() {
    let pool = setup_test_db().await;
    let people_repo = SqlitePeopleRepository::new(pool);

    people_repo.create(luke()).await.unwrap();
    let result = people_repo.create(luke()).await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[tokio::test]
async fn test_planet_repository_create_and_find_by_id() {
    let pool = setup_test_db().await;
    let planet_repo = SqlitePlanetRepository::new(pool);

    let planet = planet_repo.create(tatooine()).await.expect("Failed to create planet");

    let found = planet_repo
        .find_by_id(planet.id)
        .await
        .expect("Failed to find planet")
        .expect("Planet should be found");

    assert_eq!(found.name, "Tatooine");
    assert_eq!(found.gravity, "1");
    assert_eq!(found.climate, "arid");
    assert_eq!(found.poblation, 200000);
    assert_eq!(found.rotation_period, 23);
    assert_eq!(found.diameter.as_deref(), Some("10465"));
}

#[tokio::test]
async fn test_planet_repository_update_and_find_all_ordering() {
    let pool = setup_test_db().await;
    let planet_repo = SqlitePlanetRepository::new(pool);

    let first = planet_repo.create(tatooine()).await.unwrap();
    let second = planet_repo
        .create(NewPlanet {
            name: "Hoth".to_string(),
            diameter: None,
            gravity: "1.1".to_string(),
            climate: "frozen".to_string(),
            poblation: 0,
            rotation_period: 23,
        })
        .await
        .unwrap();

    let updated = planet_repo
        .update(
            first.id,
            PlanetChanges {
                poblation: Some(250000),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.poblation, 250000);
    assert_eq!(updated.name, "Tatooine");

    let ids: Vec<i64> = planet_repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_vehicle_repository_crud() {
    let pool = setup_test_db().await;
    let vehicle_repo = SqliteVehicleRepository::new(pool);

    let vehicle = vehicle_repo.create(speeder()).await.unwrap();
    assert_eq!(vehicle.model.as_deref(), Some("X-34"));
    assert!(vehicle.color.is_none());

    let updated = vehicle_repo
        .update(
            vehicle.id,
            VehicleChanges {
                color: Some("red".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.color.as_deref(), Some("red"));
    assert_eq!(updated.producer, "SoroSuub Corporation");

    assert!(vehicle_repo.delete(vehicle.id).await.unwrap());
    assert!(!vehicle_repo.delete(vehicle.id).await.unwrap());
}

#[tokio::test]
async fn test_favorite_repository_create_and_find_by_user() {
    let pool = setup_test_db().await;
    let user = SqliteUserRepository::new(pool.clone())
        .create(new_user("fan@example.com"))
        .await
        .unwrap();
    let other = SqliteUserRepository::new(pool.clone())
        .create(new_user("other@example.com"))
        .await
        .unwrap();
    let planet = SqlitePlanetRepository::new(pool.clone())
        .create(tatooine())
        .await
        .unwrap();
    let people = SqlitePeopleRepository::new(pool.clone())
        .create(luke())
        .await
        .unwrap();

    let favorite_repo = SqliteFavoriteRepository::new(pool);

    let first = favorite_repo
        .create(NewFavorite {
            user_id: user.id,
            people_id: None,
            planets_id: Some(planet.id),
            vehicle_id: None,
        })
        .await
        .expect("Failed to create favorite");
    let second = favorite_repo
        .create(NewFavorite {
            user_id: user.id,
            people_id: Some(people.id),
            planets_id: None,
            vehicle_id: None,
        })
        .await
        .unwrap();
    favorite_repo
        .create(NewFavorite {
            user_id: other.id,
            people_id: Some(people.id),
            planets_id: None,
            vehicle_id: None,
        })
        .await
        .unwrap();

    assert_eq!(first.planets_id, Some(planet.id));
    assert_eq!(first.people_id, None);

    let favorites = favorite_repo.find_by_user(user.id).await.unwrap();
    assert_eq!(favorites, vec![first.clone(), second]);

    assert_eq!(favorite_repo.find_by_id(first.id).await.unwrap(), Some(first));
}

#[tokio::test]
async fn test_favorite_repository_rejects_dangling_references() {
    let pool = setup_test_db().await;
    let user = SqliteUserRepository::new(pool.clone())
        .create(new_user("fan@example.com"))
        .await
        .unwrap();

    let favorite_repo = SqliteFavoriteRepository::new(pool);

    let missing_planet = favorite_repo
        .create(NewFavorite {
            user_id: user.id,
            people_id: None,
            planets_id: Some(999),
            vehicle_id: None,
        })
        .await;
    assert!(
        matches!(missing_planet, Err(RepositoryError::Invalid(_))),
        "Unknown planet should be rejected: {:?}",
        missing_planet
    );

    let missing_user = favorite_repo
        .create(NewFavorite {
            user_id: 999,
            people_id: None,
            planets_id: None,
            vehicle_id: None,
        })
        .await;
    assert!(matches!(missing_user, Err(RepositoryError::Invalid(_))));

    assert!(favorite_repo.find_by_user(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_favorite_without_target_violates_check() {
    let pool = setup_test_db().await;
    let user = SqliteUserRepository::new(pool.clone())
        .create(new_user("fan@example.com"))
        .await
        .unwrap();

    let result = SqliteFavoriteRepository::new(pool)
        .create(NewFavorite {
            user_id: user.id,
            people_id: None,
            planets_id: None,
            vehicle_id: None,
        })
        .await;

    assert!(matches!(result, Err(RepositoryError::Invalid(_))));
}

#[tokio::test]
async fn test_deleting_user_cascades_to_favorites() {
    let pool = setup_test_db().await;
    let user_repo = SqliteUserRepository::new(pool.clone());
    let user = user_repo.create(new_user("fan@example.com")).await.unwrap();
    let vehicle = SqliteVehicleRepository::new(pool.clone())
        .create(speeder())
        .await
        .unwrap();

    let favorite_repo = SqliteFavoriteRepository::new(pool);
    let favorite = favorite_repo
        .create(NewFavorite {
            user_id: user.id,
            people_id: None,
            planets_id: None,
            vehicle_id: Some(vehicle.id),
        })
        .await
        .unwrap();

    assert!(user_repo.delete(user.id).await.unwrap());

    assert!(favorite_repo.find_by_id(favorite.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleting_planet_cascades_to_favorites() {
    let pool = setup_test_db().await;
    let user = SqliteUserRepository::new(pool.clone())
        .create(new_user("fan@example.com"))
        .await
        .unwrap();
    let planet_repo = SqlitePlanetRepository::new(pool.clone());
    let planet = planet_repo.create(tatooine()).await.unwrap();

    let favorite_repo = SqliteFavoriteRepository::new(pool);
    favorite_repo
        .create(NewFavorite {
            user_id: user.id,
            people_id: None,
            planets_id: Some(planet.id),
            vehicle_id: None,
        })
        .await
        .unwrap();

    assert!(planet_repo.delete(planet.id).await.unwrap());

    assert!(favorite_repo.find_by_user(user.id).await.unwrap().is_empty());
}

use super::*;

fn new_user(email: &str, username: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        username: username.to_string(),
        hashed_password: "$2b$04$hash".to_string(),
        full_name: Some("Rider One".to_string()),
        phone_number: None,
    }
}

/// Tests creating a new user.
///
/// Expected: Ok with an active, unverified user
#[tokio::test]
async fn creates_active_unverified_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(new_user("rider@example.com", "rider"))
        .await?;

    assert_eq!(user.email, "rider@example.com");
    assert_eq!(user.username, "rider");
    assert_eq!(user.full_name, Some("Rider One".to_string()));
    assert!(user.is_active);
    assert!(!user.is_verified);

    Ok(())
}

/// Tests that the unique constraint on email is enforced at the database.
///
/// Expected: Err on the second insert and only one row stored
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    repo.create(new_user("rider@example.com", "rider")).await?;
    let result = repo.create(new_user("rider@example.com", "other")).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

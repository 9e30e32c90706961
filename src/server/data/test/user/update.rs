use super::*;

/// Tests a partial update of a user.
///
/// Expected: Ok with full name changed and email untouched
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UserChanges {
                full_name: Some(Some("New Name".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.full_name, Some("New Name".to_string()));
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.hashed_password, user.hashed_password);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UserChanges::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

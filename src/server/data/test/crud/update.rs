use super::*;

/// Tests a partial update.
///
/// Verifies that only fields present in the patch change and that `updated_at`
/// moves forward while `created_at` stays put.
///
/// Expected: Ok with name changed and every other field unchanged
#[tokio::test]
async fn leaves_unspecified_fields_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = CrudRepository::<Horse>::new(db);
    let existing = repo.create(new_horse(owner.id, "Shadow")).await?;

    let updated = repo
        .update(
            existing.clone(),
            UpdateHorseParams {
                name: Some("Midnight".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Midnight");
    assert_eq!(updated.breed, existing.breed);
    assert_eq!(updated.age, existing.age);
    assert_eq!(updated.height, existing.height);
    assert_eq!(updated.description, existing.description);
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.updated_at >= existing.updated_at);

    let stored = repo.get(existing.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests clearing a nullable field with an explicit null.
///
/// Expected: Ok with description cleared
#[tokio::test]
async fn clears_field_set_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = CrudRepository::<Horse>::new(db);
    let existing = repo.create(new_horse(owner.id, "Shadow")).await?;

    let updated = repo
        .update(
            existing,
            UpdateHorseParams {
                description: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.description, None);
    assert_eq!(updated.name, "Shadow");

    Ok(())
}

use super::*;

/// Tests a partial horse update.
///
/// Expected: Ok with age changed and name untouched
#[tokio::test]
async fn updates_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, horse) = factory::helpers::create_horse_with_owner(db).await?;

    let updated = HorseRepository::new(db)
        .update(
            horse.id,
            UpdateHorseParams {
                age: Some(8),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.age, 8);
    assert_eq!(updated.name, horse.name);
    assert_eq!(updated.height, horse.height);

    Ok(())
}

/// Tests updating a horse that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_horse() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HorseRepository::new(db)
        .update(999, UpdateHorseParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

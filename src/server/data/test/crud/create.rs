use super::*;

/// Tests creating a record through the generic repository.
///
/// Verifies that the returned record carries the given fields and that both
/// timestamps are stamped.
///
/// Expected: Ok with horse created and timestamps set
#[tokio::test]
async fn creates_record_with_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = CrudRepository::<Horse>::new(db);
    let horse = repo.create(new_horse(owner.id, "Shadow")).await?;

    assert_eq!(horse.owner_id, owner.id);
    assert_eq!(horse.name, "Shadow");
    assert_eq!(horse.breed, HorseBreed::Friesian);
    assert_eq!(horse.created_at, horse.updated_at);

    Ok(())
}

/// Tests creating a record for an entity without timestamp columns.
///
/// Expected: Ok with image created
#[tokio::test]
async fn creates_record_without_timestamp_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, horse) = factory::helpers::create_horse_with_owner(db).await?;

    let image = CrudRepository::<entity::prelude::HorseImage>::new(db)
        .create(entity::horse_image::ActiveModel {
            horse_id: ActiveValue::Set(horse.id),
            image_url: ActiveValue::Set("https://img.example.com/1.jpg".to_string()),
            is_primary: ActiveValue::Set(true),
            ..Default::default()
        })
        .await?;

    assert_eq!(image.horse_id, horse.id);
    assert!(image.is_primary);

    Ok(())
}

use super::*;

/// Tests deleting an existing record.
///
/// Expected: Ok(1) and the record is gone
#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = CrudRepository::<Horse>::new(db);
    let horse = repo.create(new_horse(owner.id, "Shadow")).await?;

    let removed = repo.delete(horse.id).await?;

    assert_eq!(removed, 1);
    assert_eq!(Horse::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let removed = CrudRepository::<Horse>::new(db).delete(404).await?;

    assert_eq!(removed, 0);

    Ok(())
}

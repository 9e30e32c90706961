use super::*;

/// Tests fetching a record that was just created.
///
/// Expected: Ok(Some) with the same field values
#[tokio::test]
async fn returns_created_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = CrudRepository::<Horse>::new(db);
    let created = repo.create(new_horse(owner.id, "Shadow")).await?;
    let fetched = repo.get(created.id).await?;

    assert_eq!(fetched, Some(created));

    Ok(())
}

/// Tests fetching an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CrudRepository::<Horse>::new(db).get(404).await?;

    assert!(result.is_none());

    Ok(())
}

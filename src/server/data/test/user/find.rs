use super::*;

/// Tests the id, email and username lookups against a factory user.
///
/// Expected: Ok(Some) for each lookup
#[tokio::test]
async fn finds_user_by_each_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let by_id = repo.find_by_id(user.id).await?.unwrap();
    let by_email = repo.find_by_email(&user.email).await?.unwrap();
    let by_username = repo.find_by_username(&user.username).await?.unwrap();

    assert_eq!(by_id.id, user.id);
    assert_eq!(by_email.id, user.id);
    assert_eq!(by_username.id, user.id);

    Ok(())
}

/// Tests lookups for keys that do not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(1).await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests batch lookup of several users.
///
/// Expected: Ok with only the requested users
#[tokio::test]
async fn finds_many_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_user(db).await?;
    let _second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let mut ids: Vec<i32> = UserRepository::new(db)
        .find_many(vec![first.id, third.id])
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

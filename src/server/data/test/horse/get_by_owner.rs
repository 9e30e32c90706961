use super::*;

/// Tests listing only the horses of one owner.
///
/// Expected: Ok with the owner's two horses and not the other user's
#[tokio::test]
async fn returns_only_owned_horses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_horse(db, owner.id).await?;
    let second = factory::create_horse(db, owner.id).await?;
    factory::create_horse(db, other.id).await?;

    let horses = HorseRepository::new(db).get_by_owner(owner.id, 0, 100).await?;

    let ids: Vec<i32> = horses.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

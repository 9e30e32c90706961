use super::*;

/// Tests creating a horse for an owner.
///
/// Expected: Ok with owner stamped and no images
#[tokio::test]
async fn creates_horse_owned_by_caller() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;

    let repo = HorseRepository::new(db);
    let horse = repo
        .create_with_owner(
            owner.id,
            CreateHorseParams {
                name: "Comet".to_string(),
                breed: HorseBreed::QuarterHorse,
                age: 9,
                gender: HorseGender::Gelding,
                color: "Chestnut".to_string(),
                height: Some(15.1),
                weight: Some(520.0),
                description: None,
                training_level: Some("Western pleasure".to_string()),
                health_records: None,
            },
        )
        .await?;

    assert_eq!(horse.owner_id, owner.id);
    assert_eq!(horse.breed, HorseBreed::QuarterHorse);
    assert!(horse.images.is_empty());

    let fetched = repo.get_by_id(horse.id).await?.unwrap();
    assert_eq!(fetched, horse);

    Ok(())
}

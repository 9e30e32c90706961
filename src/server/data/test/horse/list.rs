use super::*;

/// Tests the filtered list with images embedded per horse.
///
/// Expected: Ok with only the mare, carrying her own image
#[tokio::test]
async fn filters_and_embeds_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let mare = factory::horse::HorseFactory::new(db, owner.id)
        .gender(HorseGender::Mare)
        .build()
        .await?;
    let stallion = factory::horse::HorseFactory::new(db, owner.id)
        .gender(HorseGender::Stallion)
        .build()
        .await?;
    let repo = HorseRepository::new(db);
    for horse_id in [mare.id, stallion.id] {
        repo.add_image(
            horse_id,
            CreateHorseImageParams {
                image_url: format!("https://img.example.com/{}.jpg", horse_id),
                is_primary: true,
            },
        )
        .await?;
    }

    let horses = repo
        .list(ListQuery::default().with_filters([Filter::eq("gender", "Mare".to_string())]))
        .await?;

    assert_eq!(horses.len(), 1);
    assert_eq!(horses[0].id, mare.id);
    assert_eq!(horses[0].images.len(), 1);
    assert_eq!(horses[0].images[0].horse_id, mare.id);

    Ok(())
}

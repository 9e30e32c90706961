use super::*;

/// Tests adding images and reading them back, directly and embedded in the horse.
///
/// Expected: Ok with images in insertion order
#[tokio::test]
async fn adds_and_lists_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, horse) = factory::helpers::create_horse_with_owner(db).await?;
    let repo = HorseRepository::new(db);

    let primary = repo
        .add_image(
            horse.id,
            CreateHorseImageParams {
                image_url: "https://img.example.com/front.jpg".to_string(),
                is_primary: true,
            },
        )
        .await?;
    let side = repo
        .add_image(
            horse.id,
            CreateHorseImageParams {
                image_url: "https://img.example.com/side.jpg".to_string(),
                is_primary: false,
            },
        )
        .await?;

    let images = repo.get_images(horse.id).await?;
    assert_eq!(images, vec![primary.clone(), side.clone()]);

    let fetched = repo.get_by_id(horse.id).await?.unwrap();
    assert_eq!(fetched.images, vec![primary, side]);

    Ok(())
}

/// Tests that a horse without images gets an empty list.
///
/// Expected: Ok with no images
#[tokio::test]
async fn lists_no_images_for_bare_horse() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, horse) = factory::helpers::create_horse_with_owner(db).await?;

    let images = HorseRepository::new(db).get_images(horse.id).await?;

    assert!(images.is_empty());

    Ok(())
}

use super::*;
use crate::server::{
    model::horse::{CreateHorseImageParams, UpdateHorseParams},
    service::horse::HorseService,
};

/// Tests that a non-owner cannot update a horse, even with a valid payload.
///
/// Expected: Err(AuthError::AccessDenied) and the horse unchanged
#[tokio::test]
async fn rejects_update_by_non_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, horse) = factory::helpers::create_horse_with_owner(db).await?;
    let intruder = factory::create_user(db).await?;
    let service = HorseService::new(db);

    let result = service
        .update(
            intruder.id,
            horse.id,
            UpdateHorseParams {
                name: Some("Stolen".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.get_by_id(horse.id).await.unwrap().name, horse.name);

    Ok(())
}

/// Tests that the owner can update their horse.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn owner_updates_horse() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, horse) = factory::helpers::create_horse_with_owner(db).await?;

    let updated = HorseService::new(db)
        .update(
            owner.id,
            horse.id,
            UpdateHorseParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");

    Ok(())
}

/// Tests adding an image to someone else's horse and to a missing horse.
///
/// Expected: Err(AccessDenied) and Err(NotFound)
#[tokio::test]
async fn add_image_checks_horse_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_owner, horse) = factory::helpers::create_horse_with_owner(db).await?;
    let intruder = factory::create_user(db).await?;
    let service = HorseService::new(db);
    let params = CreateHorseImageParams {
        image_url: "https://img.example.com/x.jpg".to_string(),
        is_primary: false,
    };

    let not_owner = service.add_image(intruder.id, horse.id, params.clone()).await;
    let missing = service.add_image(intruder.id, 999, params).await;

    assert!(matches!(
        not_owner,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(missing, Err(AppError::NotFound(_))));
    assert!(service.get_images(horse.id).await.unwrap().is_empty());

    Ok(())
}

use super::*;

fn new_horse() -> Value {
    json!({
        "name": "Comet",
        "breed": "Arabian",
        "age": 6,
        "gender": "Mare",
        "color": "Grey"
    })
}

/// Tests creating a horse and updating it as someone else.
///
/// Expected: 201 for the owner, 403 for the other user, name unchanged
#[tokio::test]
async fn only_owner_updates_horse() -> Result<(), DbErr> {
    let (test, app, tokens) = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let owner_token = tokens.issue(owner.id).unwrap();
    let other_token = tokens.issue(other.id).unwrap();

    let (status, horse) = send(
        &app,
        json_request("POST", "/api/v1/horses", Some(&owner_token), new_horse()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(horse["owner_id"], owner.id);

    let uri = format!("/api/v1/horses/{}", horse["id"]);
    let (status, body) = send(
        &app,
        json_request("PUT", &uri, Some(&other_token), json!({ "name": "Stolen" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Not enough permissions");

    let (_, fetched) = send(&app, get_request(&uri, Some(&owner_token))).await;
    assert_eq!(fetched["name"], "Comet");

    Ok(())
}

/// Tests listing horses with a breed filter, sort and an unknown sort field.
///
/// Expected: only Arabians, ordered by age descending; unknown sort is not an error
#[tokio::test]
async fn lists_horses_with_filters_and_sort() -> Result<(), DbErr> {
    use entity::sea_orm_active_enums::HorseBreed;
    use test_utils::factory::horse::HorseFactory;

    let (test, app, tokens) = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    HorseFactory::new(db, owner.id).breed(HorseBreed::Arabian).age(4).build().await?;
    HorseFactory::new(db, owner.id).breed(HorseBreed::Arabian).age(9).build().await?;
    HorseFactory::new(db, owner.id).breed(HorseBreed::Mustang).age(7).build().await?;
    let token = tokens.issue(owner.id).unwrap();

    let (status, body) = send(
        &app,
        get_request(
            "/api/v1/horses?breed=Arabian&sort_by=age&order=desc",
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ages: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["age"].as_i64().unwrap())
        .collect();
    assert_eq!(ages, vec![9, 4]);

    let (status, body) = send(
        &app,
        get_request("/api/v1/horses?sort_by=no_such_field", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    Ok(())
}

/// Tests free-text search with `search_in` given more than once.
///
/// Expected: 200 with every value of `search_in` searched, ignoring case
#[tokio::test]
async fn search_in_may_repeat() -> Result<(), DbErr> {
    use test_utils::factory::horse::HorseFactory;

    let (test, app, tokens) = setup().await;
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_user(db).await?;
    HorseFactory::new(db, owner.id).name("Stardust").build().await?;
    HorseFactory::new(db, owner.id).name("Comet").build().await?;
    let token = tokens.issue(owner.id).unwrap();

    let (status, description_only) = send(
        &app,
        get_request("/api/v1/horses?q=bay&search_in=description", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(description_only.as_array().unwrap().len(), 0);

    let (status, repeated) = send(
        &app,
        get_request(
            "/api/v1/horses?q=bay&search_in=description&search_in=color&limit=10",
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(repeated.as_array().unwrap().len(), 2);

    Ok(())
}

/// Tests a limit above the maximum page size.
///
/// Expected: 422 Unprocessable Entity
#[tokio::test]
async fn rejects_oversized_limit() -> Result<(), DbErr> {
    let (test, app, tokens) = setup().await;
    let user = factory::create_user(test.db.as_ref().unwrap()).await?;
    let token = tokens.issue(user.id).unwrap();

    let (status, _) = send(&app, get_request("/api/v1/horses?limit=500", Some(&token))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests fetching a horse that does not exist.
///
/// Expected: 404 "Horse not found"
#[tokio::test]
async fn missing_horse_is_not_found() -> Result<(), DbErr> {
    let (test, app, tokens) = setup().await;
    let user = factory::create_user(test.db.as_ref().unwrap()).await?;
    let token = tokens.issue(user.id).unwrap();

    let (status, body) = send(&app, get_request("/api/v1/horses/4040", Some(&token))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Horse not found");

    Ok(())
}

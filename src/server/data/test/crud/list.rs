use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<Vec<entity::horse::Model>, DbErr> {
    let owner = factory::create_user(db).await?;
    let repo = CrudRepository::<Horse>::new(db);

    let mut horses = Vec::new();
    for (name, age, breed) in [
        ("Comet", 9, HorseBreed::Morgan),
        ("Blaze", 4, HorseBreed::Arabian),
        ("Apollo", 12, HorseBreed::Arabian),
    ] {
        let mut active = new_horse(owner.id, name);
        active.age = ActiveValue::Set(age);
        active.breed = ActiveValue::Set(breed);
        horses.push(repo.create(active).await?);
    }

    Ok(horses)
}

fn names(horses: &[entity::horse::Model]) -> Vec<&str> {
    horses.iter().map(|h| h.name.as_str()).collect()
}

/// Tests listing with no sort.
///
/// Expected: Ok with records in primary key order
#[tokio::test]
async fn defaults_to_primary_key_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let horses = CrudRepository::<Horse>::new(db)
        .list(ListQuery::default())
        .await?;

    assert_eq!(names(&horses), vec!["Comet", "Blaze", "Apollo"]);

    Ok(())
}

/// Tests sorting by a named field in both directions.
///
/// Expected: Ok with records ordered by name
#[tokio::test]
async fn sorts_by_named_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;
    let repo = CrudRepository::<Horse>::new(db);

    let ascending = repo
        .list(ListQuery {
            sort: Some(Sort {
                field: "name".to_string(),
                order: SortOrder::Asc,
            }),
            ..Default::default()
        })
        .await?;
    let descending = repo
        .list(ListQuery {
            sort: Some(Sort {
                field: "age".to_string(),
                order: SortOrder::Desc,
            }),
            ..Default::default()
        })
        .await?;

    assert_eq!(names(&ascending), vec!["Apollo", "Blaze", "Comet"]);
    assert_eq!(names(&descending), vec!["Apollo", "Comet", "Blaze"]);

    Ok(())
}

/// Tests that unknown filter, sort and search field names are ignored.
///
/// Expected: Ok with the same result as an unfiltered list
#[tokio::test]
async fn ignores_unknown_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let horses = CrudRepository::<Horse>::new(db)
        .list(ListQuery {
            filters: vec![Filter::eq("favorite_treat", "carrot".to_string())],
            sort: Some(Sort {
                field: "shoe_size".to_string(),
                order: SortOrder::Desc,
            }),
            search: Some(Search {
                text: "zzz".to_string(),
                fields: vec!["nickname".to_string()],
            }),
            ..Default::default()
        })
        .await?;

    assert_eq!(names(&horses), vec!["Comet", "Blaze", "Apollo"]);

    Ok(())
}

/// Tests equality and inclusive range filters together.
///
/// Expected: Ok with only Arabians aged 4 through 9
#[tokio::test]
async fn applies_equality_and_range_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let query = ListQuery::default().with_filters(
        [Filter::eq("breed", "Arabian".to_string())]
            .into_iter()
            .chain(Filter::range("age", Some(4), Some(9))),
    );
    let horses = CrudRepository::<Horse>::new(db).list(query).await?;

    assert_eq!(names(&horses), vec!["Blaze"]);

    Ok(())
}

/// Tests that search ORs a substring match across the named fields.
///
/// Expected: Ok with horses whose name or description contains the text
#[tokio::test]
async fn search_matches_any_named_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CrudRepository::<Horse>::new(db);
    let by_name = repo
        .list(ListQuery {
            search: Some(Search {
                text: "pol".to_string(),
                fields: vec!["name".to_string(), "description".to_string()],
            }),
            ..Default::default()
        })
        .await?;
    let by_description = repo
        .list(ListQuery {
            search: Some(Search {
                text: "saddle".to_string(),
                fields: vec!["name".to_string(), "description".to_string()],
            }),
            ..Default::default()
        })
        .await?;

    assert_eq!(names(&by_name), vec!["Apollo"]);
    assert_eq!(by_description.len(), 3);

    Ok(())
}

/// Tests that search and `Contains` filters ignore letter case.
///
/// Expected: Ok with Apollo for an upper-case query and every horse for "BLACK"
#[tokio::test]
async fn substring_matches_ignore_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = CrudRepository::<Horse>::new(db);
    let searched = repo
        .list(ListQuery {
            search: Some(Search {
                text: "APOL".to_string(),
                fields: vec!["name".to_string()],
            }),
            ..Default::default()
        })
        .await?;
    let filtered = repo
        .list(ListQuery::default().with_filters([Filter::contains("color", "BLACK")]))
        .await?;

    assert_eq!(names(&searched), vec!["Apollo"]);
    assert_eq!(filtered.len(), 3);

    Ok(())
}

/// Tests the SQL emitted for substring matches per backend.
///
/// Expected: ILIKE on PostgreSQL, plain LIKE on SQLite
#[test]
fn postgres_substring_match_uses_ilike() {
    let query = || ListQuery {
        filters: vec![Filter::contains("color", "bay")],
        search: Some(Search {
            text: "éclair".to_string(),
            fields: vec!["name".to_string()],
        }),
        ..Default::default()
    };

    let postgres = list_select::<Horse>(DbBackend::Postgres, query())
        .build(DbBackend::Postgres)
        .to_string();
    let sqlite = list_select::<Horse>(DbBackend::Sqlite, query())
        .build(DbBackend::Sqlite)
        .to_string();

    assert_eq!(postgres.matches("ILIKE").count(), 2);
    assert!(sqlite.contains("LIKE"));
    assert!(!sqlite.contains("ILIKE"));
}

/// Tests skip and limit.
///
/// Expected: Ok with the second record only
#[tokio::test]
async fn paginates_with_skip_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_horse_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let horses = CrudRepository::<Horse>::new(db)
        .list(ListQuery::paginate(1, 1))
        .await?;

    assert_eq!(names(&horses), vec!["Blaze"]);

    Ok(())
}

use std::str::FromStr;

use rust_decimal::Decimal;

use beerfest_festival::error::FestivalError;
use beerfest_festival::usecase::beer::{
    CreateBeerInput, CreateBeerUseCase, DeleteBeerUseCase, UpdateBeerInput, UpdateBeerUseCase,
};
use beerfest_festival::usecase::catalog::{
    CreateBarUseCase, CreateBreweryInput, CreateBreweryUseCase, GetBarUseCase, GetBreweryUseCase,
};
use beerfest_festival::usecase::star::SetStarUseCase;

use crate::helpers::{
    MockBarRepo, MockBeerRepo, MockBreweryRepo, MockUserBeerRepo, relations,
};

fn beer_input(name: &str) -> CreateBeerInput {
    CreateBeerInput {
        name: name.to_owned(),
        brewery_id: 1,
        bar_id: 1,
        number: Some(12),
        reserved: false,
        abv: Some(Decimal::from_str("4.5").unwrap()),
        tasting_notes: "Pale and hoppy".to_owned(),
        notes: String::new(),
    }
}

fn create_beer_uc() -> CreateBeerUseCase<MockBeerRepo, MockBreweryRepo, MockBarRepo> {
    CreateBeerUseCase {
        beers: MockBeerRepo::with_ids(&[], relations()),
        breweries: MockBreweryRepo::with_ids(&[1]),
        bars: MockBarRepo::with_ids(&[1]),
    }
}

fn update_beer_uc() -> UpdateBeerUseCase<MockBeerRepo, MockBreweryRepo, MockBarRepo> {
    UpdateBeerUseCase {
        beers: MockBeerRepo::with_ids(&[1], relations()),
        breweries: MockBreweryRepo::with_ids(&[1]),
        bars: MockBarRepo::with_ids(&[1]),
    }
}

// ── Breweries / Bars ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_duplicate_brewery_name() {
    let uc = CreateBreweryUseCase {
        repo: MockBreweryRepo::with_ids(&[]),
    };
    let input = || CreateBreweryInput {
        name: "Thornbridge".to_owned(),
        location: "Bakewell".to_owned(),
    };

    let brewery = uc.execute(input()).await.unwrap();
    assert_eq!(brewery.to_string(), "Thornbridge");

    let result = uc.execute(input()).await;
    assert!(
        matches!(result, Err(FestivalError::BreweryAlreadyExists)),
        "expected BreweryAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_bar_name() {
    let uc = CreateBarUseCase {
        repo: MockBarRepo::with_ids(&[]),
    };
    let result = uc.execute("   ".to_owned()).await;
    assert!(matches!(result, Err(FestivalError::MissingData)));

    uc.execute("Cider Bar".to_owned()).await.unwrap();
    let result = uc.execute("Cider Bar".to_owned()).await;
    assert!(matches!(result, Err(FestivalError::BarAlreadyExists)));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_brewery_and_bar() {
    let brewery = GetBreweryUseCase {
        repo: MockBreweryRepo::with_ids(&[1]),
    }
    .execute(2)
    .await;
    assert!(matches!(brewery, Err(FestivalError::BreweryNotFound)));

    let bar = GetBarUseCase {
        repo: MockBarRepo::with_ids(&[1]),
    }
    .execute(2)
    .await;
    assert!(matches!(bar, Err(FestivalError::BarNotFound)));
}

// ── Beers ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_beer_with_scaled_abv() {
    let beer = create_beer_uc().execute(beer_input("Jaipur")).await.unwrap();

    assert_eq!(beer.name, "Jaipur");
    assert_eq!(beer.abv.unwrap().to_string(), "4.5%");
}

#[tokio::test]
async fn should_reject_beer_for_unknown_brewery_or_bar() {
    let uc = create_beer_uc();

    let mut input = beer_input("Jaipur");
    input.brewery_id = 9;
    assert!(matches!(
        uc.execute(input).await,
        Err(FestivalError::BreweryNotFound)
    ));

    let mut input = beer_input("Jaipur");
    input.bar_id = 9;
    assert!(matches!(
        uc.execute(input).await,
        Err(FestivalError::BarNotFound)
    ));
}

#[tokio::test]
async fn should_reject_invalid_abv() {
    let uc = create_beer_uc();
    for raw in ["100", "4.25", "-1"] {
        let mut input = beer_input("Jaipur");
        input.abv = Some(Decimal::from_str(raw).unwrap());
        let result = uc.execute(input).await;
        assert!(
            matches!(result, Err(FestivalError::InvalidAbv(_))),
            "expected InvalidAbv for {raw}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_reject_duplicate_beer_from_same_brewery() {
    let uc = create_beer_uc();
    uc.execute(beer_input("Jaipur")).await.unwrap();
    let result = uc.execute(beer_input("Jaipur")).await;
    assert!(matches!(result, Err(FestivalError::BeerAlreadyExists)));
}

#[tokio::test]
async fn should_require_at_least_one_field_on_update() {
    let result = update_beer_uc()
        .execute(1, UpdateBeerInput::default())
        .await;
    assert!(matches!(result, Err(FestivalError::MissingData)));
}

#[tokio::test]
async fn should_clear_abv_with_explicit_null() {
    let uc = update_beer_uc();
    let beers = uc.beers.beers_handle();
    uc.execute(
        1,
        UpdateBeerInput {
            abv: Some(Some(Decimal::from_str("6.2").unwrap())),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(
        beers.lock().unwrap()[0].beer.abv.map(|a| a.to_string()),
        Some("6.2%".to_owned())
    );

    uc.execute(
        1,
        UpdateBeerInput {
            abv: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(beers.lock().unwrap()[0].beer.abv.is_none());
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_beer() {
    let result = update_beer_uc()
        .execute(
            42,
            UpdateBeerInput {
                reserved: Some(true),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(FestivalError::BeerNotFound)));
}

#[tokio::test]
async fn should_cascade_relations_on_delete() {
    let rows = relations();
    SetStarUseCase {
        beers: MockBeerRepo::with_ids(&[1, 2], rows.clone()),
        relations: MockUserBeerRepo::new(rows.clone()),
    }
    .execute(uuid::Uuid::now_v7(), 1, beerfest_festival::domain::types::StarMode::Star)
    .await
    .unwrap();

    let uc = DeleteBeerUseCase {
        beers: MockBeerRepo::with_ids(&[1, 2], rows.clone()),
    };
    uc.execute(1).await.unwrap();
    assert!(rows.lock().unwrap().is_empty());

    let result = uc.execute(1).await;
    assert!(matches!(result, Err(FestivalError::BeerNotFound)));
}

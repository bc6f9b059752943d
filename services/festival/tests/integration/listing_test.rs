use uuid::Uuid;

use beerfest_festival::domain::types::StarMode;
use beerfest_festival::usecase::beer::{ListBeersUseCase, ListMyBeersUseCase};
use beerfest_festival::usecase::rating::RateBeerUseCase;
use beerfest_festival::usecase::star::{SetStarUseCase, SetTriedUseCase};

use crate::helpers::{MockBeerRepo, MockUserBeerRepo, relations};

const CATALOG: [i32; 4] = [1, 2, 3, 4];

#[tokio::test]
async fn should_default_flags_for_beers_without_relation_rows() {
    let rows = relations();
    let uc = ListBeersUseCase {
        beers: MockBeerRepo::with_ids(&CATALOG, rows.clone()),
    };

    let listings = uc.execute(Some(Uuid::now_v7())).await.unwrap();

    assert_eq!(listings.len(), CATALOG.len());
    for listing in listings {
        let viewer = listing.viewer.unwrap();
        assert!(!viewer.starred);
        assert!(viewer.rating.is_none());
    }
}

#[tokio::test]
async fn should_omit_annotation_for_anonymous_caller() {
    let rows = relations();
    let uc = ListBeersUseCase {
        beers: MockBeerRepo::with_ids(&CATALOG, rows.clone()),
    };
    let listings = uc.execute(None).await.unwrap();
    assert!(listings.iter().all(|l| l.viewer.is_none()));
}

#[tokio::test]
async fn should_not_duplicate_beers_across_users() {
    let rows = relations();
    let alice = Uuid::now_v7();
    let bob = Uuid::now_v7();
    let carol = Uuid::now_v7();
    let star = SetStarUseCase {
        beers: MockBeerRepo::with_ids(&CATALOG, rows.clone()),
        relations: MockUserBeerRepo::new(rows.clone()),
    };
    star.execute(alice, 1, StarMode::Star).await.unwrap();
    star.execute(bob, 1, StarMode::Star).await.unwrap();
    star.execute(bob, 2, StarMode::Unstar).await.unwrap();
    RateBeerUseCase {
        beers: MockBeerRepo::with_ids(&CATALOG, rows.clone()),
        relations: MockUserBeerRepo::new(rows.clone()),
    }
    .execute(carol, 1, 2)
    .await
    .unwrap();
    assert_eq!(
        rows.lock().unwrap().iter().filter(|r| r.beer_id == 1).count(),
        3,
        "beer 1 should carry one relation row per user"
    );

    let uc = ListBeersUseCase {
        beers: MockBeerRepo::with_ids(&CATALOG, rows.clone()),
    };
    for viewer in [Some(alice), Some(bob), Some(carol), Some(Uuid::now_v7()), None] {
        let listings = uc.execute(viewer).await.unwrap();
        let ids: Vec<i32> = listings.iter().map(|l| l.beer.id).collect();
        assert_eq!(ids, CATALOG.to_vec(), "viewer {viewer:?}");
    }

    let alice_view = uc.execute(Some(alice)).await.unwrap();
    assert!(alice_view[0].viewer.unwrap().starred);
    assert!(!alice_view[1].viewer.unwrap().starred);
}

#[tokio::test]
async fn should_list_only_interacted_beers_for_profile() {
    let rows = relations();
    let user_id = Uuid::now_v7();
    let beers = || MockBeerRepo::with_ids(&CATALOG, rows.clone());
    SetStarUseCase {
        beers: beers(),
        relations: MockUserBeerRepo::new(rows.clone()),
    }
    .execute(user_id, 1, StarMode::Star)
    .await
    .unwrap();
    SetTriedUseCase {
        beers: beers(),
        relations: MockUserBeerRepo::new(rows.clone()),
    }
    .execute(user_id, 3, true)
    .await
    .unwrap();
    RateBeerUseCase {
        beers: beers(),
        relations: MockUserBeerRepo::new(rows.clone()),
    }
    .execute(user_id, 3, 4)
    .await
    .unwrap();
    SetStarUseCase {
        beers: beers(),
        relations: MockUserBeerRepo::new(rows.clone()),
    }
    .execute(user_id, 4, StarMode::Unstar)
    .await
    .unwrap();

    let listings = ListMyBeersUseCase { beers: beers() }
        .execute(user_id)
        .await
        .unwrap();

    let ids: Vec<i32> = listings.iter().map(|l| l.beer.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

use axum::{
    Router,
    routing::{get, post, put},
};

use beerfest_core::health::healthz;
use beerfest_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    bar::{create_bar, get_bar, list_bars},
    beer::{create_beer, delete_beer, get_beer, list_beers, update_beer},
    brewery::{create_brewery, get_brewery, list_breweries},
    health::readyz,
    index::index,
    rating::{clear_rating, rate_beer},
    star::{get_star, mark_tried, star_beer, unmark_tried, unstar_beer},
    user::{create_user, get_me, get_my_beers},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Beers
        .route("/beers/", get(list_beers).post(create_beer))
        .route(
            "/beers/{id}/",
            get(get_beer).patch(update_beer).delete(delete_beer),
        )
        .route(
            "/beers/{id}/star/",
            get(get_star)
                .post(star_beer)
                .put(star_beer)
                .delete(unstar_beer),
        )
        .route("/beers/{id}/unstar/", post(unstar_beer).delete(unstar_beer))
        .route(
            "/beers/{id}/tried/",
            post(mark_tried).put(mark_tried).delete(unmark_tried),
        )
        .route("/beers/{id}/rating/", put(rate_beer).delete(clear_rating))
        // Catalog
        .route("/bars/", get(list_bars).post(create_bar))
        .route("/bars/{id}/", get(get_bar))
        .route("/breweries/", get(list_breweries).post(create_brewery))
        .route("/breweries/{id}/", get(get_brewery))
        // Users
        .route("/users", post(create_user))
        .route("/users/@me", get(get_me))
        .route("/users/@me/beers", get(get_my_beers))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}

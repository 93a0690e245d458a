//! In-memory stand-in for the nearest-places service.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

const EARTH_RADIUS_M: f64 = 6_371_000.0;
const DEFAULT_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    #[serde(flatten)]
    pub place: Place,
    pub distance_m: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NearestResponse {
    pub places: Vec<NearbyPlace>,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct NearestParams {
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

pub type Db = Arc<Vec<Place>>;

pub fn app() -> Router {
    app_with(fixture())
}

pub fn app_with(places: Vec<Place>) -> Router {
    let db: Db = Arc::new(places);
    Router::new()
        .route("/api/places/nearest", get(nearest_places))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn nearest_places(
    State(db): State<Db>,
    Query(params): Query<NearestParams>,
) -> Json<NearestResponse> {
    debug!(
        lat = params.lat,
        lng = params.lng,
        category = %params.category,
        limit = params.limit,
        "nearest places query"
    );
    Json(NearestResponse {
        places: nearest(&db, &params),
    })
}

/// Places of the requested category ordered by distance, capped at `limit`.
pub fn nearest(places: &[Place], params: &NearestParams) -> Vec<NearbyPlace> {
    let mut hits: Vec<NearbyPlace> = places
        .iter()
        .filter(|p| p.category == params.category)
        .map(|p| NearbyPlace {
            distance_m: haversine_m(params.lat, params.lng, p.lat, p.lng),
            place: p.clone(),
        })
        .collect();
    hits.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    hits.truncate(params.limit);
    hits
}

/// Great-circle distance in metres.
pub fn haversine_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

fn place(id: &str, name: &str, category: &str, lat: f64, lng: f64) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        lat,
        lng,
    }
}

/// A handful of places around central Berlin.
pub fn fixture() -> Vec<Place> {
    vec![
        place("cafe-1", "Café Einstein", "cafe", 52.5058, 13.3530),
        place("cafe-2", "Father Carpenter", "cafe", 52.5246, 13.4027),
        place("cafe-3", "The Barn", "cafe", 52.5289, 13.4014),
        place("cafe-4", "Bonanza Coffee", "cafe", 52.5388, 13.4123),
        place("park-1", "Tiergarten", "park", 52.5145, 13.3501),
        place("park-2", "Volkspark Friedrichshain", "park", 52.5280, 13.4350),
        place("park-3", "Tempelhofer Feld", "park", 52.4731, 13.4018),
        place("museum-1", "Pergamonmuseum", "museum", 52.5212, 13.3969),
        place("museum-2", "Neues Museum", "museum", 52.5200, 13.3977),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(category: &str, limit: usize) -> NearestParams {
        NearestParams {
            lat: 52.5200,
            lng: 13.4050,
            category: category.to_string(),
            limit,
        }
    }

    #[test]
    fn haversine_zero_for_same_point() {
        assert_eq!(haversine_m(52.52, 13.405, 52.52, 13.405), 0.0);
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        let d = haversine_m(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111_195.0).abs() < 1.0, "{d}");
    }

    #[test]
    fn nearest_filters_by_category_and_sorts() {
        let hits = nearest(&fixture(), &params("cafe", 50));
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|h| h.place.category == "cafe"));
        assert!(hits.windows(2).all(|w| w[0].distance_m <= w[1].distance_m));
        assert_eq!(hits[0].place.id, "cafe-2");
    }

    #[test]
    fn nearest_applies_limit() {
        let hits = nearest(&fixture(), &params("park", 2));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn nearest_unknown_category_is_empty() {
        assert!(nearest(&fixture(), &params("casino", 50)).is_empty());
    }

    #[test]
    fn nearby_place_flattens_place_fields() {
        let hit = NearbyPlace {
            place: place("p", "P", "park", 1.0, 2.0),
            distance_m: 3.5,
        };
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json["id"], "p");
        assert_eq!(json["category"], "park");
        assert_eq!(json["distance_m"], 3.5);
    }

    #[test]
    fn params_default_limit_to_fifty() {
        let p: NearestParams =
            serde_json::from_str(r#"{"lat":1.0,"lng":2.0,"category":"cafe"}"#).unwrap();
        assert_eq!(p.limit, 50);
    }
}

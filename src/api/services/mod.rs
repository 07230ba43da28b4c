pub mod banners;
pub mod health;
pub mod helpers;
pub mod routes;
pub mod tracking;
pub mod types;

pub use health::AppStartTime;
pub use routes::{banner_routes, health_routes, track_routes};
pub use types::{
    BannerPayload, BannerResponse, GetConfigQuery, StatusChangeRequest, SuccessResponse,
    TrackRequest, UpsertResponse,
};

// Game-side glue for external services
//
// - `advertising`: banner sizing and show/hide state for the ad SDK
// - `social`: profile fields requested by social login

pub mod advertising;
pub mod social;

pub use advertising::{AdController, AdRequest, AdService, AdStatus, BannerSize, DisplayMetrics};
pub use social::{fields_query, requested_fields, FacebookField};

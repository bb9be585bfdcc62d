// Advertising banner glue
//
// The ad SDK itself is an external collaborator reached through `AdService`.
// This module only decides the banner size and tracks the show/hide state.

use crate::config::{AdConfig, AppConfig};
use log::{error, info, warn};

/// Width in density-independent pixels above which the full banner fits
pub const FULL_BANNER_MIN_WIDTH_DP: f32 = 468.0;

/// Baseline density (mdpi) used to convert pixels to dp
const BASELINE_DPI: f32 = 160.0;

/// Screen size and density as reported by the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub width_px: u32,
    pub xdpi: f32,
}

impl DisplayMetrics {
    pub fn new(width_px: u32, xdpi: f32) -> Self {
        Self { width_px, xdpi }
    }

    /// Screen width in density-independent pixels, if the density is usable
    pub fn width_dp(&self) -> Option<f32> {
        if self.xdpi > 0.0 && self.xdpi.is_finite() {
            Some(self.width_px as f32 * BASELINE_DPI / self.xdpi)
        } else {
            None
        }
    }
}

/// Standard banner formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerSize {
    /// 320x50
    Banner,
    /// 468x60
    FullBanner,
}

impl BannerSize {
    /// Size in dp
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            BannerSize::Banner => (320, 50),
            BannerSize::FullBanner => (468, 60),
        }
    }

    /// Largest banner that fits the display width
    pub fn for_display(metrics: DisplayMetrics) -> Self {
        match metrics.width_dp() {
            Some(width) if width > FULL_BANNER_MIN_WIDTH_DP => BannerSize::FullBanner,
            _ => BannerSize::Banner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdStatus {
    /// Loaded and hidden
    Loaded,
    /// Show animation running
    Displaying,
    /// Fully visible
    Displayed,
}

/// Everything the SDK needs to request an ad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdRequest<'a> {
    pub unit_id: &'a str,
    pub banner: BannerSize,
    pub interstitial: bool,
    pub test_mode: bool,
}

/// Advertising SDK
pub trait AdService {
    /// Start loading an ad
    fn load(&mut self, request: AdRequest<'_>);

    /// Attach the ad view top-centered, make it visible and start the show animation
    fn show(&mut self);

    /// Stop any running animation on the ad view
    fn clear_animation(&mut self);

    /// Make the ad view invisible
    fn hide(&mut self);
}

/// Drives an [`AdService`] from the game lifecycle
pub struct AdController<S> {
    service: S,
    config: AdConfig,
    internet_allowed: bool,
    status: Option<AdStatus>,
}

impl<S: AdService> AdController<S> {
    pub fn new(service: S, config: &AppConfig) -> Self {
        Self {
            service,
            config: config.advertising.clone(),
            internet_allowed: config.permissions.internet,
            status: None,
        }
    }

    /// Current status, `None` until the SDK reports a loaded ad
    pub fn status(&self) -> Option<AdStatus> {
        self.status
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Request an ad sized for the display
    ///
    /// Returns the requested banner, or `None` when advertising is disabled.
    pub fn load(&mut self, metrics: DisplayMetrics) -> Option<BannerSize> {
        if !self.config.enabled {
            info!("Advertising disabled, no ad requested");
            return None;
        }

        if !self.internet_allowed {
            error!("Missing INTERNET & ACCESS_NETWORK_STATE permissions");
        }

        let banner = BannerSize::for_display(metrics);
        info!("Requesting {:?} ad for {:?}", banner, metrics);

        self.service.load(AdRequest {
            unit_id: &self.config.unit_id,
            banner,
            interstitial: self.config.interstitial,
            test_mode: self.config.test_mode,
        });
        Some(banner)
    }

    /// SDK callback: an ad finished loading
    pub fn on_ad_loaded(&mut self) {
        if self.status.is_none() {
            self.status = Some(AdStatus::Loaded);
        }
    }

    /// Show the ad. Returns false when no ad is loaded yet.
    pub fn display(&mut self) -> bool {
        if self.status.is_none() {
            warn!("No ad loaded to display");
            return false;
        }

        self.service.show();
        self.status = Some(AdStatus::Displaying);
        true
    }

    /// Show animation finished
    pub fn on_display_animation_end(&mut self) {
        if self.status == Some(AdStatus::Displaying) {
            self.status = Some(AdStatus::Displayed);
        }
    }

    /// Hide the ad, interrupting the show animation if needed
    pub fn hide(&mut self) {
        self.service.clear_animation();
        self.service.hide();

        if self.status.is_some() {
            self.status = Some(AdStatus::Loaded);
        }
    }
}

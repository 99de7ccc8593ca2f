//! Modal photo viewer
//!
//! A [`Lightbox`] is one owned instance per host view. Hosts turn their input
//! into [`LightboxEvent`]s, call [`Lightbox::dispatch`], and apply the returned
//! [`Effect`]s in order.
//!
//! # Examples
//!
//! ```
//! use gigshelf::catalog::{AssetLayout, EventRecord};
//! use gigshelf::lightbox::{Effect, Lightbox, LightboxKey};
//!
//! let record = EventRecord::new("a", "2023-05-01", "Hall A", "Paris", "FR")
//!     .with_photos(["p0", "p1", "p2"]);
//! let photos = AssetLayout::default().photo_refs(&record);
//!
//! let mut lightbox = Lightbox::new();
//! lightbox.open(photos, 0, Some("tile-0"));
//! lightbox.handle_key(LightboxKey::Left);
//! assert_eq!(lightbox.index(), Some(2));
//!
//! let effects = lightbox.handle_key(LightboxKey::Escape);
//! assert!(effects.contains(&Effect::RestoreFocus("tile-0")));
//! ```

mod keys;
pub mod preload;
mod state;

pub use preload::{AssetPrefetcher, AssetStatus, NoopPreloader, Preloader};
pub use state::{
    Control, Effect, Lightbox, LightboxEvent, LightboxKey, LightboxState, PhotoView,
};

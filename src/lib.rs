//! Apparel mockup generation engine.
//!
//! Composites a company logo and text onto garment template images with
//! industry-driven styling defaults. The pipeline per mockup type:
//! industry profile lookup, logo normalization (raster resample or SVG
//! rasterization, with best-effort vectorization of flat-color marks),
//! layout computation, text rendering and PNG compositing, all behind a
//! TTL result cache keyed on the request tuple.
//!
//! CRM access, HTTP routing, upload storage and history persistence live
//! in external collaborators; the core only consumes logo bytes/paths and
//! pre-provisioned template assets.

pub mod cache;
pub mod compositor;
pub mod generator;
pub mod industry;
pub mod layout;
pub mod logo;
pub mod perf;
pub mod text;
pub mod util;
pub mod vectorize;

pub use cache::{CacheStats, ResultCache};
pub use compositor::ComposeError;
pub use generator::{
    GeneratorConfig, MockupBatch, MockupGenerator, MockupRequest, MockupResult, RequestError,
};
pub use industry::{Industry, IndustryProfile, Layout, LogoPosition, LogoSize, MockupType, TextStyle};
pub use logo::{LogoError, LogoSource};

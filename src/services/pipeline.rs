//! The render session: source, parameters, cache and guard in one place.
//!
//! A [`RenderSession`] owns all state the transforms touch, so there are no
//! ambient globals: the current source raster, the result cache and the
//! timing stats travel together. Callers feed it a [`ParameterSet`] per
//! render; everything else is internal.

use std::sync::Arc;
use std::time::Instant;

use mangrove_dither::{resize_nearest, tone, Raster};

use crate::error::RenderError;
use crate::models::config::StudioConfig;
use crate::models::params::{Mode, ParameterSet};
use crate::rendering::halftone;

use super::result_cache::ResultCache;
use super::stats::ProcessingStats;

/// One completed render.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub raster: Arc<Raster>,
    /// The raster came straight from the result cache.
    pub cache_hit: bool,
    /// Set when the engine failed and the resized, unprocessed source was
    /// substituted. Non-fatal; surface it to the user as a notice.
    pub notice: Option<String>,
}

/// Session state for one loaded image.
pub struct RenderSession {
    config: StudioConfig,
    source: Option<Raster>,
    cache: ResultCache,
    stats: ProcessingStats,
    /// Re-entrancy guard: engines write shared output buffers in place, so
    /// a render that arrives while one is in flight is rejected with
    /// [`RenderError::Busy`] instead of running concurrently.
    pub(crate) processing: bool,
}

impl RenderSession {
    pub fn new(config: StudioConfig) -> Self {
        let cache = ResultCache::new(config.cache_capacity);
        Self {
            config,
            source: None,
            cache,
            stats: ProcessingStats::new(),
            processing: false,
        }
    }

    /// Replace the source raster.
    ///
    /// This is the only way the source changes, and it always clears the
    /// cache: fingerprints do not hash source content, so entries from the
    /// previous image must not survive even when dimensions match.
    pub fn load_source(&mut self, raster: Raster) {
        tracing::info!(
            width = raster.width(),
            height = raster.height(),
            "Source image loaded"
        );
        self.cache.clear();
        self.source = Some(raster);
    }

    pub fn source(&self) -> Option<&Raster> {
        self.source.as_ref()
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Number of entries currently cached.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// Run one transform.
    ///
    /// Parameters are clamped, the cache is consulted by fingerprint, and a
    /// halftone engine failure falls back to the resized source with a
    /// notice rather than propagating. The only errors that reach the
    /// caller are [`RenderError::NoSource`] and [`RenderError::Busy`], both
    /// of which the scheduler handles.
    pub fn render(&mut self, params: &ParameterSet) -> Result<RenderOutput, RenderError> {
        let params = params.clamped();

        let (src_w, src_h) = match self.source.as_ref() {
            Some(s) => (s.width(), s.height()),
            None => return Err(RenderError::NoSource),
        };
        if self.processing {
            return Err(RenderError::Busy);
        }

        let fingerprint = params.fingerprint(src_w, src_h);
        if let Some(hit) = self.cache.get(&fingerprint) {
            tracing::debug!(%fingerprint, "Result cache hit");
            return Ok(RenderOutput {
                raster: hit,
                cache_hit: true,
                notice: None,
            });
        }

        self.processing = true;
        let started = Instant::now();
        let (raster, notice) = {
            // Guaranteed present: checked above, and nothing in between can
            // replace the source on a single thread.
            let source = match self.source.as_ref() {
                Some(s) => s,
                None => {
                    self.processing = false;
                    return Err(RenderError::NoSource);
                }
            };
            Self::execute(source, &params)
        };
        self.processing = false;
        self.stats.record(started.elapsed());

        if notice.is_none() {
            self.cache.put(fingerprint, raster.clone());
        }

        Ok(RenderOutput {
            raster,
            cache_hit: false,
            notice,
        })
    }

    /// Dispatch to the selected engine. Halftone failures are caught here:
    /// the resized, unprocessed source is always an acceptable fallback
    /// render.
    fn execute(source: &Raster, params: &ParameterSet) -> (Arc<Raster>, Option<String>) {
        match params.mode {
            Mode::Dither => {
                // The dither path tone-adjusts up front; halftone applies
                // brightness and contrast inside its cell procedure instead.
                let adjusted = tone::adjust(source, params.brightness, params.contrast);
                let raster = params
                    .dither_algorithm
                    .render(&adjusted, &params.dither_options());
                (Arc::new(raster), None)
            }
            Mode::Halftone => match halftone::render(source, params) {
                Ok(raster) => (Arc::new(raster), None),
                Err(e) => {
                    tracing::warn!(error = %e, "Halftone render failed, showing unprocessed source");
                    let fallback =
                        resize_nearest(source, params.display_width, params.display_height);
                    (Arc::new(fallback), Some(e.to_string()))
                }
            },
        }
    }
}

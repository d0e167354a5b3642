use anyhow::{Result, anyhow};
use tracing_subscriber::fmt::time::OffsetTime;

pub mod color;
pub mod linalg;
mod linalg_def;
pub mod pack;
pub mod shape;

pub mod float {
    use crate::core::config::{ABS_TOLERANCE, REL_TOLERANCE};
    use num_traits::Zero;

    /// Tolerance comparison with both a relative and an absolute bound, i.e.
    /// `|a - b| <= max(REL_TOLERANCE * max(|a|, |b|), ABS_TOLERANCE)`.
    ///
    /// Infinities are only close to themselves; `NaN` is never close to anything.
    pub fn is_close(a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let diff = (a - b).abs();
        diff <= f64::max(REL_TOLERANCE * a.abs().max(b.abs()), ABS_TOLERANCE)
    }

    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x }
    }

    /// Fractional part of `x`, always in `[0, 1)`.
    pub fn wrap_unit(x: f64) -> f64 {
        let rv = x.rem_euclid(1.0);
        // rem_euclid() can round up to exactly 1.0 for tiny negative inputs.
        if rv >= 1.0 { 0.0 } else { force_positive_zero(rv) }
    }

}

pub mod err {
    use tracing::error;

    fn log_error(e: &anyhow::Error) {
        error!("{}", e);
        e.chain()
            .skip(1)
            .for_each(|cause| error!("caused by: {}", cause));
    }

    pub fn log_err_and_ignore<T>(result: anyhow::Result<T>) {
        if let Err(e) = result {
            log_error(&e);
        }
    }

    pub fn log_and_ok<T>(result: anyhow::Result<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                log_error(&e);
                None
            }
        }
    }
}

/// Installs a `tracing` subscriber printing to stderr. The library itself never calls this.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

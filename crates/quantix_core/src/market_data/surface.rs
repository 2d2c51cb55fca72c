//! Volatility surface built from observed market quotes.
//!
//! The surface is a sparse strike × expiry grid grouped into per-expiry
//! smile slices, each carrying derived smile diagnostics (ATM volatility,
//! delta skews, slope, convexity), plus a per-expiry term structure.
//!
//! # Lookup semantics
//!
//! [`VolatilitySurface::interpolate`] is a nearest-neighbour lookup: it
//! picks the closest quoted expiry, then the closest quoted strike within
//! that slice. It does not blend between grid points. This is intentional —
//! upgrading to bilinear or spline interpolation would silently change
//! numerical outputs for existing consumers, so a richer scheme belongs
//! behind a new entry point, not this one.

use super::error::SurfaceError;
use crate::types::OptionType;

/// Fallback volatility used when a smile diagnostic has no matching quote.
const DEFAULT_VOL: f64 = 0.20;

/// Moneyness band around 1.0 within which a quote counts as at-the-money.
const ATM_BAND: f64 = 0.05;

/// Tolerance band around a target |delta| for skew matching.
const DELTA_BAND: f64 = 0.05;

/// A raw calibration input: one observed option quote.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolatilityQuote {
    /// Strike price.
    pub strike: f64,
    /// Time to expiry in years.
    pub expiry: f64,
    /// Implied volatility backed out of the market price.
    pub implied_vol: f64,
    /// Whether the quote is a call or a put.
    pub option_type: OptionType,
    /// Observed market price.
    pub market_price: f64,
    /// Option delta, when the feed supplies it (signed; puts negative).
    pub delta: Option<f64>,
}

/// Smile diagnostics for a single expiry slice.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmileMetrics {
    /// Volatility of the quote nearest to moneyness 1 (within a 5% band;
    /// 0.20 default when no quote qualifies).
    pub atm_vol: f64,
    /// 25-delta skew: put vol minus call vol at |delta| ≈ 0.25.
    pub skew_25_delta: f64,
    /// 10-delta skew: put vol minus call vol at |delta| ≈ 0.10.
    pub skew_10_delta: f64,
    /// Linear slope between the lowest- and highest-strike vols.
    pub slope: f64,
    /// Wing convexity: `left + right - 2 * mid`.
    pub convexity: f64,
}

/// One expiry's smile: strikes, vols and derived metrics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmileSlice {
    expiry: f64,
    strikes: Vec<f64>,
    vols: Vec<f64>,
    metrics: SmileMetrics,
}

impl SmileSlice {
    /// Returns the slice expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the sorted strikes of the slice.
    #[inline]
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Returns the implied vols aligned with [`SmileSlice::strikes`].
    #[inline]
    pub fn vols(&self) -> &[f64] {
        &self.vols
    }

    /// Returns the derived smile diagnostics.
    #[inline]
    pub fn metrics(&self) -> &SmileMetrics {
        &self.metrics
    }
}

/// One point of the volatility term structure.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermStructurePoint {
    /// Expiry in years.
    pub expiry: f64,
    /// Average implied vol across the slice.
    pub average_vol: f64,
    /// Max minus min implied vol across the slice.
    pub vol_range: f64,
}

/// Immutable volatility surface built from a batch of quotes.
///
/// The surface is built once and replaced wholesale on recalibration;
/// there is no incremental mutation.
///
/// # Examples
/// ```
/// use quantix_core::market_data::{VolatilityQuote, VolatilitySurface};
/// use quantix_core::types::OptionType;
///
/// let quote = |strike: f64, expiry: f64, vol: f64| VolatilityQuote {
///     strike,
///     expiry,
///     implied_vol: vol,
///     option_type: OptionType::Call,
///     market_price: 5.0,
///     delta: None,
/// };
///
/// let quotes = [
///     quote(90.0, 0.5, 0.24),
///     quote(100.0, 0.5, 0.20),
///     quote(110.0, 0.5, 0.22),
///     quote(100.0, 1.0, 0.21),
/// ];
///
/// let surface = VolatilitySurface::build(&quotes, 100.0).unwrap();
/// assert_eq!(surface.expiries(), &[0.5, 1.0]);
/// // Nearest-neighbour lookup: closest expiry, then closest strike.
/// assert_eq!(surface.interpolate(104.0, 0.4), 0.20);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolatilitySurface {
    spot: f64,
    expiries: Vec<f64>,
    slices: Vec<SmileSlice>,
    term_structure: Vec<TermStructurePoint>,
}

impl VolatilitySurface {
    /// Builds a surface from a batch of quotes and the reference spot.
    ///
    /// Quotes are grouped by expiry, then sorted by strike within each
    /// slice. Duplicate strikes within one expiry are collapsed, the later
    /// quote winning (map-insert semantics).
    ///
    /// # Arguments
    /// * `quotes` - Observed quotes (any order)
    /// * `spot` - Reference spot used for moneyness-based diagnostics
    ///
    /// # Errors
    /// - [`SurfaceError::NoQuotes`] for an empty batch
    /// - [`SurfaceError::InvalidSpot`] for a non-positive spot
    /// - [`SurfaceError::InvalidStrike`] / [`SurfaceError::InvalidExpiry`] /
    ///   [`SurfaceError::InvalidVolatility`] for a malformed quote
    pub fn build(quotes: &[VolatilityQuote], spot: f64) -> Result<Self, SurfaceError> {
        if quotes.is_empty() {
            return Err(SurfaceError::NoQuotes);
        }
        if !(spot > 0.0) {
            return Err(SurfaceError::InvalidSpot { spot });
        }
        for q in quotes {
            if !(q.strike > 0.0) {
                return Err(SurfaceError::InvalidStrike { strike: q.strike });
            }
            if !(q.expiry > 0.0) {
                return Err(SurfaceError::InvalidExpiry { expiry: q.expiry });
            }
            if !(q.implied_vol > 0.0) {
                return Err(SurfaceError::InvalidVolatility {
                    volatility: q.implied_vol,
                });
            }
        }

        // Group by expiry, preserving intra-group quote order.
        let mut sorted: Vec<VolatilityQuote> = quotes.to_vec();
        sorted.sort_by(|a, b| a.expiry.total_cmp(&b.expiry));

        let mut expiries = Vec::new();
        let mut slices = Vec::new();
        let mut term_structure = Vec::new();

        let mut start = 0;
        while start < sorted.len() {
            let expiry = sorted[start].expiry;
            let mut end = start + 1;
            while end < sorted.len() && sorted[end].expiry == expiry {
                end += 1;
            }
            let group = &sorted[start..end];
            let slice = build_slice(expiry, group, spot);
            term_structure.push(term_point(&slice));
            expiries.push(expiry);
            slices.push(slice);
            start = end;
        }

        Ok(Self {
            spot,
            expiries,
            slices,
            term_structure,
        })
    }

    /// Returns the reference spot the surface was built against.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the sorted quoted expiries.
    #[inline]
    pub fn expiries(&self) -> &[f64] {
        &self.expiries
    }

    /// Returns the per-expiry smile slices, sorted by expiry.
    #[inline]
    pub fn slices(&self) -> &[SmileSlice] {
        &self.slices
    }

    /// Returns the per-expiry term structure, sorted by expiry.
    #[inline]
    pub fn term_structure(&self) -> &[TermStructurePoint] {
        &self.term_structure
    }

    /// Nearest-neighbour volatility lookup.
    ///
    /// Picks the quoted expiry closest to `expiry`, then the quoted strike
    /// closest to `strike` within that slice, and returns that grid vol
    /// unchanged. There is no blending between grid points; see the module
    /// documentation for why this stays nearest-neighbour.
    pub fn interpolate(&self, strike: f64, expiry: f64) -> f64 {
        let slice = nearest_by(&self.slices, |s| (s.expiry() - expiry).abs());
        let idx = nearest_index(slice.strikes(), strike);
        slice.vols[idx]
    }
}

/// Returns the element minimising the given distance measure.
///
/// `items` is non-empty by construction of the surface.
fn nearest_by<T>(items: &[T], distance: impl Fn(&T) -> f64) -> &T {
    let mut best = &items[0];
    let mut best_dist = distance(best);
    for item in &items[1..] {
        let d = distance(item);
        if d < best_dist {
            best_dist = d;
            best = item;
        }
    }
    best
}

/// Index of the value in a non-empty sorted slice closest to `target`.
fn nearest_index(values: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_dist = (values[0] - target).abs();
    for (i, v) in values.iter().enumerate().skip(1) {
        let d = (v - target).abs();
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

fn build_slice(expiry: f64, group: &[VolatilityQuote], spot: f64) -> SmileSlice {
    // Sort by strike and collapse duplicates (later quote wins).
    let mut by_strike: Vec<&VolatilityQuote> = group.iter().collect();
    by_strike.sort_by(|a, b| a.strike.total_cmp(&b.strike));

    let mut strikes: Vec<f64> = Vec::with_capacity(by_strike.len());
    let mut vols: Vec<f64> = Vec::with_capacity(by_strike.len());
    for q in &by_strike {
        if strikes.last() == Some(&q.strike) {
            *vols.last_mut().expect("vols tracks strikes") = q.implied_vol;
        } else {
            strikes.push(q.strike);
            vols.push(q.implied_vol);
        }
    }

    let metrics = SmileMetrics {
        atm_vol: atm_vol(group, spot),
        skew_25_delta: delta_skew(group, 0.25),
        skew_10_delta: delta_skew(group, 0.10),
        slope: smile_slope(&strikes, &vols),
        convexity: smile_convexity(&vols),
    };

    SmileSlice {
        expiry,
        strikes,
        vols,
        metrics,
    }
}

/// Vol of the quote nearest to moneyness 1, within a 5% band.
fn atm_vol(group: &[VolatilityQuote], spot: f64) -> f64 {
    let q = nearest_by(group, |q| (spot / q.strike - 1.0).abs());
    if (spot / q.strike - 1.0).abs() <= ATM_BAND {
        q.implied_vol
    } else {
        DEFAULT_VOL
    }
}

/// Put vol minus call vol at a target absolute delta.
///
/// Each side independently falls back to the 0.20 default when no quote
/// lands within the 0.05 tolerance band around the target.
fn delta_skew(group: &[VolatilityQuote], target: f64) -> f64 {
    let side_vol = |want_call: bool| -> f64 {
        let mut best: Option<(f64, f64)> = None;
        for q in group {
            if q.option_type.is_call() != want_call {
                continue;
            }
            let Some(delta) = q.delta else { continue };
            let dist = (delta.abs() - target).abs();
            if dist <= DELTA_BAND && best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, q.implied_vol));
            }
        }
        best.map_or(DEFAULT_VOL, |(_, vol)| vol)
    };

    side_vol(false) - side_vol(true)
}

/// Linear slope between the lowest- and highest-strike vols.
fn smile_slope(strikes: &[f64], vols: &[f64]) -> f64 {
    if strikes.len() < 2 {
        return 0.0;
    }
    let width = strikes[strikes.len() - 1] - strikes[0];
    (vols[vols.len() - 1] - vols[0]) / width
}

/// Wing convexity: `left + right - 2 * mid` on the strike grid.
fn smile_convexity(vols: &[f64]) -> f64 {
    if vols.len() < 3 {
        return 0.0;
    }
    vols[0] + vols[vols.len() - 1] - 2.0 * vols[vols.len() / 2]
}

fn term_point(slice: &SmileSlice) -> TermStructurePoint {
    let vols = slice.vols();
    let n = vols.len() as f64;
    let average_vol = vols.iter().sum::<f64>() / n;
    let max = vols.iter().cloned().fold(f64::MIN, f64::max);
    let min = vols.iter().cloned().fold(f64::MAX, f64::min);
    TermStructurePoint {
        expiry: slice.expiry(),
        average_vol,
        vol_range: max - min,
    }
}

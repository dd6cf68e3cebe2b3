//! Initial camera from data
//!
//! Frames a set of points: centered on their mean, zoomed so the bounding box
//! of the points closest to that mean fits the viewport.

use geo::{BoundingRect, Centroid, EuclideanDistance};
use geo_types::{MultiPoint, Point};

use crate::{core::geo::LatLng, views::view_state::ViewState};

/// Spans narrower than this (in degrees) get the closest zoom deck.gl offers.
const MIN_SPAN: f64 = 360.0 / 1_048_576.0;
const CLOSEST_ZOOM: f64 = 21.0;
const FURTHEST_ZOOM: f64 = 1.0;

/// Computes a view state framing `points`.
///
/// `view_proportion` is the share of points (nearest to the centroid) that
/// must be in view; `1.0` keeps all of them, letting outliers widen the view.
/// Returns `None` for an empty slice.
pub fn compute_view(points: &[LatLng], view_proportion: f64) -> Option<ViewState> {
    let all: MultiPoint<f64> = points.iter().map(|&p| Point::from(p)).collect();
    let center = all.centroid()?;

    let kept = nearest_share(&all, center, view_proportion);
    let zoom = kept
        .bounding_rect()
        .map(|rect| zoom_for_span(rect.width().max(rect.height())))
        .unwrap_or(CLOSEST_ZOOM);

    log::debug!(
        "computed view over {} of {} points: center ({:.5}, {:.5}) zoom {}",
        kept.0.len(),
        points.len(),
        center.x(),
        center.y(),
        zoom
    );

    Some(ViewState::new(center.x(), center.y(), zoom))
}

/// Keeps the `floor(proportion * n)` points closest to `center`.
fn nearest_share(points: &MultiPoint<f64>, center: Point<f64>, proportion: f64) -> MultiPoint<f64> {
    let proportion = if proportion.is_finite() {
        proportion.clamp(0.0, 1.0)
    } else {
        1.0
    };
    if proportion >= 1.0 {
        return points.clone();
    }

    let keep = ((proportion * points.0.len() as f64).floor() as usize).max(1);
    let mut by_distance: Vec<(f64, Point<f64>)> = points
        .iter()
        .map(|p| (p.euclidean_distance(&center), *p))
        .collect();
    by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));

    by_distance.into_iter().take(keep).map(|(_, p)| p).collect()
}

/// Zoom at which a span of `max_diff` degrees fills the view.
fn zoom_for_span(max_diff: f64) -> f64 {
    if max_diff < MIN_SPAN {
        return CLOSEST_ZOOM;
    }
    (360f64.log2() - max_diff.log2()).trunc().max(FURTHEST_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(compute_view(&[], 1.0).is_none());
    }

    #[test]
    fn test_single_point_gets_closest_zoom() {
        let view = compute_view(&[LatLng::new(37.8, -122.4)], 1.0).unwrap();
        assert_eq!(view.zoom, 21.0);
        assert!((view.longitude + 122.4).abs() < 1e-9);
        assert!((view.latitude - 37.8).abs() < 1e-9);
    }

    #[test]
    fn test_whole_world_gets_furthest_zoom() {
        let points = [LatLng::new(-80.0, -180.0), LatLng::new(80.0, 180.0)];
        let view = compute_view(&points, 1.0).unwrap();
        assert_eq!(view.zoom, 1.0);
        assert_eq!((view.longitude, view.latitude), (0.0, 0.0));
    }

    #[test]
    fn test_zoom_for_span() {
        assert_eq!(zoom_for_span(2.0), 7.0);
        assert_eq!(zoom_for_span(10.0), 5.0);
        assert_eq!(zoom_for_span(720.0), 1.0);
        assert_eq!(zoom_for_span(1e-9), 21.0);
    }

    #[test]
    fn test_proportion_drops_outliers() {
        let mut points: Vec<LatLng> = (0..9)
            .map(|i| LatLng::new(10.0 + i as f64 * 0.01, 10.0 + i as f64 * 0.01))
            .collect();
        points.push(LatLng::new(-60.0, 150.0));

        let everything = compute_view(&points, 1.0).unwrap();
        let dense = compute_view(&points, 0.9).unwrap();
        assert!(dense.zoom > everything.zoom);
        // center still averages every point
        assert_eq!(dense.longitude, everything.longitude);
    }
}

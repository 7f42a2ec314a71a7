use super::error::InterpolateError;
use super::model::{is_missing, Signal, SignalSet};

/// Fill every missing x value in every signal.
///
/// Fails on the first signal that has missing x values but no known ones.
pub fn interpolate_x(signals: &mut SignalSet) -> Result<(), InterpolateError> {
    for (label, signal) in signals.iter_mut() {
        let filled = interpolate_signal(label, signal)?;
        if filled > 0 {
            log::debug!("Signal '{label}': interpolated {filled} missing x values");
        }
    }
    Ok(())
}

/// Fill the missing x values of one signal, returning how many were filled.
///
/// The sample index is the interpolation coordinate and the known x values
/// are the control points. Between two known indices the value is linear;
/// before the first or after the last known index it is clamped to that
/// endpoint. Control points are collected before anything is written, so
/// filled values never feed into later ones.
pub fn interpolate_signal(label: &str, signal: &mut Signal) -> Result<usize, InterpolateError> {
    let known: Vec<(usize, f64)> = signal
        .x()
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, v)| !is_missing(v))
        .collect();

    let missing = signal.len() - known.len();
    if missing == 0 {
        return Ok(0);
    }
    let (Some(&(first_idx, first_x)), Some(&(last_idx, last_x))) = (known.first(), known.last())
    else {
        return Err(InterpolateError::NoKnownX {
            label: label.to_string(),
            samples: signal.len(),
        });
    };

    // known[seg] is the closest control point left of the current index.
    let mut seg = 0;
    for (i, x) in signal.x_mut().iter_mut().enumerate() {
        if !is_missing(*x) {
            continue;
        }
        *x = if i < first_idx {
            first_x
        } else if i > last_idx {
            last_x
        } else {
            while known[seg + 1].0 < i {
                seg += 1;
            }
            lerp(known[seg], known[seg + 1], i)
        };
    }

    Ok(missing)
}

/// Linear interpolation between two `(index, x)` control points.
fn lerp((i0, x0): (usize, f64), (i1, x1): (usize, f64), at: usize) -> f64 {
    let t = (at - i0) as f64 / (i1 - i0) as f64;
    x0 + (x1 - x0) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MISSING;

    fn signal(x: &[f64]) -> Signal {
        let y = (0..x.len()).map(|i| i as f64).collect();
        Signal::from_xy(x.to_vec(), y).unwrap()
    }

    #[test]
    fn clamps_before_first_and_interpolates_between() {
        let mut s = signal(&[MISSING, MISSING, 1.0, MISSING, 3.0]);
        assert_eq!(interpolate_signal("A", &mut s).unwrap(), 3);
        assert_eq!(s.x(), [1.0, 1.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn clamps_after_last_known() {
        let mut s = signal(&[0.0, 10.0, MISSING, MISSING]);
        interpolate_signal("A", &mut s).unwrap();
        assert_eq!(s.x(), [0.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn walks_several_segments() {
        let mut s = signal(&[MISSING, 0.0, MISSING, MISSING, 3.0, MISSING, 5.0, MISSING]);
        interpolate_signal("A", &mut s).unwrap();
        let expected = [0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0];
        for (got, want) in s.x().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
    }

    #[test]
    fn uneven_known_values_use_index_not_value() {
        let mut s = signal(&[100.0, MISSING, MISSING, MISSING, 0.0]);
        interpolate_signal("A", &mut s).unwrap();
        assert_eq!(s.x(), [100.0, 75.0, 50.0, 25.0, 0.0]);
    }

    #[test]
    fn all_known_is_untouched() {
        let mut s = signal(&[3.0, 1.0, 2.0]);
        let before = s.clone();
        assert_eq!(interpolate_signal("A", &mut s).unwrap(), 0);
        assert_eq!(s, before);
    }

    #[test]
    fn all_missing_is_an_error() {
        let mut s = signal(&[MISSING, MISSING]);
        let err = interpolate_signal("A", &mut s).unwrap_err();
        assert_eq!(
            err,
            InterpolateError::NoKnownX {
                label: "A".to_string(),
                samples: 2
            }
        );
        assert!(s.x().iter().all(|v| is_missing(*v)));
    }

    #[test]
    fn empty_signal_needs_no_interpolation() {
        let mut s = Signal::new();
        assert_eq!(interpolate_signal("empty", &mut s).unwrap(), 0);
    }

    #[test]
    fn set_level_reports_offending_label() {
        let mut set = SignalSet::new();
        set.insert("ok", signal(&[MISSING, 1.0]));
        set.insert("bad", signal(&[MISSING]));

        let err = interpolate_x(&mut set).unwrap_err();
        assert!(matches!(err, InterpolateError::NoKnownX { ref label, .. } if label == "bad"));
    }
}

//! Fixed-aspect-ratio dimension derivation.
//!
//! The editor captures the source video's natural size once and derives one
//! export dimension from the other so the pair always keeps that ratio.

/// Derive the missing dimension from a baseline ratio.
///
/// Exactly one of `width` / `height` is expected to be set; the other is
/// computed by scaling the baseline and rounding to nearest. A derived value
/// that rounds to zero is dropped rather than returned, so callers never
/// write a zero into a dimension field.
pub fn resize(
    base: (u32, u32),
    width: Option<u32>,
    height: Option<u32>,
) -> (Option<u32>, Option<u32>) {
    let (base_w, base_h) = base;
    if base_w == 0 || base_h == 0 {
        return (None, None);
    }

    match (width, height) {
        (Some(w), _) => {
            let h = (f64::from(w) * f64::from(base_h) / f64::from(base_w)).round() as u32;
            (Some(w), nonzero(h))
        }
        (None, Some(h)) => {
            let w = (f64::from(h) * f64::from(base_w) / f64::from(base_h)).round() as u32;
            (nonzero(w), Some(h))
        }
        (None, None) => (None, None),
    }
}

fn nonzero(value: u32) -> Option<u32> {
    if value == 0 { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_height_from_width() {
        assert_eq!(resize((1920, 1080), Some(960), None), (Some(960), Some(540)));
    }

    #[test]
    fn derives_width_from_height() {
        assert_eq!(resize((1920, 1080), None, Some(270)), (Some(480), Some(270)));
    }

    #[test]
    fn rounds_to_nearest() {
        // 427 * 1080 / 1920 = 240.1875
        assert_eq!(resize((1920, 1080), Some(427), None), (Some(427), Some(240)));
        // 100 * 1080 / 1920 = 56.25
        assert_eq!(resize((1920, 1080), Some(100), None), (Some(100), Some(56)));
    }

    #[test]
    fn full_size_is_identity() {
        assert_eq!(
            resize((1280, 720), Some(1280), None),
            (Some(1280), Some(720))
        );
        assert_eq!(
            resize((1280, 720), None, Some(720)),
            (Some(1280), Some(720))
        );
    }

    #[test]
    fn drops_derived_zero() {
        // 1 * 2 / 1920 rounds down to zero; the paired field must not be set.
        assert_eq!(resize((1920, 2), Some(1), None), (Some(1), None));
    }

    #[test]
    fn degenerate_baseline_yields_nothing() {
        assert_eq!(resize((0, 1080), Some(960), None), (None, None));
        assert_eq!(resize((1920, 0), None, Some(540)), (None, None));
    }

    #[test]
    fn no_input_no_output() {
        assert_eq!(resize((1920, 1080), None, None), (None, None));
    }
}

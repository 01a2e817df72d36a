use serde::{Deserialize, Serialize};

/// Two-ingredient blend, as percentages of the mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RationMix {
    pub percent_a: f64,
    pub percent_b: f64,
}

impl RationMix {
    /// Kilograms of each ingredient for a batch of `batch_kg`.
    pub fn kg_in_batch(&self, batch_kg: f64) -> (f64, f64) {
        (
            batch_kg * self.percent_a / 100.0,
            batch_kg * self.percent_b / 100.0,
        )
    }

    /// Nutrient content of the blend given each ingredient's content.
    pub fn blended(&self, content_a: f64, content_b: f64) -> f64 {
        (self.percent_a * content_a + self.percent_b * content_b) / 100.0
    }
}

/// Pearson-square formulation of two feeds to hit a crude-protein target.
///
/// Each feed's share is proportional to the distance between the *other*
/// feed's protein content and the target. The target must lie strictly
/// between the two feeds; otherwise no blend can reach it and `None` is returned.
pub fn pearson_square(target_cp: f64, cp_a: f64, cp_b: f64) -> Option<RationMix> {
    let (low, high) = if cp_a <= cp_b { (cp_a, cp_b) } else { (cp_b, cp_a) };
    if !(low < target_cp && target_cp < high) {
        return None;
    }

    let parts_a = (cp_b - target_cp).abs();
    let parts_b = (cp_a - target_cp).abs();
    let total = parts_a + parts_b;

    Some(RationMix {
        percent_a: parts_a / total * 100.0,
        percent_b: parts_b / total * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maize_bran_and_soya() {
        let mix = pearson_square(16.0, 8.0, 44.0).unwrap();

        assert!((mix.percent_a - 77.777_777_777).abs() < 1e-6);
        assert!((mix.percent_b - 22.222_222_222).abs() < 1e-6);
        assert!((mix.percent_a + mix.percent_b - 100.0).abs() < 1e-9);
        assert!((mix.blended(8.0, 44.0) - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_feed_order_does_not_matter() {
        let ab = pearson_square(18.0, 10.5, 28.0).unwrap();
        let ba = pearson_square(18.0, 28.0, 10.5).unwrap();
        assert!((ab.percent_a - ba.percent_b).abs() < 1e-9);
    }

    #[test]
    fn test_target_out_of_range() {
        assert!(pearson_square(50.0, 8.0, 44.0).is_none());
        assert!(pearson_square(8.0, 8.0, 44.0).is_none());
        assert!(pearson_square(16.0, 16.0, 16.0).is_none());
    }

    #[test]
    fn test_batch_split() {
        let mix = RationMix {
            percent_a: 75.0,
            percent_b: 25.0,
        };
        assert_eq!(mix.kg_in_batch(200.0), (150.0, 50.0));
    }
}

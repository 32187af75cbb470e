//! Utility functions.

/// Number of steps each reward bin covers: `ceil(steps / num_bins)`.
pub fn bin_size(steps: usize, num_bins: usize) -> usize {
    steps.div_ceil(num_bins)
}

/// Aggregate a per-step reward log into `num_bins` contiguous bin means.
///
/// Bin `i` covers `[i * bin_size, min((i + 1) * bin_size, len))`. The final
/// bin may cover fewer steps when the total does not divide evenly; its mean
/// is taken over the actual remaining count. An empty trailing bin yields 0.
pub fn binned_means(rewards: &[f32], num_bins: usize) -> Vec<f32> {
    let size = bin_size(rewards.len(), num_bins);

    (0..num_bins)
        .map(|i| {
            let start = i * size;
            let end = ((i + 1) * size).min(rewards.len());
            if end > start {
                rewards[start..end].iter().sum::<f32>() / (end - start) as f32
            } else {
                0.0
            }
        })
        .collect()
}

/// Abbreviate large step counts for display
pub fn abbreviate(num: u64) -> String {
    if num < 1_000 {
        format!("{}", num)
    } else if num < 1_000_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else if num < 1_000_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else {
        format!("{:.1}B", num as f64 / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binned_means_even_split() {
        let rewards = [1.0, 1.0, 0.0, 0.0, 1.0, 1.0];
        assert_eq!(binned_means(&rewards, 3), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_binned_means_shrunken_final_bin() {
        // 5 steps over 2 bins: size ceil(5/2) = 3, final bin holds 2 rewards
        let rewards = [0.0, 0.0, 0.0, 1.0, 1.0];
        assert_eq!(binned_means(&rewards, 2), vec![0.0, 1.0]);
    }

    #[test]
    fn test_binned_means_empty_trailing_bin() {
        // 2 steps over 4 bins: size 1, bins 2 and 3 are empty
        let rewards = [0.5, 1.5];
        assert_eq!(binned_means(&rewards, 4), vec![0.5, 1.5, 0.0, 0.0]);
    }

    #[test]
    fn test_binned_means_conserves_reward_mass() {
        let rewards: Vec<f32> = (0..997).map(|i| (i % 2) as f32).collect();
        let num_bins = 10;
        let size = bin_size(rewards.len(), num_bins);

        let bins = binned_means(&rewards, num_bins);
        assert_eq!(bins.len(), num_bins);

        let total: f32 = bins
            .iter()
            .enumerate()
            .map(|(i, mean)| {
                let start = i * size;
                let end = ((i + 1) * size).min(rewards.len());
                mean * (end - start) as f32
            })
            .sum();
        let expected: f32 = rewards.iter().sum();
        assert!((total - expected).abs() < 1e-2);
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate(500), "500");
        assert_eq!(abbreviate(1500), "1.5K");
        assert_eq!(abbreviate(1_500_000), "1.5M");
        assert_eq!(abbreviate(1_500_000_000), "1.5B");
    }
}

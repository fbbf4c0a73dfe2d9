//! Rate statistics built from counting stats.
//!
//! Every ratio returns `None` when its denominator is zero (no at bats, no
//! outs recorded) instead of producing `inf`/`NaN`.

use crate::models::{DefensiveStats, OffensiveStats};

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Hits per at bat.
pub fn batting_average(hits: u32, at_bats: u32) -> Option<f64> {
    ratio(hits as f64, at_bats as f64)
}

/// (hits + walks) / at bats. Rio counts walks as at bats.
pub fn on_base_percentage(hits: u32, walks: u32, at_bats: u32) -> Option<f64> {
    ratio((hits + walks) as f64, at_bats as f64)
}

/// Total bases per at bat, with walks taken back out of the at-bat count.
pub fn slugging(total_bases: u32, at_bats: u32, walks: u32) -> Option<f64> {
    ratio(total_bases as f64, at_bats.saturating_sub(walks) as f64)
}

pub fn ops(obp: Option<f64>, slg: Option<f64>) -> Option<f64> {
    Some(obp? + slg?)
}

pub fn innings_pitched(outs_pitched: u32) -> f64 {
    outs_pitched as f64 / 3.0
}

/// Earned runs per nine innings.
pub fn era(runs_allowed: u32, outs_pitched: u32) -> Option<f64> {
    ratio(9.0 * runs_allowed as f64, innings_pitched(outs_pitched))
}

impl OffensiveStats {
    pub fn batting_average(&self) -> Option<f64> {
        batting_average(self.hits, self.at_bats)
    }

    pub fn on_base_percentage(&self) -> Option<f64> {
        on_base_percentage(self.hits, self.walks(), self.at_bats)
    }

    pub fn slugging(&self) -> Option<f64> {
        slugging(self.total_bases(), self.at_bats, self.walks())
    }

    pub fn ops(&self) -> Option<f64> {
        ops(self.on_base_percentage(), self.slugging())
    }
}

impl DefensiveStats {
    pub fn innings_pitched(&self) -> f64 {
        innings_pitched(self.outs_pitched)
    }

    pub fn era(&self) -> Option<f64> {
        era(self.runs_allowed, self.outs_pitched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_slash_line() {
        let line = OffensiveStats {
            at_bats: 10,
            hits: 3,
            singles: 2,
            doubles: 1,
            walks_ball_four: 1,
            walks_hit_by_pitch: 0,
            ..Default::default()
        };

        assert!(approx(line.batting_average(), 0.3));
        assert!(approx(line.on_base_percentage(), 0.4));
        assert!(approx(line.slugging(), 4.0 / 9.0));
        assert!(approx(line.ops(), 0.4 + 4.0 / 9.0));
        assert!((line.ops().unwrap() - 0.844).abs() < 1e-3);
    }

    #[test]
    fn test_zero_denominators() {
        let empty = OffensiveStats::default();
        assert_eq!(empty.batting_average(), None);
        assert_eq!(empty.on_base_percentage(), None);
        assert_eq!(empty.slugging(), None);
        assert_eq!(empty.ops(), None);

        assert_eq!(era(3, 0), None);
        assert_eq!(slugging(0, 2, 2), None);
    }

    #[test]
    fn test_era_and_innings() {
        let pitching = DefensiveStats { runs_allowed: 2, outs_pitched: 18, ..Default::default() };
        assert!((pitching.innings_pitched() - 6.0).abs() < 1e-9);
        assert!(approx(pitching.era(), 3.0));
    }
}

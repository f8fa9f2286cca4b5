// Password strength scoring
use std::collections::HashSet;

use crate::models::{StrengthCriterion, StrengthLevel, StrengthReport};

const BASE_LENGTH: usize = 8;
const EXTENDED_LENGTH: usize = 12;

const BASE_LENGTH_POINTS: u32 = 20;
const EXTENDED_LENGTH_POINTS: u32 = 10;
const UPPERCASE_POINTS: u32 = 15;
const LOWERCASE_POINTS: u32 = 15;
const DIGIT_POINTS: u32 = 15;
const SYMBOL_POINTS: u32 = 25;
const VARIETY_POINTS: u32 = 10;

/// Additive checks over length, character classes and variety.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthAnalyzer;

impl StrengthAnalyzer {
    pub fn new() -> Self {
        StrengthAnalyzer
    }

    pub fn analyze(&self, password: &str) -> StrengthReport {
        let mut score = 0;
        let mut criteria = Vec::with_capacity(7);
        let length = password.chars().count();

        if length >= BASE_LENGTH {
            score += BASE_LENGTH_POINTS;
            criteria.push(StrengthCriterion::met("adequate length"));
        } else {
            criteria.push(StrengthCriterion::unmet("too short"));
        }

        // Only reported when met.
        if length >= EXTENDED_LENGTH {
            score += EXTENDED_LENGTH_POINTS;
            criteria.push(StrengthCriterion::met("excellent length"));
        }

        score += check(
            &mut criteria,
            password.chars().any(|c| c.is_ascii_uppercase()),
            UPPERCASE_POINTS,
            "has uppercase",
            "no uppercase",
        );
        score += check(
            &mut criteria,
            password.chars().any(|c| c.is_ascii_lowercase()),
            LOWERCASE_POINTS,
            "has lowercase",
            "no lowercase",
        );
        score += check(
            &mut criteria,
            password.chars().any(|c| c.is_ascii_digit()),
            DIGIT_POINTS,
            "has digits",
            "no digits",
        );
        score += check(
            &mut criteria,
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
            SYMBOL_POINTS,
            "has symbols",
            "no symbols",
        );

        if has_variety(password, length) {
            score += VARIETY_POINTS;
            criteria.push(StrengthCriterion::met("good variety"));
        }

        StrengthReport {
            score,
            level: StrengthLevel::from_score(score),
            criteria,
        }
    }
}

fn check(criteria: &mut Vec<StrengthCriterion>, passed: bool, points: u32, met: &str, unmet: &str) -> u32 {
    if passed {
        criteria.push(StrengthCriterion::met(met));
        points
    } else {
        criteria.push(StrengthCriterion::unmet(unmet));
        0
    }
}

// distinct >= 0.7 * length, in integers
fn has_variety(password: &str, length: usize) -> bool {
    if length == 0 {
        return false;
    }
    let distinct = password.chars().collect::<HashSet<_>>().len();
    distinct * 10 >= length * 7
}

/// Shorthand for `StrengthAnalyzer::new().analyze(password)`.
pub fn analyze_password_strength(password: &str) -> StrengthReport {
    StrengthAnalyzer::new().analyze(password)
}

//! Discount eligibility rules
//!
//! A buyer qualifies for the VAT-exempt discount when they are a senior
//! citizen (60 or older on the day of purchase) or registered as a PWD.
//! Senior citizenship takes precedence when labelling a buyer who is both.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Age at which a buyer counts as a senior citizen.
pub const SENIOR_AGE: i16 = 60;

/// Which discount a buyer's receipt is labelled with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    /// Senior-citizen discount (age 60 or above).
    Senior,

    /// Person-with-disability discount.
    #[serde(rename = "PWD")]
    Pwd,

    /// No discount.
    None,
}

impl DiscountType {
    /// The label frozen into receipts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Senior => "Senior",
            Self::Pwd => "PWD",
            Self::None => "None",
        }
    }
}

impl Display for DiscountType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A buyer's discount standing on a given day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Eligibility {
    /// Whole years since the buyer's birth date; 0 when unknown.
    pub age: i16,

    /// True when `age >= SENIOR_AGE`.
    pub is_senior_citizen: bool,

    /// True when the buyer is registered as a PWD.
    pub is_pwd: bool,
}

impl Eligibility {
    /// Assess a buyer's standing as of `today`.
    ///
    /// A missing birth date yields age 0, never a senior. The PWD flag is
    /// independent of age.
    #[must_use]
    pub fn assess(birth_date: Option<Date>, is_pwd: bool, today: Date) -> Self {
        let age = birth_date.map_or(0, |birth| floor_years(birth, today));

        Self {
            age,
            is_senior_citizen: age >= SENIOR_AGE,
            is_pwd,
        }
    }

    /// Whether any discount applies.
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        self.is_senior_citizen || self.is_pwd
    }

    /// Receipt label: senior takes precedence over PWD when both hold.
    #[must_use]
    pub const fn discount_type(self) -> DiscountType {
        if self.is_senior_citizen {
            DiscountType::Senior
        } else if self.is_pwd {
            DiscountType::Pwd
        } else {
            DiscountType::None
        }
    }
}

/// Whole calendar years elapsed from `birth` to `today`, floored.
///
/// Clamped at zero so a malformed (future) birth date reads as age 0 rather
/// than a negative age.
fn floor_years(birth: Date, today: Date) -> i16 {
    let mut age = today.year() - birth.year();

    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    age.max(0)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn sixty_years_to_the_day_is_senior() {
        let eligibility =
            Eligibility::assess(Some(date(1965, 6, 15)), false, date(2025, 6, 15));

        assert_eq!(eligibility.age, 60);
        assert!(eligibility.is_senior_citizen, "60th birthday counts");
        assert_eq!(eligibility.discount_type(), DiscountType::Senior);
    }

    #[test]
    fn one_day_short_of_sixty_is_not_senior() {
        let eligibility =
            Eligibility::assess(Some(date(1965, 6, 15)), false, date(2025, 6, 14));

        assert_eq!(eligibility.age, 59);
        assert!(!eligibility.is_senior_citizen, "eve of 60th birthday");
        assert_eq!(eligibility.discount_type(), DiscountType::None);
    }

    #[test]
    fn missing_birth_date_yields_age_zero() {
        let eligibility = Eligibility::assess(None, false, date(2025, 1, 1));

        assert_eq!(eligibility.age, 0);
        assert!(!eligibility.is_eligible());
    }

    #[test]
    fn future_birth_date_clamps_to_zero() {
        let eligibility =
            Eligibility::assess(Some(date(2030, 1, 1)), false, date(2025, 1, 1));

        assert_eq!(eligibility.age, 0);
    }

    #[test]
    fn pwd_is_eligible_regardless_of_age() {
        let eligibility = Eligibility::assess(Some(date(1995, 3, 2)), true, date(2025, 1, 1));

        assert!(eligibility.is_eligible());
        assert_eq!(eligibility.discount_type(), DiscountType::Pwd);
    }

    #[test]
    fn senior_label_takes_precedence_over_pwd() {
        let eligibility = Eligibility::assess(Some(date(1950, 1, 1)), true, date(2025, 1, 1));

        assert!(eligibility.is_senior_citizen);
        assert!(eligibility.is_pwd);
        assert_eq!(eligibility.discount_type(), DiscountType::Senior);
    }

    #[test]
    fn leap_day_birth_date_floors_correctly() {
        // Born 29 Feb; on 28 Feb of a common year the birthday has not passed.
        let eligibility =
            Eligibility::assess(Some(date(1964, 2, 29)), false, date(2025, 2, 28));

        assert_eq!(eligibility.age, 60);

        let day_before = Eligibility::assess(Some(date(1964, 2, 29)), false, date(2024, 2, 28));

        assert_eq!(day_before.age, 59);
    }
}

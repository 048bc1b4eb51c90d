use serde::Serialize;

/// Rounded mean of three ratings, one decimal place.
pub fn average_rating(ratings: [i32; 3]) -> f64 {
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum as f64 / 3.0 * 10.0).round() / 10.0
}

/// `7` for integral averages, `6.7` otherwise.
pub fn format_average(average: f64) -> String {
    if average.fract() == 0.0 {
        format!("{}", average as i64)
    } else {
        format!("{:.1}", average)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageBand {
    Low,
    Medium,
    High,
}

impl AverageBand {
    /// Compares the already rounded average: `< 4` low, `< 7` medium.
    pub fn of(average: f64) -> Self {
        if average < 4.0 {
            AverageBand::Low
        } else if average < 7.0 {
            AverageBand::Medium
        } else {
            AverageBand::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub message: String,
    pub rating1: i32,
    pub rating2: i32,
    pub rating3: i32,
    pub average: f64,
}

impl FormSnapshot {
    pub fn band(&self) -> AverageBand {
        AverageBand::of(self.average)
    }

    pub fn average_text(&self) -> String {
        format_average(self.average)
    }

    /// Label/value rows echoing the submitted fields.
    pub fn result_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Surname", self.surname.clone()),
            ("Email", self.email.clone()),
            ("Phone number", self.phone.clone()),
            ("Address", self.address.clone()),
            ("Message", self.message.clone()),
            ("Rating 1", self.rating1.to_string()),
            ("Rating 2", self.rating2.to_string()),
            ("Rating 3", self.rating3.to_string()),
        ]
    }

    pub fn signature_line(&self) -> String {
        format!("{} {}: {}", self.name, self.surname, self.average_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average_rating([7, 7, 6]), 6.7);
        assert_eq!(average_rating([1, 1, 2]), 1.3);
        assert_eq!(average_rating([10, 10, 10]), 10.0);
        assert_eq!(average_rating([0, 0, 0]), 0.0);
    }

    #[test]
    fn bands_use_exclusive_upper_bounds() {
        assert_eq!(AverageBand::of(3.9), AverageBand::Low);
        assert_eq!(AverageBand::of(4.0), AverageBand::Medium);
        assert_eq!(AverageBand::of(6.9), AverageBand::Medium);
        assert_eq!(AverageBand::of(7.0), AverageBand::High);
    }

    #[test]
    fn thirds_stay_on_their_side_of_the_threshold() {
        let average = average_rating([4, 4, 3]);
        assert_eq!(average, 3.7);
        assert_eq!(AverageBand::of(average), AverageBand::Low);

        let average = average_rating([7, 7, 6]);
        assert_eq!(AverageBand::of(average), AverageBand::Medium);

        let average = average_rating([7, 7, 8]);
        assert_eq!(average, 7.3);
        assert_eq!(AverageBand::of(average), AverageBand::High);
    }

    #[test]
    fn average_text_drops_trailing_zero() {
        assert_eq!(format_average(7.0), "7");
        assert_eq!(format_average(6.7), "6.7");
    }
}

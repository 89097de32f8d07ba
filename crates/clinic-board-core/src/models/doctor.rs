//! Doctor roster models.

use chrono::Weekday;

use super::weekday::day_name;

/// A doctor on the clinic roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    /// Unique within the roster
    pub id: u32,
    /// Full name with specialist title
    pub name: String,
    /// Specialty (e.g., "Urologi", "Jantung")
    pub specialty: String,
    /// Practice days, in display order
    pub days: Vec<Weekday>,
    /// Practice hours (e.g., "08:00 - 12:00")
    pub time_range: String,
    /// Experience label (e.g., "15 tahun")
    pub experience_label: String,
    /// Patient rating, 0.0 to 5.0
    pub rating: f64,
}

impl Doctor {
    /// Whether this doctor practices on the given day.
    pub fn works_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Practice days as display names.
    pub fn day_names(&self) -> Vec<&'static str> {
        self.days.iter().map(|d| day_name(*d)).collect()
    }
}

fn doctor(
    id: u32,
    name: &str,
    specialty: &str,
    days: &[Weekday],
    time_range: &str,
    experience_label: &str,
    rating: f64,
) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
        days: days.to_vec(),
        time_range: time_range.to_string(),
        experience_label: experience_label.to_string(),
        rating,
    }
}

/// The clinic's fixed roster.
pub fn seed_doctors() -> Vec<Doctor> {
    use Weekday::*;

    vec![
        doctor(
            1,
            "Dr. Budi Santoso, Sp.U",
            "Urologi",
            &[Mon, Tue, Wed, Thu, Fri],
            "08:00 - 12:00",
            "15 tahun",
            4.8,
        ),
        doctor(
            2,
            "Dr. Siti Nurhaliza, Sp.OG",
            "Obstetri & Ginekologi",
            &[Tue, Wed, Thu, Fri, Sat],
            "13:00 - 17:00",
            "12 tahun",
            4.9,
        ),
        doctor(
            3,
            "Dr. Ahmad Wijaya, Sp.LL",
            "Paru-Paru",
            &[Mon, Tue, Wed, Thu],
            "09:00 - 13:00",
            "20 tahun",
            4.7,
        ),
        doctor(
            4,
            "Dr. Dewi Lestari, Sp.J",
            "Jantung",
            &[Wed, Thu, Fri, Sat, Mon],
            "14:00 - 18:00",
            "18 tahun",
            4.9,
        ),
        doctor(
            5,
            "Dr. Rudi Hermawan, Sp.N",
            "Neurologi",
            &[Mon, Tue, Wed],
            "10:00 - 14:00",
            "16 tahun",
            4.8,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let doctors = seed_doctors();
        let ids: HashSet<u32> = doctors.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), doctors.len());
        assert_eq!(doctors.len(), 5);
    }

    #[test]
    fn test_works_on() {
        let doctors = seed_doctors();
        assert!(doctors[0].works_on(Weekday::Mon));
        assert!(!doctors[0].works_on(Weekday::Sat));
        assert!(doctors[1].works_on(Weekday::Sat));
    }

    #[test]
    fn test_day_names_keep_order() {
        let doctors = seed_doctors();
        assert_eq!(
            doctors[3].day_names(),
            vec!["Rabu", "Kamis", "Jumat", "Sabtu", "Senin"]
        );
    }

    #[test]
    fn test_nobody_works_sunday() {
        assert!(seed_doctors().iter().all(|d| !d.works_on(Weekday::Sun)));
    }
}

//! Festival content: the facts rule templates are written from.
//!
//! The engine never interprets this data. Default rules format it into
//! response text once, when the rule list is built.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FestivalContent {
    pub name: String,
    pub location: String,
    pub parking: Parking,
    /// Festival days in running order.
    pub lineup: Vec<LineupDay>,
    pub support_contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parking {
    pub general: String,
    pub vip: String,
    pub motor: String,
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LineupDay {
    /// Day label, e.g. `"Day 1"`.
    pub day: String,
    /// Acts in stage order.
    pub acts: Vec<Act>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Act {
    pub performer: String,
    /// Start time as displayed, e.g. `"18:00"`.
    pub time: String,
}

impl Act {
    pub fn new(performer: impl Into<String>, time: impl Into<String>) -> Self {
        Act { performer: performer.into(), time: time.into() }
    }
}

impl LineupDay {
    pub fn new(day: impl Into<String>, acts: Vec<Act>) -> Self {
        LineupDay { day: day.into(), acts }
    }
}

impl FestivalContent {
    /// Look up a festival day by its label.
    pub fn day(&self, label: &str) -> Option<&LineupDay> {
        self.lineup.iter().find(|d| d.day == label)
    }

    /// The opening day. "Today" questions are answered with it.
    pub fn opening_day(&self) -> Option<&LineupDay> {
        self.lineup.first()
    }
}

impl Default for FestivalContent {
    fn default() -> Self {
        FestivalContent {
            name: "FestPal".to_string(),
            location: "GOR UNY, Yogyakarta".to_string(),
            parking: Parking {
                general: "Parkir umum di sisi barat lapangan (terbatas). Tarif sesuai petunjuk di lokasi.".to_string(),
                vip: "Area VIP parking (reservasi/booking diperlukan untuk akses VIP).".to_string(),
                motor: "Parkir motor tersedia dekat pintu masuk timur.".to_string(),
                tips: "Disarankan menggunakan transportasi online atau datang lebih awal untuk menghindari antrian parkir."
                    .to_string(),
            },
            lineup: vec![
                LineupDay::new(
                    "Day 1",
                    vec![Act::new("Tulus", "18:00"), Act::new("Sabrina Carpenter", "20:00"), Act::new("Taylor Swift", "22:00")],
                ),
                LineupDay::new(
                    "Day 2",
                    vec![Act::new("Adele", "17:30"), Act::new("Justin Bieber", "19:30"), Act::new("Ariana Grande", "21:30")],
                ),
            ],
            support_contact: "support@festpal.com / +62-812-3456-7890".to_string(),
        }
    }
}

/// Render a full lineup, one header per day and one indented bullet per act.
///
/// ```text
/// Day 1:
///   • Tulus — 18:00
/// ```
pub fn format_lineup(lineup: &[LineupDay]) -> String {
    let mut lines = Vec::new();
    for day in lineup {
        lines.push(format!("{}:", day.day));
        for act in &day.acts {
            lines.push(format!("  • {} — {}", act.performer, act.time));
        }
    }
    lines.join("\n")
}

/// Render a single day's acts as flush-left bullets, without a header.
pub fn format_day(day: &LineupDay) -> String {
    day.acts.iter().map(|act| format!("• {} — {}", act.performer, act.time)).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lineup() -> Vec<LineupDay> {
        vec![
            LineupDay::new("Day 1", vec![Act::new("Artist A", "18:00"), Act::new("Artist B", "20:00")]),
            LineupDay::new("Day 2", vec![Act::new("Artist C", "19:00")]),
        ]
    }

    #[test]
    fn format_lineup_keeps_day_and_act_order() {
        let out = format_lineup(&sample_lineup());
        assert_eq!(out, "Day 1:\n  • Artist A — 18:00\n  • Artist B — 20:00\nDay 2:\n  • Artist C — 19:00");
    }

    #[test]
    fn format_lineup_of_nothing_is_empty() {
        assert_eq!(format_lineup(&[]), "");
    }

    #[test]
    fn format_day_has_no_header() {
        let lineup = sample_lineup();
        assert_eq!(format_day(&lineup[1]), "• Artist C — 19:00");
    }

    #[test]
    fn default_content_shape() {
        let content = FestivalContent::default();
        assert_eq!(content.name, "FestPal");
        assert!(content.location.contains("GOR UNY"));
        assert!(content.support_contact.contains("support@festpal.com"));
        assert_eq!(content.lineup.len(), 2);
        assert_eq!(content.opening_day().map(|d| d.day.as_str()), Some("Day 1"));
        assert_eq!(content.day("Day 2").map(|d| d.acts.len()), Some(3));
        assert!(content.day("Day 3").is_none());
    }

    #[test]
    fn content_deserializes_from_json() {
        let json = r#"{
            "name": "Jazz Night",
            "location": "Taman Budaya",
            "parking": {"general": "g", "vip": "v", "motor": "m", "tips": "t"},
            "lineup": [{"day": "Friday", "acts": [{"performer": "Trio", "time": "19:00"}]}],
            "support_contact": "help@jazz.test"
        }"#;
        let content: FestivalContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.name, "Jazz Night");
        assert_eq!(content.lineup[0].acts[0], Act::new("Trio", "19:00"));
    }
}

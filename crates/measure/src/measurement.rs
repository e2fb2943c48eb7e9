use log::warn;
use serde::{Deserialize, Serialize};

/// One named rectangular area, dimensions in decimal feet.
///
/// Width and length stay as the raw strings the appointment form captured;
/// parsing happens lazily so a half-typed value never blocks the rest of
/// the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub area: String,
    pub width: String,
    pub length: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Measurement {
    pub fn new(area: impl Into<String>, width: impl Into<String>, length: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            width: width.into(),
            length: length.into(),
            notes: None,
        }
    }

    pub fn width_ft(&self) -> f32 {
        parse_feet(&self.width)
    }

    pub fn length_ft(&self) -> f32 {
        parse_feet(&self.length)
    }

    pub fn square_footage(&self) -> f32 {
        self.width_ft() * self.length_ft()
    }
}

/// Parse a dimension string as decimal feet.
///
/// Follows longest-numeric-prefix semantics: `"12.5ft"` is 12.5, `"12."`
/// is 12. Unparseable or empty input is 0, never an error.
pub fn parse_feet(raw: &str) -> f32 {
    let s = raw.trim();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + c.len_utf8(),
            '.' if !seen_dot => seen_dot = true,
            '+' | '-' if i == 0 => {}
            _ => break,
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Sum of `width * length` over all entries.
pub fn total_square_footage(measurements: &[Measurement]) -> f32 {
    measurements.iter().map(Measurement::square_footage).sum()
}

pub fn format_square_footage(sqft: f32) -> String {
    format!("{:.2} sq ft", sqft)
}

/// Decode the persisted measurement-list JSON column.
///
/// The backing store keeps measurements as a JSON string; a corrupt value
/// yields an empty list with a warning rather than failing the page.
pub fn parse_measurements(json: &str) -> Vec<Measurement> {
    match serde_json::from_str(json) {
        Ok(list) => list,
        Err(e) => {
            warn!("discarding unreadable measurement list: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_feet_accepts_plain_decimals() {
        assert_eq!(parse_feet("10"), 10.0);
        assert_eq!(parse_feet("12.5"), 12.5);
        assert_eq!(parse_feet(" 8.25 "), 8.25);
        assert_eq!(parse_feet("-3"), -3.0);
        assert_eq!(parse_feet(".5"), 0.5);
    }

    #[test]
    fn parse_feet_takes_numeric_prefix() {
        assert_eq!(parse_feet("12.5ft"), 12.5);
        assert_eq!(parse_feet("12."), 12.0);
        assert_eq!(parse_feet("1.2.3"), 1.2);
    }

    #[test]
    fn parse_feet_falls_back_to_zero() {
        assert_eq!(parse_feet(""), 0.0);
        assert_eq!(parse_feet("abc"), 0.0);
        assert_eq!(parse_feet("."), 0.0);
        assert_eq!(parse_feet("ft 12"), 0.0);
    }

    #[test]
    fn square_footage_per_room() {
        let m = Measurement::new("Kitchen", "10", "12");
        assert_eq!(m.square_footage(), 120.0);

        // An unparseable side contributes zero area, not an error.
        let m = Measurement::new("Hall", "abc", "10");
        assert_eq!(m.square_footage(), 0.0);
    }

    #[test]
    fn total_square_footage_sums_rooms() {
        let rooms = vec![
            Measurement::new("Kitchen", "10", "12"),
            Measurement::new("Bedroom", "8", "9"),
        ];
        assert_eq!(total_square_footage(&rooms), 192.0);
        assert_eq!(format_square_footage(total_square_footage(&rooms)), "192.00 sq ft");
    }

    #[test]
    fn total_square_footage_empty_list() {
        assert_eq!(total_square_footage(&[]), 0.0);
    }

    #[test]
    fn decodes_persisted_measurement_json() {
        let json = r#"[{"area":"Kitchen","width":"10","length":"12","notes":"tile"}]"#;
        let list = parse_measurements(json);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].area, "Kitchen");
        assert_eq!(list[0].notes.as_deref(), Some("tile"));
    }

    #[test]
    fn corrupt_measurement_json_yields_empty_list() {
        assert!(parse_measurements("not json").is_empty());
        assert!(parse_measurements("{\"area\":").is_empty());
    }

    #[test]
    fn serde_round_trip_omits_empty_notes() {
        let m = Measurement::new("Kitchen", "10", "12");
        let json = serde_json::to_string(&m).unwrap();
        assert!(!json.contains("notes"));
        let back: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}

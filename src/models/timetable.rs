use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Type assumed when an entry has no (or an unknown) class type
pub const DEFAULT_CLASS_TYPE: ClassType = ClassType::Lecture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Monday = 0 .. Friday = 4
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClassType {
    Lecture,
    Lab,
    Practical,
}

impl ClassType {
    /// Group order on the timetable page
    pub const ALL: [ClassType; 3] = [ClassType::Lecture, ClassType::Lab, ClassType::Practical];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassType::Lecture => "Lecture",
            ClassType::Lab => "Lab",
            ClassType::Practical => "Practical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl Default for ClassType {
    fn default() -> Self {
        DEFAULT_CLASS_TYPE
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// null, missing and unknown strings all fall back to DEFAULT_CLASS_TYPE
fn class_type_or_default<'de, D>(deserializer: D) -> Result<ClassType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(ClassType::parse)
        .unwrap_or(DEFAULT_CLASS_TYPE))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub day: Weekday,
    /// "HH:MM", sorts lexically
    pub time: String,
    pub course_name: String,
    #[serde(default)]
    pub room: String,
    #[serde(rename = "type", default, deserialize_with = "class_type_or_default")]
    pub class_type: ClassType,
}

/// Decodes a timetable list entry by entry; entries that do not fit the
/// model are skipped with a warning instead of failing the whole list.
pub fn parse_entries(values: Vec<Value>) -> Vec<TimetableEntry> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<TimetableEntry>(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("⚠️ Skipping timetable entry #{}: {}", index, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bad_entries_are_skipped_not_fatal() {
        let entries = parse_entries(vec![
            json!({"day": "Monday", "time": "09:00", "courseName": "Networks", "room": "L1", "type": "Lab"}),
            json!({"day": "Saturday", "time": "10:00", "courseName": "Sports", "room": "Gym"}),
            json!({"day": "Tuesday", "courseName": "No time"}),
            json!("not an object"),
            json!({"day": "Friday", "time": "11:00", "courseName": "Ethics"}),
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].course_name, "Networks");
        assert_eq!(entries[1].room, "");
        assert_eq!(entries[1].class_type, ClassType::Lecture);
    }

    #[test]
    fn missing_type_defaults_to_lecture() {
        let json = r#"{"day":"Monday","time":"09:00","courseName":"Algebra","room":"A1"}"#;
        let entry: TimetableEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.class_type, ClassType::Lecture);
    }

    #[test]
    fn unknown_type_defaults_to_lecture() {
        let json = r#"{"day":"Friday","time":"14:00","courseName":"Chem","room":"L2","type":"Seminar"}"#;
        let entry: TimetableEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.class_type, DEFAULT_CLASS_TYPE);
    }

    #[test]
    fn weekday_index_follows_week_order() {
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Friday.index(), 4);
        assert_eq!(Weekday::parse("Thursday"), Some(Weekday::Thursday));
        assert_eq!(Weekday::parse("Sunday"), None);
    }
}

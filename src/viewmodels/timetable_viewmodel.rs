// ============================================================================
// TIMETABLE VIEWMODEL - filter / group / sort pipeline
// ============================================================================
// Pure transformation: the view hands in the cached entries and the three
// filter inputs and renders whatever groups come back.
// ============================================================================

use serde_json::Value;

use crate::models::timetable::{parse_entries, ClassType, TimetableEntry, Weekday};
use crate::utils::storage::{load_json, save_json, KeyValueStore};
use crate::utils::STORAGE_KEY_TIMETABLE;

/// Select value meaning "no filter"
pub const ALL_FILTER: &str = "all";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimetableFilters {
    pub query: String,
    /// A weekday name or [`ALL_FILTER`]
    pub day: String,
    /// A class type name or [`ALL_FILTER`]
    pub class_type: String,
}

impl TimetableFilters {
    pub fn new(query: &str, day: &str, class_type: &str) -> Self {
        Self {
            query: query.to_string(),
            day: day.to_string(),
            class_type: class_type.to_string(),
        }
    }

    /// No query, all days, all types
    pub fn unfiltered() -> Self {
        Self::new("", ALL_FILTER, ALL_FILTER)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimetableGroup {
    pub class_type: ClassType,
    pub entries: Vec<TimetableEntry>,
}

pub fn matches_query(entry: &TimetableEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    [entry.course_name.as_str(), entry.room.as_str(), entry.day.as_str()]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

pub fn matches_day(entry: &TimetableEntry, day: &str) -> bool {
    day == ALL_FILTER || day.is_empty() || entry.day.as_str() == day
}

pub fn matches_type(entry: &TimetableEntry, class_type: &str) -> bool {
    class_type == ALL_FILTER || class_type.is_empty() || entry.class_type.as_str() == class_type
}

pub fn filter_entries(entries: &[TimetableEntry], filters: &TimetableFilters) -> Vec<TimetableEntry> {
    entries
        .iter()
        .filter(|e| matches_query(e, &filters.query))
        .filter(|e| matches_day(e, &filters.day))
        .filter(|e| matches_type(e, &filters.class_type))
        .cloned()
        .collect()
}

/// Partitions into one group per class type (fixed order, possibly empty),
/// each sorted by weekday then time.
pub fn group_entries(entries: Vec<TimetableEntry>) -> Vec<TimetableGroup> {
    let mut groups: Vec<TimetableGroup> = ClassType::ALL
        .iter()
        .map(|class_type| TimetableGroup {
            class_type: *class_type,
            entries: Vec::new(),
        })
        .collect();

    for entry in entries {
        if let Some(group) = groups.iter_mut().find(|g| g.class_type == entry.class_type) {
            group.entries.push(entry);
        }
    }

    for group in &mut groups {
        group
            .entries
            .sort_by(|a, b| a.day.index().cmp(&b.day.index()).then_with(|| a.time.cmp(&b.time)));
    }
    groups
}

pub fn build_timetable(entries: &[TimetableEntry], filters: &TimetableFilters) -> Vec<TimetableGroup> {
    group_entries(filter_entries(entries, filters))
}

/// Options for the day select, "all" first
pub fn day_options() -> Vec<(String, String)> {
    std::iter::once((ALL_FILTER.to_string(), "All Days".to_string()))
        .chain(Weekday::ALL.iter().map(|d| (d.as_str().to_string(), d.as_str().to_string())))
        .collect()
}

pub fn type_options() -> Vec<(String, String)> {
    std::iter::once((ALL_FILTER.to_string(), "All Types".to_string()))
        .chain(ClassType::ALL.iter().map(|t| (t.as_str().to_string(), t.as_str().to_string())))
        .collect()
}

pub fn load_cached(store: &dyn KeyValueStore) -> Vec<TimetableEntry> {
    load_json::<Vec<Value>>(store, STORAGE_KEY_TIMETABLE)
        .map(parse_entries)
        .unwrap_or_default()
}

pub fn save_cached(store: &dyn KeyValueStore, entries: &[TimetableEntry]) {
    match save_json(store, STORAGE_KEY_TIMETABLE, &entries) {
        Ok(()) => log::info!("💾 Timetable cached: {} entries", entries.len()),
        Err(e) => log::error!("❌ Could not cache timetable: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn entry(day: Weekday, time: &str, course: &str, room: &str, class_type: ClassType) -> TimetableEntry {
        TimetableEntry {
            day,
            time: time.to_string(),
            course_name: course.to_string(),
            room: room.to_string(),
            class_type,
        }
    }

    fn week() -> Vec<TimetableEntry> {
        vec![
            entry(Weekday::Wednesday, "09:00", "Operating Systems", "Lab 3", ClassType::Lab),
            entry(Weekday::Monday, "10:00", "Networks", "Lab 1", ClassType::Lab),
            entry(Weekday::Monday, "08:30", "Calculus", "B-201", ClassType::Lecture),
            entry(Weekday::Friday, "14:00", "Physics", "P-Lab", ClassType::Practical),
            entry(Weekday::Monday, "08:00", "Data Structures", "A-101", ClassType::Lecture),
            entry(Weekday::Tuesday, "11:00", "Compilers", "A-102", ClassType::Lecture),
        ]
    }

    fn group<'a>(groups: &'a [TimetableGroup], class_type: ClassType) -> &'a [TimetableEntry] {
        &groups.iter().find(|g| g.class_type == class_type).unwrap().entries
    }

    #[test]
    fn lab_group_sorted_by_day_then_time() {
        let input = vec![
            entry(Weekday::Wednesday, "09:00", "OS", "L3", ClassType::Lab),
            entry(Weekday::Monday, "10:00", "Nets", "L1", ClassType::Lab),
        ];
        let groups = build_timetable(&input, &TimetableFilters::unfiltered());
        let labs = group(&groups, ClassType::Lab);
        assert_eq!(labs[0].day, Weekday::Monday);
        assert_eq!(labs[0].time, "10:00");
        assert_eq!(labs[1].day, Weekday::Wednesday);
    }

    #[test]
    fn query_matches_course_room_or_day_case_insensitively() {
        let entries = week();
        let by_course = filter_entries(&entries, &TimetableFilters::new("NETWORKS", ALL_FILTER, ALL_FILTER));
        assert_eq!(by_course.len(), 1);

        let by_room = filter_entries(&entries, &TimetableFilters::new("a-10", ALL_FILTER, ALL_FILTER));
        assert_eq!(by_room.len(), 2);

        let by_day = filter_entries(&entries, &TimetableFilters::new("monday", ALL_FILTER, ALL_FILTER));
        assert_eq!(by_day.len(), 3);

        for e in filter_entries(&entries, &TimetableFilters::new("lab", ALL_FILTER, ALL_FILTER)) {
            let hit = [&e.course_name, &e.room, &e.day.as_str().to_string()]
                .iter()
                .any(|f| f.to_lowercase().contains("lab"));
            assert!(hit, "{:?} should not match", e);
        }

        let none = filter_entries(&entries, &TimetableFilters::new("zzz", ALL_FILTER, ALL_FILTER));
        assert!(none.is_empty());
    }

    #[test]
    fn day_and_type_filters_commute() {
        let entries = week();
        for day in ["all", "Monday", "Friday", "Tuesday"] {
            for class_type in ["all", "Lecture", "Lab", "Practical"] {
                let day_first: Vec<_> = entries
                    .iter()
                    .filter(|e| matches_day(e, day))
                    .filter(|e| matches_type(e, class_type))
                    .collect();
                let type_first: Vec<_> = entries
                    .iter()
                    .filter(|e| matches_type(e, class_type))
                    .filter(|e| matches_day(e, day))
                    .collect();
                assert_eq!(day_first, type_first, "day={} type={}", day, class_type);
            }
        }
    }

    #[test]
    fn grouping_is_a_partition() {
        let entries = week();
        let groups = build_timetable(&entries, &TimetableFilters::unfiltered());
        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(|g| g.entries.len()).sum();
        assert_eq!(total, entries.len());
        for g in &groups {
            assert!(g.entries.iter().all(|e| e.class_type == g.class_type));
        }
    }

    #[test]
    fn every_group_is_ordered() {
        let groups = build_timetable(&week(), &TimetableFilters::unfiltered());
        for g in &groups {
            for pair in g.entries.windows(2) {
                let key = |e: &TimetableEntry| (e.day.index(), e.time.clone());
                assert!(key(&pair[0]) <= key(&pair[1]));
            }
        }
        let lectures = group(&groups, ClassType::Lecture);
        let times: Vec<_> = lectures.iter().map(|e| e.time.as_str()).collect();
        assert_eq!(times, vec!["08:00", "08:30", "11:00"]);
    }

    #[test]
    fn untyped_cached_entries_land_in_lectures() {
        let store = MemoryStorage::new();
        store
            .set_item(
                STORAGE_KEY_TIMETABLE,
                r#"[{"day":"Thursday","time":"13:00","courseName":"Ethics","room":"C-1"}]"#,
            )
            .unwrap();
        let cached = load_cached(&store);
        let groups = build_timetable(&cached, &TimetableFilters::unfiltered());
        assert_eq!(group(&groups, ClassType::Lecture).len(), 1);
    }

    #[test]
    fn one_bad_cached_entry_keeps_the_rest() {
        let store = MemoryStorage::new();
        store
            .set_item(
                STORAGE_KEY_TIMETABLE,
                r#"[{"day":"Monday","time":"10:00","courseName":"Networks","room":"Lab 1","type":"Lab"},
                    {"day":"Saturday","time":"09:00","courseName":"Sports","room":"Gym"}]"#,
            )
            .unwrap();
        let cached = load_cached(&store);
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].course_name, "Networks");
    }

    #[test]
    fn query_is_not_trimmed() {
        let lab = entry(Weekday::Monday, "10:00", "Networks", "Lab 3", ClassType::Lab);
        assert!(matches_query(&lab, "lab 3"));
        assert!(!matches_query(&lab, " lab"));
        assert!(matches_query(&lab, ""));
        assert!(matches_query(&lab, "b 3"));
    }

    #[test]
    fn cache_round_trip_and_missing_cache() {
        let store = MemoryStorage::new();
        assert!(load_cached(&store).is_empty());
        save_cached(&store, &week());
        assert_eq!(load_cached(&store), week());
    }

    #[test]
    fn select_options_start_with_all() {
        assert_eq!(day_options()[0].0, ALL_FILTER);
        assert_eq!(day_options().len(), 6);
        assert_eq!(type_options()[1].1, "Lecture");
    }
}

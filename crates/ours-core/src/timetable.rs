//! The parsed document: activities keyed by ID, in declaration order.

use std::collections::HashMap;

use crate::slot::{Activity, Slot};

/// Activities indexed by ID.
///
/// Iteration follows declaration order so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    activities: Vec<Activity>,
    index: HashMap<String, usize>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an activity.
    ///
    /// An activity already registered under the same ID is replaced in place,
    /// slots included, keeping its declaration position.
    pub fn insert(&mut self, activity: Activity) {
        if let Some(&position) = self.index.get(&activity.id) {
            self.activities[position] = activity;
            return;
        }
        self.index.insert(activity.id.clone(), self.activities.len());
        self.activities.push(activity);
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.index.get(id).map(|&position| &self.activities[position])
    }

    /// Mutable access to an activity, used to append its slots.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Activity> {
        self.index
            .get(id)
            .map(|&position| &mut self.activities[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Total number of slots across all activities.
    pub fn slot_count(&self) -> usize {
        self.activities.iter().map(|a| a.slots.len()).sum()
    }

    /// Groups every slot, paired with its activity, into the five day buckets.
    pub fn by_day(&self) -> [Vec<(&Activity, &Slot)>; 5] {
        let mut days: [Vec<(&Activity, &Slot)>; 5] = Default::default();
        for activity in &self.activities {
            for slot in &activity.slots {
                days[slot.day.index()].push((activity, slot));
            }
        }
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::time::SlotTime;
    use crate::weekday::Weekday;

    fn activity(id: &str) -> Activity {
        Activity::new(id, format!("Activity {id}"), Color::resolve("blue").unwrap())
    }

    fn add_slot(timetable: &mut Timetable, id: &str, day: Weekday) {
        timetable.get_mut(id).unwrap().slots.push(Slot {
            activity_id: id.to_string(),
            icon: String::new(),
            location: "Lab".to_string(),
            day,
            start: SlotTime::parse_start("0900").unwrap(),
            end: SlotTime::parse_end("1000").unwrap(),
        });
    }

    #[test]
    fn reinserting_an_id_replaces_in_place() {
        let mut timetable = Timetable::new();
        timetable.insert(activity("A"));
        timetable.insert(activity("B"));
        add_slot(&mut timetable, "A", Weekday::Monday);

        timetable.insert(Activity::new("A", "Renamed", Color::resolve("red").unwrap()));

        assert_eq!(timetable.len(), 2);
        let ids: Vec<_> = timetable.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["A", "B"]);
        let replaced = timetable.get("A").unwrap();
        assert_eq!(replaced.name, "Renamed");
        assert!(replaced.slots.is_empty());
    }

    #[test]
    fn unknown_ids_have_no_entry() {
        let mut timetable = Timetable::new();
        assert!(timetable.get_mut("X").is_none());
        assert!(!timetable.contains("X"));
        assert!(timetable.is_empty());
    }

    #[test]
    fn iteration_keeps_declaration_order() {
        let mut timetable = Timetable::new();
        for id in ["Z", "A", "M"] {
            timetable.insert(activity(id));
        }
        let ids: Vec<_> = timetable.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["Z", "A", "M"]);
    }

    #[test]
    fn by_day_buckets_slots() {
        let mut timetable = Timetable::new();
        timetable.insert(activity("A"));
        timetable.insert(activity("B"));
        add_slot(&mut timetable, "A", Weekday::Monday);
        add_slot(&mut timetable, "B", Weekday::Friday);
        add_slot(&mut timetable, "A", Weekday::Friday);

        let days = timetable.by_day();
        assert_eq!(days[0].len(), 1);
        assert!(days[1].is_empty());
        let friday: Vec<_> = days[4].iter().map(|(a, _)| a.id.as_str()).collect();
        assert_eq!(friday, ["A", "B"]);

        assert_eq!(timetable.get("A").unwrap().slots.len(), 2);
    }
}

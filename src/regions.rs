use log::warn;
use uuid::Uuid;

use crate::timefmt::format_seconds;

/// A censor interval drawn directly on the timeline, independent of any
/// transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ManualRegion {
    pub id: Uuid,
    pub start: f64,
    pub end: f64,
}

impl ManualRegion {
    fn new(start: f64, end: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
        }
    }

    /// Display label, e.g. "1.5s - 3.0s"
    pub fn label(&self) -> String {
        format!("{} - {}", format_seconds(self.start), format_seconds(self.end))
    }
}

/// Manually drawn regions, kept sorted ascending by start after every
/// mutation
#[derive(Debug, Clone, Default)]
pub struct RegionList {
    regions: Vec<ManualRegion>,
}

impl RegionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region and return its generated id. Empty or inverted intervals
    /// are rejected with a warning rather than an error.
    pub fn add(&mut self, start: f64, end: f64) -> Option<Uuid> {
        if end <= start {
            warn!(
                "ignoring manual region with end {:.3} <= start {:.3}",
                end, start
            );
            return None;
        }

        let region = ManualRegion::new(start, end);
        let id = region.id;
        self.regions.push(region);
        self.sort();
        Some(id)
    }

    /// Resize an existing region (drag handles supply both bounds). Unknown
    /// ids and empty intervals are no-ops; returns whether anything changed.
    pub fn update(&mut self, id: Uuid, start: f64, end: f64) -> bool {
        if end <= start {
            warn!(
                "ignoring region resize to end {:.3} <= start {:.3}",
                end, start
            );
            return false;
        }

        let Some(region) = self.regions.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        region.start = start;
        region.end = end;
        self.sort();
        true
    }

    /// Remove one region by id; unknown ids are a no-op
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.regions.len();
        self.regions.retain(|r| r.id != id);
        before != self.regions.len()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManualRegion> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn sort(&mut self) {
        self.regions
            .sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap());
    }
}

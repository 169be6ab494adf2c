//! Size rollups: how many of each window size, and which roll it is cut from.
//!
//! Buckets use nominal dimensions and quantity. Windows with invalid
//! nominal dimensions or quantity are left out; a bad quoted size only
//! affects pricing.

use super::line_item::LineItem;
use super::rollcut::{plan_roll, RollPlan};
use crate::config::{EngineConfig, SQ_IN_PER_SQ_FT, UNASSIGNED_ROOM};
use crate::model::natural_cmp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Bucket key: dimensions rounded to thousandths of an inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeKey {
    width_milli: i64,
    height_milli: i64,
}

impl SizeKey {
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_milli: (width_in * 1000.0).round() as i64,
            height_milli: (height_in * 1000.0).round() as i64,
        }
    }
}

/// One distinct window size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRollupRow {
    pub width_in: f64,
    pub height_in: f64,
    pub total_qty: i64,
    pub area_sqft_each: f64,
    /// First resolved film seen for this size.
    pub film_display: Option<String>,
    pub roll_plan: RollPlan,
}

/// Sizes within one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRollup {
    pub room: String,
    pub total_qty: i64,
    pub sizes: Vec<SizeRollupRow>,
}

/// One distinct (film, size) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmSizeRollupRow {
    pub film_id: Option<String>,
    pub film_display: Option<String>,
    pub width_in: f64,
    pub height_in: f64,
    pub total_qty: i64,
    pub area_sqft_each: f64,
    pub roll_plan: RollPlan,
}

/// Roll plans computed once per distinct size and shared by every rollup.
#[derive(Debug)]
pub struct RollPlanCache<'a> {
    config: &'a EngineConfig,
    plans: HashMap<SizeKey, RollPlan>,
}

impl<'a> RollPlanCache<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            config,
            plans: HashMap::new(),
        }
    }

    /// Plan for a size, computing it on first use.
    pub fn plan(&mut self, width_in: f64, height_in: f64) -> RollPlan {
        let config = self.config;
        self.plans
            .entry(SizeKey::new(width_in, height_in))
            .or_insert_with(|| plan_roll(width_in, height_in, config))
            .clone()
    }

    /// Number of distinct sizes planned so far.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// Accumulates size buckets in first-seen order.
#[derive(Debug, Default)]
struct SizeBuckets {
    index: HashMap<SizeKey, usize>,
    rows: Vec<(f64, f64, i64, Option<String>)>,
}

impl SizeBuckets {
    fn add(&mut self, item: &LineItem) {
        let key = SizeKey::new(item.width_in, item.height_in);
        let qty = i64::from(item.quantity);
        match self.index.get(&key) {
            Some(&idx) => {
                let row = &mut self.rows[idx];
                row.2 += qty;
                if row.3.is_none() {
                    row.3 = item.film_display.clone();
                }
            }
            None => {
                self.index.insert(key, self.rows.len());
                self.rows
                    .push((item.width_in, item.height_in, qty, item.film_display.clone()));
            }
        }
    }

    fn finish(self, plans: &mut RollPlanCache<'_>) -> Vec<SizeRollupRow> {
        let mut rows: Vec<SizeRollupRow> = self
            .rows
            .into_iter()
            .map(|(width_in, height_in, total_qty, film_display)| SizeRollupRow {
                width_in,
                height_in,
                total_qty,
                area_sqft_each: width_in * height_in / SQ_IN_PER_SQ_FT,
                film_display,
                roll_plan: plans.plan(width_in, height_in),
            })
            .collect();
        rows.sort_by(|a, b| compare_sizes(a.width_in, a.height_in, b.width_in, b.height_in));
        rows
    }
}

/// Larger area first, then smaller `width × height`, then narrower, then shorter.
fn compare_sizes(aw: f64, ah: f64, bw: f64, bh: f64) -> Ordering {
    let area_a = aw * ah / SQ_IN_PER_SQ_FT;
    let area_b = bw * bh / SQ_IN_PER_SQ_FT;
    area_b
        .total_cmp(&area_a)
        .then_with(|| (aw * ah).total_cmp(&(bw * bh)))
        .then_with(|| aw.total_cmp(&bw))
        .then_with(|| ah.total_cmp(&bh))
}

/// Order room labels naturally with "Unassigned" always last.
pub fn compare_rooms(a: &str, b: &str) -> Ordering {
    match (a == UNASSIGNED_ROOM, b == UNASSIGNED_ROOM) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => natural_cmp(a, b),
    }
}

/// Group windows by size across the whole quote.
pub fn window_size_rollup(items: &[LineItem], plans: &mut RollPlanCache<'_>) -> Vec<SizeRollupRow> {
    let mut buckets = SizeBuckets::default();
    for item in items.iter().filter(|i| i.valid) {
        buckets.add(item);
    }
    buckets.finish(plans)
}

/// Group windows by room label, then by size.
pub fn room_rollup(items: &[LineItem], plans: &mut RollPlanCache<'_>) -> Vec<RoomRollup> {
    let mut order: Vec<String> = Vec::new();
    let mut rooms: HashMap<String, SizeBuckets> = HashMap::new();

    for item in items.iter().filter(|i| i.valid) {
        if !rooms.contains_key(&item.room) {
            order.push(item.room.clone());
        }
        rooms.entry(item.room.clone()).or_default().add(item);
    }

    let mut result: Vec<RoomRollup> = order
        .into_iter()
        .filter_map(|room| {
            let buckets = rooms.remove(&room)?;
            let sizes = buckets.finish(plans);
            Some(RoomRollup {
                total_qty: sizes.iter().map(|s| s.total_qty).sum(),
                room,
                sizes,
            })
        })
        .collect();

    result.sort_by(|a, b| compare_rooms(&a.room, &b.room));
    result
}

/// Group windows by resolved film and size.
pub fn film_size_rollup(
    items: &[LineItem],
    plans: &mut RollPlanCache<'_>,
) -> Vec<FilmSizeRollupRow> {
    let mut index: HashMap<(Option<&str>, SizeKey), usize> = HashMap::new();
    let mut rows: Vec<FilmSizeRollupRow> = Vec::new();

    for item in items.iter().filter(|i| i.valid) {
        let key = (
            item.film_id.as_deref(),
            SizeKey::new(item.width_in, item.height_in),
        );
        match index.get(&key) {
            Some(&idx) => rows[idx].total_qty += i64::from(item.quantity),
            None => {
                index.insert(key, rows.len());
                rows.push(FilmSizeRollupRow {
                    film_id: item.film_id.clone(),
                    film_display: item.film_display.clone(),
                    width_in: item.width_in,
                    height_in: item.height_in,
                    total_qty: i64::from(item.quantity),
                    area_sqft_each: item.width_in * item.height_in / SQ_IN_PER_SQ_FT,
                    roll_plan: plans.plan(item.width_in, item.height_in),
                });
            }
        }
    }

    rows.sort_by(|a, b| {
        compare_sizes(a.width_in, a.height_in, b.width_in, b.height_in)
            .then_with(|| a.film_display.cmp(&b.film_display))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::line_item::PriceSource;

    fn item(room: &str, width_in: f64, height_in: f64, quantity: i32, film: Option<&str>) -> LineItem {
        LineItem {
            window_id: format!("{}-{}x{}", room, width_in, height_in),
            label: room.to_string(),
            room: room.to_string(),
            width_in,
            height_in,
            pricing_width_in: width_in,
            pricing_height_in: height_in,
            quantity,
            waste_factor_percent: 0.0,
            area_sqft: 0.0,
            effective_area_sqft: 0.0,
            film_id: film.map(str::to_string),
            film_display: film.map(str::to_string),
            film_source: None,
            is_security: false,
            sell_per_sqft: 0.0,
            price_source: PriceSource::None,
            film_total: 0.0,
            removal_fee_per_sqft: 0.0,
            removal_total: 0.0,
            line_total: 0.0,
            linear_feet: 0.0,
            valid: quantity > 0 && width_in > 0.0 && height_in > 0.0,
            priceable: true,
        }
    }

    #[test]
    fn test_window_rollup_groups_and_sorts() {
        let config = EngineConfig::default();
        let mut plans = RollPlanCache::new(&config);
        let items = vec![
            item("Kitchen", 24.0, 36.0, 2, Some("A")),
            item("Den", 36.0, 48.0, 1, Some("B")),
            item("Den", 24.0, 36.0, 3, Some("C")),
        ];
        let rows = window_size_rollup(&items, &mut plans);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].width_in, rows[0].height_in), (36.0, 48.0));
        assert_eq!(rows[1].total_qty, 5);
        assert_eq!(rows[1].area_sqft_each, 6.0);
        assert_eq!(rows[1].film_display.as_deref(), Some("A"));
        assert_eq!(plans.len(), 2);
    }

    #[test]
    fn test_equal_area_sizes_are_ordered_deterministically() {
        let config = EngineConfig::default();
        let mut plans = RollPlanCache::new(&config);
        let items = vec![item("A", 48.0, 24.0, 1, None), item("A", 24.0, 48.0, 1, None)];
        let rows = window_size_rollup(&items, &mut plans);
        assert_eq!(rows[0].width_in, 24.0);
        assert_eq!(rows[1].width_in, 48.0);
    }

    #[test]
    fn test_first_resolved_film_is_representative() {
        let config = EngineConfig::default();
        let mut plans = RollPlanCache::new(&config);
        let items = vec![
            item("A", 10.0, 10.0, 1, None),
            item("A", 10.0, 10.0, 1, Some("Second")),
            item("A", 10.0, 10.0, 1, Some("Third")),
        ];
        let rows = window_size_rollup(&items, &mut plans);
        assert_eq!(rows[0].film_display.as_deref(), Some("Second"));
    }

    #[test]
    fn test_invalid_windows_are_skipped() {
        let config = EngineConfig::default();
        let mut plans = RollPlanCache::new(&config);
        let items = vec![item("A", 10.0, 10.0, 0, None), item("A", 0.0, 10.0, 1, None)];
        assert!(window_size_rollup(&items, &mut plans).is_empty());
        assert!(plans.is_empty());
    }

    #[test]
    fn test_room_rollup_unassigned_last() {
        let config = EngineConfig::default();
        let mut plans = RollPlanCache::new(&config);
        let items = vec![
            item(UNASSIGNED_ROOM, 10.0, 10.0, 1, None),
            item("Zebra Room", 10.0, 10.0, 1, None),
            item("Bedroom 10", 10.0, 10.0, 1, None),
            item("Bedroom 2", 10.0, 10.0, 2, None),
            item("Bedroom 2", 20.0, 10.0, 3, None),
        ];
        let rooms = room_rollup(&items, &mut plans);
        let names: Vec<&str> = rooms.iter().map(|r| r.room.as_str()).collect();
        assert_eq!(names, vec!["Bedroom 2", "Bedroom 10", "Zebra Room", UNASSIGNED_ROOM]);
        assert_eq!(rooms[0].total_qty, 5);
        assert_eq!(rooms[0].sizes.len(), 2);
        assert_eq!(plans.len(), 2);
    }

    #[test]
    fn test_film_size_rollup_splits_films() {
        let config = EngineConfig::default();
        let mut plans = RollPlanCache::new(&config);
        let items = vec![
            item("A", 10.0, 10.0, 1, Some("Bronze")),
            item("A", 10.0, 10.0, 2, Some("Amber")),
            item("B", 10.0, 10.0, 4, Some("Bronze")),
        ];
        let rows = film_size_rollup(&items, &mut plans);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].film_display.as_deref(), Some("Amber"));
        assert_eq!(rows[1].total_qty, 5);
    }

    #[test]
    fn test_compare_rooms() {
        assert_eq!(compare_rooms("Utility", UNASSIGNED_ROOM), Ordering::Less);
        assert_eq!(compare_rooms("Zoo", UNASSIGNED_ROOM), Ordering::Less);
        assert_eq!(compare_rooms(UNASSIGNED_ROOM, "Attic"), Ordering::Greater);
    }
}

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::env::{ClearSight, CraftEnv, StaticTile, WorldItem};
use crate::facility::{FacilityTable, TypeTagRegistry};
use crate::state::{ArtId, ItemTypeId, Serial};

const ANVIL_ART: ArtId = ArtId(4015);
const FORGE_ART: ArtId = ArtId(4017);
const CHARGED_ART: ArtId = ArtId(6897);
const PLAIN_TYPE: ItemTypeId = ItemTypeId(1);

#[derive(Default)]
struct FakeWorld {
    items: Vec<WorldItem>,
    statics: Vec<(i32, i32, StaticTile)>,
    item_queries: AtomicUsize,
    static_queries: AtomicUsize,
}

impl FakeWorld {
    fn with_item(mut self, serial: u32, art: ArtId, at: Point3) -> Self {
        self.items
            .push(WorldItem::new(Serial(serial), PLAIN_TYPE, art, at));
        self
    }

    fn with_typed_item(mut self, serial: u32, type_id: ItemTypeId, at: Point3) -> Self {
        self.items
            .push(WorldItem::new(Serial(serial), type_id, ArtId(1), at));
        self
    }

    fn with_static(mut self, x: i32, y: i32, tile: StaticTile) -> Self {
        self.statics.push((x, y, tile));
        self
    }
}

impl MapOracle for FakeWorld {
    fn items_in_range(&self, _map: MapPlane, center: Point3, range: u32) -> Vec<WorldItem> {
        self.item_queries.fetch_add(1, Ordering::SeqCst);
        self.items
            .iter()
            .filter(|item| center.in_box_range(item.location, range))
            .copied()
            .collect()
    }

    fn static_tiles(&self, _map: MapPlane, x: i32, y: i32) -> Vec<StaticTile> {
        self.static_queries.fetch_add(1, Ordering::SeqCst);
        self.statics
            .iter()
            .filter(|(tx, ty, _)| *tx == x && *ty == y)
            .map(|(_, _, tile)| *tile)
            .collect()
    }
}

/// Blocks sight to any listed point; records every probe target.
#[derive(Default)]
struct FakeSight {
    blocked: Vec<Point3>,
    block_all: bool,
    probes: Mutex<Vec<Point3>>,
}

impl FakeSight {
    fn blocking(points: &[Point3]) -> Self {
        Self {
            blocked: points.to_vec(),
            ..Self::default()
        }
    }

    fn blind() -> Self {
        Self {
            block_all: true,
            ..Self::default()
        }
    }
}

impl SightOracle for FakeSight {
    fn in_line_of_sight(&self, _map: MapPlane, _from: Point3, to: Point3) -> bool {
        self.probes.lock().unwrap().push(to);
        !self.block_all && !self.blocked.contains(&to)
    }
}

struct FakeFacilities {
    table: FacilityTable,
    tags: TypeTagRegistry,
    charges: Mutex<HashMap<Serial, u32>>,
}

impl FakeFacilities {
    fn standard() -> Self {
        Self {
            table: FacilityTable::standard(),
            tags: TypeTagRegistry::new(),
            charges: Mutex::new(HashMap::new()),
        }
    }

    fn with_charges(self, serial: u32, charges: u32) -> Self {
        self.charges.lock().unwrap().insert(Serial(serial), charges);
        self
    }

    fn charges(&self, serial: u32) -> u32 {
        self.charges.lock().unwrap()[&Serial(serial)]
    }
}

impl FacilityOracle for FakeFacilities {
    fn type_capabilities(&self, type_id: ItemTypeId) -> FacilityFlags {
        self.tags.capabilities(type_id)
    }

    fn classify_art(&self, art: ArtId) -> FacilityFlags {
        self.table.classify(art)
    }

    fn is_charged_forge(&self, art: ArtId) -> bool {
        self.table.is_charged_forge(art)
    }

    fn consume_charge(&self, serial: Serial) -> Option<u32> {
        let mut charges = self.charges.lock().unwrap();
        let left = charges.get_mut(&serial)?;
        *left = left.saturating_sub(1);
        Some(*left)
    }
}

fn britain(z: i32) -> ActorLocation {
    ActorLocation::new(Point3::new(1400, 1600, z), MapPlane::Trammel)
}

fn at(dx: i32, dy: i32, z: i32) -> Point3 {
    Point3::new(1400 + dx, 1600 + dy, z)
}

fn detect(world: &FakeWorld, sight: &FakeSight, facilities: &FakeFacilities) -> FacilityScan {
    let env = Env::with_all(world, sight, facilities);
    ProximityDetector::standard().detect(&env, britain(0), 2)
}

#[test]
fn empty_world_finds_nothing_at_any_radius() {
    let world = FakeWorld::default();
    let sight = FakeSight::default();
    let facilities = FakeFacilities::standard();
    let env = Env::with_all(&world, &sight, &facilities);
    let detector = ProximityDetector::standard();

    for radius in 0..=5 {
        assert_eq!(detector.detect(&env, britain(0), radius), FacilityScan::NONE);
    }
}

#[test]
fn single_anvil_satisfies_only_the_anvil() {
    let world = FakeWorld::default().with_item(1, ANVIL_ART, at(1, 1, 0));
    let scan = detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    assert_eq!(<(bool, bool)>::from(scan), (true, false));
}

#[test]
fn vertical_tolerance_accepts_sixteen_and_rejects_seventeen() {
    let facilities = FakeFacilities::standard();
    let sight = FakeSight::default();

    for (z, expected) in [(16, true), (17, false), (-16, true), (-17, false)] {
        let world = FakeWorld::default().with_item(1, ANVIL_ART, at(0, 1, z));
        let scan = detect(&world, &sight, &facilities);
        assert_eq!(scan.anvil, expected, "item at z {z}");
    }
}

#[test]
fn blocked_line_of_sight_rejects_the_candidate() {
    let anvil_at = at(2, 0, 0);
    let world = FakeWorld::default().with_item(1, ANVIL_ART, anvil_at);

    let clear = detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    let blocked = detect(
        &world,
        &FakeSight::blocking(&[anvil_at]),
        &FakeFacilities::standard(),
    );

    assert!(clear.anvil);
    assert!(!blocked.anvil);
}

#[test]
fn items_outside_the_box_radius_are_ignored() {
    let world = FakeWorld::default()
        .with_item(1, ANVIL_ART, at(3, 0, 0))
        .with_item(2, FORGE_ART, at(-2, -2, 0));
    let scan = detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    assert_eq!(scan, FacilityScan::new(false, true));
}

#[test]
fn type_tags_mark_items_regardless_of_art() {
    let mut facilities = FakeFacilities::standard();
    facilities
        .tags
        .register(ItemTypeId(77), [FacilityKind::Anvil, FacilityKind::Forge])
        .unwrap();
    let world = FakeWorld::default().with_typed_item(1, ItemTypeId(77), at(1, 0, 0));

    let scan = detect(&world, &FakeSight::default(), &facilities);
    assert_eq!(scan, FacilityScan::BOTH);
}

#[test]
fn charged_forge_burns_one_charge_per_call() {
    let world = FakeWorld::default()
        .with_item(1, ANVIL_ART, at(1, 0, 0))
        .with_item(9, CHARGED_ART, at(0, 1, 0));
    let facilities = FakeFacilities::standard().with_charges(9, 10);
    let sight = FakeSight::default();

    assert_eq!(detect(&world, &sight, &facilities), FacilityScan::BOTH);
    assert_eq!(facilities.charges(9), 9);

    assert_eq!(detect(&world, &sight, &facilities), FacilityScan::BOTH);
    assert_eq!(facilities.charges(9), 8);
}

#[test]
fn charged_forge_is_spared_when_another_forge_already_matched() {
    let world = FakeWorld::default()
        .with_item(1, FORGE_ART, at(1, 0, 0))
        .with_item(9, CHARGED_ART, at(0, 1, 0));
    let facilities = FakeFacilities::standard().with_charges(9, 5);

    let scan = detect(&world, &FakeSight::default(), &facilities);
    assert!(scan.forge);
    assert_eq!(facilities.charges(9), 5);
}

#[test]
fn rejected_charged_forge_keeps_its_charge() {
    let forge_at = at(0, 1, 0);
    let world = FakeWorld::default().with_item(9, CHARGED_ART, forge_at);
    let facilities = FakeFacilities::standard().with_charges(9, 5);

    let scan = detect(&world, &FakeSight::blocking(&[forge_at]), &facilities);
    assert!(!scan.forge);
    assert_eq!(facilities.charges(9), 5);
}

#[test]
fn only_the_first_of_two_charged_forges_is_consumed() {
    let world = FakeWorld::default()
        .with_item(8, CHARGED_ART, at(1, 0, 0))
        .with_item(9, CHARGED_ART, at(0, 1, 0));
    let facilities = FakeFacilities::standard()
        .with_charges(8, 3)
        .with_charges(9, 3);

    detect(&world, &FakeSight::default(), &facilities);
    assert_eq!(facilities.charges(8) + facilities.charges(9), 5);
}

#[test]
fn special_region_forces_both_even_when_blind() {
    let world = FakeWorld::default();
    let sight = FakeSight::blind();
    let facilities = FakeFacilities::standard();
    let env = Env::with_all(&world, &sight, &facilities);
    let detector = ProximityDetector::standard();

    let inside = ActorLocation::new(Point3::new(6900, 150, 0), MapPlane::Felucca);
    let wrong_plane = ActorLocation::new(Point3::new(6900, 150, 0), MapPlane::Trammel);

    assert_eq!(detector.detect(&env, inside, 2), FacilityScan::BOTH);
    assert_eq!(detector.detect(&env, wrong_plane, 2), FacilityScan::NONE);
}

#[test]
fn special_region_applies_without_any_oracles() {
    let env: CraftEnv<'_> = Env::empty();
    let detector = ProximityDetector::standard();

    let inside = ActorLocation::new(Point3::new(6915, 180, 40), MapPlane::Felucca);
    let outside = ActorLocation::new(Point3::new(6915, 170, 40), MapPlane::Felucca);

    assert_eq!(detector.detect(&env, inside, 2), FacilityScan::BOTH);
    assert_eq!(detector.detect(&env, outside, 2), FacilityScan::NONE);
}

#[test]
fn missing_plane_finds_nothing_even_with_facilities_adjacent() {
    let world = FakeWorld::default()
        .with_item(1, ANVIL_ART, at(0, 0, 0))
        .with_item(2, FORGE_ART, at(0, 0, 0));
    let sight = FakeSight::default();
    let facilities = FakeFacilities::standard();
    let env = Env::with_all(&world, &sight, &facilities);

    let scan = ProximityDetector::standard().detect(
        &env,
        ActorLocation::nowhere(Point3::new(6900, 150, 0)),
        2,
    );
    assert_eq!(scan, FacilityScan::NONE);
    assert_eq!(world.item_queries.load(Ordering::SeqCst), 0);
}

#[test]
fn dynamic_matches_short_circuit_the_static_scan() {
    let world = FakeWorld::default()
        .with_item(1, ANVIL_ART, at(1, 0, 0))
        .with_item(2, FORGE_ART, at(0, 1, 0));

    let scan = detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    assert_eq!(scan, FacilityScan::BOTH);
    assert_eq!(world.item_queries.load(Ordering::SeqCst), 1);
    assert_eq!(world.static_queries.load(Ordering::SeqCst), 0);
}

#[test]
fn static_scan_stops_once_both_kinds_are_found() {
    let world = FakeWorld::default()
        .with_static(1398, 1598, StaticTile::new(ANVIL_ART, 0, 0))
        .with_static(1398, 1599, StaticTile::new(FORGE_ART, 0, 0));

    let scan = detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    assert_eq!(scan, FacilityScan::BOTH);
    // First column, second row: only two of the 25 cells were fetched.
    assert_eq!(world.static_queries.load(Ordering::SeqCst), 2);
}

#[test]
fn static_forge_is_found_when_no_items_exist() {
    let world = FakeWorld::default().with_static(1402, 1598, StaticTile::new(ArtId(6530), 0, 0));
    let scan = detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    assert_eq!(scan, FacilityScan::new(false, true));
}

#[test]
fn static_tiles_ignore_the_charged_forge_range() {
    let world = FakeWorld::default().with_static(1400, 1601, StaticTile::new(CHARGED_ART, 0, 0));
    let scan = detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    assert_eq!(scan, FacilityScan::NONE);
}

#[test]
fn static_tolerance_uses_tile_base_and_sight_aims_above_its_top() {
    let sight = FakeSight::default();
    let facilities = FakeFacilities::standard();

    let reachable =
        FakeWorld::default().with_static(1401, 1600, StaticTile::new(FORGE_ART, 16, 10));
    assert!(detect(&reachable, &sight, &facilities).forge);
    assert_eq!(
        sight.probes.lock().unwrap().last().copied(),
        Some(Point3::new(1401, 1600, 27))
    );

    let too_high = FakeWorld::default().with_static(1401, 1600, StaticTile::new(FORGE_ART, 17, 0));
    assert!(!detect(&too_high, &sight, &facilities).forge);
}

#[test]
fn towering_static_tile_is_found_on_open_ground() {
    let world =
        FakeWorld::default().with_static(1401, 1600, StaticTile::new(FORGE_ART, 0, i32::MAX));
    let facilities = FakeFacilities::standard();
    let env = Env::with_all(&world, &ClearSight, &facilities);

    let scan = ProximityDetector::standard().detect(&env, britain(0), 2);
    assert_eq!(scan, FacilityScan::new(false, true));
}

#[test]
fn static_tile_behind_a_wall_is_rejected() {
    let world = FakeWorld::default().with_static(1400, 1602, StaticTile::new(ANVIL_ART, 0, 5));
    let sight = FakeSight::blocking(&[Point3::new(1400, 1602, 6)]);
    let scan = detect(&world, &sight, &FakeFacilities::standard());
    assert!(!scan.anvil);
}

#[test]
fn static_scan_covers_exactly_the_square_neighbourhood() {
    let world = FakeWorld::default();
    detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    assert_eq!(world.static_queries.load(Ordering::SeqCst), 25);
}

#[test]
fn mixed_sources_combine_across_phases() {
    let world = FakeWorld::default()
        .with_item(1, ANVIL_ART, at(-1, 0, 0))
        .with_static(1401, 1601, StaticTile::new(ArtId(0x2DD8), 2, 0));
    let scan = detect(&world, &FakeSight::default(), &FakeFacilities::standard());
    assert_eq!(scan, FacilityScan::BOTH);
}

#[test]
fn scan_reports_missing_kinds() {
    assert_eq!(FacilityScan::NONE.missing(), FacilityFlags::ANVIL | FacilityFlags::FORGE);
    assert_eq!(FacilityScan::new(true, false).missing(), FacilityFlags::FORGE);
    assert!(FacilityScan::BOTH.missing().is_empty());
    assert!(FacilityScan::new(false, true).has(FacilityKind::Forge));
}

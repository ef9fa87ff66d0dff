use objectlife_data::Position;
use std::collections::HashMap;

/// Which arena a bucket entry indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Agent,
    Food,
    Site,
}

#[derive(Debug, Clone, Default)]
struct Bucket {
    agents: Vec<usize>,
    foods: Vec<usize>,
    sites: Vec<usize>,
}

impl Bucket {
    fn list(&self, kind: EntityKind) -> &[usize] {
        match kind {
            EntityKind::Agent => &self.agents,
            EntityKind::Food => &self.foods,
            EntityKind::Site => &self.sites,
        }
    }

    fn list_mut(&mut self, kind: EntityKind) -> &mut Vec<usize> {
        match kind {
            EntityKind::Agent => &mut self.agents,
            EntityKind::Food => &mut self.foods,
            EntityKind::Site => &mut self.sites,
        }
    }
}

#[derive(Debug, Clone)]
/// Uniform grid over the arena for nearest-target lookups.
///
/// Cells are keyed by `(floor(x / cell_size), floor(y / cell_size))`, so the
/// grid is unbounded: agents seeded just outside the arena still bucket
/// normally. Each cell keeps three separate index lists, one per arena
/// (agents, foods, sites). Entries are plain indices into the owner's
/// collections, valid only until those collections are next swept.
///
/// The grid is rebuilt from scratch once per tick and read-only afterwards.
/// Entities are therefore bucketed by where they stood when the tick began,
/// while distances are always measured from current positions.
///
/// # Examples
/// ```
/// use objectlife_core::spatial_hash::{EntityKind, SpatialHash};
/// use objectlife_data::Position;
///
/// let foods = vec![Position::new(15.0, 15.0), Position::new(85.0, 85.0)];
/// let mut spatial = SpatialHash::new(96.0);
/// spatial.build(std::iter::empty(), foods.iter().copied(), std::iter::empty());
///
/// let nearest = spatial.nearest_by(&Position::new(10.0, 10.0), EntityKind::Food, |i| {
///     foods.get(i).copied()
/// });
/// assert_eq!(nearest, Some(0));
/// ```
pub struct SpatialHash {
    pub cell_size: f64,
    cells: HashMap<(i32, i32), Bucket>,
    built: bool,
}

impl Default for SpatialHash {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl SpatialHash {
    /// Creates an unbuilt spatial hash.
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
            built: false,
        }
    }

    /// Creates a spatial hash with the default 96-unit cells.
    pub fn new_empty() -> Self {
        Self::new(96.0)
    }

    /// Computes the cell key for a world coordinate.
    ///
    /// Non-finite coordinates, and coordinates whose cell would not fit an
    /// `i32` with room for the neighbour scan, return `None`.
    #[inline]
    pub fn get_cell(&self, x: f64, y: f64) -> Option<(i32, i32)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let cx = (x / self.cell_size).floor();
        let cy = (y / self.cell_size).floor();
        let limit = f64::from(i32::MAX - 1);
        if cx.abs() > limit || cy.abs() > limit {
            return None;
        }
        Some((cx as i32, cy as i32))
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Drops every bucket and marks the grid unbuilt.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.built = false;
    }

    /// Clears the grid and buckets the three arenas by position.
    ///
    /// Entry `i` of each iterator becomes index `i` of its kind. Positions
    /// without a valid cell are left out and only reachable through a
    /// linear scan.
    pub fn build<A, F, S>(&mut self, agents: A, foods: F, sites: S)
    where
        A: IntoIterator<Item = Position>,
        F: IntoIterator<Item = Position>,
        S: IntoIterator<Item = Position>,
    {
        self.cells.clear();
        self.insert_all(EntityKind::Agent, agents);
        self.insert_all(EntityKind::Food, foods);
        self.insert_all(EntityKind::Site, sites);
        self.built = true;
    }

    fn insert_all<I>(&mut self, kind: EntityKind, positions: I)
    where
        I: IntoIterator<Item = Position>,
    {
        for (idx, pos) in positions.into_iter().enumerate() {
            if let Some(key) = self.get_cell(pos.x, pos.y) {
                self.cells.entry(key).or_default().list_mut(kind).push(idx);
            }
        }
    }

    /// Visits every entry of `kind` in the 3×3 cell neighbourhood around
    /// `(x, y)`, column by column, each bucket in insertion order.
    pub fn query_callback<F>(&self, x: f64, y: f64, kind: EntityKind, mut callback: F)
    where
        F: FnMut(usize),
    {
        let Some((cx, cy)) = self.get_cell(x, y) else {
            return;
        };
        for gx in cx - 1..=cx + 1 {
            for gy in cy - 1..=cy + 1 {
                if let Some(bucket) = self.cells.get(&(gx, gy)) {
                    for &idx in bucket.list(kind) {
                        callback(idx);
                    }
                }
            }
        }
    }

    pub fn count_nearby(&self, x: f64, y: f64, kind: EntityKind) -> usize {
        let mut count = 0;
        self.query_callback(x, y, kind, |_| count += 1);
        count
    }

    /// Closest entry of `kind` in the 3×3 neighbourhood of `origin`.
    ///
    /// `locate` maps an index to its current position, or `None` to skip it
    /// (the origin itself, dead agents, eaten food). The first candidate to
    /// reach the running minimum wins ties. Returns `None` when the grid is
    /// unbuilt or the neighbourhood has no candidates.
    pub fn nearest_by<F>(&self, origin: &Position, kind: EntityKind, mut locate: F) -> Option<usize>
    where
        F: FnMut(usize) -> Option<Position>,
    {
        if !self.built {
            return None;
        }
        let mut min_dist_sq = f64::INFINITY;
        let mut nearest = None;
        self.query_callback(origin.x, origin.y, kind, |idx| {
            if let Some(pos) = locate(idx) {
                let d2 = origin.distance_sq(&pos);
                if d2 < min_dist_sq {
                    min_dist_sq = d2;
                    nearest = Some(idx);
                }
            }
        });
        nearest
    }
}

/// Closest of `0..len` by brute force, with the same skip and tie rules as
/// [`SpatialHash::nearest_by`].
pub fn linear_nearest<F>(origin: &Position, len: usize, mut locate: F) -> Option<usize>
where
    F: FnMut(usize) -> Option<Position>,
{
    let mut min_dist_sq = f64::INFINITY;
    let mut nearest = None;
    for idx in 0..len {
        if let Some(pos) = locate(idx) {
            let d2 = origin.distance_sq(&pos);
            if d2 < min_dist_sq {
                min_dist_sq = d2;
                nearest = Some(idx);
            }
        }
    }
    nearest
}

/// Grid lookup with a linear fallback, so a sparse or unbuilt grid never
/// hides a candidate that exists somewhere in the arena.
pub fn find_nearest<F>(
    spatial: &SpatialHash,
    origin: &Position,
    kind: EntityKind,
    len: usize,
    mut locate: F,
) -> Option<usize>
where
    F: FnMut(usize) -> Option<Position>,
{
    spatial
        .nearest_by(origin, kind, &mut locate)
        .or_else(|| linear_nearest(origin, len, &mut locate))
}

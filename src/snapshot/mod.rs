//! Bounding-box-trimmed grid persistence
//!
//! [`save`] scans the grid for its occupied bounding box and emits a
//! [`Snapshot`] whose `data` array is `[z][y][x]`-ordered and offset so
//! the box's minimum corner becomes index (0, 0, 0). [`load`] places that
//! local origin at the destination grid's absolute origin. The JSON shape
//! is:
//!
//! ```json
//! { "dimensions": {"w": 1, "h": 1, "l": 1},
//!   "data": [ [ [ 1193046 ] ] ] }
//! ```
//!
//! Loading is parse-fully-then-apply: a snapshot is validated against its
//! own declared dimensions and against the destination grid before any
//! cell is cleared.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::voxel::color::Color;
use crate::voxel::grid::{GridCoord, GridDims, VoxelGrid};

/// Persisted grid snapshot: the occupied bounding-box extents and a dense
/// `[z][y][x]` array of optional colors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub dimensions: GridDims,
    pub data: Vec<Vec<Vec<Option<Color>>>>,
}

impl Snapshot {
    /// Check that `data` agrees with the declared dimensions
    pub fn validate(&self) -> Result<()> {
        let GridDims { w, h, l } = self.dimensions;
        let consistent = self.data.len() == l
            && self.data.iter().all(|plane| {
                plane.len() == h && plane.iter().all(|row| row.len() == w)
            });
        if !consistent {
            return Err(Error::SnapshotShape { dims: self.dimensions });
        }
        Ok(())
    }

    /// Encode as a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode as JSON to a writer
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        Ok(serde_json::to_writer(writer, self)?)
    }

    /// Decode and validate JSON from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Snapshot the occupied bounding box of a grid.
///
/// Returns `None` when no voxel is occupied; that is a short-circuit, not
/// an error, and no file should be produced for it.
pub fn save(grid: &VoxelGrid) -> Option<Snapshot> {
    let (min, max) = occupied_bounds(grid)?;
    let dimensions = GridDims::new(
        max.x - min.x + 1,
        max.y - min.y + 1,
        max.z - min.z + 1,
    );

    let mut data = Vec::with_capacity(dimensions.l);
    for z in 0..dimensions.l {
        let mut plane = Vec::with_capacity(dimensions.h);
        for y in 0..dimensions.h {
            let mut row = Vec::with_capacity(dimensions.w);
            for x in 0..dimensions.w {
                row.push(grid.get(GridCoord::new(min.x + x, min.y + y, min.z + z)));
            }
            plane.push(row);
        }
        data.push(plane);
    }

    Some(Snapshot { dimensions, data })
}

/// Replace a grid's contents with a snapshot, anchored at the grid origin.
///
/// Validation happens before the grid is touched: an inconsistent or
/// oversized snapshot leaves the destination unchanged.
pub fn load(grid: &mut VoxelGrid, snapshot: &Snapshot) -> Result<()> {
    snapshot.validate()?;

    let dims = snapshot.dimensions;
    let grid_dims = grid.dims();
    if dims.w > grid_dims.w || dims.h > grid_dims.h || dims.l > grid_dims.l {
        return Err(Error::SnapshotTooLarge { snapshot: dims, grid: grid_dims });
    }

    grid.clear();
    for (z, plane) in snapshot.data.iter().enumerate() {
        for (y, row) in plane.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(color) = cell {
                    grid.set(GridCoord::new(x, y, z), Some(*color));
                }
            }
        }
    }
    Ok(())
}

/// Minimum and maximum occupied coordinates, or `None` for an empty grid
fn occupied_bounds(grid: &VoxelGrid) -> Option<(GridCoord, GridCoord)> {
    let mut bounds: Option<(GridCoord, GridCoord)> = None;
    for (coord, _) in grid.iter_occupied() {
        bounds = Some(match bounds {
            None => (coord, coord),
            Some((min, max)) => (
                GridCoord::new(min.x.min(coord.x), min.y.min(coord.y), min.z.min(coord.z)),
                GridCoord::new(max.x.max(coord.x), max.y.max(coord.y), max.z.max(coord.z)),
            ),
        });
    }
    bounds
}

/// Conventional snapshot filename for a date: `voxel-grid-<ISO-date>.json`
pub fn file_name(date: NaiveDate) -> String {
    format!("voxel-grid-{}.json", date.format("%Y-%m-%d"))
}

/// [`file_name`] for the local date
pub fn file_name_today() -> String {
    file_name(chrono::Local::now().date_naive())
}

/// Write a grid snapshot to a file.
///
/// Returns `Ok(false)` without creating a file when the grid is empty.
pub fn write_file(grid: &VoxelGrid, path: &Path) -> Result<bool> {
    let Some(snapshot) = save(grid) else {
        info!("nothing to save: grid has no painted voxels");
        return Ok(false);
    };
    let file = File::create(path)?;
    snapshot.to_writer(BufWriter::new(file))?;
    info!(
        "saved {}x{}x{} snapshot to {}",
        snapshot.dimensions.w,
        snapshot.dimensions.h,
        snapshot.dimensions.l,
        path.display()
    );
    Ok(true)
}

/// Read, parse, validate and apply a snapshot file as one sequence.
/// The grid is untouched unless the whole file parses and fits.
pub fn read_file(grid: &mut VoxelGrid, path: &Path) -> Result<()> {
    let file = File::open(path)?;
    let snapshot = Snapshot::from_reader(BufReader::new(file))?;
    load(grid, &snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_empty_grid() {
        let grid = VoxelGrid::new(GridDims::new(4, 4, 4));
        assert!(save(&grid).is_none());
    }

    #[test]
    fn test_save_single_voxel() {
        let mut grid = VoxelGrid::new(GridDims::new(10, 10, 10));
        grid.set(GridCoord::new(3, 4, 5), Some(Color::new(0x12_3456)));

        let snapshot = save(&grid).unwrap();
        assert_eq!(snapshot.dimensions, GridDims::new(1, 1, 1));
        assert_eq!(snapshot.data, vec![vec![vec![Some(Color::new(0x12_3456))]]]);
    }

    #[test]
    fn test_save_load_anchors_at_origin() {
        let mut grid = VoxelGrid::new(GridDims::new(8, 8, 8));
        grid.set(GridCoord::new(2, 3, 4), Some(Color::new(0xAA)));
        grid.set(GridCoord::new(4, 3, 6), Some(Color::new(0xBB)));

        let snapshot = save(&grid).unwrap();
        assert_eq!(snapshot.dimensions, GridDims::new(3, 1, 3));

        let mut dest = VoxelGrid::new(GridDims::new(4, 4, 4));
        dest.set(GridCoord::new(0, 0, 0), Some(Color::new(0xCC))); // clobbered by clear
        load(&mut dest, &snapshot).unwrap();

        assert_eq!(dest.occupied_count(), 2);
        assert_eq!(dest.get(GridCoord::new(0, 0, 0)), Some(Color::new(0xAA)));
        assert_eq!(dest.get(GridCoord::new(2, 0, 2)), Some(Color::new(0xBB)));
    }

    #[test]
    fn test_load_rejects_oversized_snapshot() {
        let mut grid = VoxelGrid::new(GridDims::new(10, 10, 10));
        grid.set(GridCoord::new(0, 0, 0), Some(Color::new(0x11)));
        grid.set(GridCoord::new(5, 0, 0), Some(Color::new(0x22)));
        let snapshot = save(&grid).unwrap(); // 6 x 1 x 1

        let mut dest = VoxelGrid::new(GridDims::new(4, 4, 4));
        dest.set(GridCoord::new(1, 1, 1), Some(Color::new(0x33)));

        let err = load(&mut dest, &snapshot).unwrap_err();
        assert!(matches!(err, Error::SnapshotTooLarge { .. }));
        // Destination untouched
        assert_eq!(dest.get(GridCoord::new(1, 1, 1)), Some(Color::new(0x33)));
    }

    #[test]
    fn test_load_rejects_inconsistent_shape() {
        let snapshot = Snapshot {
            dimensions: GridDims::new(2, 1, 1),
            data: vec![vec![vec![Some(Color::new(0x11))]]], // row too short
        };
        let mut dest = VoxelGrid::new(GridDims::new(4, 4, 4));
        dest.set(GridCoord::new(0, 0, 0), Some(Color::new(0x33)));

        assert!(matches!(
            load(&mut dest, &snapshot),
            Err(Error::SnapshotShape { .. })
        ));
        assert_eq!(dest.occupied_count(), 1);
    }

    #[test]
    fn test_json_shape() {
        let mut grid = VoxelGrid::new(GridDims::new(10, 10, 10));
        grid.set(GridCoord::new(3, 4, 5), Some(Color::new(0x12_3456)));

        let json = save(&grid).unwrap().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"dimensions":{"w":1,"h":1,"l":1},"data":[[[1193046]]]}"#
        );

        let back = Snapshot::from_json(&json).unwrap();
        assert_eq!(back.data[0][0][0], Some(Color::new(0x12_3456)));
    }

    #[test]
    fn test_json_null_means_empty() {
        let json = r#"{"dimensions":{"w":2,"h":1,"l":1},"data":[[[null,255]]]}"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.data[0][0][0], None);
        assert_eq!(snapshot.data[0][0][1], Some(Color::new(0xFF)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            Snapshot::from_json("{ not json"),
            Err(Error::Parse(_))
        ));
        // Well-formed JSON lying about its dimensions
        let json = r#"{"dimensions":{"w":3,"h":1,"l":1},"data":[[[1]]]}"#;
        assert!(matches!(
            Snapshot::from_json(json),
            Err(Error::SnapshotShape { .. })
        ));
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        assert_eq!(file_name(date), "voxel-grid-2026-08-27.json");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(file_name_today());

        let mut grid = VoxelGrid::new(GridDims::new(6, 6, 6));
        grid.set(GridCoord::new(1, 2, 3), Some(Color::new(0xFF00FF)));
        grid.set(GridCoord::new(3, 2, 1), Some(Color::new(0x00FF00)));
        assert!(write_file(&grid, &path).unwrap());

        let mut dest = VoxelGrid::new(GridDims::new(6, 6, 6));
        read_file(&mut dest, &path).unwrap();

        // Anchored at the origin: the bounding-box minimum (1, 2, 1)
        // becomes (0, 0, 0).
        assert_eq!(dest.occupied_count(), 2);
        assert_eq!(dest.get(GridCoord::new(0, 0, 2)), Some(Color::new(0xFF00FF)));
        assert_eq!(dest.get(GridCoord::new(2, 0, 0)), Some(Color::new(0x00FF00)));
    }

    #[test]
    fn test_write_file_empty_grid_produces_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        let grid = VoxelGrid::new(GridDims::new(4, 4, 4));
        assert!(!write_file(&grid, &path).unwrap());
        assert!(!path.exists());
    }
}

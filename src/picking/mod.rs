//! # Picking Module
//!
//! Resolves a world-space ray into the first occupied voxel it crosses and
//! the exact face it struck, in two stages:
//!
//! 1. A coarse grid traversal (incremental DDA) walks grid cells along the
//!    ray and queries the world for occupancy, bounded by a fixed step count
//!    so an open-sky ray terminates.
//! 2. An exact ray/AABB slab test against the hit cell's bounding box picks
//!    the single face the ray entered through.
//!
//! Callers typically feed the result into block placement: the placement
//! cell is the hit voxel offset by one unit along the struck face's outward
//! normal.

use cgmath::{Point3, Vector3};
use log::trace;

use crate::core::VoxelError;
use crate::voxels::block::BlockSide;
use crate::voxels::chunk::BlockLookup;
use crate::voxels::world::World;

/// Upper bound on grid cells visited per traversal. Rays that never meet a
/// block give up after this many steps instead of walking forever.
pub const MAX_TRAVERSAL_STEPS: usize = 32;

/// Tolerance for matching the entry point against a face plane.
const FACE_EPSILON: f32 = 1e-4;

/// A resolved ray/voxel intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayHit {
    /// Grid cell of the struck block (its minimum corner, in cell units).
    pub voxel: Point3<i32>,
    /// The face the ray entered through.
    pub side: BlockSide,
}

impl RayHit {
    /// The cell one unit along the struck face's outward normal, where a new
    /// block would be placed by a "build on clicked face" interaction.
    pub fn placement_position(&self) -> Point3<i32> {
        self.voxel + self.side.offset()
    }
}

/// Resolves a ray against the world's blocks.
///
/// # Arguments
///
/// * `origin` - World-space ray origin.
/// * `direction` - Ray direction. Need not be normalized, but must be
///   non-zero.
/// * `world` - The world whose blocks are tested.
///
/// # Returns
///
/// `Ok(Some(hit))` for the first occupied cell within range, `Ok(None)` when
/// the ray escapes, and an error only if a traversed cell falls outside the
/// packable coordinate range.
pub fn pick(
    origin: Point3<f32>,
    direction: Vector3<f32>,
    world: &World,
) -> Result<Option<RayHit>, VoxelError> {
    let grid_item_size = world.grid_item_size();
    let voxel = match traverse_grid(origin, direction, grid_item_size, world)? {
        Some(voxel) => voxel,
        None => return Ok(None),
    };
    let cell_size = grid_item_size as f32;
    let box_min = Point3::new(
        voxel.x as f32 * cell_size,
        voxel.y as f32 * cell_size,
        voxel.z as f32 * cell_size,
    );
    match identify_face(origin, direction, box_min, cell_size) {
        Some(side) => {
            trace!("ray hit voxel {:?} on face {:?}", voxel, side);
            Ok(Some(RayHit { voxel, side }))
        }
        // Traversal confirmed occupancy, so a miss here can only come from a
        // degenerate direction; report no hit rather than a bogus face.
        None => Ok(None),
    }
}

/// Walks grid cells of size `grid_item_size` along the ray until a cell holds
/// a block, using incremental distance-to-next-boundary stepping.
///
/// The origin cell itself is never reported: the walk steps into a new cell
/// before each occupancy query, so a ray cast from inside a block resolves to
/// the next block along its path.
pub fn traverse_grid(
    origin: Point3<f32>,
    direction: Vector3<f32>,
    grid_item_size: i32,
    lookup: &dyn BlockLookup,
) -> Result<Option<Point3<i32>>, VoxelError> {
    let cell_size = grid_item_size as f32;
    let mut cell = Point3::new(
        (origin.x / cell_size).floor() as i32,
        (origin.y / cell_size).floor() as i32,
        (origin.z / cell_size).floor() as i32,
    );

    let (step_x, mut t_max_x, t_delta_x) = axis_stepping(origin.x, direction.x, cell.x, cell_size);
    let (step_y, mut t_max_y, t_delta_y) = axis_stepping(origin.y, direction.y, cell.y, cell_size);
    let (step_z, mut t_max_z, t_delta_z) = axis_stepping(origin.z, direction.z, cell.z, cell_size);

    for _ in 0..MAX_TRAVERSAL_STEPS {
        if t_max_x < t_max_y && t_max_x < t_max_z {
            cell.x += step_x;
            t_max_x += t_delta_x;
        } else if t_max_y < t_max_z {
            cell.y += step_y;
            t_max_y += t_delta_y;
        } else {
            cell.z += step_z;
            t_max_z += t_delta_z;
        }

        if lookup.has_block(cell)? {
            return Ok(Some(cell));
        }
    }

    Ok(None)
}

/// Per-axis DDA setup: step direction, distance to the first cell boundary,
/// and distance between boundaries.
///
/// A zero direction component means the ray never crosses boundaries on this
/// axis, so both distances are infinite and the stepping loop never picks it.
fn axis_stepping(origin: f32, direction: f32, cell: i32, cell_size: f32) -> (i32, f32, f32) {
    if direction == 0.0 {
        return (0, f32::INFINITY, f32::INFINITY);
    }
    let step = if direction > 0.0 { 1 } else { -1 };
    let next_boundary = (cell + if step > 0 { 1 } else { 0 }) as f32 * cell_size;
    let t_max = (next_boundary - origin) / direction;
    let t_delta = cell_size / direction.abs();
    (step, t_max, t_delta)
}

/// Identifies which face of an axis-aligned box the ray enters through.
///
/// Runs the slab method to find the entry distance, then matches the entry
/// point against the six boundary planes within [`FACE_EPSILON`]. On a tie
/// (edge or corner hit) the first match in LEFT, RIGHT, BOTTOM, TOP, BACK,
/// FRONT order wins.
///
/// # Arguments
///
/// * `box_min` - Minimum corner of the box, world space.
/// * `box_size` - Edge length of the (cubic) box.
///
/// # Returns
///
/// The struck face, or `None` when the ray misses the box or is degenerate.
pub fn identify_face(
    origin: Point3<f32>,
    direction: Vector3<f32>,
    box_min: Point3<f32>,
    box_size: f32,
) -> Option<BlockSide> {
    let box_max = box_min + Vector3::new(box_size, box_size, box_size);

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        if d == 0.0 {
            // The ray never moves along this axis: either the origin sits
            // inside the slab for the whole flight, or it can never enter.
            if o < box_min[axis] || o > box_max[axis] {
                return None;
            }
            continue;
        }
        let t_min = (box_min[axis] - o) / d;
        let t_max = (box_max[axis] - o) / d;
        let (entry, exit) = if t_min < t_max {
            (t_min, t_max)
        } else {
            (t_max, t_min)
        };
        t_near = t_near.max(entry);
        t_far = t_far.min(exit);
    }

    if t_near > t_far || t_far < 0.0 || !t_near.is_finite() {
        return None;
    }

    let point = origin + direction * t_near;

    if (point.x - box_min.x).abs() < FACE_EPSILON {
        return Some(BlockSide::LEFT);
    }
    if (point.x - box_max.x).abs() < FACE_EPSILON {
        return Some(BlockSide::RIGHT);
    }
    if (point.y - box_min.y).abs() < FACE_EPSILON {
        return Some(BlockSide::BOTTOM);
    }
    if (point.y - box_max.y).abs() < FACE_EPSILON {
        return Some(BlockSide::TOP);
    }
    if (point.z - box_min.z).abs() < FACE_EPSILON {
        return Some(BlockSide::BACK);
    }
    if (point.z - box_max.z).abs() < FACE_EPSILON {
        return Some(BlockSide::FRONT);
    }

    None
}

//! Cell resolution against the hitbox grid
//!
//! Every cell gets an axis-aligned hitbox slightly larger than its visual
//! cube. A selection ray is tested against all 27 and the nearest entry
//! wins. Equal distances resolve to the earlier hitbox in build order,
//! which is the canonical cell order (z outermost, then y, then x), so the
//! tie-break is stable across runs.

use glam::Vec2;

use super::ray::{Aabb, Ray};
use crate::cell_center;
use crate::consts::{CUBE_SIZE, HITBOX_SCALE};
use crate::game::Cell;

/// Supplies world-space rays for screen positions; implemented by the
/// camera/render collaborator
pub trait RayCaster {
    /// Ray through normalized device coordinates (x right, y up, [-1, 1])
    fn screen_ray(&self, ndc: Vec2) -> Ray;
}

/// Resolves selection rays to board cells
#[derive(Debug, Clone)]
pub struct CellResolver {
    hitboxes: Vec<(Cell, Aabb)>,
}

impl Default for CellResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CellResolver {
    pub fn new() -> Self {
        let half = CUBE_SIZE * HITBOX_SCALE / 2.0;
        let hitboxes = Cell::all()
            .map(|cell| (cell, Aabb::from_center_half_extent(cell_center(cell), half)))
            .collect();
        Self { hitboxes }
    }

    /// Nearest cell intersected by `ray`, if any
    pub fn resolve(&self, ray: &Ray) -> Option<Cell> {
        let mut best: Option<(Cell, f32)> = None;
        for &(cell, aabb) in &self.hitboxes {
            if let Some(t) = aabb.hit(ray) {
                // Strict `<` keeps the earlier candidate on an exact tie
                if best.is_none_or(|(_, best_t)| t < best_t) {
                    best = Some((cell, t));
                }
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// Cell under a screen position, using the collaborator's ray
    pub fn resolve_pointer(&self, caster: &impl RayCaster, ndc: Vec2) -> Option<Cell> {
        self.resolve(&caster.screen_ray(ndc))
    }
}

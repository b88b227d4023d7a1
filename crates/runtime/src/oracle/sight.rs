//! Grid line-of-sight walk.

use craft_core::Point3;

/// Walks the cells strictly between `from` and `to` with Bresenham's line
/// algorithm and asks `blocked(x, y, z)` for each, where `z` is the sight
/// line's height interpolated at that step.
///
/// The endpoint cells never block: an actor sees the cell it stands in and
/// the object it is looking at.
pub(crate) fn is_clear(
    from: Point3,
    to: Point3,
    mut blocked: impl FnMut(i32, i32, i32) -> bool,
) -> bool {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    let steps = dx.abs().max(dy.abs());
    if steps <= 1 {
        return true;
    }

    let step_x = dx.signum();
    let step_y = dy.signum();
    let (adx, ady) = (dx.abs(), dy.abs());
    let dz = i64::from(to.z) - i64::from(from.z);

    let mut x = i64::from(from.x);
    let mut y = i64::from(from.y);
    let mut err = adx - ady;

    for step in 1..steps {
        let doubled = 2 * err;
        if doubled > -ady {
            err -= ady;
            x += step_x;
        }
        if doubled < adx {
            err += adx;
            y += step_y;
        }

        let z = i64::from(from.z) + dz * step / steps;
        if blocked(narrow(x), narrow(y), narrow(z)) {
            return false;
        }
    }

    true
}

fn narrow(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

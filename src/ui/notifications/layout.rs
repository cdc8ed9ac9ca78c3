// SPDX-License-Identifier: MPL-2.0
//! Stack geometry.
//!
//! Maps a snackbar's position in the stack to a vertical offset and a scale
//! factor. Everything here is pure so the view can call it every frame.
//!
//! Collapsed, snackbars peek out [`COLLAPSED_GAP`] pixels below each other and
//! shrink by [`SCALE_STEP`] per level. Expanded (pointer over the stack), they
//! spread out [`EXPANDED_GAP`] pixels apart at full size.

/// Vertical distance between stacked snackbars while collapsed.
pub const COLLAPSED_GAP: f32 = 10.0;

/// Vertical distance between snackbars while expanded. Snackbars are 70px tall.
pub const EXPANDED_GAP: f32 = 80.0;

/// Scale lost per level below the topmost snackbar.
pub const SCALE_STEP: f32 = 0.03;

/// Lower bound for the scale of deeply buried snackbars.
pub const MIN_SCALE: f32 = 0.7;

/// Height reserved per snackbar when sizing the hover region.
pub const ITEM_SLOT: f32 = 70.0;

/// Extra room below the last slot of the hover region.
pub const PARENT_PADDING: f32 = 50.0;

const _: () = {
    assert!(MIN_SCALE > 0.0 && MIN_SCALE < 1.0);
    assert!(EXPANDED_GAP > COLLAPSED_GAP);
    assert!(ITEM_SLOT < EXPANDED_GAP);
};

/// Computed placement of one snackbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Whether this is the most recent, frontmost snackbar.
    pub is_top: bool,
    /// Distance from the stack origin, in pixels.
    pub offset_y: f32,
    pub scale: f32,
}

/// Computes where the snackbar at `index` of `total` is drawn.
///
/// A hovered snackbar keeps `frozen_offset` (the offset it had when the
/// pointer entered it) so it does not slide away under the cursor when the
/// stack expands or collapses.
#[must_use]
pub fn compute_layout(
    index: usize,
    total: usize,
    expanded: bool,
    is_hovered: bool,
    frozen_offset: Option<f32>,
) -> Layout {
    let is_top = index + 1 == total;
    let depth = total.saturating_sub(index + 1) as f32;

    let offset_y = match frozen_offset {
        Some(offset) if is_hovered => offset,
        _ if expanded => depth * EXPANDED_GAP,
        _ => depth * COLLAPSED_GAP,
    };

    let scale = if is_top || expanded {
        1.0
    } else {
        (1.0 - SCALE_STEP * depth).max(MIN_SCALE)
    };

    Layout {
        is_top,
        offset_y,
        scale,
    }
}

/// Height of the hover region for `count` snackbars.
///
/// Sized for the expanded layout so moving the pointer down the spread-out
/// stack never leaves the region.
#[must_use]
pub fn parent_height(count: usize) -> f32 {
    count as f32 * ITEM_SLOT + PARENT_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn topmost_is_unscaled_and_at_origin() {
        for total in 1..20 {
            let layout = compute_layout(total - 1, total, false, false, None);
            assert!(layout.is_top);
            assert_eq!(layout.scale, 1.0);
            assert_eq!(layout.offset_y, 0.0);
        }
    }

    #[test]
    fn collapsed_offsets_step_by_ten() {
        let layout = compute_layout(0, 3, false, false, None);
        assert!(!layout.is_top);
        assert_eq!(layout.offset_y, 20.0);
        assert!((layout.scale - 0.94).abs() < EPS);
    }

    #[test]
    fn expanded_offsets_step_by_eighty_at_full_scale() {
        let layout = compute_layout(0, 3, true, false, None);
        assert_eq!(layout.offset_y, 160.0);
        assert_eq!(layout.scale, 1.0);
    }

    #[test]
    fn scale_never_increases_with_depth() {
        let total = 60;
        let scales: Vec<f32> = (0..total)
            .rev()
            .map(|index| compute_layout(index, total, false, false, None).scale)
            .collect();

        assert!(scales.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn deep_stacks_are_clamped() {
        let layout = compute_layout(0, 40, false, false, None);
        assert_eq!(layout.scale, MIN_SCALE);
    }

    #[test]
    fn hovered_offset_is_frozen_regardless_of_expansion() {
        for expanded in [false, true] {
            let layout = compute_layout(0, 4, expanded, true, Some(160.0));
            assert_eq!(layout.offset_y, 160.0);
        }
    }

    #[test]
    fn frozen_offset_ignored_when_not_hovered() {
        let layout = compute_layout(0, 4, false, false, Some(160.0));
        assert_eq!(layout.offset_y, 30.0);
    }

    #[test]
    fn hovered_without_snapshot_uses_normal_offset() {
        let layout = compute_layout(1, 3, true, true, None);
        assert_eq!(layout.offset_y, 80.0);
    }

    #[test]
    fn region_heights() {
        assert_eq!(parent_height(0), 50.0);
        assert_eq!(parent_height(3), 260.0);
    }
}

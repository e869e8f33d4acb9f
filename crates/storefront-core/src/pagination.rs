//! Pagination window computation
//!
//! Given the current page, the total page count and a maximum window size,
//! computes the contiguous run of page numbers to show plus the edge
//! affordances (first/last page shortcuts and ellipses).

use std::ops::RangeInclusive;

use crate::types::PaginationInfo;

/// Window size on wide terminals
pub const MAX_VISIBLE_WIDE: u32 = 5;

/// Window size on narrow terminals
pub const MAX_VISIBLE_NARROW: u32 = 3;

/// Terminals narrower than this many columns use the narrow window
pub const NARROW_VIEWPORT_WIDTH: u16 = 100;

/// Visible page numbers and the controls surrounding them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total: u32,
    /// First page number in the window (0 when there are no pages)
    pub start: u32,
    /// Last page number in the window (0 when there are no pages)
    pub end: u32,
}

impl PageWindow {
    pub fn pages(&self) -> RangeInclusive<u32> {
        if self.total == 0 {
            // Empty range
            return 1..=0;
        }
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        self.pages().count()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Page 1 is not in the window and gets its own button
    pub fn show_first(&self) -> bool {
        self.start > 1
    }

    /// There is a gap between page 1 and the window
    pub fn leading_ellipsis(&self) -> bool {
        self.start > 2
    }

    /// There is a gap between the window and the last page
    pub fn trailing_ellipsis(&self) -> bool {
        self.total > 0 && self.end + 1 < self.total
    }

    /// The last page is not in the window and gets its own button
    pub fn show_last(&self) -> bool {
        self.end < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

/// Compute the window of page numbers around `current`
///
/// When `total <= max_visible` every page is shown. Otherwise the window is
/// centered on `current` where possible and shifted to stay inside
/// `[1, total]`.
pub fn visible_pages(current: u32, total: u32, max_visible: u32) -> PageWindow {
    let max_visible = max_visible.max(1);

    if total == 0 {
        return PageWindow {
            current,
            total,
            start: 0,
            end: 0,
        };
    }

    let (start, end) = if total <= max_visible {
        (1, total)
    } else {
        let centered = i64::from(current) - i64::from(max_visible / 2);
        let latest_start = i64::from(total - max_visible + 1);
        let start = centered.min(latest_start).max(1) as u32;
        (start, start + max_visible - 1)
    };

    PageWindow {
        current,
        total,
        start,
        end,
    }
}

/// Window size for a terminal of the given width
pub fn max_visible_for_width(width: u16, narrow_width: u16) -> u32 {
    if width < narrow_width {
        MAX_VISIBLE_NARROW
    } else {
        MAX_VISIBLE_WIDE
    }
}

/// 1-based item range shown on the current page, `(0, 0)` when empty
pub fn showing_range(info: &PaginationInfo) -> (u32, u32) {
    if info.total == 0 || info.page == 0 {
        return (0, 0);
    }
    let first = (info.page - 1)
        .saturating_mul(info.limit)
        .saturating_add(1)
        .min(info.total);
    let last = info.page.saturating_mul(info.limit).min(info.total);
    (first, last)
}

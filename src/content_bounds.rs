use crate::DEBUG_CONTENT_WIDTH_RATIO;

/// Placement of the content view inside the frame, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContentBounds {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// The content view fills the frame's content area. In debug mode the width
/// is reduced to 70% so devtools have room next to the page.
pub(crate) fn content_view_bounds(frame_width: u32, frame_height: u32, debug: bool) -> ContentBounds {
    let width = if debug {
        (f64::from(frame_width) * DEBUG_CONTENT_WIDTH_RATIO).round() as u32
    } else {
        frame_width
    };

    ContentBounds {
        x: 0,
        y: 0,
        width,
        height: frame_height,
    }
}

#[cfg(test)]
mod tests {
    use super::{content_view_bounds, ContentBounds};

    #[test]
    fn bounds_match_frame_content_area() {
        assert_eq!(
            content_view_bounds(1280, 720, false),
            ContentBounds {
                x: 0,
                y: 0,
                width: 1280,
                height: 720,
            }
        );
    }

    #[test]
    fn debug_mode_shrinks_width_only() {
        let bounds = content_view_bounds(1000, 700, true);
        assert_eq!(bounds.width, 700);
        assert_eq!(bounds.height, 700);
        assert_eq!((bounds.x, bounds.y), (0, 0));
    }

    #[test]
    fn debug_width_is_rounded() {
        assert_eq!(content_view_bounds(1001, 600, true).width, 701);
        assert_eq!(content_view_bounds(1, 600, true).width, 1);
    }

    #[test]
    fn zero_sized_frame_is_preserved() {
        let bounds = content_view_bounds(0, 0, true);
        assert_eq!((bounds.width, bounds.height), (0, 0));
    }
}

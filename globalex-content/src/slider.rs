//! Hero carousel fixtures and the wrapping index arithmetic.

/// Automatic advance period while the carousel is mounted.
pub const AUTOPLAY_INTERVAL_MS: u32 = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
    pub alt: &'static str,
}

pub static HERO_SLIDES: [Slide; 5] = [
    Slide {
        image: "/assets/images/home/charcoal-production.jpg",
        alt: "Natural wood charcoal production",
    },
    Slide {
        image: "/assets/images/home/charcoal-export-ready.jpg",
        alt: "Premium charcoal ready for export",
    },
    Slide {
        image: "/assets/images/home/charcoal-port-loading.jpg",
        alt: "Charcoal loading at international port",
    },
    Slide {
        image: "/assets/images/home/charcoal-quality-control.jpg",
        alt: "Charcoal quality control before export",
    },
    Slide {
        image: "/assets/images/home/charcoal-packed-shipment.jpg",
        alt: "Packed charcoal products ready for shipment",
    },
];

/// Wraps any signed index into `[0, len)`. Negative indices wrap to the
/// end of the list; a zero-length list pins to 0.
pub fn wrap_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as isize) as usize
}

pub fn next_slide(current: usize, len: usize) -> usize {
    wrap_index(current as isize + 1, len)
}

pub fn prev_slide(current: usize, len: usize) -> usize {
    wrap_index(current as isize - 1, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_advance_lands_on_n_mod_count() {
        let count = HERO_SLIDES.len();
        let mut index = 0;
        for _ in 0..7 {
            index = next_slide(index, count);
        }
        assert_eq!(index, 7 % count);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let count = HERO_SLIDES.len();
        assert_eq!(prev_slide(0, count), count - 1);
    }

    #[test]
    fn next_then_prev_is_identity() {
        let count = HERO_SLIDES.len();
        for start in 0..count {
            assert_eq!(prev_slide(next_slide(start, count), count), start);
        }
    }

    #[test]
    fn wrap_handles_degenerate_lists() {
        assert_eq!(wrap_index(3, 0), 0);
        assert_eq!(wrap_index(-1, 1), 0);
        assert_eq!(next_slide(0, 1), 0);
    }
}

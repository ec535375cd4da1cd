use crate::indel::{correct::IndelEvent, scan::Carrier};

/// Unaligned span `[x1, x2)` of the first sequence drawn against span
/// `[y1, y2)` of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polygon {
    pub x1: i64,
    pub x2: i64,
    pub y1: i64,
    pub y2: i64,
}

/// One polygon per indel, ending where the indel starts, plus one for the
/// block after the last indel. `events` must carry corrected positions.
pub fn poly_coords(
    events: &[IndelEvent],
    unaligned_len1: usize,
    unaligned_len2: usize,
) -> Vec<Polygon> {
    let mut coords = Vec::with_capacity(events.len() + 1);
    let mut prev_top = 0i64;
    let mut prev_bottom = 0i64;
    // Inserted residues of the second sequence minus those of the first
    let mut offset = 0i64;

    for event in events {
        let position = event.start as i64;
        let length = event.length as i64;
        let (top, bottom) = match event.carrier {
            Carrier::First => (position - offset, position),
            Carrier::Second => (position, position + offset),
        };
        coords.push(Polygon {
            x1: prev_top,
            x2: top,
            y1: prev_bottom,
            y2: bottom,
        });
        match event.carrier {
            Carrier::First => {
                offset -= length;
                prev_top = top + length;
                prev_bottom = bottom;
            }
            Carrier::Second => {
                offset += length;
                prev_top = top;
                prev_bottom = bottom + length;
            }
        }
    }

    coords.push(Polygon {
        x1: prev_top,
        x2: unaligned_len1 as i64,
        y1: prev_bottom,
        y2: unaligned_len2 as i64,
    });
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(carrier: Carrier, start: usize, length: usize) -> IndelEvent {
        IndelEvent {
            carrier,
            start,
            length,
        }
    }

    fn poly(x1: i64, x2: i64, y1: i64, y2: i64) -> Polygon {
        Polygon { x1, x2, y1, y2 }
    }

    #[test]
    fn test_no_indels_single_block() {
        assert_eq!(poly_coords(&[], 7, 9), vec![poly(0, 7, 0, 9)]);
    }

    #[test]
    fn test_single_insertion_in_second() {
        let events = vec![event(Carrier::Second, 2, 1)];
        assert_eq!(
            poly_coords(&events, 4, 5),
            vec![poly(0, 2, 0, 2), poly(2, 4, 3, 5)]
        );
    }

    #[test]
    fn test_single_insertion_in_first() {
        let events = vec![event(Carrier::First, 1, 3)];
        assert_eq!(
            poly_coords(&events, 6, 3),
            vec![poly(0, 1, 0, 1), poly(4, 6, 1, 3)]
        );
    }

    #[test]
    fn test_rows_join_across_insertions() {
        // ACGGD--EFG against AC--DTTE-G
        let events = vec![
            event(Carrier::First, 2, 2),
            event(Carrier::Second, 5, 2),
            event(Carrier::First, 6, 1),
        ];
        let coords = poly_coords(&events, 8, 7);
        assert_eq!(
            coords,
            vec![
                poly(0, 2, 0, 2),
                poly(4, 5, 2, 3),
                poly(5, 6, 5, 6),
                poly(7, 8, 6, 7),
            ]
        );
    }

    #[test]
    fn test_widths_plus_insertions_cover_sequences() {
        let events = vec![
            event(Carrier::Second, 1, 2),
            event(Carrier::First, 3, 4),
            event(Carrier::Second, 5, 1),
        ];
        let (len1, len2) = (12, 9);
        let coords = poly_coords(&events, len1, len2);
        assert_eq!(coords.len(), events.len() + 1);

        for (i, event) in events.iter().enumerate() {
            let (dx, dy) = match event.carrier {
                Carrier::First => (event.length as i64, 0),
                Carrier::Second => (0, event.length as i64),
            };
            assert_eq!(coords[i + 1].x1 - coords[i].x2, dx);
            assert_eq!(coords[i + 1].y1 - coords[i].y2, dy);
        }

        let inserted = |carrier: Carrier| -> i64 {
            events
                .iter()
                .filter(|e| e.carrier == carrier)
                .map(|e| e.length as i64)
                .sum()
        };
        let width_x: i64 = coords.iter().map(|p| p.x2 - p.x1).sum();
        let width_y: i64 = coords.iter().map(|p| p.y2 - p.y1).sum();
        assert_eq!(width_x + inserted(Carrier::First), len1 as i64);
        assert_eq!(width_y + inserted(Carrier::Second), len2 as i64);
    }
}

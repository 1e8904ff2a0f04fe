//! Text line segmentation from the horizontal projection profile

use crate::block::Block;
use crate::geometry::Rect;
use crate::preprocess::{horizontal_projection, is_ink};
use crate::types::LineConfig;

/// Row ranges `[start, end)` holding text.
///
/// A row is text when it has more than `min_ink` ink pixels. Runs separated
/// by at most `max_gap` blank rows are merged, then runs shorter than
/// `min_height` are dropped.
pub fn line_spans(projection: &[u32], config: &LineConfig) -> Vec<(u32, u32)> {
    let mut spans: Vec<(u32, u32)> = Vec::new();
    let mut start: Option<u32> = None;

    for (row, &count) in projection.iter().enumerate() {
        let row = row as u32;
        match (count > config.min_ink, start) {
            (true, None) => start = Some(row),
            (false, Some(s)) => {
                push_span(&mut spans, (s, row), config.max_gap);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        push_span(&mut spans, (s, projection.len() as u32), config.max_gap);
    }

    spans.retain(|&(s, e)| e - s >= config.min_height);
    spans
}

fn push_span(spans: &mut Vec<(u32, u32)>, span: (u32, u32), max_gap: u32) {
    if let Some(last) = spans.last_mut() {
        if span.0 - last.1 <= max_gap {
            last.1 = span.1;
            return;
        }
    }
    spans.push(span);
}

/// Fills `tree` of `block` with one child per text line, each cropped to the
/// columns its ink occupies. Returns the number of lines.
pub fn extract_text_lines(block: &mut Block, tree: &str, config: &LineConfig) -> usize {
    let mask = block.ink_mask();
    let spans = line_spans(&horizontal_projection(&mask), config);
    let (width, _) = mask.dimensions();
    let origin = block.rect();

    block.remove_tree(tree);
    for (top, bottom) in spans {
        let has_ink = |x: u32| (top..bottom).any(|y| is_ink(&mask, x, y));
        let (Some(left), Some(right)) = ((0..width).find(|&x| has_ink(x)), (0..width).rfind(|&x| has_ink(x))) else {
            continue;
        };
        let rect = Rect::from_corners(left, top, right, bottom - 1).offset_by(&origin);
        block.push_child(tree, rect);
    }

    let n = block.nb_children(tree);
    log::debug!("extracted {} text lines", n);
    n
}

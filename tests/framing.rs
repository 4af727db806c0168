//! Chunking-invariance property for the line framer: however the
//! input stream is sliced across feed calls, the same lines come out
//! in the same order and the unterminated tail stays buffered.

use netweave::LineFramer;
use proptest::prelude::*;

fn reassemble(stream: &[u8], cut_points: &[usize]) -> (Vec<Vec<u8>>, Vec<u8>) {
    let mut cuts: Vec<usize> = cut_points
        .iter()
        .map(|&c| if stream.is_empty() { 0 } else { c % (stream.len() + 1) })
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut framer = LineFramer::new();
    let mut lines = Vec::new();
    let mut start = 0;
    for &cut in &cuts {
        lines.extend(framer.feed(&stream[start..cut]));
        start = cut;
    }
    lines.extend(framer.feed(&stream[start..]));

    let lines = lines.into_iter().map(|l| l.to_vec()).collect();
    let pending = framer.pending().to_vec();
    (lines, pending)
}

proptest! {
    #[test]
    fn chunking_never_changes_the_lines(
        lines in prop::collection::vec("[a-zA-Z0-9 :!#@.*_-]{0,40}", 0..8),
        partial in "[a-zA-Z0-9 ]{0,12}",
        cut_points in prop::collection::vec(0usize..512, 0..8),
        use_crlf in any::<bool>(),
    ) {
        let terminator: &[u8] = if use_crlf { b"\r\n" } else { b"\n" };

        let mut stream = Vec::new();
        for line in &lines {
            stream.extend_from_slice(line.as_bytes());
            stream.extend_from_slice(terminator);
        }
        stream.extend_from_slice(partial.as_bytes());

        let (got_lines, got_pending) = reassemble(&stream, &cut_points);

        let expected: Vec<Vec<u8>> = lines.iter().map(|l| l.as_bytes().to_vec()).collect();
        prop_assert_eq!(got_lines, expected);
        prop_assert_eq!(got_pending, partial.as_bytes().to_vec());
    }

    #[test]
    fn terminator_style_is_irrelevant(
        line in "[a-zA-Z0-9 :]{1,30}",
        cut_points in prop::collection::vec(0usize..64, 0..4),
    ) {
        let crlf = format!("{line}\r\n");
        let lf = format!("{line}\n");

        let (a, _) = reassemble(crlf.as_bytes(), &cut_points);
        let (b, _) = reassemble(lf.as_bytes(), &cut_points);
        prop_assert_eq!(a, b);
    }
}

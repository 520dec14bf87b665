#![no_main]

use ftui_completion_view::clip_to_width;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, u8)| {
    let (text, width) = data;
    let width = usize::from(width);
    let clipped = clip_to_width(text, width);
    assert!(clipped.len() <= text.len());
    if width == 0 {
        assert!(clipped.is_empty());
    }
    // Clipping only drops characters.
    let mut source = text.chars();
    for c in clipped.chars() {
        assert!(source.any(|s| s == c));
    }
});

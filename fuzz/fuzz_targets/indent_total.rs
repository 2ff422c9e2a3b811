#![no_main]

use libfuzzer_sys::fuzz_target;
use puppet_ide::{decide, highlight, indent_region, reindent, IndentConfig, Snapshot};

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fn config_from_seed(seed: u8) -> IndentConfig {
    IndentConfig {
        indent_width: u32::from(seed % 8) + 1,
        use_tabs: seed & 0x80 != 0,
        tab_width: u32::from((seed >> 3) % 8) + 1,
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };
    let source = decode_source(rest);
    let config = config_from_seed(seed);

    let parse = puppet_syntax::parse(&source);
    assert_eq!(parse.syntax().to_string(), source);

    let snapshot = Snapshot::new(source.as_str());
    let region = indent_region(&snapshot, 0, u32::MAX, &config);
    assert_eq!(region.len() as u32, snapshot.line_count());
    let _ = decide(&snapshot, snapshot.line_count(), &config);
    let _ = highlight(&snapshot);

    let once = reindent(&source, &config);
    assert_eq!(reindent(&once, &config), once);
});

//! Benchmarks for shortcut resolution and dispatch
//!
//! Run with: cargo bench dispatch

use keychord::{
    categorize, expand_context, Conditions, KeyEvent, Modifiers, ShortcutEngine, ShortcutEntry,
    ShortcutsConfig,
};

fn main() {
    divan::main();
}

fn sample_entries(count: usize) -> Vec<ShortcutEntry> {
    (0..count)
        .map(|i| match i % 3 {
            0 => ShortcutEntry::new(format!("g {}", (b'a' + (i % 26) as u8) as char), format!("chord{}", i)),
            1 => ShortcutEntry::new(format!("ctrl+{}", (b'a' + (i % 26) as u8) as char), format!("combo{}", i))
                .when("canEdit && !readOnly"),
            _ => ShortcutEntry::new(((b'a' + (i % 26) as u8) as char).to_string(), format!("direct{}", i)),
        })
        .collect()
}

#[divan::bench]
fn expand_deep_hierarchy() {
    divan::black_box(expand_context("facility:patient:home:timeline & billing:invoice:detail"));
}

#[divan::bench(args = [16, 64, 256])]
fn categorize_entries(count: usize) {
    let entries = sample_entries(count);
    let conditions = Conditions::new().with("canEdit", true);
    divan::black_box(categorize(&entries, &conditions, Some("timeline")));
}

#[divan::bench]
fn dispatch_direct_hit(bencher: divan::Bencher) {
    let mut config = ShortcutsConfig::new();
    config.insert_context("bench", sample_entries(64));
    let mut engine = ShortcutEngine::new(&config, &["bench"]);
    engine.register_handler("direct2", || {});
    let event = KeyEvent::key("c");

    bencher.bench_local(move || {
        divan::black_box(engine.handle_key_down(&event));
    });
}

#[divan::bench]
fn dispatch_combo_scan(bencher: divan::Bencher) {
    let mut config = ShortcutsConfig::new();
    config.insert_context("bench", sample_entries(64));
    let mut engine = ShortcutEngine::new(&config, &["bench"]);
    engine.set_conditions(Conditions::new().with("canEdit", true));
    let event = KeyEvent::with_mods("b", Modifiers::CTRL);

    bencher.bench_local(move || {
        divan::black_box(engine.handle_key_down(&event));
    });
}

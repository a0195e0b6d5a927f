use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use linedit_engine::Editor;

fn seeded_editor(lines: usize) -> Editor {
    let mut editor = Editor::new();
    for i in 0..lines {
        if i > 0 {
            editor.add_empty_line();
        }
        editor.append_text("some representative line of buffer content");
    }
    editor
}

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_record");
    for lines in [10, 100, 1000] {
        group.bench_function(format!("append_to_{lines}_line_buffer"), |b| {
            b.iter_batched(
                || seeded_editor(lines),
                |mut editor| editor.append_text("x"),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_undo_redo(c: &mut Criterion) {
    c.bench_function("undo_redo_cycle_1000_lines", |b| {
        b.iter_batched(
            || seeded_editor(1000),
            |mut editor| {
                editor.undo();
                editor.redo();
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_record, bench_undo_redo);
criterion_main!(benches);

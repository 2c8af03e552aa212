use criterion::{Criterion, criterion_group, criterion_main};
use hexgridlib::{HexGridModel, Region};

fn bench_hexgrid(c: &mut Criterion) {
    // 1 MiB buffer, 16 bytes per row
    let bytes: Vec<u8> = (0..1024 * 1024).map(|i| (i % 251) as u8).collect();

    c.bench_function("hexgrid_hit_test_viewport", |b| {
        let mut model = HexGridModel::new();
        model.load(bytes.clone());
        let layout = model.layout(1024.0, 10.0, 16.0);

        b.iter(|| {
            // Sweep a pointer across every cell of the visible grid
            let mut hits = 0usize;
            for y in (0..1024).step_by(4) {
                for x in (0..800).step_by(4) {
                    if layout
                        .byte_offset_at(std::hint::black_box(x as f32), y as f32)
                        .is_some()
                    {
                        hits += 1;
                    }
                }
            }
            std::hint::black_box(hits);
        });
    });

    c.bench_function("hexgrid_row_text_page", |b| {
        let mut model = HexGridModel::new();
        model.load(bytes.clone());

        b.iter(|| {
            for row in 0..64 {
                std::hint::black_box(model.row_text(std::hint::black_box(row)));
            }
        });
    });

    c.bench_function("hexgrid_copy_selection_64k", |b| {
        let mut model = HexGridModel::new();
        model.load(bytes.clone());
        model.begin_pointer_selection(0);
        model.extend_pointer_selection(64 * 1024 - 1);

        b.iter(|| {
            std::hint::black_box(model.copy_selection_as_hex_text());
        });
    });

    c.bench_function("hexgrid_rect_lookup", |b| {
        let mut model = HexGridModel::new();
        model.load(bytes.clone());
        let layout = model.layout(1024.0, 10.0, 16.0);

        b.iter(|| {
            for offset in 0..4096 {
                std::hint::black_box(
                    layout.pixel_rect_for(std::hint::black_box(offset), Region::Hex),
                );
            }
        });
    });
}

criterion_group!(
    name = hexgridlib_benches;
    config = Criterion::default().sample_size(20);
    targets = bench_hexgrid
);
criterion_main!(hexgridlib_benches);

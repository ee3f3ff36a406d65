use criterion::*;

use predstruct::api::*;
use predstruct::PredictionStructureGroup;

criterion_group!(group, bench_group_build, bench_group_get);

fn bench_group_build(c: &mut Criterion) {
    let cfg = EncoderConfig::default();

    c.bench_function("pred_struct_group_build", |b| {
        b.iter(|| {
            let _ = black_box(PredictionStructureGroup::new(&cfg));
        })
    });
}

fn bench_group_get(c: &mut Criterion) {
    let cfg = EncoderConfig::default();
    let group = PredictionStructureGroup::new(&cfg).unwrap();

    c.bench_function("pred_struct_group_get", |b| {
        b.iter(|| {
            for levels in 0..MAX_HIERARCHICAL_LEVELS {
                let _ = black_box(group.get(PredStructure::RandomAccess, MAX_REF_COUNT, levels));
            }
        })
    });
}

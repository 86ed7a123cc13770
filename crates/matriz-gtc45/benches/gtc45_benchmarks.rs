use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matriz_gtc45::{
    evaluar, evaluar_crudo, Interpretacion, NivelConsecuencia, NivelDeficiencia, NivelExposicion,
};

fn bench_evaluar_single(c: &mut Criterion) {
    c.bench_function("evaluar_single", |b| {
        b.iter(|| {
            evaluar(
                black_box(NivelDeficiencia::Alto),
                black_box(NivelExposicion::Frecuente),
                black_box(NivelConsecuencia::Grave),
            )
        })
    });
}

fn bench_evaluar_crudo_single(c: &mut Criterion) {
    c.bench_function("evaluar_crudo_single", |b| {
        b.iter(|| evaluar_crudo(black_box(6), black_box(3), black_box(25)))
    });
}

fn bench_evaluar_all_triples(c: &mut Criterion) {
    c.bench_function("evaluar_all_64_triples", |b| {
        b.iter(|| {
            let mut peor = Interpretacion::Aceptable;
            for nd in NivelDeficiencia::TODOS {
                for ne in NivelExposicion::TODOS {
                    for nc in NivelConsecuencia::TODOS {
                        let eval = evaluar(black_box(nd), black_box(ne), black_box(nc));
                        if eval.interpretacion > peor {
                            peor = eval.interpretacion;
                        }
                    }
                }
            }
            peor
        })
    });
}

criterion_group!(
    benches,
    bench_evaluar_single,
    bench_evaluar_crudo_single,
    bench_evaluar_all_triples
);
criterion_main!(benches);

use boost_eval::eval_function::{
    LGBM_ACCURACY_SCORE, LGBM_AVERAGE_PRECISION_SCORE, LGBM_BALANCED_ACCURACY_SCORE, LGBM_F1_SCORE,
    LGBM_ROC_AUC_SCORE,
};
use boost_eval::metrics::{average_precision_score, roc_auc_score};
use boost_eval::{binary_eval_callback_factory, Dataset};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn eval_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let n = 100_000;
    let y_pred: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
    let label: Vec<f64> = y_pred
        .iter()
        .map(|p| if rng.gen::<f64>() < *p { 1.0 } else { 0.0 })
        .collect();
    let data = Dataset::new(label.clone());

    c.bench_function("average_precision_score", |b| {
        b.iter(|| average_precision_score(black_box(&label), black_box(&y_pred)))
    });
    c.bench_function("roc_auc_score", |b| {
        b.iter(|| roc_auc_score(black_box(&label), black_box(&y_pred)))
    });

    let continuous = binary_eval_callback_factory(vec![LGBM_AVERAGE_PRECISION_SCORE, LGBM_ROC_AUC_SCORE]);
    c.bench_function("callback continuous only", |b| {
        b.iter(|| continuous.evaluate(black_box(&y_pred), black_box(&data)))
    });

    let binary = binary_eval_callback_factory(vec![
        LGBM_F1_SCORE,
        LGBM_ACCURACY_SCORE,
        LGBM_BALANCED_ACCURACY_SCORE,
        LGBM_AVERAGE_PRECISION_SCORE,
    ]);
    c.bench_function("callback with binary", |b| {
        b.iter(|| binary.evaluate(black_box(&y_pred), black_box(&data)))
    });
}

criterion_group!(benches, eval_benchmarks);
criterion_main!(benches);

//! Walk a training step's state while a progress bar is running.
//!
//! ```bash
//! RUST_LOG=tenpeek=debug cargo run --example inspect_session
//! ```

use indicatif::ProgressBar;
use tenpeek::tracing_support::{init_tracing, TracingConfig};
use tenpeek::{format_size, Inspector, Mapping, Namespace, ProgressSink, Value};
use tenpeek_core::{DenseND, Device, DisplayOverrides, Tensor};

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default())?;

    let steps = 3u64;
    let pb = ProgressBar::new(steps);
    let mut inspector = Inspector::new()
        .with_sink(ProgressSink::new(pb.clone()))
        .with_prefix("[train] ");

    for step in 0..steps {
        let scale = (step + 1) as f32;
        let mut logits: Vec<f32> = (0..32).map(|i| (i as f32 - 16.0) * scale).collect();
        if step == 2 {
            logits[5] = f32::NAN;
        }

        let config = Namespace::new()
            .with("lr", 3e-4)
            .with("betas", Value::tuple([0.9, 0.999]))
            .with("model", Value::module("MlpClassifier"));

        let state = Mapping::new()
            .with("step", step)
            .with("logits", Tensor::from_vec(logits, &[4, 8])?.to(Device::Cuda(0)))
            .with("labels", DenseND::from_vec(vec![1i64, 0, 3, 2], &[4])?)
            .with("losses", vec![2.3, 1.9, 1.4, 1.1, 0.9])
            .with("config", config)
            .with("duration_change", 48 * 1024 * 1024)
            .with("_scratch", "not printed");

        inspector.inspect(&Value::from(state), &format!("state@{}", step));
        pb.inc(1);
    }
    pb.finish_and_clear();

    inspector.inspect_with(
        &Value::from(DenseND::<f64>::arange(6)),
        "all of it",
        &DisplayOverrides::new().threshold(1000),
    );
    println!("checkpoint size: {}", format_size(1_536_000));

    Ok(())
}
